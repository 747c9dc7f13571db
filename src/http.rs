//! Blocking HTTP access used for README probing and fetching.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

use crate::error::RenderError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub trait HttpClient {
    /// True only for a 200 response to a HEAD request. Network errors count as unreachable.
    fn is_reachable(&self, url: &str) -> bool;

    /// Body of a successful GET as text.
    fn fetch_text(&self, url: &str) -> Result<String, RenderError>;
}

pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn is_reachable(&self, url: &str) -> bool {
        match self.client.head(url).send() {
            Ok(resp) => {
                debug!(url, status = %resp.status(), "http:head");
                resp.status() == StatusCode::OK
            }
            Err(e) => {
                debug!(url, error = %e, "http:head failed");
                false
            }
        }
    }

    fn fetch_text(&self, url: &str) -> Result<String, RenderError> {
        let resp = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| RenderError::Fetch(e.to_string()))?;

        let body = resp.text().map_err(|e| RenderError::Fetch(e.to_string()))?;
        debug!(url, bytes = body.len(), "http:get");

        if body.is_empty() {
            return Err(RenderError::EmptyBody);
        }
        Ok(body)
    }
}
