use url::Url;

use crate::http::HttpClient;

/// A candidate README URL and the outcome of probing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeTarget {
    pub url: String,
    pub reachable: bool,
}

impl ReadmeTarget {
    /// Check `url`. Invalid URLs are never sent over the network.
    pub fn check(url: &str, http: &dyn HttpClient) -> Self {
        Self {
            url: url.to_string(),
            reachable: is_reachable(http, url),
        }
    }
}

/// An http(s) URL with a host and a path beyond `/`.
pub fn is_valid_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    matches!(parsed.scheme(), "http" | "https")
        && parsed.host_str().is_some_and(|h| !h.is_empty())
        && !parsed.path().trim_start_matches('/').is_empty()
}

pub fn is_reachable(http: &dyn HttpClient, url: &str) -> bool {
    is_valid_url(url) && http.is_reachable(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingHttp {
        ok: bool,
        requested: RefCell<Vec<String>>,
    }

    impl HttpClient for RecordingHttp {
        fn is_reachable(&self, url: &str) -> bool {
            self.requested.borrow_mut().push(url.to_string());
            self.ok
        }

        fn fetch_text(&self, _url: &str) -> Result<String, RenderError> {
            Err(RenderError::EmptyBody)
        }
    }

    #[test]
    fn test_valid_url_rules() {
        assert!(is_valid_url("https://github.com/org/repo/blob/master/README.md"));
        assert!(is_valid_url("http://example.com/x"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("https://github.com"));
        assert!(!is_valid_url("https://github.com/"));
        assert!(!is_valid_url("/srv/git/repo/blob/master/README.md"));
        assert!(!is_valid_url("file:///srv/git/repo/blob/master/README.md"));
    }

    #[test]
    fn test_invalid_url_is_never_requested() {
        let http = RecordingHttp {
            ok: true,
            ..Default::default()
        };
        let target = ReadmeTarget::check("not a url", &http);
        assert!(!target.reachable);
        assert!(http.requested.borrow().is_empty());
    }

    #[test]
    fn test_check_reports_client_status() {
        let url = "https://github.com/org/repo/blob/master/README.md";

        let up = RecordingHttp {
            ok: true,
            ..Default::default()
        };
        assert!(ReadmeTarget::check(url, &up).reachable);
        assert_eq!(*up.requested.borrow(), vec![url.to_string()]);

        let down = RecordingHttp::default();
        assert!(!ReadmeTarget::check(url, &down).reachable);
    }
}
