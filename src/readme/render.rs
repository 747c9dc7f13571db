//! Plain-text rendering of a hosted README page.
//!
//! The page is scraped with regular expressions: the rendered README lives in
//! a single `<article class="markdown-body entry-content ..." itemprop="text">`
//! element. When the host changes that markup, extraction fails with
//! [`RenderError::Parse`], which callers report rather than treat as a bug.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::error::RenderError;
use crate::http::HttpClient;

/// Stand-in for original line endings so the article regex sees a single line.
const LINE_MARKER: &str = "<br />";

static ARTICLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<article\s+class="markdown-body entry-content[^"]*"\s+itemprop="text"\s*>(.*)</article>"#,
    )
    .expect("valid article regex")
});

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid line break regex"));

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// README text in document order, blank lines included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedReadme {
    lines: Vec<String>,
}

impl RenderedReadme {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for RenderedReadme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// Turns a README page into plain text.
pub trait ReadmeRenderer {
    fn extract(&self, html: &str) -> Result<RenderedReadme, RenderError>;
}

/// Regex-based renderer for the GitHub README article markup.
#[derive(Debug, Default)]
pub struct ArticleRenderer;

impl ArticleRenderer {
    fn normalize(html: &str) -> String {
        html.replace("\r\n", "\n")
            .replace('\r', "\n")
            .replace('\n', LINE_MARKER)
            .replace('`', "")
    }

    fn clean_line(line: &str) -> String {
        let stripped = TAG.replace_all(line, "");
        html_escape::decode_html_entities(&stripped).into_owned()
    }
}

impl ReadmeRenderer for ArticleRenderer {
    fn extract(&self, html: &str) -> Result<RenderedReadme, RenderError> {
        let normalized = Self::normalize(html);
        let body = ARTICLE
            .captures(&normalized)
            .and_then(|caps| caps.get(1))
            .ok_or(RenderError::Parse)?
            .as_str();

        let lines = LINE_BREAK.split(body).map(Self::clean_line).collect();
        Ok(RenderedReadme { lines })
    }
}

/// Fetch `url` and render it.
pub fn render_readme(
    http: &dyn HttpClient,
    renderer: &dyn ReadmeRenderer,
    url: &str,
) -> Result<RenderedReadme, RenderError> {
    let html = http.fetch_text(url)?;
    renderer.extract(&html)
}
