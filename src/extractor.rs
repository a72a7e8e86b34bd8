use crate::traits::ContentReader;
use crate::types::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const READER_BASE: &str = "https://r.jina.ai";
const FETCH_TIMEOUT_SECS: u64 = 60;

/// Content extractor backed by a reader service that renders a page as
/// Markdown when fetched as `<base>/<original-url>`.
pub struct ReaderExtractor {
    client: Client,
    base_url: String,
}

impl ReaderExtractor {
    pub fn new() -> Self {
        Self::with_base_url(READER_BASE.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }
}

impl Default for ReaderExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentReader for ReaderExtractor {
    async fn extract(&self, url: &str) -> Result<String> {
        debug!("Extracting article: {}", url);

        let reader_url = format!("{}/{}", self.base_url, url);
        let response = self
            .client
            .get(&reader_url)
            .send()
            .await?
            .error_for_status()?;

        let content = response.text().await?;
        Ok(trim_to_first_heading(&content).to_string())
    }
}

/// Drop reader-service preamble: return the text starting at the first
/// line whose trimmed form begins with `#`, or the whole text when no
/// such line exists.
pub fn trim_to_first_heading(content: &str) -> &str {
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if line.trim().starts_with('#') {
            return &content[offset..];
        }
        offset += line.len();
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_preamble_before_first_heading() {
        let text = "Title: x\nURL Source: y\n\n# Heading\n\nBody text";
        assert_eq!(trim_to_first_heading(text), "# Heading\n\nBody text");
    }

    #[test]
    fn heading_detected_after_leading_whitespace() {
        let text = "noise\n   ## Indented heading\nrest";
        assert_eq!(trim_to_first_heading(text), "   ## Indented heading\nrest");
    }

    #[test]
    fn returns_whole_text_when_no_heading() {
        let text = "plain text\nwith no markdown heading";
        assert_eq!(trim_to_first_heading(text), text);
    }

    #[test]
    fn heading_on_first_line_keeps_everything() {
        let text = "# Already clean\nbody";
        assert_eq!(trim_to_first_heading(text), text);
    }
}
