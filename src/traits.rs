use crate::types::{Result, Verdict};
use async_trait::async_trait;

/// Trait for search backends that map one query to candidate article URLs.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run one search, bounded to `max_results` hits.
    ///
    /// A transport or non-2xx failure is returned as `Err`; the caller
    /// decides whether that aborts anything (the pipeline treats it as
    /// zero URLs for the query).
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>>;
}

/// Trait for reader backends that turn a page URL into readable text.
#[async_trait]
pub trait ContentReader: Send + Sync {
    /// Fetch a best-effort Markdown/plain-text rendering of the page.
    async fn extract(&self, url: &str) -> Result<String>;
}

/// Trait for the relevance judgment over one article's text.
#[async_trait]
pub trait RelevanceJudge: Send + Sync {
    /// Classify the article. The underlying model call is
    /// non-deterministic; callers must not assume repeatable output for
    /// identical input.
    async fn classify(&self, article_text: &str) -> Result<Verdict>;
}
