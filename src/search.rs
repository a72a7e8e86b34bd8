use crate::traits::SearchProvider;
use crate::types::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

const TAVILY_ENDPOINT: &str = "https://api.tavily.com/search";

/// Search gateway backed by the Tavily web-search API.
pub struct TavilySearch {
    client: Client,
    api_key: String,
    endpoint: String,
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    search_depth: &'a str,
    include_images: bool,
    max_results: usize,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    url: Option<String>,
}

impl TavilySearch {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, TAVILY_ENDPOINT.to_string())
    }

    /// Point the gateway at a different endpoint (used against local
    /// stand-ins for the search backend).
    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            endpoint,
        }
    }
}

#[async_trait]
impl SearchProvider for TavilySearch {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        debug!("Searching: '{}'", query);

        let body = SearchRequest {
            api_key: &self.api_key,
            query,
            search_depth: "basic",
            include_images: false,
            max_results,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let parsed: SearchResponse = response.json().await?;
        let urls: Vec<String> = parsed
            .results
            .into_iter()
            .filter_map(|hit| hit.url)
            .filter(|u| is_valid_article_url(u))
            .collect();

        info!("Found {} URLs for '{}'", urls.len(), query);
        Ok(urls)
    }
}

/// Accept only http(s) URLs that actually parse; search backends
/// occasionally hand back fragments or app-scheme links.
pub fn is_valid_article_url(url_str: &str) -> bool {
    match Url::parse(url_str) {
        Ok(url) => url.scheme() == "http" || url.scheme() == "https",
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_schemes() {
        assert!(is_valid_article_url("https://example.com/article"));
        assert!(is_valid_article_url("http://example.com"));
        assert!(!is_valid_article_url("ftp://example.com/file"));
        assert!(!is_valid_article_url("not a url"));
        assert!(!is_valid_article_url(""));
    }
}
