use crate::types::{CuratorError, OutputMode, Result};
use std::env;
use std::path::PathBuf;

/// Channel-level metadata for the emitted feed.
#[derive(Debug, Clone)]
pub struct FeedSettings {
    pub title: String,
    pub link: String,
    pub description: String,
    pub file_name: PathBuf,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            title: "AI-Curated Contract Law News".to_string(),
            link: "https://github.com/example/news-curator".to_string(),
            description: "Contract and legal-tech news collected from the web and \
                          filtered by an AI relevance check."
                .to_string(),
            file_name: PathBuf::from("feed.xml"),
        }
    }
}

/// Authentication secrets for the two external backends.
///
/// Both are required before any network call is made; a missing variable
/// is a fatal startup condition.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub tavily_api_key: String,
    pub gemini_api_key: String,
}

impl Credentials {
    pub const TAVILY_ENV: &'static str = "TAVILY_API_KEY";
    pub const GEMINI_ENV: &'static str = "GOOGLE_GEMINI_API_KEY";

    pub fn from_env() -> Result<Self> {
        let tavily_api_key = Self::required(Self::TAVILY_ENV)?;
        let gemini_api_key = Self::required(Self::GEMINI_ENV)?;
        Ok(Self {
            tavily_api_key,
            gemini_api_key,
        })
    }

    fn required(name: &str) -> Result<String> {
        env::var(name).map_err(|_| CuratorError::MissingCredential {
            name: name.to_string(),
        })
    }
}

/// Immutable configuration for one pipeline run, built in `main` and
/// passed by reference into every component.
#[derive(Debug, Clone)]
pub struct Config {
    pub queries: Vec<String>,
    pub max_results_per_query: usize,
    pub feed: FeedSettings,
    pub output_mode: OutputMode,
    pub credentials: Credentials,
}

impl Config {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            queries: Self::default_queries(),
            max_results_per_query: 5,
            feed: FeedSettings::default(),
            output_mode: OutputMode::Summary,
            credentials,
        }
    }

    /// The fixed topic set the run searches for.
    pub fn default_queries() -> Vec<String> {
        [
            "contract law reform news",
            "electronic contract latest developments",
            "subcontracting regulation news 2024",
            "personal data protection policy changes",
            "legal tech contract management",
        ]
        .iter()
        .map(|q| q.to_string())
        .collect()
    }
}
