use serde::{Deserialize, Serialize};

/// Structured judgment the classifier returns for one article.
///
/// `title`, `category` and `summary` are only meaningful when
/// `is_important` is true, and even then the model may omit them; the
/// accumulator substitutes placeholders so partial output never aborts
/// a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub is_important: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl Verdict {
    pub fn not_important() -> Self {
        Self {
            is_important: false,
            title: None,
            category: None,
            summary: None,
        }
    }
}

/// One item destined for the output feed: a true verdict paired with its
/// source URL and the display text resolved from the output mode.
#[derive(Debug, Clone)]
pub struct PublishableEntry {
    pub title: String,
    pub category: String,
    pub link: String,
    pub body: String,
}

/// What the feed item description carries for each important article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// The model-written summary (defaulting to empty when absent).
    Summary,
    /// The full extracted article text.
    FullText,
}

/// Counters for one pipeline run, reported at the end for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub queries_searched: usize,
    pub unique_urls: usize,
    pub extracted: usize,
    pub classified: usize,
    pub important: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum CuratorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("missing required environment variable: {name}")]
    MissingCredential { name: String },

    #[error("classifier response is not valid JSON: {0}")]
    VerdictParse(#[from] serde_json::Error),

    #[error("classifier returned no usable text: {0}")]
    EmptyCompletion(String),

    #[error("feed serialization error: {0}")]
    Feed(#[from] rss::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, CuratorError>;
