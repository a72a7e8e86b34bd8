pub mod classifier;
pub mod config;
pub mod emitter;
pub mod extractor;
pub mod pipeline;
pub mod search;
pub mod traits;
pub mod types;

pub use classifier::GeminiJudge;
pub use config::{Config, Credentials, FeedSettings};
pub use extractor::ReaderExtractor;
pub use pipeline::{Pipeline, RunOutcome};
pub use search::TavilySearch;
pub use traits::{ContentReader, RelevanceJudge, SearchProvider};
pub use types::*;
