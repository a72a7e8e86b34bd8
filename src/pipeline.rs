use crate::config::Config;
use crate::traits::{ContentReader, RelevanceJudge, SearchProvider};
use crate::types::{OutputMode, PublishableEntry, RunStats, Verdict};
use std::collections::HashSet;
use tracing::{info, warn};

const DEFAULT_TITLE: &str = "No Title";
const DEFAULT_CATEGORY: &str = "N/A";

/// The aggregation run: fan-out search, URL deduplication, per-URL
/// extraction and classification, and accumulation of important articles.
///
/// Everything is sequential; each stage blocks on its network call and no
/// per-query or per-URL failure stops the run.
pub struct Pipeline<'a> {
    search: &'a dyn SearchProvider,
    reader: &'a dyn ContentReader,
    judge: &'a dyn RelevanceJudge,
    config: &'a Config,
}

/// What one run produced: the publishable entries plus stage counters.
#[derive(Debug)]
pub struct RunOutcome {
    pub entries: Vec<PublishableEntry>,
    pub stats: RunStats,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        search: &'a dyn SearchProvider,
        reader: &'a dyn ContentReader,
        judge: &'a dyn RelevanceJudge,
        config: &'a Config,
    ) -> Self {
        Self {
            search,
            reader,
            judge,
            config,
        }
    }

    pub async fn run(&self) -> RunOutcome {
        let mut stats = RunStats::default();

        let urls = self.collect_unique_urls(&mut stats).await;
        stats.unique_urls = urls.len();
        info!("Processing {} unique URLs", urls.len());

        let mut entries = Vec::new();
        for url in &urls {
            let article_text = match self.reader.extract(url).await {
                Ok(text) => text,
                Err(e) => {
                    warn!("Extraction failed for {}: {}", url, e);
                    continue;
                }
            };
            stats.extracted += 1;

            let verdict = match self.judge.classify(&article_text).await {
                Ok(verdict) => verdict,
                Err(e) => {
                    warn!("Classification failed for {}: {}", url, e);
                    continue;
                }
            };
            stats.classified += 1;

            if verdict.is_important {
                stats.important += 1;
                entries.push(self.to_entry(url, verdict, &article_text));
            }
        }

        info!(
            "Run finished: {} searched, {} unique, {} extracted, {} classified, {} important",
            stats.queries_searched,
            stats.unique_urls,
            stats.extracted,
            stats.classified,
            stats.important
        );

        RunOutcome { entries, stats }
    }

    /// Search every configured query and merge the hits into a
    /// duplicate-free list in first-seen order, so later stages and the
    /// emitted feed are reproducible for identical backend responses.
    async fn collect_unique_urls(&self, stats: &mut RunStats) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut urls = Vec::new();

        for query in &self.config.queries {
            stats.queries_searched += 1;
            match self
                .search
                .search(query, self.config.max_results_per_query)
                .await
            {
                Ok(hits) => {
                    for url in hits {
                        if seen.insert(url.clone()) {
                            urls.push(url);
                        }
                    }
                }
                Err(e) => {
                    warn!("Search failed for '{}': {}", query, e);
                }
            }
        }

        urls
    }

    fn to_entry(&self, url: &str, verdict: Verdict, article_text: &str) -> PublishableEntry {
        let body = match self.config.output_mode {
            OutputMode::Summary => verdict.summary.unwrap_or_default(),
            OutputMode::FullText => article_text.to_string(),
        };

        PublishableEntry {
            title: verdict.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            category: verdict
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            link: url.to_string(),
            body,
        }
    }
}
