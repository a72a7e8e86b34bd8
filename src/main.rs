use clap::{Parser, ValueEnum};
use news_curator::{
    emitter, Config, Credentials, GeminiJudge, OutputMode, Pipeline, ReaderExtractor, TavilySearch,
};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Feed items carry the AI-written summary.
    Summary,
    /// Feed items carry the full extracted article text.
    FullText,
}

impl From<ModeArg> for OutputMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Summary => OutputMode::Summary,
            ModeArg::FullText => OutputMode::FullText,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "news-curator", about = "AI-curated news feed generator")]
struct Args {
    /// What each feed item's description carries.
    #[arg(long, value_enum, default_value = "summary")]
    mode: ModeArg,

    /// Where the RSS file is written.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Result bound per search query.
    #[arg(long, default_value_t = 5)]
    max_results: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    info!("Starting news curator");

    // Credentials are checked before any network call is attempted.
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!("{}", e);
            error!(
                "Set {} and {} in the environment (for example via CI secrets).",
                Credentials::TAVILY_ENV,
                Credentials::GEMINI_ENV
            );
            return Err(e.into());
        }
    };

    let mut config = Config::new(credentials);
    config.output_mode = args.mode.into();
    config.max_results_per_query = args.max_results;
    if let Some(output) = args.output {
        config.feed.file_name = output;
    }

    let search = TavilySearch::new(config.credentials.tavily_api_key.clone());
    let reader = ReaderExtractor::new();
    let judge = GeminiJudge::new(config.credentials.gemini_api_key.clone());

    let pipeline = Pipeline::new(&search, &reader, &judge, &config);
    let outcome = pipeline.run().await;

    if outcome.entries.is_empty() {
        info!("No articles judged important; writing an empty feed");
    }

    let channel = emitter::build_channel(&outcome.entries, &config.feed);
    emitter::write_feed(&config.feed.file_name, &channel)?;

    info!(
        "News curator finished: {} feed items",
        outcome.entries.len()
    );
    Ok(())
}
