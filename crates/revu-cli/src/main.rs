mod curate;
mod report;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "revu")]
#[command(about = "Curate crawled social posts into restaurant review content")]
struct Cli {
    /// Search keyword the crawler collected posts for.
    #[arg(env = "KEYWORD")]
    keyword: String,

    /// Maximum number of posts to load from the store.
    #[arg(long)]
    limit: Option<u64>,

    /// Result file path (defaults to output_<keyword>.json).
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // dotenv must load before clap parses so env-backed args see it.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = revu_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    curate::run(&config, &cli.keyword, cli.limit, cli.output).await
}
