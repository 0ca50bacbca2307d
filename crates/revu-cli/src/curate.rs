//! The end-to-end curate command: store fetch, pipeline run, report, file.

use std::path::PathBuf;

use revu_ai::CompletionBackend;
use revu_core::AppConfig;
use revu_curation::run_curation;

use crate::report;

/// Run one curation for `keyword` and write the result artifact.
///
/// Fatal conditions (store I/O failure, zero usable posts) propagate with
/// their underlying cause; an unavailable or failing AI backend never does.
pub async fn run(
    config: &AppConfig,
    keyword: &str,
    limit: Option<u64>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let limit = limit.unwrap_or(config.post_fetch_limit);

    let pool_config = revu_db::PoolConfig::from_app_config(config);
    let pool = revu_db::connect_pool(&config.database_url, pool_config).await?;

    tracing::info!(keyword = %keyword, limit, "loading posts from store");
    let rows = revu_db::fetch_posts_by_keyword(&pool, keyword, limit).await?;
    let posts = revu_db::posts_from_rows(rows);
    tracing::info!(keyword = %keyword, posts = posts.len(), "loaded usable posts");

    let backend = match CompletionBackend::from_app_config(config) {
        Ok(backend) => Some(backend),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "completion backend unavailable; deterministic fallbacks will be used"
            );
            None
        }
    };

    let result = run_curation(backend.as_ref(), keyword, posts).await?;

    report::print_report(&result);

    let path = output.unwrap_or_else(|| default_output_path(keyword));
    report::write_json(&result, &path)?;
    println!("\nsaved result to {}", path.display());

    Ok(())
}

fn default_output_path(keyword: &str) -> PathBuf {
    PathBuf::from(format!("output_{}.json", keyword.replace(' ', "_")))
}
