//! Queries over the `posts` table the crawler collaborator writes.

use sqlx::MySqlPool;

use crate::DbError;

/// A raw row from the `posts` table.
///
/// The crawler stores engagement counters as text and may leave any field
/// NULL or malformed; see [`crate::normalize`] for the tolerant conversion
/// into [`revu_core::Post`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRow {
    pub post_id: String,
    pub title: Option<String>,
    pub desc: Option<String>,
    pub liked_count: Option<String>,
    pub comment_count: Option<String>,
    pub collected_count: Option<String>,
    /// Comma-joined image URLs, possibly empty.
    pub image_list: Option<String>,
    pub post_url: Option<String>,
    pub author: Option<String>,
}

/// Fetch the highest-liked posts recorded for `keyword`.
///
/// Rows without any image data are excluded at the store: a post with no
/// images cannot contribute to curation. Rows with malformed counters are
/// kept (`CAST` yields 0 for them) so they rank last instead of vanishing.
/// The store-side ordering is advisory; the ranker re-sorts on the parsed
/// counter values.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails. Store I/O failures are
/// fatal for the run and propagate unmodified.
pub async fn fetch_posts_by_keyword(
    pool: &MySqlPool,
    keyword: &str,
    limit: u64,
) -> Result<Vec<PostRow>, DbError> {
    let rows = sqlx::query_as::<_, PostRow>(
        "SELECT post_id, title, `desc`, liked_count, comment_count, collected_count, \
                image_list, post_url, author \
         FROM posts \
         WHERE source_keyword = ? \
           AND image_list IS NOT NULL \
           AND image_list != '' \
         ORDER BY CAST(liked_count AS UNSIGNED) DESC \
         LIMIT ?",
    )
    .bind(keyword)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
