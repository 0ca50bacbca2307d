//! Curation pipeline orchestration.

use chrono::Utc;
use revu_ai::CompletionBackend;
use revu_core::Post;

use crate::candidates::collect_candidates;
use crate::error::CurationError;
use crate::rank::rank_posts;
use crate::select::select_images;
use crate::synthesize::synthesize_review;
use crate::types::{CurationResult, TopPost};

/// How many top-ranked posts contribute image candidates.
pub const RANK_WINDOW: usize = 50;
/// How many images the selection stage aims for.
pub const TARGET_IMAGE_COUNT: usize = 9;
/// How many top-ranked posts ground the synthesized review.
pub const REFERENCE_POST_LIMIT: usize = 10;
/// How many posts are attributed in the result.
pub const TOP_POST_LIMIT: usize = 10;

/// Run the full curation pipeline for one keyword.
///
/// 1. Rank posts by liked count (stable, descending).
/// 2. Flatten the top [`RANK_WINDOW`] posts into image candidates.
/// 3. Select up to [`TARGET_IMAGE_COUNT`] images (AI first, engagement
///    fallback on any backend failure).
/// 4. Synthesize the review over the top [`REFERENCE_POST_LIMIT`] posts
///    (AI first, template fallback on any backend failure).
/// 5. Assemble the [`CurationResult`].
///
/// Stages run strictly sequentially; each owns its intermediate collection
/// and hands values forward. Selection and synthesis absorb every backend
/// failure, so a run with content always completes.
///
/// # Errors
///
/// Returns [`CurationError::NoPosts`] when `posts` is empty: no content to
/// curate is a hard stop, unlike an unavailable AI backend.
pub async fn run_curation(
    backend: Option<&CompletionBackend>,
    keyword: &str,
    posts: Vec<Post>,
) -> Result<CurationResult, CurationError> {
    let ranked = rank_posts(posts);
    if ranked.is_empty() {
        return Err(CurationError::NoPosts {
            keyword: keyword.to_owned(),
        });
    }
    tracing::info!(keyword = %keyword, posts = ranked.len(), "ranked posts");

    let candidates = collect_candidates(&ranked, RANK_WINDOW);
    tracing::info!(
        keyword = %keyword,
        candidates = candidates.len(),
        "aggregated image candidates"
    );

    let selected_images = select_images(backend, &candidates, keyword, TARGET_IMAGE_COUNT).await;

    let reference = &ranked[..ranked.len().min(REFERENCE_POST_LIMIT)];
    let content = synthesize_review(backend, reference, keyword, selected_images.len()).await;

    let top_posts = ranked
        .iter()
        .take(TOP_POST_LIMIT)
        .map(|post| TopPost {
            title: post.title.clone(),
            liked_count: post.liked_count,
            post_url: post.url.clone(),
        })
        .collect();

    Ok(CurationResult {
        keyword: keyword.to_owned(),
        total_posts: ranked.len(),
        selected_images,
        content,
        top_posts,
        generated_at: Utc::now(),
    })
}
