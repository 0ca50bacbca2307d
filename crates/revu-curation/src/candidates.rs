//! Flattening ranked posts into image candidates.

use revu_core::Post;

use crate::types::ImageCandidate;

/// Flatten the first `window` ranked posts into image candidates.
///
/// Candidate order is post rank first, then in-post image order. A URL that
/// appears under two posts yields two candidates; uniqueness semantics
/// belong to the strategy that consumes the candidates, not to aggregation.
#[must_use]
pub fn collect_candidates(posts: &[Post], window: usize) -> Vec<ImageCandidate> {
    posts
        .iter()
        .take(window)
        .flat_map(|post| {
            post.images.iter().map(|url| ImageCandidate {
                url: url.clone(),
                post_title: post.title.clone(),
                post_desc: post.desc.clone(),
                liked_count: post.liked_count,
                post_url: post.url.clone(),
            })
        })
        .collect()
}
