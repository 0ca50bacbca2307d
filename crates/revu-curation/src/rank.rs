//! Engagement-based post ranking.

use revu_core::Post;

/// Order posts by descending liked count.
///
/// The sort is stable: posts with equal counts keep their retrieval order.
/// Counters that failed to parse upstream are already 0, so noisy posts sink
/// to the bottom of the ranking instead of being dropped.
#[must_use]
pub fn rank_posts(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by(|a, b| b.liked_count.cmp(&a.liked_count));
    posts
}
