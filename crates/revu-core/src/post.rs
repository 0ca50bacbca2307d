use serde::Serialize;

/// One crawled social post about a restaurant.
///
/// Built once from a raw store row, immutable for the rest of the run.
/// Engagement counters are already coerced (malformed text parses to 0),
/// and `images` is non-empty for every post admitted to curation.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub post_id: String,
    pub title: String,
    pub desc: String,
    pub author: String,
    pub liked_count: u64,
    pub comment_count: u64,
    pub collected_count: u64,
    /// Ordered image URLs as published in the source post.
    pub images: Vec<String>,
    /// Canonical URL of the source post.
    pub url: String,
}
