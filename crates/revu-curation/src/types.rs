use chrono::{DateTime, Utc};
use serde::Serialize;

/// One image URL with copied context from its source post.
///
/// Selection reasons about an image without re-joining against posts. The
/// copied fields are acceptable because candidate sets are small and live
/// only for a single pipeline run.
#[derive(Debug, Clone)]
pub struct ImageCandidate {
    pub url: String,
    pub post_title: String,
    pub post_desc: String,
    pub liked_count: u64,
    pub post_url: String,
}

/// Attribution entry in the result's top-post list.
#[derive(Debug, Clone, Serialize)]
pub struct TopPost {
    pub title: String,
    pub liked_count: u64,
    #[serde(rename = "note_url")]
    pub post_url: String,
}

/// The pipeline's sole output artifact, immutable once assembled.
#[derive(Debug, Clone, Serialize)]
pub struct CurationResult {
    pub keyword: String,
    /// How many usable posts the run considered.
    pub total_posts: usize,
    /// Selected image URLs, at most the requested target count.
    pub selected_images: Vec<String>,
    /// The synthesized review text.
    pub content: String,
    /// Highest-ranked posts for attribution and display.
    pub top_posts: Vec<TopPost>,
    pub generated_at: DateTime<Utc>,
}
