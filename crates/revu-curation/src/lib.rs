//! Curation pipeline for crawled restaurant posts.
//!
//! Ranks a keyword's posts by engagement, flattens the top of the ranking
//! into image candidates, selects a small representative image set, and
//! synthesizes a short promotional review. Selection and synthesis each try
//! the configured AI backend first and degrade to a deterministic strategy
//! on any backend failure; a run with content never fails for lack of AI.

pub mod candidates;
pub mod error;
pub mod pipeline;
pub mod rank;
pub mod select;
pub mod synthesize;
pub mod types;

mod prompts;

pub use candidates::collect_candidates;
pub use error::CurationError;
pub use pipeline::run_curation;
pub use rank::rank_posts;
pub use types::{CurationResult, ImageCandidate, TopPost};
