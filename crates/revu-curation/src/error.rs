use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurationError {
    /// The store produced no usable posts for the keyword. Unlike an
    /// unavailable AI backend this is not recoverable: there is nothing to
    /// curate, so the run stops before selection or synthesis.
    #[error("no usable posts found for keyword '{keyword}'")]
    NoPosts { keyword: String },
}
