use thiserror::Error;

/// Failures from the completion backends.
///
/// This is the complete set of conditions that hands control to a
/// deterministic fallback strategy. Every variant is recoverable from the
/// pipeline's point of view; none of them reaches the caller of a strategy.
#[derive(Debug, Error)]
pub enum AiError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body did not match the expected shape.
    #[error("response parse error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The cloud backend returned a completion with no choices.
    #[error("completion response contained no choices")]
    EmptyChoices,

    /// No backend could be constructed for this run.
    #[error("no completion backend available")]
    Unavailable,
}
