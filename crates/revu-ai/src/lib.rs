//! HTTP completion backends: a cloud chat API and a local model server.
//!
//! The backend for a run is chosen once from configuration: the cloud
//! client when an API credential is present, otherwise the local server.
//! Every failure is reported as [`AiError`], the bounded set the curation
//! strategies treat as "degrade to the deterministic path". Calls are never
//! retried; a single failed attempt is final.

pub mod cloud;
pub mod error;
pub mod local;

pub use cloud::CloudClient;
pub use error::AiError;
pub use local::LocalClient;

/// The configured completion backend for one curation run.
pub enum CompletionBackend {
    Cloud(CloudClient),
    Local(LocalClient),
}

impl CompletionBackend {
    /// Picks and constructs the backend from configuration.
    ///
    /// A present `openai_api_key` selects the cloud backend; a cloud setup
    /// failure degrades to the local backend before giving up entirely.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Http`] only when no client at all can be
    /// constructed. Callers treat that as "run with fallbacks only", not as
    /// a fatal condition.
    pub fn from_app_config(config: &revu_core::AppConfig) -> Result<Self, AiError> {
        if let Some(key) = &config.openai_api_key {
            match CloudClient::new(
                key,
                &config.openai_base_url,
                &config.openai_model,
                config.ai_request_timeout_secs,
            ) {
                Ok(client) => {
                    tracing::debug!(model = %config.openai_model, "using cloud completion backend");
                    return Ok(Self::Cloud(client));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "cloud backend setup failed, trying local backend");
                }
            }
        } else {
            tracing::debug!(
                model = %config.local_model_name,
                "no cloud credential, using local completion backend"
            );
        }

        let client = LocalClient::new(
            &config.local_model_url,
            &config.local_model_name,
            config.ai_request_timeout_secs,
        )?;
        Ok(Self::Local(client))
    }

    /// Requests one completion for `prompt`.
    ///
    /// The cloud variant sends `system` as a separate system-role message;
    /// the local generate API has no role structure, so only the prompt is
    /// sent there.
    ///
    /// # Errors
    ///
    /// Propagates the selected client's [`AiError`].
    pub async fn complete(&self, system: &str, prompt: &str) -> Result<String, AiError> {
        match self {
            Self::Cloud(client) => client.complete(system, prompt).await,
            Self::Local(client) => client.complete(prompt).await,
        }
    }
}
