//! Client for a local model server's generate API (Ollama-style).

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::AiError;

/// Local generate-endpoint client.
///
/// Sends one synchronous, non-streamed request per completion. The endpoint
/// URL is taken as-is from configuration (it already includes the full path,
/// e.g. `http://localhost:11434/api/generate`).
pub struct LocalClient {
    client: Client,
    url: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    /// The generated text. Servers omit the field on some error shapes;
    /// treat that as an empty completion rather than a parse failure.
    #[serde(default)]
    response: String,
}

impl LocalClient {
    /// Creates a client for the generate endpoint at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(url: &str, model: &str, timeout_secs: u64) -> Result<Self, AiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            url: url.to_owned(),
            model: model.to_owned(),
        })
    }

    /// Requests a single non-streamed completion for `prompt`.
    ///
    /// # Errors
    ///
    /// - [`AiError::Http`] on network failure or timeout.
    /// - [`AiError::Status`] when the server answers with a non-success status.
    /// - [`AiError::Deserialize`] when the body is not valid JSON.
    pub async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self.client.post(&self.url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(AiError::Status(response.status()));
        }

        let body = response.text().await?;
        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| AiError::Deserialize {
                context: "local generate response".to_owned(),
                source: e,
            })?;

        Ok(parsed.response)
    }
}
