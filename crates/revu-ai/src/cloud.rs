//! Client for an OpenAI-compatible chat-completions service.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::AiError;

/// Response-length cap for a single completion.
const MAX_TOKENS: u32 = 1000;
/// Fixed sampling temperature for all completions.
const TEMPERATURE: f32 = 0.7;

/// Cloud chat-completions client.
///
/// Holds the HTTP client, credential, resolved endpoint, and model name.
/// Use [`CloudClient::new`] with the configured base URL; tests point the
/// base URL at a wiremock server.
pub struct CloudClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl CloudClient {
    /// Creates a client for the chat-completions endpoint under `base_url`.
    ///
    /// The timeout bounds the whole request; a call that exceeds it fails
    /// with [`AiError::Http`] rather than hanging the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(
        api_key: &str,
        base_url: &str,
        model: &str,
        timeout_secs: u64,
    ) -> Result<Self, AiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            model: model.to_owned(),
        })
    }

    /// Requests a single non-streamed completion.
    ///
    /// `system` is sent as a system-role message ahead of the user prompt.
    ///
    /// # Errors
    ///
    /// - [`AiError::Http`] on network failure or timeout.
    /// - [`AiError::Status`] when the service answers with a non-success status.
    /// - [`AiError::Deserialize`] when the body is not the expected JSON shape.
    /// - [`AiError::EmptyChoices`] when the completion carries no choices.
    pub async fn complete(&self, system: &str, prompt: &str) -> Result<String, AiError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AiError::Status(response.status()));
        }

        let body = response.text().await?;
        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| AiError::Deserialize {
                context: "chat completion response".to_owned(),
                source: e,
            })?;

        let choice = parsed.choices.into_iter().next().ok_or(AiError::EmptyChoices)?;
        Ok(choice.message.content)
    }
}
