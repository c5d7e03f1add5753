// src/services/completion.rs
//
// Minimal client for an OpenAI-style `/chat/completions` endpoint.
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

/// What a completion call can come back with when the service answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Reply(String),
    /// The service reported the account out of quota or rate limited (HTTP 429).
    QuotaExhausted,
}

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("OPENAI_API_KEY is not configured")]
    MissingApiKey,
    #[error("request to completion service failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("completion service returned HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("could not decode completion response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("completion response contained no choices")]
    NoChoices,
}

#[derive(Serialize)]
struct CompletionRequestBody<'a> {
    model: &'a str,
    messages: &'a [Turn],
}

#[derive(Deserialize)]
struct CompletionResponseBody {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

impl CompletionClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Request a single completion for `turns`, in order.
    pub async fn complete(&self, turns: &[Turn]) -> Result<Completion, UpstreamError> {
        let api_key = self.api_key.as_deref().ok_or(UpstreamError::MissingApiKey)?;

        let body = CompletionRequestBody { model: &self.model, messages: turns };
        let response = self
            .http
            .post(self.url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Ok(Completion::QuotaExhausted);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body });
        }

        let parsed: CompletionResponseBody = response.json().await.map_err(UpstreamError::Decode)?;
        let first = parsed.choices.into_iter().next().ok_or(UpstreamError::NoChoices)?;
        Ok(Completion::Reply(first.message.content.unwrap_or_default()))
    }
}
