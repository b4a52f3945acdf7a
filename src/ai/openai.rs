//! HTTP client for an OpenAI-compatible chat completions API.
//!
//! This module provides a simple blocking client for the `/chat/completions`
//! endpoint, and the `QuestionService` that turns a built prompt into one
//! generated question.

use crate::ai::prompts::question_messages;
use crate::config::Config;
use crate::constants::{QUESTION_MAX_TOKENS, QUESTION_TEMPERATURE};
use crate::errors::{AIError, AppResult};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// A message in a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender (system, user, assistant)
    pub role: String,
    /// The content of the message
    pub content: String,
}

impl Message {
    /// Creates a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Creates a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Sampling parameters for one chat completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingOptions {
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            temperature: QUESTION_TEMPERATURE,
            max_tokens: QUESTION_MAX_TOKENS,
        }
    }
}

/// Request body for chat completion.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

/// Response from chat completion.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

/// Client for interacting with a chat completions API.
pub struct OpenAIClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl OpenAIClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the API (e.g., "https://api.openai.com/v1")
    /// * `api_key` - Bearer credential
    /// * `timeout` - Timeout applied to each request
    ///
    /// # Errors
    ///
    /// Returns `AIError::Transport` if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AIError::Transport)?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Sends a chat completion request and returns the trimmed content of the first choice.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API is not reachable (`AIError::Transport`)
    /// - The credential is rejected (`AIError::Unauthorized`)
    /// - The API returns any other error status (`AIError::Provider`)
    /// - The body cannot be parsed (`AIError::InvalidResponse`)
    /// - There is no choice or its content is blank (`AIError::EmptyResponse`)
    pub fn chat(
        &self,
        model: &str,
        messages: &[Message],
        options: SamplingOptions,
    ) -> Result<String, AIError> {
        debug!("Sending chat request with model: {}", model);

        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model,
            messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(AIError::Transport)?;

        let status = response.status();
        let body = response.text().map_err(AIError::Transport)?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AIError::Unauthorized(status.as_u16()));
        }

        if !status.is_success() {
            debug!(status = status.as_u16(), "Chat completion request failed");
            return Err(AIError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let chat_response: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            AIError::InvalidResponse(format!("Failed to parse chat response: {}", e))
        })?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(AIError::EmptyResponse);
        }

        debug!("Received chat response ({} chars)", content.len());
        Ok(content)
    }
}

/// Anything that can turn a built prompt into one question.
pub trait QuestionGenerator {
    /// Generates a single question for `prompt`.
    ///
    /// Implementations make exactly one attempt; there is no retry.
    fn generate(&self, prompt: &str) -> Result<String, AIError>;
}

/// Generates questions through the chat completions API.
pub struct QuestionService {
    client: OpenAIClient,
    model: String,
    options: SamplingOptions,
}

impl QuestionService {
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            options: SamplingOptions::default(),
        }
    }

    /// Builds the client and service from loaded configuration.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let client = OpenAIClient::new(&config.api_base, &config.api_key, config.timeout)?;
        Ok(Self::new(client, &config.model))
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl QuestionGenerator for QuestionService {
    fn generate(&self, prompt: &str) -> Result<String, AIError> {
        let messages = question_messages(prompt);
        self.client.chat(&self.model, &messages, self.options)
    }
}
