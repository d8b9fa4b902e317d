//! GenAI-based LLM client
//!
//! This module provides the production `LlmClient` implementation using the
//! `genai` crate, supporting multiple providers (Gemini, Claude, OpenAI,
//! Groq, Ollama) through a single interface.

use super::client::LlmClient;
use super::error::BackendError;
use super::types::{LlmRequest, LlmResponse};
use async_trait::async_trait;
use clap::ValueEnum;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest};
use genai::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Supported generative-text providers
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// Google Gemini
    Gemini,
    /// Anthropic Claude
    Claude,
    /// OpenAI GPT models
    OpenAI,
    /// Groq
    Groq,
    /// Ollama local inference
    Ollama,
}

impl Provider {
    /// Returns the provider prefix for genai model strings
    fn prefix(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::Claude => "claude",
            Provider::OpenAI => "openai",
            Provider::Groq => "groq",
            Provider::Ollama => "ollama",
        }
    }

    /// Returns the provider name for logging
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Gemini => "Gemini",
            Provider::Claude => "Claude",
            Provider::OpenAI => "OpenAI",
            Provider::Groq => "Groq",
            Provider::Ollama => "Ollama",
        }
    }

    /// Environment variable holding the provider's API credential.
    /// Ollama runs locally and needs none.
    pub fn api_key_env(&self) -> Option<&'static str> {
        match self {
            Provider::Gemini => Some("GOOGLE_API_KEY"),
            Provider::Claude => Some("ANTHROPIC_API_KEY"),
            Provider::OpenAI => Some("OPENAI_API_KEY"),
            Provider::Groq => Some("GROQ_API_KEY"),
            Provider::Ollama => None,
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// GenAI-backed LLM client
///
/// Sends a single-turn prompt to the configured provider and returns the
/// raw text response. Provider credentials are read by genai from the
/// standard environment variables (GOOGLE_API_KEY, ANTHROPIC_API_KEY, ...).
///
/// # Thread Safety
///
/// This client is thread-safe and can be shared across requests using `Arc`.
pub struct GenAiClient {
    /// GenAI client instance
    client: Client,

    /// Full model identifier (e.g., "gemini:gemini-pro")
    model: String,

    /// Provider type
    provider: Provider,

    /// Request timeout
    timeout: Duration,
}

impl GenAiClient {
    /// Creates a new client for the given provider and model
    pub fn new(provider: Provider, model: String, timeout: Duration) -> Self {
        let client = Client::default();
        let model = format!("{}:{}", provider.prefix(), model);

        debug!(
            "Creating GenAI client: provider={}, model={}",
            provider.display_name(),
            model,
        );

        Self {
            client,
            model,
            provider,
            timeout,
        }
    }
}

#[async_trait]
impl LlmClient for GenAiClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, BackendError> {
        let start = Instant::now();

        let chat_request = ChatRequest::new(vec![ChatMessage::user(request.prompt)]);

        let mut options = ChatOptions::default();
        if let Some(temperature) = request.temperature {
            options = options.with_temperature(temperature as f64);
        }
        if let Some(max_tokens) = request.max_tokens {
            options = options.with_max_tokens(max_tokens);
        }

        let response = match tokio::time::timeout(
            self.timeout,
            self.client
                .exec_chat(&self.model, chat_request, Some(&options)),
        )
        .await
        {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => {
                error!("{} API error: {}", self.provider.display_name(), e);
                return Err(BackendError::ApiError {
                    message: format!("{} request failed: {}", self.provider.display_name(), e),
                    status_code: None,
                });
            }
            Err(_) => {
                error!(
                    "{} request timed out after {}s",
                    self.provider.display_name(),
                    self.timeout.as_secs()
                );
                return Err(BackendError::TimeoutError {
                    seconds: self.timeout.as_secs(),
                });
            }
        };

        let content = response.first_text().unwrap_or_default().to_string();

        Ok(LlmResponse::text(content, start.elapsed()))
    }

    fn name(&self) -> &str {
        self.provider.display_name()
    }

    fn model_info(&self) -> Option<String> {
        Some(self.model.clone())
    }
}

impl std::fmt::Debug for GenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenAiClient")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}
