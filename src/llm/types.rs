//! LLM communication types
//!
//! Request/response types for single-prompt text generation, independent of
//! any specific provider implementation.

use std::time::Duration;

/// Request to send to the LLM
#[derive(Debug, Clone)]
pub struct LlmRequest {
    /// The full prompt text
    pub prompt: String,
    /// Temperature for response generation (0.0 - 1.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl LlmRequest {
    /// Creates a new request with the given prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Sets the temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the maximum tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Response from the LLM
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// Text content of the response
    pub content: String,
    /// Time taken for the request
    pub response_time: Duration,
}

impl LlmResponse {
    /// Creates a new response with the given content
    pub fn text(content: impl Into<String>, response_time: Duration) -> Self {
        Self {
            content: content.into(),
            response_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = LlmRequest::new("analyze this")
            .with_temperature(0.1)
            .with_max_tokens(2048);

        assert_eq!(request.prompt, "analyze this");
        assert_eq!(request.temperature, Some(0.1));
        assert_eq!(request.max_tokens, Some(2048));
    }

    #[test]
    fn test_response_text() {
        let response = LlmResponse::text("done", Duration::from_millis(25));
        assert_eq!(response.content, "done");
        assert_eq!(response.response_time, Duration::from_millis(25));
    }
}
