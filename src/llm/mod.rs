//! LLM client abstraction layer
//!
//! This module provides a trait-based abstraction for generative-text
//! communication, allowing the production GenAI backend and the mock client
//! to be used interchangeably.

mod client;
mod error;
mod genai;
mod mock;
mod types;

pub use client::LlmClient;
pub use error::BackendError;
pub use genai::{GenAiClient, Provider};
pub use mock::{MockLlmClient, MockResponse};
pub use types::{LlmRequest, LlmResponse};
