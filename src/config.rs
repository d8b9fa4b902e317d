//! Configuration management
//!
//! Settings load from environment variables with sensible defaults.
//!
//! # Environment Variables
//!
//! - `ALGOLENS_PROVIDER`: Provider selection (gemini|claude|openai|groq|ollama) - default: "gemini"
//! - `ALGOLENS_MODEL`: Model name - default depends on provider ("gemini-pro" for Gemini)
//! - `PORT`: Listen port for the HTTP server - default: 8000
//! - `CORS_ORIGIN`: Allowed cross-origin value - default: unset (permissive)
//! - `ALGOLENS_MAX_BODY_SIZE`: Request body ceiling in bytes - default: 16384
//! - `ALGOLENS_REQUEST_TIMEOUT`: Model call timeout in seconds - default: 30
//! - `ALGOLENS_LOG_LEVEL`: Logging level - default: "info"
//!
//! Provider credentials are read by the genai library from its standard
//! variables (`GOOGLE_API_KEY`, `ANTHROPIC_API_KEY`, `OPENAI_API_KEY`,
//! `GROQ_API_KEY`). [`AppConfig::create_client`] checks the configured
//! provider's variable up front so a missing credential fails at startup,
//! not on the first request.

use crate::llm::{GenAiClient, Provider};
use std::env;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required provider credential absent at startup
    #[error("Missing {var} for provider {provider}. Set it before starting the service")]
    MissingCredential {
        provider: &'static str,
        var: &'static str,
    },

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Main configuration structure
///
/// Constructed with `Default::default()`, which loads from environment
/// variables with fallback defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Generative-text provider
    pub provider: Provider,

    /// Model name to use (provider-specific, without prefix)
    pub model: String,

    /// HTTP listen port
    pub listen_port: u16,

    /// Allowed cross-origin value; permissive when unset
    pub cors_origin: Option<String>,

    /// Request body size ceiling in bytes
    pub max_body_bytes: usize,

    /// Model call timeout in seconds
    pub request_timeout_secs: u64,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let provider = env::var("ALGOLENS_PROVIDER")
            .ok()
            .and_then(|s| match s.to_lowercase().as_str() {
                "gemini" => Some(Provider::Gemini),
                "claude" => Some(Provider::Claude),
                "openai" => Some(Provider::OpenAI),
                "groq" => Some(Provider::Groq),
                "ollama" => Some(Provider::Ollama),
                _ => None,
            })
            .unwrap_or(Provider::Gemini);

        let model = env::var("ALGOLENS_MODEL")
            .ok()
            .unwrap_or_else(|| Self::default_model(provider).to_string());

        let listen_port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origin = env::var("CORS_ORIGIN").ok().filter(|v| !v.is_empty());

        let max_body_bytes = env::var("ALGOLENS_MAX_BODY_SIZE")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_BODY_BYTES);

        let request_timeout_secs = env::var("ALGOLENS_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        let log_level = env::var("ALGOLENS_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            provider,
            model,
            listen_port,
            cors_origin,
            max_body_bytes,
            request_timeout_secs,
            log_level,
        }
    }
}

impl AppConfig {
    /// Default model for each provider
    pub fn default_model(provider: Provider) -> &'static str {
        match provider {
            Provider::Gemini => "gemini-pro",
            Provider::Claude => "claude-3-5-haiku-latest",
            Provider::OpenAI => "gpt-4o-mini",
            Provider::Groq => "llama-3.1-8b-instant",
            Provider::Ollama => "qwen2.5-coder:7b",
        }
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any value is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }
        if self.request_timeout_secs > 600 {
            return Err(ConfigError::ValidationFailed(
                "Request timeout cannot exceed 10 minutes".to_string(),
            ));
        }

        if self.max_body_bytes < 1024 {
            return Err(ConfigError::ValidationFailed(
                "Request body ceiling must be at least 1KB".to_string(),
            ));
        }
        if self.max_body_bytes > 10_485_760 {
            return Err(ConfigError::ValidationFailed(
                "Request body ceiling cannot exceed 10MB".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    /// Creates the LLM client for the configured provider.
    ///
    /// Verifies the provider's credential variable is set and non-empty
    /// before constructing anything, so a misconfigured deployment dies at
    /// startup with a clear message.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingCredential` if the provider requires an
    /// API key and none is present.
    pub fn create_client(&self) -> Result<Arc<GenAiClient>, ConfigError> {
        if let Some(var) = self.provider.api_key_env() {
            let present = env::var(var).map(|v| !v.trim().is_empty()).unwrap_or(false);
            if !present {
                return Err(ConfigError::MissingCredential {
                    provider: self.provider.display_name(),
                    var,
                });
            }
        }

        let timeout = Duration::from_secs(self.request_timeout_secs);
        Ok(Arc::new(GenAiClient::new(
            self.provider,
            self.model.clone(),
            timeout,
        )))
    }
}

impl fmt::Display for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algolens Configuration:")?;
        writeln!(f, "  Provider: {}", self.provider)?;
        writeln!(f, "  Model: {}", self.model)?;
        writeln!(f, "  Listen Port: {}", self.listen_port)?;
        if let Some(ref origin) = self.cors_origin {
            writeln!(f, "  CORS Origin: {}", origin)?;
        }
        writeln!(f, "  Max Body Size: {} bytes", self.max_body_bytes)?;
        writeln!(f, "  Request Timeout: {}s", self.request_timeout_secs)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LlmClient;
    use serial_test::serial;

    /// Helper to temporarily set environment variables for testing
    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }

        fn unset(key: &str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    #[test]
    #[serial]
    fn test_default_configuration() {
        let _guards = vec![
            EnvGuard::unset("ALGOLENS_PROVIDER"),
            EnvGuard::unset("ALGOLENS_MODEL"),
            EnvGuard::unset("PORT"),
            EnvGuard::unset("CORS_ORIGIN"),
            EnvGuard::unset("ALGOLENS_MAX_BODY_SIZE"),
            EnvGuard::unset("ALGOLENS_REQUEST_TIMEOUT"),
            EnvGuard::unset("ALGOLENS_LOG_LEVEL"),
        ];

        let config = AppConfig::default();

        assert!(matches!(config.provider, Provider::Gemini));
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.listen_port, DEFAULT_PORT);
        assert_eq!(config.cors_origin, None);
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    #[serial]
    fn test_environment_variable_parsing() {
        let _guards = vec![
            EnvGuard::set("ALGOLENS_PROVIDER", "ollama"),
            EnvGuard::set("ALGOLENS_MODEL", "custom-model"),
            EnvGuard::set("PORT", "3000"),
            EnvGuard::set("CORS_ORIGIN", "https://example.com"),
            EnvGuard::set("ALGOLENS_MAX_BODY_SIZE", "32768"),
            EnvGuard::set("ALGOLENS_REQUEST_TIMEOUT", "60"),
            EnvGuard::set("ALGOLENS_LOG_LEVEL", "DEBUG"),
        ];

        let config = AppConfig::default();

        assert!(matches!(config.provider, Provider::Ollama));
        assert_eq!(config.model, "custom-model");
        assert_eq!(config.listen_port, 3000);
        assert_eq!(config.cors_origin, Some("https://example.com".to_string()));
        assert_eq!(config.max_body_bytes, 32_768);
        assert_eq!(config.request_timeout_secs, 60);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_unknown_provider_falls_back_to_default() {
        let _guards = vec![
            EnvGuard::set("ALGOLENS_PROVIDER", "not-a-provider"),
            EnvGuard::unset("ALGOLENS_MODEL"),
        ];

        let config = AppConfig::default();
        assert!(matches!(config.provider, Provider::Gemini));
        assert_eq!(config.model, "gemini-pro");
    }

    fn base_config() -> AppConfig {
        AppConfig {
            provider: Provider::Gemini,
            model: "gemini-pro".to_string(),
            listen_port: 8000,
            cors_origin: None,
            max_body_bytes: 16 * 1024,
            request_timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_configuration_validation_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_configuration_validation_invalid_timeout() {
        let mut config = base_config();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());

        config.request_timeout_secs = 601;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_configuration_validation_invalid_body_ceiling() {
        let mut config = base_config();
        config.max_body_bytes = 512;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_configuration_validation_invalid_log_level() {
        let mut config = base_config();
        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_create_client_requires_credential() {
        let _guard = EnvGuard::unset("GOOGLE_API_KEY");

        let err = base_config().create_client().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingCredential {
                var: "GOOGLE_API_KEY",
                ..
            }
        ));
    }

    #[test]
    #[serial]
    fn test_create_client_rejects_blank_credential() {
        let _guard = EnvGuard::set("GOOGLE_API_KEY", "   ");

        let result = base_config().create_client();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_create_client_with_credential() {
        let _guard = EnvGuard::set("GOOGLE_API_KEY", "test-key");

        let client = base_config().create_client().unwrap();
        assert_eq!(client.name(), "Gemini");
    }

    #[test]
    #[serial]
    fn test_create_client_ollama_needs_no_credential() {
        let mut config = base_config();
        config.provider = Provider::Ollama;
        config.model = "qwen2.5-coder:7b".to_string();

        assert!(config.create_client().is_ok());
    }

    #[test]
    fn test_config_display() {
        let display = format!("{}", base_config());
        assert!(display.contains("Algolens Configuration:"));
        assert!(display.contains("Provider: gemini"));
    }
}
