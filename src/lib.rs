//! algolens - LLM-backed algorithmic complexity analysis service
//!
//! This library accepts a source-code snippet plus its language, asks a
//! generative-text model for a time/space complexity analysis, and recovers
//! a structured report from the model's free-text answer.
//!
//! # Core Concepts
//!
//! - **Prompt construction**: a deterministic template that spells out the
//!   exact JSON schema the model must answer with
//! - **Report extraction**: scanning unstructured model output for
//!   report-shaped JSON, repairing common formatting damage, and validating
//!   the result against the schema
//! - **LLM backends**: a pluggable client trait with a multi-provider
//!   production implementation and a mock for tests
//!
//! # Example Usage
//!
//! ```ignore
//! use algolens::{ComplexityAnalyzer, LlmClient};
//! use std::sync::Arc;
//!
//! async fn analyze(llm: Arc<dyn LlmClient>) -> Result<(), Box<dyn std::error::Error>> {
//!     let analyzer = ComplexityAnalyzer::new(llm);
//!     let report = analyzer
//!         .analyze("C++", "for (int i = 0; i < n; i++) sum += a[i];")
//!         .await?;
//!
//!     println!("Time: {}", report.time_complexity);
//!     println!("Space: {}", report.space_complexity);
//!     Ok(())
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`analysis`]: prompt construction, report extraction, orchestration
//! - [`llm`]: client trait and backend implementations
//! - [`server`]: axum HTTP boundary
//! - [`config`]: environment-driven configuration

pub mod analysis;
pub mod config;
pub mod llm;
pub mod server;
pub mod util;

pub use analysis::{
    AnalysisReport, AnalyzeError, ComplexityAnalyzer, ExtractError, FencedExtractor,
    ReportExtractor, ScanExtractor,
};
pub use config::{AppConfig, ConfigError};
pub use llm::{
    BackendError, GenAiClient, LlmClient, LlmRequest, LlmResponse, MockLlmClient, MockResponse,
    Provider,
};
pub use server::{build_router, AppState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_algolens() {
        assert_eq!(NAME, "algolens");
    }
}
