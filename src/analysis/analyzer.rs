//! Analysis orchestration
//!
//! A thin coordinator: render the prompt, call the model once, recover the
//! report from the response text. No retry logic; a failed model call or a
//! response with no recoverable report surfaces immediately.

use super::extract::{ExtractError, ReportExtractor, ScanExtractor};
use super::prompt::build_analysis_prompt;
use super::report::AnalysisReport;
use crate::llm::{BackendError, LlmClient, LlmRequest};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The outbound model call failed
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// The model answered, but no report could be recovered from the text
    #[error("Could not extract a complexity report: {0}")]
    Extraction(#[from] ExtractError),
}

/// One-shot complexity analyzer over a shared LLM client.
///
/// Holds no per-request state; callers construct a fresh instance per
/// analysis, so concurrent requests share nothing but the client.
pub struct ComplexityAnalyzer {
    llm: Arc<dyn LlmClient>,
}

impl ComplexityAnalyzer {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Analyzes a code snippet and returns the structured report.
    pub async fn analyze(
        &self,
        language: &str,
        code: &str,
    ) -> Result<AnalysisReport, AnalyzeError> {
        let prompt = build_analysis_prompt(language, code);
        let request = LlmRequest::new(prompt).with_temperature(0.1);

        debug!(language, "requesting complexity analysis");
        let response = self.llm.generate(request).await?;
        debug!(
            elapsed_ms = response.response_time.as_millis() as u64,
            response_chars = response.content.len(),
            "model responded"
        );

        let report = ScanExtractor.extract(&response.content)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{MockLlmClient, MockResponse};

    const MODEL_ANSWER: &str = r#"Here is my analysis of the snippet.

{
  "time-complexity": "O(n)",
  "space-complexity": "O(1)",
  "formula": "n",
  "space-complexity-formula": "1",
  "reasons-of-time-complexity": ["the loop visits each element once"],
  "reasons-of-space-complexity": ["only scalar locals are used"],
  "improvements": ["nothing significant"]
}"#;

    #[tokio::test]
    async fn test_analyze_success() {
        let client = Arc::new(MockLlmClient::new());
        client.add_response(MockResponse::text(MODEL_ANSWER));

        let analyzer = ComplexityAnalyzer::new(client);
        let report = analyzer
            .analyze("C++", "for (int i = 0; i < n; i++) sum += a[i];")
            .await
            .unwrap();

        assert_eq!(report.time_complexity, "O(n)");
        assert_eq!(report.formula, Some("n".to_string()));
    }

    #[tokio::test]
    async fn test_analyze_backend_error() {
        let client = Arc::new(MockLlmClient::new());
        client.add_response(MockResponse::error(BackendError::TimeoutError {
            seconds: 30,
        }));

        let analyzer = ComplexityAnalyzer::new(client);
        let err = analyzer.analyze("C++", "int main() {}").await.unwrap_err();

        assert!(matches!(err, AnalyzeError::Backend(_)));
    }

    #[tokio::test]
    async fn test_analyze_unextractable_response() {
        let client = Arc::new(MockLlmClient::new());
        client.add_response(MockResponse::text(
            "I cannot analyze this code, sorry.",
        ));

        let analyzer = ComplexityAnalyzer::new(client);
        let err = analyzer.analyze("C++", "int main() {}").await.unwrap_err();

        assert!(matches!(
            err,
            AnalyzeError::Extraction(ExtractError::NoCandidate)
        ));
    }
}
