//! Complexity analysis core
//!
//! Prompt construction, report extraction from model output, and the thin
//! orchestration tying them to an LLM client.

mod analyzer;
mod extract;
mod prompt;
mod report;

pub use analyzer::{AnalyzeError, ComplexityAnalyzer};
pub use extract::{ExtractError, FencedExtractor, ReportExtractor, ScanExtractor};
pub use prompt::build_analysis_prompt;
pub use report::AnalysisReport;
