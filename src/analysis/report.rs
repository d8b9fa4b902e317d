//! Complexity report schema
//!
//! The wire format uses kebab-case keys; the struct keeps Rust naming and
//! maps through serde renames. The two formula fields default to `None` so
//! that key-presence rules stay with the extraction validators, which differ
//! between the scanning and fenced paths.

use serde::{Deserialize, Serialize};

/// All keys a full report carries.
pub const REPORT_FIELDS: [&str; 7] = [
    "time-complexity",
    "space-complexity",
    "formula",
    "space-complexity-formula",
    "reasons-of-time-complexity",
    "reasons-of-space-complexity",
    "improvements",
];

/// The keys both extraction paths anchor on. The fenced path predates the
/// `space-complexity-formula` field and never required it.
pub const CORE_FIELDS: [&str; 6] = [
    "time-complexity",
    "space-complexity",
    "formula",
    "reasons-of-time-complexity",
    "reasons-of-space-complexity",
    "improvements",
];

/// Keys whose values must be JSON arrays.
pub const LIST_FIELDS: [&str; 3] = [
    "reasons-of-time-complexity",
    "reasons-of-space-complexity",
    "improvements",
];

/// Structured complexity analysis recovered from model output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Worst-case time complexity in Big-O notation
    #[serde(rename = "time-complexity")]
    pub time_complexity: String,

    /// Space complexity in Big-O notation
    #[serde(rename = "space-complexity")]
    pub space_complexity: String,

    /// Growth formula when the time complexity has a single free variable
    #[serde(default)]
    pub formula: Option<String>,

    /// Growth formula when the space complexity has a single free variable
    #[serde(rename = "space-complexity-formula", default)]
    pub space_complexity_formula: Option<String>,

    /// Explanations backing the time complexity verdict
    #[serde(rename = "reasons-of-time-complexity")]
    pub reasons_of_time_complexity: Vec<String>,

    /// Explanations backing the space complexity verdict
    #[serde(rename = "reasons-of-space-complexity")]
    pub reasons_of_space_complexity: Vec<String>,

    /// Suggested optimization strategies
    pub improvements: Vec<String>,
}
