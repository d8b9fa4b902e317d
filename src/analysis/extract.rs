//! Report extraction from raw model output
//!
//! Models rarely return the bare JSON object they were asked for: answers
//! arrive wrapped in prose, fenced in markdown, decorated with trailing
//! commas, or accompanied by extra JSON-looking fragments echoed from the
//! prompt. Two strategies recover a report from that text:
//!
//! - [`ScanExtractor`] walks the whole response for report-shaped `{...}`
//!   spans, repairs the common formatting damage, and returns the first
//!   span that parses and validates. Used on the production analysis path.
//! - [`FencedExtractor`] accepts only a single ```json fenced block, parsed
//!   verbatim and validated strictly. Used when the prompting style asks
//!   the model to fence its answer.
//!
//! Callers pick the strategy matching their prompting style; nothing falls
//! back between them.

use super::report::{AnalysisReport, CORE_FIELDS, LIST_FIELDS, REPORT_FIELDS};
use regex::Regex;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no complexity report found in model output")]
    NoCandidate,
    #[error("no candidate in model output parsed as a valid complexity report")]
    NoValidCandidate,
    #[error("model output contains no ```json fenced block")]
    NoFencedBlock,
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("field {0} must be a list")]
    NotAList(&'static str),
    #[error("field {0} must be a non-empty list")]
    EmptyList(&'static str),
}

pub trait ReportExtractor {
    fn extract(&self, text: &str) -> Result<AnalysisReport, ExtractError>;
}

/// Scans prose for report-shaped JSON objects.
///
/// A candidate is the shortest span from an opening brace through the first
/// `}` after all six core keys; the brace search does not balance nesting,
/// so an object nested inside a list value truncates its candidate at the
/// inner `}` and the candidate is skipped as unparseable. Invalid candidates
/// never abort the scan.
pub struct ScanExtractor;

impl ReportExtractor for ScanExtractor {
    fn extract(&self, text: &str) -> Result<AnalysisReport, ExtractError> {
        let candidates = find_candidates(text);

        if candidates.is_empty() {
            return Err(ExtractError::NoCandidate);
        }

        for candidate in candidates {
            let cleaned = normalize(candidate);

            let value: Value = match serde_json::from_str(&cleaned) {
                Ok(value) => value,
                Err(e) => {
                    debug!("skipping unparseable candidate: {}", e);
                    continue;
                }
            };

            if let Err(e) = check_report_shape(&value) {
                debug!("skipping candidate: {}", e);
                continue;
            }

            match serde_json::from_value::<AnalysisReport>(value) {
                Ok(report) => return Ok(report),
                Err(e) => {
                    debug!("skipping mistyped candidate: {}", e);
                    continue;
                }
            }
        }

        Err(ExtractError::NoValidCandidate)
    }
}

/// Extracts a report from a single ```json fenced block.
///
/// Stricter than [`ScanExtractor`]: the block is parsed verbatim (no
/// whitespace or trailing-comma repair) and the list fields must be
/// non-empty. There is no fallback to scanning the surrounding text.
pub struct FencedExtractor;

impl ReportExtractor for FencedExtractor {
    fn extract(&self, text: &str) -> Result<AnalysisReport, ExtractError> {
        let fence = Regex::new(r"(?s)```json\s*(\{.*?\})\s*```").unwrap();

        let captures = fence.captures(text).ok_or(ExtractError::NoFencedBlock)?;
        let body = captures
            .get(1)
            .map(|m| m.as_str().trim())
            .unwrap_or_default();

        let value: Value =
            serde_json::from_str(body).map_err(|e| ExtractError::InvalidJson(e.to_string()))?;

        check_fenced_shape(&value)?;

        serde_json::from_value(value).map_err(|e| ExtractError::InvalidJson(e.to_string()))
    }
}

/// Finds every report-shaped `{...}` span in the text.
///
/// For each opening brace, the candidate is the shortest span mentioning
/// all six core keys, in any order; a second `{` before the keys means the
/// inner brace anchors the search instead. The scan resumes after each
/// candidate found.
fn find_candidates(text: &str) -> Vec<&str> {
    let mut candidates = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find('{') {
        let open = cursor + offset;
        match span_end(text, open) {
            Some(close) => {
                candidates.push(&text[open..=close]);
                cursor = close + 1;
            }
            None => cursor = open + 1,
        }
    }

    candidates
}

/// Returns the index of the closing `}` for a candidate anchored at `open`,
/// or `None` if no candidate starts there.
fn span_end(text: &str, open: usize) -> Option<usize> {
    let tail = &text[open + 1..];

    // All keys must show up before any nested opening brace.
    let head_len = tail.find('{').unwrap_or(tail.len());
    let head = &tail[..head_len];

    let mut keys_end = 0;
    for field in CORE_FIELDS {
        let needle = format!("\"{field}\"");
        let at = head.find(&needle)?;
        keys_end = keys_end.max(at + needle.len());
    }

    let close = tail[keys_end..].find('}')? + keys_end;
    Some(open + 1 + close)
}

/// Repairs the formatting damage models commonly inflict on their JSON:
/// newline runs collapse to a single space and a trailing comma before the
/// closing brace is dropped.
fn normalize(candidate: &str) -> String {
    let newlines = Regex::new(r"\n\s*").unwrap();
    let trailing_comma = Regex::new(r",\s*\}").unwrap();

    let collapsed = newlines.replace_all(candidate, " ");
    let repaired = trailing_comma.replace_all(&collapsed, "}");
    repaired.trim().to_string()
}

/// Shape check for the scanning path: all seven keys present, list fields
/// are arrays. Empty arrays are accepted.
fn check_report_shape(value: &Value) -> Result<(), ExtractError> {
    let object = value
        .as_object()
        .ok_or_else(|| ExtractError::InvalidJson("not a JSON object".to_string()))?;

    for field in REPORT_FIELDS {
        if !object.contains_key(field) {
            return Err(ExtractError::MissingField(field));
        }
    }

    for field in LIST_FIELDS {
        if !object[field].is_array() {
            return Err(ExtractError::NotAList(field));
        }
    }

    Ok(())
}

/// Shape check for the fenced path: the six core keys present, list fields
/// are non-empty arrays.
fn check_fenced_shape(value: &Value) -> Result<(), ExtractError> {
    let object = value
        .as_object()
        .ok_or_else(|| ExtractError::InvalidJson("not a JSON object".to_string()))?;

    for field in CORE_FIELDS {
        if !object.contains_key(field) {
            return Err(ExtractError::MissingField(field));
        }
    }

    for field in LIST_FIELDS {
        match object[field].as_array() {
            Some(items) if !items.is_empty() => {}
            Some(_) => return Err(ExtractError::EmptyList(field)),
            None => return Err(ExtractError::NotAList(field)),
        }
    }

    Ok(())
}
