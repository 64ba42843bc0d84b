//! Structured output of one analysis run.

#![allow(missing_docs)]

use serde::Serialize;
use smol_str::SmolStr;

use crate::value::{DataType, InferredType, Value};

/// One resolved tag reference.
#[derive(Debug, Clone, Serialize)]
pub struct TagRef {
    /// Tag name as spelled in the snapshot.
    pub name: SmolStr,
    /// Declared type from the snapshot.
    pub declared_type: DataType,
    /// Decoded current value.
    pub value: Value,
    /// Whether the name resolved against the snapshot. Unresolved
    /// candidates are omitted from the list, so this is true for every
    /// entry; kept for the output contract with the hosting UI.
    pub found_in_snapshot: bool,
}

/// Outcome of one executed assignment.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentRecord {
    pub variable_name: SmolStr,
    pub value: Value,
    pub inferred_type: InferredType,
    pub source_expression: String,
}

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A non-fatal runtime anomaly.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

/// Line and tag counters for the run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Statistics {
    pub total_lines: usize,
    pub code_lines: usize,
    pub comment_lines: usize,
    pub empty_lines: usize,
    /// Distinct tag candidates found in the code.
    pub tags_found: usize,
    /// Candidates that resolved against the snapshot.
    pub tags_in_snapshot: usize,
    /// Candidates with no snapshot entry.
    pub tags_not_in_snapshot: usize,
}

/// Aggregate result of one `analyze()` call.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub success: bool,
    /// Dominant construct label: `if`, `for`, `while`, `repeat`, `case`,
    /// `timer`, `counter`, or `plain`.
    pub classified_type: &'static str,
    pub tags_referenced: Vec<TagRef>,
    pub assignments: Vec<AssignmentRecord>,
    pub narrative: String,
    pub diagnostics: Vec<Diagnostic>,
    pub statistics: Statistics,
}
