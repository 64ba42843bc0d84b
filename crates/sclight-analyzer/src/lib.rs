//! `sclight-analyzer` - embedded SCL logic analyzer.
//!
//! Given a short SCL snippet and a point-in-time tag snapshot, classifies
//! the snippet's dominant construct, resolves referenced tags, evaluates
//! expressions and simple assignments, and produces a deterministic
//! natural-language trace plus structured results.
//!
//! ```
//! use sclight_analyzer::snapshot::{TagSnapshot, TagState};
//! use sclight_analyzer::Analyzer;
//!
//! let mut snapshot = TagSnapshot::new();
//! snapshot.insert("Sensor_1", TagState::of("TRUE", "BOOL"));
//! snapshot.insert("Falha", TagState::of("FALSE", "BOOL"));
//!
//! let analyzer = Analyzer::new();
//! let result = analyzer.analyze("Motor := Sensor_1 AND NOT Falha;", &snapshot);
//! assert!(result.success);
//! assert!(result.narrative.contains("Motor := Sensor_1 AND NOT Falha → TRUE"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Analyzer configuration.
pub mod config;
mod context;
/// Local variable environment.
pub mod env;
/// Analyzer-internal errors.
pub mod error;
/// Structural executors.
pub mod exec;
/// Expression substitution, parsing, and evaluation.
pub mod expr;
/// Explanation builder.
pub mod narrative;
/// Analysis result types.
pub mod result;
/// Tag snapshot input model.
pub mod snapshot;
/// Runtime value model.
pub mod value;

pub use config::AnalyzerConfig;
pub use context::RunContext;
pub use result::AnalysisResult;

use smol_str::SmolStr;

use sclight_syntax::{classify, extract_candidates, lex_significant, source_stats};

use crate::result::{Statistics, TagRef};
use crate::snapshot::TagSnapshot;
use crate::value::decode_raw;

/// The analysis engine.
///
/// Holds configuration only; all per-run state lives in a [`RunContext`]
/// created inside [`Analyzer::analyze`], so a single instance can serve
/// concurrent runs.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Creates an analyzer with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with the given configuration.
    #[must_use]
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyzes one snippet against one snapshot.
    ///
    /// Never fails: structural mismatches, unresolved names, and
    /// evaluation errors all degrade to a partial but usable result with
    /// `success = true`.
    #[must_use]
    pub fn analyze(&self, code: &str, snapshot: &TagSnapshot) -> AnalysisResult {
        let tokens = lex_significant(code);
        let kind = classify(&tokens, code);
        tracing::debug!(construct = kind.label(), "analysis started");

        let mut ctx = RunContext::seeded(snapshot);

        let candidates = extract_candidates(&tokens, code);
        let (tags_referenced, unresolved) = resolve_tags(&candidates, snapshot);

        exec::execute(&mut ctx, kind, code);

        let narrative = narrative::build(&ctx);
        let stats = source_stats(code);

        tracing::debug!(
            steps = ctx.steps.len(),
            diagnostics = ctx.diagnostics.len(),
            assignments = ctx.assignments.len(),
            "analysis finished"
        );

        AnalysisResult {
            success: true,
            classified_type: kind.label(),
            statistics: Statistics {
                total_lines: stats.total_lines,
                code_lines: stats.code_lines,
                comment_lines: stats.comment_lines,
                empty_lines: stats.empty_lines,
                tags_found: candidates.len(),
                tags_in_snapshot: tags_referenced.len(),
                tags_not_in_snapshot: unresolved,
            },
            tags_referenced,
            assignments: ctx.assignments,
            narrative,
            diagnostics: ctx.diagnostics,
        }
    }
}

/// Resolves extracted candidates against the snapshot.
///
/// Unresolved candidates are counted but omitted from the list; two
/// candidates resolving to the same snapshot entry collapse into one
/// record at the first occurrence.
fn resolve_tags(candidates: &[SmolStr], snapshot: &TagSnapshot) -> (Vec<TagRef>, usize) {
    let mut refs: Vec<TagRef> = Vec::new();
    let mut unresolved = 0usize;
    for candidate in candidates {
        match snapshot.resolve(candidate) {
            Some((name, state)) => {
                if refs.iter().any(|r| r.name == name) {
                    continue;
                }
                refs.push(TagRef {
                    name: SmolStr::new(name),
                    declared_type: state.data_type.clone(),
                    value: decode_raw(&state.value, &state.data_type),
                    found_in_snapshot: true,
                });
            }
            None => unresolved += 1,
        }
    }
    (refs, unresolved)
}
