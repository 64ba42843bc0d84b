//! Per-call run context.
//!
//! Owns every piece of mutable state an analysis run accumulates: the
//! local variable environment, the ordered narration steps, diagnostics,
//! and executed assignments. One context per `analyze()` call; dropping it
//! is the reset, which makes concurrent runs on the same `Analyzer`
//! trivially safe.

use crate::env::LocalEnv;
use crate::result::{AssignmentRecord, Diagnostic, Severity};
use crate::snapshot::TagSnapshot;

/// Mutable state of one analysis run.
#[derive(Debug)]
pub struct RunContext {
    /// Bindings visible during evaluation.
    pub env: LocalEnv,
    /// Ordered narration steps, one per line.
    pub steps: Vec<String>,
    /// Non-fatal anomalies detected during the run.
    pub diagnostics: Vec<Diagnostic>,
    /// Executed assignments in document order.
    pub assignments: Vec<AssignmentRecord>,
}

impl RunContext {
    /// Creates a context seeded from the snapshot.
    #[must_use]
    pub fn seeded(snapshot: &TagSnapshot) -> Self {
        Self {
            env: LocalEnv::seeded(snapshot),
            steps: Vec::new(),
            diagnostics: Vec::new(),
            assignments: Vec::new(),
        }
    }

    /// Appends a narration step.
    pub fn step(&mut self, text: impl Into<String>) {
        self.steps.push(text.into());
    }

    /// Records a warning diagnostic.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "diagnostic");
        self.diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            message,
        });
    }
}
