//! Explanation builder.
//!
//! Assembles the final narrative from the run context: the ordered steps,
//! a diagnostics block, and a results block listing the computed bindings.
//! Pure function of the accumulated run state.

use std::fmt::Write;

use crate::context::RunContext;

/// Warning marker prefixed to each diagnostic line.
pub const WARNING_MARKER: &str = "⚠";

/// Builds the narrative text for a finished run.
#[must_use]
pub fn build(ctx: &RunContext) -> String {
    let mut out = String::new();

    for step in &ctx.steps {
        out.push_str(step);
        out.push('\n');
    }

    if !ctx.diagnostics.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        for diagnostic in &ctx.diagnostics {
            let _ = writeln!(out, "{WARNING_MARKER} {}", diagnostic.message);
        }
    }

    let mut results = ctx.env.computed().peekable();
    if results.peek().is_some() {
        if !out.is_empty() {
            out.push('\n');
        }
        for binding in results {
            let _ = writeln!(
                out,
                "{} = {} [{}]",
                binding.name,
                binding.value,
                binding.ty.label()
            );
        }
    }

    // Steps, diagnostics, and results each end with a newline; trim the
    // last one so the narrative has no trailing blank line.
    while out.ends_with('\n') {
        out.pop();
    }
    out
}
