//! Structural executors: one behavior per classified construct.
//!
//! Only the IF and plain-assignment paths evaluate for real. Loops, CASE,
//! and the named timer/counter instructions are described once and their
//! bodies scanned a single time through the plain path.

mod branch;
mod loops;
mod named;
mod plain;

pub use plain::{scan_assignments, ScannedAssignment};

use sclight_syntax::ConstructKind;

use crate::context::RunContext;

/// Dispatches to the executor for the classified construct.
pub fn execute(ctx: &mut RunContext, kind: ConstructKind, source: &str) {
    match kind {
        ConstructKind::Plain => plain::execute_plain(ctx, source),
        ConstructKind::If => branch::execute_if(ctx, source),
        ConstructKind::For => loops::execute_for(ctx, source),
        ConstructKind::While => loops::execute_while(ctx, source),
        ConstructKind::Repeat => loops::execute_repeat(ctx, source),
        ConstructKind::Case => loops::execute_case(ctx, source),
        ConstructKind::Timer(timer) => named::execute_timer(ctx, timer, source),
        ConstructKind::Counter(counter) => named::execute_counter(ctx, counter, source),
    }
}
