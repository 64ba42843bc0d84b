//! Plain assignment scanning and execution.
//!
//! The workhorse of every executor: finds statement-level
//! `target := expression ;` occurrences in document order and runs them.
//! Assignments nested in parentheses (formal parameters of instruction
//! calls such as `TON(IN := Start)`) are not statements and are skipped.

use smol_str::SmolStr;

use sclight_syntax::{lex_significant, TokenKind};

use crate::context::RunContext;
use crate::env::{BindingOrigin, BindingType};
use crate::expr::evaluate;
use crate::result::AssignmentRecord;
use crate::value::InferredType;

/// One scanned assignment statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedAssignment {
    /// Assignment target (quoted tags unwrapped).
    pub target: SmolStr,
    /// Right-hand side text, trimmed.
    pub expr: String,
}

/// Scans `target := expression ;` statements in document order.
///
/// The final statement may omit its semicolon; the expression then runs to
/// the end of the region.
#[must_use]
pub fn scan_assignments(source: &str) -> Vec<ScannedAssignment> {
    let tokens = lex_significant(source);
    let mut scanned = Vec::new();
    let mut depth = 0usize;
    let mut i = 0usize;

    while i < tokens.len() {
        match tokens[i].kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => depth = depth.saturating_sub(1),
            TokenKind::Ident | TokenKind::QuotedTag
                if depth == 0
                    && tokens.get(i + 1).map(|t| t.kind) == Some(TokenKind::Assign) =>
            {
                let expr_from = i + 2;
                let mut j = expr_from;
                let mut inner = 0usize;
                while j < tokens.len() {
                    match tokens[j].kind {
                        TokenKind::LParen => inner += 1,
                        TokenKind::RParen => {
                            if inner == 0 {
                                break;
                            }
                            inner -= 1;
                        }
                        TokenKind::Semicolon if inner == 0 => break,
                        _ => {}
                    }
                    j += 1;
                }
                if j > expr_from {
                    let start = usize::from(tokens[expr_from].range.start());
                    let end = usize::from(tokens[j - 1].range.end());
                    scanned.push(ScannedAssignment {
                        target: SmolStr::new(tokens[i].text(source).trim_matches('"')),
                        expr: source[start..end].trim().to_owned(),
                    });
                }
                i = j + 1;
                continue;
            }
            _ => {}
        }
        i += 1;
    }

    scanned
}

/// Evaluates and executes every scanned assignment in the region.
pub fn execute_plain(ctx: &mut RunContext, region: &str) {
    for assignment in scan_assignments(region) {
        let ScannedAssignment { target, expr } = assignment;
        match evaluate(&expr, &ctx.env) {
            Some(value) => {
                tracing::trace!(%target, %expr, %value, "assignment");
                if value.is_non_finite() {
                    ctx.warn(format!(
                        "Resultado não finito em '{target}' ({value}): verifique divisão por zero"
                    ));
                }
                let inferred = InferredType::of(&value);
                ctx.env.insert(
                    &target,
                    value.clone(),
                    BindingType::Inferred(inferred),
                    BindingOrigin::Computed,
                );
                ctx.step(format!("{target} := {expr} → {value}"));
                ctx.assignments.push(AssignmentRecord {
                    variable_name: target,
                    value,
                    inferred_type: inferred,
                    source_expression: expr,
                });
            }
            None => {
                ctx.step(format!("{target} := {expr} → (sem valor)"));
            }
        }
    }
}
