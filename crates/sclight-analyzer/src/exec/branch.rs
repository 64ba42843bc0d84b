//! IF construct execution.

use sclight_syntax::{extract_candidates, lex_significant, Token, TokenKind};

use crate::context::RunContext;
use crate::expr::evaluate;

use super::plain::execute_plain;

/// Executes the outermost `IF cond THEN .. [ELSE ..] END_IF` for real.
///
/// A snippet with no `THEN` or no matching `END_IF` yields no steps at all
/// (soft failure: the run still succeeds with an empty narrative).
/// Statements trailing `END_IF` run through the plain scanner.
pub fn execute_if(ctx: &mut RunContext, source: &str) {
    let tokens = lex_significant(source);

    let Some(if_idx) = tokens.iter().position(|t| t.kind == TokenKind::KwIf) else {
        return;
    };
    let Some(then_idx) = tokens[if_idx + 1..]
        .iter()
        .position(|t| t.kind == TokenKind::KwThen)
        .map(|offset| if_idx + 1 + offset)
    else {
        return;
    };

    // Depth-aware search for the matching END_IF and a same-level ELSE.
    let mut depth = 0usize;
    let mut else_idx = None;
    let mut end_idx = None;
    for (i, token) in tokens.iter().enumerate().skip(then_idx + 1) {
        match token.kind {
            TokenKind::KwIf => depth += 1,
            TokenKind::KwElse if depth == 0 && else_idx.is_none() => else_idx = Some(i),
            TokenKind::KwEndIf => {
                if depth == 0 {
                    end_idx = Some(i);
                    break;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    let Some(end_idx) = end_idx else {
        return;
    };

    let cond = slice_between(source, &tokens, if_idx, then_idx);
    ctx.step(format!("IF {cond}"));

    let cond_tokens = lex_significant(&cond);
    for name in extract_candidates(&cond_tokens, &cond) {
        let value = ctx.env.value_of(&name);
        ctx.step(format!("  {name} = {value}"));
    }

    let has_junction = cond_tokens
        .iter()
        .any(|t| matches!(t.kind, TokenKind::KwAnd | TokenKind::KwOr));
    if has_junction {
        for operand in split_operands(&cond, &cond_tokens) {
            let shown = match evaluate(&operand, &ctx.env) {
                Some(value) if value.is_truthy() => "TRUE",
                Some(_) => "FALSE",
                None => "(sem valor)",
            };
            ctx.step(format!("  {operand} → {shown}"));
        }
    }

    let truthy = evaluate(&cond, &ctx.env).is_some_and(|value| value.is_truthy());
    ctx.step(if truthy {
        "Condição: VERDADEIRA"
    } else {
        "Condição: FALSA"
    });

    if truthy {
        let then_block = slice_between(source, &tokens, then_idx, else_idx.unwrap_or(end_idx));
        execute_plain(ctx, &then_block);
    } else if let Some(else_idx) = else_idx {
        let else_block = slice_between(source, &tokens, else_idx, end_idx);
        execute_plain(ctx, &else_block);
    } else {
        ctx.step("Nenhum bloco executado");
    }

    let tail_start = usize::from(tokens[end_idx].range.end());
    execute_plain(ctx, &source[tail_start..]);
}

/// Source text strictly between two tokens.
fn slice_between(source: &str, tokens: &[Token], after: usize, before: usize) -> String {
    let start = usize::from(tokens[after].range.end());
    let end = usize::from(tokens[before].range.start());
    source[start..end].trim().to_owned()
}

/// Splits a condition at its top-level AND/OR boundaries.
fn split_operands(cond: &str, tokens: &[Token]) -> Vec<String> {
    let mut operands = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for token in tokens {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => depth = depth.saturating_sub(1),
            TokenKind::KwAnd | TokenKind::KwOr if depth == 0 => {
                let piece = cond[start..usize::from(token.range.start())].trim();
                if !piece.is_empty() {
                    operands.push(piece.to_owned());
                }
                start = usize::from(token.range.end());
            }
            _ => {}
        }
    }
    let last = cond[start..].trim();
    if !last.is_empty() {
        operands.push(last.to_owned());
    }
    operands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{TagSnapshot, TagState};

    fn context() -> RunContext {
        let mut snapshot = TagSnapshot::new();
        snapshot.insert("Sensor_1", TagState::of("TRUE", "BOOL"));
        snapshot.insert("Falha", TagState::of("FALSE", "BOOL"));
        RunContext::seeded(&snapshot)
    }

    #[test]
    fn true_branch_executes() {
        let mut ctx = context();
        execute_if(&mut ctx, "IF Sensor_1 THEN Motor := TRUE; ELSE Motor := FALSE; END_IF");
        assert!(ctx.steps.iter().any(|s| s == "Condição: VERDADEIRA"));
        assert!(ctx.steps.iter().any(|s| s.starts_with("Motor := TRUE")));
        assert_eq!(ctx.assignments.len(), 1);
    }

    #[test]
    fn false_without_else_reports_no_block() {
        let mut ctx = context();
        execute_if(&mut ctx, "IF Falha THEN Motor := TRUE; END_IF");
        assert!(ctx.steps.iter().any(|s| s == "Condição: FALSA"));
        assert!(ctx.steps.iter().any(|s| s == "Nenhum bloco executado"));
        assert!(ctx.assignments.is_empty());
    }

    #[test]
    fn missing_end_if_yields_nothing() {
        let mut ctx = context();
        execute_if(&mut ctx, "IF Sensor_1 THEN Motor := TRUE;");
        assert!(ctx.steps.is_empty());
        assert!(ctx.assignments.is_empty());
    }

    #[test]
    fn operand_breakdown_for_junctions() {
        let mut ctx = context();
        execute_if(&mut ctx, "IF Sensor_1 AND Falha THEN X := 1; END_IF");
        assert!(ctx.steps.iter().any(|s| s == "  Sensor_1 → TRUE"));
        assert!(ctx.steps.iter().any(|s| s == "  Falha → FALSE"));
    }

    #[test]
    fn nested_if_end_matching() {
        let source = "IF Sensor_1 THEN IF Falha THEN A := 1; END_IF B := 2; END_IF C := 3;";
        let mut ctx = context();
        execute_if(&mut ctx, source);
        // Then-block scanned as plain assignments, tail executed too.
        assert!(ctx.assignments.iter().any(|a| a.variable_name == "B"));
        assert!(ctx.assignments.iter().any(|a| a.variable_name == "C"));
    }

    #[test]
    fn trailing_statements_after_end_if() {
        let mut ctx = context();
        execute_if(&mut ctx, "IF Falha THEN A := 1; END_IF Depois := 9;");
        assert!(ctx.assignments.iter().any(|a| a.variable_name == "Depois"));
    }
}
