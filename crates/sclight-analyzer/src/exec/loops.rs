//! FOR/WHILE/REPEAT and CASE execution.
//!
//! None of these iterate: the analyzer is a read-only diagnostic tool, so
//! each construct contributes one descriptive step extracted from its
//! header (or selector) and its body is scanned exactly once through the
//! plain-assignment path. This single-pass treatment is a deliberate
//! simplification boundary, not an approximation of loop semantics.

use sclight_syntax::{lex_significant, Token, TokenKind};

use crate::context::RunContext;

use super::plain::execute_plain;

fn position(tokens: &[Token], from: usize, kind: TokenKind) -> Option<usize> {
    tokens[from..]
        .iter()
        .position(|t| t.kind == kind)
        .map(|offset| from + offset)
}

fn slice_between(source: &str, tokens: &[Token], after: usize, before: usize) -> String {
    let start = usize::from(tokens[after].range.end());
    let end = usize::from(tokens[before].range.start());
    source[start..end].trim().to_owned()
}

fn slice_to_end(source: &str, tokens: &[Token], after: usize) -> String {
    let start = usize::from(tokens[after].range.end());
    source[start..].trim().to_owned()
}

/// Describes a FOR header and scans the body once.
pub fn execute_for(ctx: &mut RunContext, source: &str) {
    let tokens = lex_significant(source);
    let Some(for_idx) = position(&tokens, 0, TokenKind::KwFor) else {
        return;
    };
    let Some(do_idx) = position(&tokens, for_idx, TokenKind::KwDo) else {
        ctx.step("FOR: laço sem cabeçalho reconhecível (DO ausente)");
        return;
    };

    let assign_idx = position(&tokens, for_idx, TokenKind::Assign);
    let to_idx = position(&tokens, for_idx, TokenKind::KwTo);
    let by_idx = position(&tokens, for_idx, TokenKind::KwBy).filter(|&i| i < do_idx);

    match (assign_idx, to_idx) {
        (Some(assign_idx), Some(to_idx)) if assign_idx < to_idx && to_idx < do_idx => {
            let var = slice_between(source, &tokens, for_idx, assign_idx);
            let start = slice_between(source, &tokens, assign_idx, to_idx);
            let end = slice_between(source, &tokens, to_idx, by_idx.unwrap_or(do_idx));
            let step = by_idx
                .map(|i| slice_between(source, &tokens, i, do_idx))
                .unwrap_or_else(|| "1".to_owned());
            ctx.step(format!(
                "FOR: {var} varia de {start} até {end}, passo {step} (corpo analisado uma única vez)"
            ));
        }
        _ => ctx.step("FOR: laço sem cabeçalho reconhecível (corpo analisado uma única vez)"),
    }

    let body = match position(&tokens, do_idx, TokenKind::KwEndFor) {
        Some(end_idx) => slice_between(source, &tokens, do_idx, end_idx),
        None => slice_to_end(source, &tokens, do_idx),
    };
    execute_plain(ctx, &body);
}

/// Describes a WHILE header and scans the body once.
pub fn execute_while(ctx: &mut RunContext, source: &str) {
    let tokens = lex_significant(source);
    let Some(while_idx) = position(&tokens, 0, TokenKind::KwWhile) else {
        return;
    };
    let Some(do_idx) = position(&tokens, while_idx, TokenKind::KwDo) else {
        ctx.step("WHILE: laço sem cabeçalho reconhecível (DO ausente)");
        return;
    };

    let cond = slice_between(source, &tokens, while_idx, do_idx);
    ctx.step(format!(
        "WHILE: repete enquanto {cond} (corpo analisado uma única vez)"
    ));

    let body = match position(&tokens, do_idx, TokenKind::KwEndWhile) {
        Some(end_idx) => slice_between(source, &tokens, do_idx, end_idx),
        None => slice_to_end(source, &tokens, do_idx),
    };
    execute_plain(ctx, &body);
}

/// Describes a REPEAT terminator and scans the body once.
pub fn execute_repeat(ctx: &mut RunContext, source: &str) {
    let tokens = lex_significant(source);
    let Some(repeat_idx) = position(&tokens, 0, TokenKind::KwRepeat) else {
        return;
    };
    let until_idx = position(&tokens, repeat_idx, TokenKind::KwUntil);

    match until_idx {
        Some(until_idx) => {
            let cond = match position(&tokens, until_idx, TokenKind::KwEndRepeat) {
                Some(end_idx) => slice_between(source, &tokens, until_idx, end_idx),
                None => slice_to_end(source, &tokens, until_idx),
            };
            ctx.step(format!(
                "REPEAT: repete até que {cond} (corpo analisado uma única vez)"
            ));
        }
        None => ctx.step("REPEAT: laço sem condição UNTIL (corpo analisado uma única vez)"),
    }

    let body = match until_idx {
        Some(until_idx) => slice_between(source, &tokens, repeat_idx, until_idx),
        None => slice_to_end(source, &tokens, repeat_idx),
    };
    execute_plain(ctx, &body);
}

/// Reports the CASE selector's current value and scans the body once.
pub fn execute_case(ctx: &mut RunContext, source: &str) {
    let tokens = lex_significant(source);
    let Some(case_idx) = position(&tokens, 0, TokenKind::KwCase) else {
        return;
    };
    let Some(of_idx) = position(&tokens, case_idx, TokenKind::KwOf) else {
        ctx.step("CASE: seleção sem OF reconhecível");
        return;
    };

    let selector = slice_between(source, &tokens, case_idx, of_idx);
    let value = ctx.env.value_of(selector.trim_matches('"'));
    ctx.step(format!("CASE: seleção sobre {selector} (valor atual: {value})"));

    let body = match position(&tokens, of_idx, TokenKind::KwEndCase) {
        Some(end_idx) => slice_between(source, &tokens, of_idx, end_idx),
        None => slice_to_end(source, &tokens, of_idx),
    };
    execute_plain(ctx, &body);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{TagSnapshot, TagState};

    fn context() -> RunContext {
        let mut snapshot = TagSnapshot::new();
        snapshot.insert("Passo", TagState::of("3", "INT"));
        RunContext::seeded(&snapshot)
    }

    #[test]
    fn for_header_described_and_body_scanned_once() {
        let mut ctx = context();
        execute_for(&mut ctx, "FOR i := 1 TO 10 BY 2 DO Soma := Soma + i; END_FOR");
        assert_eq!(
            ctx.steps[0],
            "FOR: i varia de 1 até 10, passo 2 (corpo analisado uma única vez)"
        );
        // One pass only.
        assert_eq!(ctx.assignments.len(), 1);
        assert_eq!(ctx.assignments[0].variable_name, "Soma");
    }

    #[test]
    fn while_header_described() {
        let mut ctx = context();
        execute_while(&mut ctx, "WHILE Passo < 10 DO Passo := Passo + 1; END_WHILE");
        assert_eq!(
            ctx.steps[0],
            "WHILE: repete enquanto Passo < 10 (corpo analisado uma única vez)"
        );
        // Single pass from the cached value 3.
        assert_eq!(ctx.assignments[0].value, crate::value::Value::Number(4.0));
    }

    #[test]
    fn repeat_until_described() {
        let mut ctx = context();
        execute_repeat(&mut ctx, "REPEAT X := X + 1; UNTIL X > 5 END_REPEAT");
        assert_eq!(
            ctx.steps[0],
            "REPEAT: repete até que X > 5 (corpo analisado uma única vez)"
        );
        assert_eq!(ctx.assignments[0].variable_name, "X");
    }

    #[test]
    fn case_reports_selector_value() {
        let mut ctx = context();
        execute_case(&mut ctx, "CASE Passo OF 1: A := 1; 3: A := 3; END_CASE");
        assert_eq!(ctx.steps[0], "CASE: seleção sobre Passo (valor atual: 3)");
        // Body is scanned once; both labelled assignments run.
        assert_eq!(ctx.assignments.len(), 2);
    }
}
