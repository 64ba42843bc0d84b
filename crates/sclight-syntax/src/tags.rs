//! Lexical tag-candidate extraction.
//!
//! Collects every name in a snippet that could refer to a PLC tag, in two
//! ordered passes: quoted tag references first (`"Tank Level"`, unwrapped),
//! then bare identifiers. Reserved words, instruction names, and elementary
//! type names are filtered out. Candidates are de-duplicated
//! case-insensitively in first-occurrence order; resolving them against a
//! tag snapshot is the analyzer's job.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::classify::{CounterKind, TimerKind};
use crate::lexer::{Token, TokenKind};

/// Identifiers that never name a tag: declaration keywords the lexer does
/// not tokenize, elementary type names, and standard instruction names.
const RESERVED_IDENTS: &[&str] = &[
    "VAR", "VAR_INPUT", "VAR_OUTPUT", "VAR_IN_OUT", "VAR_TEMP", "END_VAR", "RETURN", "EXIT",
    "CONTINUE", "BOOL", "SINT", "INT", "DINT", "LINT", "USINT", "UINT", "UDINT", "ULINT", "BYTE",
    "WORD", "DWORD", "LWORD", "REAL", "LREAL", "STRING", "WSTRING", "CHAR", "TIME", "DATE", "IN",
    "PT", "Q", "ET", "CU", "CD", "R", "LD", "PV", "CV", "QU", "QD",
];

fn is_reserved(name: &str) -> bool {
    let upper = name.to_ascii_uppercase();
    if TimerKind::from_name(&upper).is_some() || CounterKind::from_name(&upper).is_some() {
        return true;
    }
    RESERVED_IDENTS.contains(&upper.as_str())
}

/// Extracts tag candidates from the non-trivia tokens of a snippet.
///
/// `tokens` must come from [`crate::lexer::lex_significant`] over `source`.
#[must_use]
pub fn extract_candidates(tokens: &[Token], source: &str) -> Vec<SmolStr> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut candidates = Vec::new();

    let mut push = |name: &str, seen: &mut FxHashSet<String>| {
        let folded = name.to_ascii_lowercase();
        if seen.insert(folded) {
            candidates.push(SmolStr::new(name));
        }
    };

    // Pass 1: quoted tag references.
    for token in tokens {
        if token.kind == TokenKind::QuotedTag {
            let text = token.text(source);
            let name = text.trim_matches('"');
            if !name.is_empty() {
                push(name, &mut seen);
            }
        }
    }

    // Pass 2: bare identifiers, reserved words filtered.
    for token in tokens {
        if token.kind == TokenKind::Ident {
            let name = token.text(source);
            if !is_reserved(name) {
                push(name, &mut seen);
            }
        }
    }

    candidates
}
