//! `sclight-syntax` - lexical layer for the SCL logic analyzer.
//!
//! Provides the snippet lexer, the dominant-construct classifier, tag
//! candidate extraction, and line statistics. Everything here is purely
//! lexical; tag resolution and evaluation live in `sclight-analyzer`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Dominant-construct classification.
pub mod classify;
/// Snippet lexer and token kinds.
pub mod lexer;
/// Line-oriented source statistics.
pub mod stats;
/// Tag candidate extraction.
pub mod tags;

pub use classify::{classify, ConstructKind, CounterKind, TimerKind};
pub use lexer::{lex, lex_significant, Lexer, Token, TokenKind};
pub use stats::{source_stats, SourceStats};
pub use tags::extract_candidates;
