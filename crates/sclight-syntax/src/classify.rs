//! Structural classification of a snippet.
//!
//! A snippet is classified by its single dominant construct, using fixed
//! keyword priority over the non-trivia token stream: `IF` before loops,
//! loops before `CASE`, then named timer and counter instructions, and
//! finally a plain assignment sequence. Nested constructs inside the
//! dominant one are not classified independently; the matching executor
//! scans their bodies as plain assignments. This is a deliberate
//! simplification for a read-only diagnostic tool, not full SCL parsing.

use crate::lexer::{Token, TokenKind};

/// Timer instruction kinds recognized by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// `TON` - on-delay timer.
    OnDelay,
    /// `TOF` - off-delay timer.
    OffDelay,
    /// `TP` - pulse timer.
    Pulse,
    /// `TONR` - retentive on-delay timer.
    RetentiveOnDelay,
}

impl TimerKind {
    /// Matches an identifier against the known timer instruction names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "TON" => Some(Self::OnDelay),
            "TOF" => Some(Self::OffDelay),
            "TP" => Some(Self::Pulse),
            "TONR" => Some(Self::RetentiveOnDelay),
            _ => None,
        }
    }

    /// The instruction mnemonic.
    #[must_use]
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::OnDelay => "TON",
            Self::OffDelay => "TOF",
            Self::Pulse => "TP",
            Self::RetentiveOnDelay => "TONR",
        }
    }
}

/// Counter instruction kinds recognized by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterKind {
    /// `CTU` - up counter.
    Up,
    /// `CTD` - down counter.
    Down,
    /// `CTUD` - up/down counter.
    UpDown,
}

impl CounterKind {
    /// Matches an identifier against the known counter instruction names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "CTU" => Some(Self::Up),
            "CTD" => Some(Self::Down),
            "CTUD" => Some(Self::UpDown),
            _ => None,
        }
    }

    /// The instruction mnemonic.
    #[must_use]
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Up => "CTU",
            Self::Down => "CTD",
            Self::UpDown => "CTUD",
        }
    }
}

/// The dominant construct of a snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructKind {
    /// `IF .. THEN .. [ELSE ..] END_IF`
    If,
    /// `FOR .. TO .. DO .. END_FOR`
    For,
    /// `WHILE .. DO .. END_WHILE`
    While,
    /// `REPEAT .. UNTIL .. END_REPEAT`
    Repeat,
    /// `CASE .. OF .. END_CASE`
    Case,
    /// Named timer instruction call.
    Timer(TimerKind),
    /// Named counter instruction call.
    Counter(CounterKind),
    /// Plain assignment sequence.
    Plain,
}

impl ConstructKind {
    /// Stable lower-case label for serialized results.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::For => "for",
            Self::While => "while",
            Self::Repeat => "repeat",
            Self::Case => "case",
            Self::Timer(_) => "timer",
            Self::Counter(_) => "counter",
            Self::Plain => "plain",
        }
    }
}

/// Classifies a snippet from its non-trivia tokens.
///
/// `tokens` must come from [`crate::lexer::lex_significant`] over `source`;
/// comments and string literals never influence the outcome.
#[must_use]
pub fn classify(tokens: &[Token], source: &str) -> ConstructKind {
    let has = |kind: TokenKind| tokens.iter().any(|t| t.kind == kind);

    if has(TokenKind::KwIf) {
        return ConstructKind::If;
    }
    if has(TokenKind::KwFor) {
        return ConstructKind::For;
    }
    if has(TokenKind::KwWhile) {
        return ConstructKind::While;
    }
    if has(TokenKind::KwRepeat) {
        return ConstructKind::Repeat;
    }
    if has(TokenKind::KwCase) {
        return ConstructKind::Case;
    }

    for token in tokens {
        if token.kind != TokenKind::Ident {
            continue;
        }
        if let Some(timer) = TimerKind::from_name(token.text(source)) {
            return ConstructKind::Timer(timer);
        }
    }
    for token in tokens {
        if token.kind != TokenKind::Ident {
            continue;
        }
        if let Some(counter) = CounterKind::from_name(token.text(source)) {
            return ConstructKind::Counter(counter);
        }
    }

    ConstructKind::Plain
}
