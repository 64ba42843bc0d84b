//! Token definitions for the analyzed SCL subset.
//!
//! Covers the lexical surface the analyzer cares about: trivia (comments are
//! recognized so downstream passes can ignore them without a stripping
//! pre-pass), operators, the structural keywords, single-quoted ST string
//! literals, and double-quoted tag references. Everything else lexes as an
//! identifier, a literal, or `Error`.

use logos::Logos;

fn lex_block_comment_pascal(lex: &mut logos::Lexer<TokenKind>) -> bool {
    lex_nested_comment(lex, b"(*", b"*)")
}

fn lex_block_comment_c(lex: &mut logos::Lexer<TokenKind>) -> bool {
    lex_nested_comment(lex, b"/*", b"*/")
}

fn lex_nested_comment(lex: &mut logos::Lexer<TokenKind>, open: &[u8], close: &[u8]) -> bool {
    let mut depth = 1usize;
    let bytes = lex.remainder().as_bytes();
    let mut i = 0usize;

    while i + 1 < bytes.len() {
        if bytes[i] == open[0] && bytes[i + 1] == open[1] {
            depth += 1;
            i += 2;
            continue;
        }
        if bytes[i] == close[0] && bytes[i + 1] == close[1] {
            depth -= 1;
            i += 2;
            if depth == 0 {
                lex.bump(i);
                return true;
            }
            continue;
        }
        i += 1;
    }

    lex.bump(bytes.len());
    false
}

/// All token kinds in the SCL subset.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[derive(Default)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    /// Whitespace (spaces, tabs, newlines)
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// Single-line comment: // ...
    #[regex(r"//[^\r\n]*")]
    LineComment,

    /// Block comment: (* ... *) or /* ... */ (supports nesting).
    #[token("(*", lex_block_comment_pascal)]
    #[token("/*", lex_block_comment_c)]
    BlockComment,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    /// `;`
    #[token(";")]
    Semicolon,

    /// `:`
    #[token(":")]
    Colon,

    /// `,`
    #[token(",")]
    Comma,

    /// `.`
    #[token(".")]
    Dot,

    /// `..`
    #[token("..")]
    DotDot,

    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// `[`
    #[token("[")]
    LBracket,

    /// `]`
    #[token("]")]
    RBracket,

    // =========================================================================
    // OPERATORS
    // =========================================================================
    /// `:=`
    #[token(":=")]
    Assign,

    /// `=>` (output assignment in instruction calls)
    #[token("=>")]
    Arrow,

    /// `=`
    #[token("=")]
    Eq,

    /// `<>`
    #[token("<>")]
    Neq,

    /// `<`
    #[token("<")]
    Lt,

    /// `<=`
    #[token("<=")]
    LtEq,

    /// `>`
    #[token(">")]
    Gt,

    /// `>=`
    #[token(">=")]
    GtEq,

    /// `+`
    #[token("+")]
    Plus,

    /// `-`
    #[token("-")]
    Minus,

    /// `*`
    #[token("*")]
    Star,

    /// `/`
    #[token("/")]
    Slash,

    // =========================================================================
    // KEYWORDS - Selection
    // =========================================================================
    /// `IF`
    #[token("IF", ignore(ascii_case))]
    KwIf,

    /// `THEN`
    #[token("THEN", ignore(ascii_case))]
    KwThen,

    /// `ELSIF`
    #[token("ELSIF", ignore(ascii_case))]
    KwElsif,

    /// `ELSE`
    #[token("ELSE", ignore(ascii_case))]
    KwElse,

    /// `END_IF`
    #[token("END_IF", ignore(ascii_case))]
    KwEndIf,

    /// `CASE`
    #[token("CASE", ignore(ascii_case))]
    KwCase,

    /// `OF`
    #[token("OF", ignore(ascii_case))]
    KwOf,

    /// `END_CASE`
    #[token("END_CASE", ignore(ascii_case))]
    KwEndCase,

    // =========================================================================
    // KEYWORDS - Iteration
    // =========================================================================
    /// `FOR`
    #[token("FOR", ignore(ascii_case))]
    KwFor,

    /// `TO`
    #[token("TO", ignore(ascii_case))]
    KwTo,

    /// `BY`
    #[token("BY", ignore(ascii_case))]
    KwBy,

    /// `DO`
    #[token("DO", ignore(ascii_case))]
    KwDo,

    /// `END_FOR`
    #[token("END_FOR", ignore(ascii_case))]
    KwEndFor,

    /// `WHILE`
    #[token("WHILE", ignore(ascii_case))]
    KwWhile,

    /// `END_WHILE`
    #[token("END_WHILE", ignore(ascii_case))]
    KwEndWhile,

    /// `REPEAT`
    #[token("REPEAT", ignore(ascii_case))]
    KwRepeat,

    /// `UNTIL`
    #[token("UNTIL", ignore(ascii_case))]
    KwUntil,

    /// `END_REPEAT`
    #[token("END_REPEAT", ignore(ascii_case))]
    KwEndRepeat,

    // =========================================================================
    // KEYWORDS - Operators and literals
    // =========================================================================
    /// `AND`
    #[token("AND", ignore(ascii_case))]
    KwAnd,

    /// `OR`
    #[token("OR", ignore(ascii_case))]
    KwOr,

    /// `XOR`
    #[token("XOR", ignore(ascii_case))]
    KwXor,

    /// `NOT`
    #[token("NOT", ignore(ascii_case))]
    KwNot,

    /// `MOD`
    #[token("MOD", ignore(ascii_case))]
    KwMod,

    /// `TRUE`
    #[token("TRUE", ignore(ascii_case))]
    KwTrue,

    /// `FALSE`
    #[token("FALSE", ignore(ascii_case))]
    KwFalse,

    // =========================================================================
    // LITERALS
    // =========================================================================
    /// Integer literal, decimal or based (`16#FF`, `2#1010`).
    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"(2|8|16)#[0-9A-Fa-f_]+")]
    IntLiteral,

    /// Real literal with mandatory fraction digits.
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    RealLiteral,

    /// Duration literal (`T#5s`, `TIME#200ms`) as used in timer presets.
    #[regex(r"(?i:ltime|lt|time|t)#[0-9][0-9a-zA-Z_.]*")]
    TimeLiteral,

    /// ST string literal: single quotes, `$` escapes.
    #[regex(r"'(?:[^'$\r\n]|\$.)*'")]
    StringLiteral,

    /// Quoted tag reference: `"Tank level"` (Siemens tag-name syntax, not a
    /// string literal).
    #[regex(r#""[^"\r\n]*""#)]
    QuotedTag,

    /// Identifier.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    // =========================================================================
    // SPECIAL
    // =========================================================================
    /// Unrecognized character(s).
    #[default]
    Error,
}

impl TokenKind {
    /// Returns true for whitespace and comments.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    /// Returns true for comment trivia only.
    #[must_use]
    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }

    /// Returns true for reserved structural and operator keywords.
    #[must_use]
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::KwIf
                | TokenKind::KwThen
                | TokenKind::KwElsif
                | TokenKind::KwElse
                | TokenKind::KwEndIf
                | TokenKind::KwCase
                | TokenKind::KwOf
                | TokenKind::KwEndCase
                | TokenKind::KwFor
                | TokenKind::KwTo
                | TokenKind::KwBy
                | TokenKind::KwDo
                | TokenKind::KwEndFor
                | TokenKind::KwWhile
                | TokenKind::KwEndWhile
                | TokenKind::KwRepeat
                | TokenKind::KwUntil
                | TokenKind::KwEndRepeat
                | TokenKind::KwAnd
                | TokenKind::KwOr
                | TokenKind::KwXor
                | TokenKind::KwNot
                | TokenKind::KwMod
                | TokenKind::KwTrue
                | TokenKind::KwFalse
        )
    }
}
