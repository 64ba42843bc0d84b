use smol_str::SmolStr;

use sclight_syntax::{lex_significant, Token, TokenKind};

use crate::error::EvalError;
use crate::value::Value;

use super::ast::{BinaryOp, Expr, UnaryOp};

/// Parses a substituted expression into an AST.
///
/// Recursive descent with the ST precedence ladder, loosest first:
/// OR < AND < equality (`=`, `<>`, `XOR`) < relational (`<`, `<=`, `>`,
/// `>=`) < additive < multiplicative (`*`, `/`, `MOD`) < unary
/// (`NOT`, `-`, `+`). `:=`, `<=` and `>=` are distinct tokens and can never
/// be misread as equality.
pub fn parse(source: &str) -> Result<Expr, EvalError> {
    let tokens = lex_significant(source);
    let mut parser = Parser {
        source,
        tokens: &tokens,
        pos: 0,
    };
    if parser.peek().is_none() {
        return Err(EvalError::Empty);
    }
    let expr = parser.or_expr()?;
    if let Some(token) = parser.peek() {
        return Err(EvalError::TrailingInput(SmolStr::new(token.text(source))));
    }
    Ok(expr)
}

struct Parser<'src> {
    source: &'src str,
    tokens: &'src [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).copied()?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek().map(|t| t.kind) == Some(kind) {
            self.pos += 1;
            return true;
        }
        false
    }

    fn or_expr(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.and_expr()?;
        while self.eat(TokenKind::KwOr) {
            let right = self.and_expr()?;
            left = binary(BinaryOp::Or, left, right);
        }
        Ok(left)
    }

    fn and_expr(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.equality_expr()?;
        while self.eat(TokenKind::KwAnd) {
            let right = self.equality_expr()?;
            left = binary(BinaryOp::And, left, right);
        }
        Ok(left)
    }

    fn equality_expr(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.relational_expr()?;
        loop {
            let op = match self.peek().map(|t| t.kind) {
                Some(TokenKind::Eq) => BinaryOp::Eq,
                // XOR on booleans is inequality.
                Some(TokenKind::Neq | TokenKind::KwXor) => BinaryOp::Ne,
                _ => break,
            };
            self.pos += 1;
            let right = self.relational_expr()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn relational_expr(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.additive_expr()?;
        loop {
            let op = match self.peek().map(|t| t.kind) {
                Some(TokenKind::Lt) => BinaryOp::Lt,
                Some(TokenKind::LtEq) => BinaryOp::Le,
                Some(TokenKind::Gt) => BinaryOp::Gt,
                Some(TokenKind::GtEq) => BinaryOp::Ge,
                _ => break,
            };
            self.pos += 1;
            let right = self.additive_expr()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn additive_expr(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.multiplicative_expr()?;
        loop {
            let op = match self.peek().map(|t| t.kind) {
                Some(TokenKind::Plus) => BinaryOp::Add,
                Some(TokenKind::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let right = self.multiplicative_expr()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn multiplicative_expr(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.unary_expr()?;
        loop {
            let op = match self.peek().map(|t| t.kind) {
                Some(TokenKind::Star) => BinaryOp::Mul,
                Some(TokenKind::Slash) => BinaryOp::Div,
                Some(TokenKind::KwMod) => BinaryOp::Mod,
                _ => break,
            };
            self.pos += 1;
            let right = self.unary_expr()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn unary_expr(&mut self) -> Result<Expr, EvalError> {
        let op = match self.peek().map(|t| t.kind) {
            Some(TokenKind::KwNot) => Some(UnaryOp::Not),
            Some(TokenKind::Minus) => Some(UnaryOp::Neg),
            Some(TokenKind::Plus) => Some(UnaryOp::Pos),
            _ => None,
        };
        if let Some(op) = op {
            self.pos += 1;
            let expr = self.unary_expr()?;
            return Ok(Expr::Unary {
                op,
                expr: Box::new(expr),
            });
        }
        self.primary_expr()
    }

    fn primary_expr(&mut self) -> Result<Expr, EvalError> {
        let Some(token) = self.bump() else {
            return Err(EvalError::UnexpectedEnd);
        };
        let text = token.text(self.source);
        match token.kind {
            TokenKind::KwTrue => Ok(Expr::Literal(Value::Bool(true))),
            TokenKind::KwFalse => Ok(Expr::Literal(Value::Bool(false))),
            TokenKind::IntLiteral => parse_int(text).map(|n| Expr::Literal(Value::Number(n))),
            TokenKind::RealLiteral => {
                let cleaned = text.replace('_', "");
                cleaned
                    .parse::<f64>()
                    .map(|n| Expr::Literal(Value::Number(n)))
                    .map_err(|_| EvalError::InvalidNumber(SmolStr::new(text)))
            }
            TokenKind::StringLiteral => Ok(Expr::Literal(Value::Text(unescape_string(text)))),
            // Duration literals are carried as text; timers are described,
            // never simulated.
            TokenKind::TimeLiteral => Ok(Expr::Literal(Value::Text(SmolStr::new(text)))),
            TokenKind::Ident => Ok(Expr::Name(SmolStr::new(text))),
            // An unresolved quoted tag reference behaves like an unbound name.
            TokenKind::QuotedTag => Ok(Expr::Name(SmolStr::new(text.trim_matches('"')))),
            TokenKind::LParen => {
                let expr = self.or_expr()?;
                if !self.eat(TokenKind::RParen) {
                    return Err(EvalError::UnexpectedEnd);
                }
                Ok(expr)
            }
            _ => Err(EvalError::UnexpectedToken(SmolStr::new(text))),
        }
    }
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

fn parse_int(text: &str) -> Result<f64, EvalError> {
    let cleaned = text.replace('_', "");
    let parsed = match cleaned.split_once('#') {
        Some((base, digits)) => {
            let radix = match base {
                "2" => 2,
                "8" => 8,
                "16" => 16,
                _ => return Err(EvalError::InvalidNumber(SmolStr::new(text))),
            };
            i64::from_str_radix(digits, radix)
        }
        None => cleaned.parse::<i64>(),
    };
    parsed
        .map(|n| n as f64)
        .map_err(|_| EvalError::InvalidNumber(SmolStr::new(text)))
}

fn unescape_string(text: &str) -> SmolStr {
    let inner = text.trim_matches('\'');
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '$' {
            match chars.next() {
                Some('$') => out.push('$'),
                Some('\'') => out.push('\''),
                Some('N' | 'n') => out.push('\n'),
                Some('T' | 't') => out.push('\t'),
                Some(other) => out.push(other),
                None => {}
            }
        } else {
            out.push(ch);
        }
    }
    SmolStr::new(out)
}
