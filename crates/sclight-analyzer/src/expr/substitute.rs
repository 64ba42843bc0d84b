use smol_str::SmolStr;

use sclight_syntax::{Lexer, TokenKind};

use crate::env::LocalEnv;
use crate::value::Value;

/// Substitutes bound names in an expression with literal value text.
///
/// Token-driven rather than textual search-and-replace: every quoted tag
/// reference and every bound identifier is swapped for the literal form of
/// its current value, and a name can never collide with a longer name that
/// merely contains it. Unbound names are left in place; they parse as
/// [`super::ast::Expr::Name`] and evaluate to 0.
#[must_use]
pub fn substitute(expr: &str, env: &LocalEnv) -> String {
    let mut out = String::with_capacity(expr.len());
    for token in Lexer::new(expr) {
        let text = token.text(expr);
        match token.kind {
            TokenKind::QuotedTag => {
                let name = text.trim_matches('"');
                match env.lookup(name) {
                    Some(binding) => out.push_str(&literal_text(&binding.value)),
                    None => out.push_str(text),
                }
            }
            TokenKind::Ident => match env.lookup(text) {
                Some(binding) => out.push_str(&literal_text(&binding.value)),
                None => out.push_str(text),
            },
            _ => out.push_str(text),
        }
    }
    out
}

/// Literal source form of a value: booleans as `TRUE`/`FALSE`, numbers as
/// numeric literals, text as a single-quoted ST string literal.
#[must_use]
pub fn literal_text(value: &Value) -> SmolStr {
    match value {
        Value::Bool(true) => SmolStr::new_static("TRUE"),
        Value::Bool(false) => SmolStr::new_static("FALSE"),
        Value::Number(_) => SmolStr::new(value.to_string()),
        Value::Text(text) => {
            let mut quoted = String::with_capacity(text.len() + 2);
            quoted.push('\'');
            for ch in text.chars() {
                match ch {
                    '\'' => quoted.push_str("$'"),
                    '$' => quoted.push_str("$$"),
                    _ => quoted.push(ch),
                }
            }
            quoted.push('\'');
            SmolStr::new(quoted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{BindingOrigin, BindingType};
    use crate::value::{DataType, InferredType};

    fn env() -> LocalEnv {
        let mut env = LocalEnv::new();
        env.insert(
            "Sensor",
            Value::Bool(true),
            BindingType::Declared(DataType::Bool),
            BindingOrigin::Cache,
        );
        env.insert(
            "Sensor_1",
            Value::Bool(false),
            BindingType::Declared(DataType::Bool),
            BindingOrigin::Cache,
        );
        env.insert(
            "Nivel",
            Value::Number(7.5),
            BindingType::Declared(DataType::Real),
            BindingOrigin::Cache,
        );
        env.insert(
            "Msg",
            Value::Text("ok".into()),
            BindingType::Inferred(InferredType::Unknown),
            BindingOrigin::Computed,
        );
        env
    }

    #[test]
    fn no_partial_name_collision() {
        // "Sensor_1" must not be clobbered by the shorter "Sensor".
        assert_eq!(
            substitute("Sensor AND Sensor_1", &env()),
            "TRUE AND FALSE"
        );
    }

    #[test]
    fn quoted_tags_substituted() {
        let mut env = env();
        env.insert(
            "Tank Level",
            Value::Number(3.0),
            BindingType::Declared(DataType::Int),
            BindingOrigin::Cache,
        );
        assert_eq!(substitute(r#""Tank Level" + Nivel"#, &env), "3 + 7.5");
    }

    #[test]
    fn unbound_names_left_alone() {
        assert_eq!(substitute("Fantasma + 1", &env()), "Fantasma + 1");
    }

    #[test]
    fn text_becomes_string_literal() {
        assert_eq!(substitute("Msg", &env()), "'ok'");
        assert_eq!(literal_text(&Value::Text("d'agua".into())), "'d$'agua'");
    }

    #[test]
    fn keywords_never_substituted() {
        let mut env = LocalEnv::new();
        env.insert(
            "AND",
            Value::Bool(true),
            BindingType::Inferred(InferredType::Bool),
            BindingOrigin::Computed,
        );
        // AND lexes as a keyword, not an identifier.
        assert_eq!(substitute("x AND y", &env), "x AND y");
    }
}
