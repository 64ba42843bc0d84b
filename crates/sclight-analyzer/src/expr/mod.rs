//! Expression substitution, parsing, and evaluation.
//!
//! The pipeline behind [`evaluate`]: substitute bound names with literal
//! value text, parse the substituted text into an explicit AST, tree-walk
//! it over [`crate::value::Value`]. Any failure along the way collapses to
//! `None` ("no value"); nothing here panics or propagates an error to the
//! analysis entry point.

#![allow(missing_docs)]

mod ast;
mod eval;
mod parser;
mod substitute;

pub use ast::{BinaryOp, Expr, UnaryOp};
pub use eval::eval_expr;
pub use parser::parse;
pub use substitute::{literal_text, substitute};

use crate::env::LocalEnv;
use crate::value::Value;

/// Evaluates an expression against the environment.
///
/// Returns `None` when the expression does not parse after substitution.
#[must_use]
pub fn evaluate(expr: &str, env: &LocalEnv) -> Option<Value> {
    let substituted = substitute(expr, env);
    match parse(&substituted) {
        Ok(ast) => Some(eval_expr(env, &ast)),
        Err(err) => {
            tracing::debug!(expr, %err, "expression discarded");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{BindingOrigin, BindingType};
    use crate::value::DataType;

    fn env() -> LocalEnv {
        let mut env = LocalEnv::new();
        env.insert(
            "Sensor_1",
            Value::Bool(true),
            BindingType::Declared(DataType::Bool),
            BindingOrigin::Cache,
        );
        env.insert(
            "Falha",
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
        env
    }

    #[test]
    fn full_pipeline() {
        let value = evaluate("Sensor_1 AND NOT Falha", &env()).unwrap();
        assert_eq!(value, Value::Bool(true));
    }

    #[test]
    fn numeric_pipeline() {
        let value = evaluate("Nivel * 2 + 1", &env()).unwrap();
        assert_eq!(value, Value::Number(16.0));
    }

    #[test]
    fn malformed_is_no_value() {
        assert_eq!(evaluate("1 + * 2", &env()), None);
        assert_eq!(evaluate("", &env()), None);
    }
}
