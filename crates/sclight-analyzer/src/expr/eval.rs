use crate::env::LocalEnv;
use crate::value::Value;

use super::ast::{BinaryOp, Expr, UnaryOp};

/// Evaluates an AST over the environment.
///
/// Total: every operator coerces its operands, so evaluation cannot fail.
/// Anomalies show up as non-finite numbers (division by zero gives signed
/// infinity, `0/0` and `MOD 0` give NaN) and are diagnosed by the caller.
#[must_use]
pub fn eval_expr(env: &LocalEnv, expr: &Expr) -> Value {
    match expr {
        Expr::Literal(value) => value.clone(),
        // Names surviving substitution are unbound; they default to 0.
        Expr::Name(name) => env.value_of(name),
        Expr::Unary { op, expr } => apply_unary(*op, eval_expr(env, expr)),
        Expr::Binary { op, left, right } => {
            let left = eval_expr(env, left);
            let right = eval_expr(env, right);
            apply_binary(*op, &left, &right)
        }
    }
}

fn apply_unary(op: UnaryOp, value: Value) -> Value {
    match op {
        UnaryOp::Not => Value::Bool(!value.is_truthy()),
        UnaryOp::Neg => Value::Number(-value.as_number()),
        UnaryOp::Pos => Value::Number(value.as_number()),
    }
}

fn apply_binary(op: BinaryOp, left: &Value, right: &Value) -> Value {
    match op {
        BinaryOp::And => Value::Bool(left.is_truthy() && right.is_truthy()),
        BinaryOp::Or => Value::Bool(left.is_truthy() || right.is_truthy()),
        BinaryOp::Eq => Value::Bool(values_equal(left, right)),
        BinaryOp::Ne => Value::Bool(!values_equal(left, right)),
        BinaryOp::Lt => Value::Bool(left.as_number() < right.as_number()),
        BinaryOp::Le => Value::Bool(left.as_number() <= right.as_number()),
        BinaryOp::Gt => Value::Bool(left.as_number() > right.as_number()),
        BinaryOp::Ge => Value::Bool(left.as_number() >= right.as_number()),
        BinaryOp::Add => match (left, right) {
            // Text concatenation when either side is text.
            (Value::Text(_), _) | (_, Value::Text(_)) => {
                Value::Text(format!("{left}{right}").into())
            }
            _ => Value::Number(left.as_number() + right.as_number()),
        },
        BinaryOp::Sub => Value::Number(left.as_number() - right.as_number()),
        BinaryOp::Mul => Value::Number(left.as_number() * right.as_number()),
        BinaryOp::Div => Value::Number(left.as_number() / right.as_number()),
        BinaryOp::Mod => Value::Number(left.as_number() % right.as_number()),
    }
}

fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Text(a), Value::Text(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        _ => left.as_number() == right.as_number(),
    }
}
