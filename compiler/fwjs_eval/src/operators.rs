//! Binary operator implementations.
//!
//! Direct enum dispatch over the operand variants. Only `==` accepts any pair
//! of values; every other operator requires two integers.

use fwjs_ir::BinaryOp;

use crate::errors::{division_by_zero, invalid_operands, EvalResult};
use crate::Value;

/// Evaluate `left op right`.
#[allow(
    clippy::needless_pass_by_value,
    reason = "operands are owned by the caller's evaluation and consumed here"
)]
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    if op == BinaryOp::Eq {
        return Ok(Value::Bool(left == right));
    }
    match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        _ => Err(invalid_operands(op, &left, &right)),
    }
}

/// Integer arithmetic wraps on overflow; division truncates toward zero.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    let value = match op {
        BinaryOp::Add => Value::Int(a.wrapping_add(b)),
        BinaryOp::Sub => Value::Int(a.wrapping_sub(b)),
        BinaryOp::Mul => Value::Int(a.wrapping_mul(b)),
        BinaryOp::Div | BinaryOp::Mod if b == 0 => return Err(division_by_zero(op)),
        BinaryOp::Div => Value::Int(a.wrapping_div(b)),
        BinaryOp::Mod => Value::Int(a.wrapping_rem(b)),
        BinaryOp::Gt => Value::Bool(a > b),
        BinaryOp::GtEq => Value::Bool(a >= b),
        BinaryOp::Lt => Value::Bool(a < b),
        BinaryOp::LtEq => Value::Bool(a <= b),
        BinaryOp::Eq => Value::Bool(a == b),
    };
    Ok(value)
}
