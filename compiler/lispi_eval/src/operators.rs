//! Binary operator implementations for the evaluator.

use lispi_syntax::BinaryOp;

use crate::error::{EvalError, EvalResult};
use crate::value::Value;

/// Apply `op` to two already evaluated operands.
///
/// `=` accepts any pair of values. The arithmetic operators require two
/// numbers and fail on overflow instead of wrapping.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    let checked: fn(i64, i64) -> Option<i64> = match op {
        BinaryOp::Eq => return Ok(Value::Bool(left == right)),
        BinaryOp::Add => i64::checked_add,
        BinaryOp::Sub => i64::checked_sub,
        BinaryOp::Mul => i64::checked_mul,
        BinaryOp::Div => i64::checked_div,
    };

    let (a, b) = match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => (*a, *b),
        (Value::Number(_), other) | (other, _) => {
            return Err(EvalError::TypeMismatch {
                context: op.symbol(),
                expected: "number",
                found: other.type_name(),
            })
        }
    };

    if op == BinaryOp::Div && b == 0 {
        return Err(EvalError::DivisionByZero { dividend: a });
    }
    checked(a, b)
        .map(Value::Number)
        .ok_or(EvalError::IntegerOverflow { op, left: a, right: b })
}
