//! Runtime errors.

use lispi_syntax::{BinaryOp, Name};
use thiserror::Error;

use crate::value::Value;

pub type EvalResult = Result<Value, EvalError>;

/// A failure while evaluating an expression.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("unbound variable `{0}`")]
    UnboundVariable(Name),

    #[error("cannot apply `{0}`: only procedures can be called")]
    ApplyNonFunction(Value),

    #[error("`{context}` expects a {expected}, found a {found}")]
    TypeMismatch {
        context: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("division of {dividend} by zero")]
    DivisionByZero { dividend: i64 },

    #[error("integer overflow in `({op} {left} {right})`")]
    IntegerOverflow { op: BinaryOp, left: i64, right: i64 },

    #[error("recursion depth exceeded {limit}")]
    RecursionLimit { limit: usize },
}

impl EvalError {
    /// Stable diagnostic code, `E6xxx` for runtime failures.
    pub fn code(&self) -> &'static str {
        match self {
            EvalError::UnboundVariable(_) => "E6001",
            EvalError::ApplyNonFunction(_) => "E6002",
            EvalError::TypeMismatch { .. } => "E6003",
            EvalError::DivisionByZero { .. } => "E6004",
            EvalError::IntegerOverflow { .. } => "E6005",
            EvalError::RecursionLimit { .. } => "E6006",
        }
    }
}
