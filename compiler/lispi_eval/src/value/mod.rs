//! Runtime values.

use std::fmt;
use std::sync::Arc;

use lispi_syntax::{Expr, Name};

use crate::environment::Environment;

/// Result of evaluating an expression.
///
/// Closures are compared by identity: two values are equal only when they
/// came from the same evaluation of a `lambda` form.
#[derive(Clone)]
pub enum Value {
    Number(i64),
    Bool(bool),
    Closure(Arc<Closure>),
}

/// A procedure value: one parameter, a body and the environment in effect
/// where the `lambda` was evaluated.
pub struct Closure {
    pub env: Environment,
    pub param: Name,
    pub body: Arc<Expr>,
}

impl Value {
    pub fn closure(env: Environment, param: Name, body: Arc<Expr>) -> Self {
        Value::Closure(Arc::new(Closure { env, param, body }))
    }

    /// Kind name used in type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Closure(_) => "procedure",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Closure(a), Value::Closure(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Closure(closure) => write!(f, "Closure({})", closure.param),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(true) => f.write_str("#t"),
            Value::Bool(false) => f.write_str("#f"),
            Value::Closure(closure) => write!(f, "#<procedure ({})>", closure.param),
        }
    }
}

// The captured environment is left out: it can be arbitrarily large.
impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("param", &self.param)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
