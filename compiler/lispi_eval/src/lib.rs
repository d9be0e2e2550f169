//! Lispi Eval - tree-walking evaluator.
//!
//! # Architecture
//!
//! - [`Environment`]: persistent chain of single-binding frames. Extending
//!   returns a new environment and never touches the old one, which is what
//!   makes closure capture a plain pointer copy.
//! - [`Value`]: `Number`, `Bool`, or `Closure`. A closure pairs the lambda's
//!   parameter and body with the environment it was created in.
//! - [`Evaluator`]: walks an [`Expr`](lispi_syntax::Expr) against an
//!   environment, tracking recursion depth against [`EvalConfig::max_depth`].
//!
//! Every value and environment is `Send + Sync`, so independent expressions
//! can be evaluated on different threads.

mod environment;
mod error;
mod evaluator;
mod operators;
mod value;

pub use environment::Environment;
pub use error::{EvalError, EvalResult};
pub use evaluator::{EvalConfig, Evaluator};
pub use operators::evaluate_binary;
pub use value::{Closure, Value};
