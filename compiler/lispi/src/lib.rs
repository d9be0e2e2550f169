//! Lispi - a minimal Lisp evaluator.
//!
//! A program is a sequence of independent top-level expressions. Each one is
//! parsed and evaluated against its own empty environment; the run yields the
//! values in source order or stops at the first failure.
//!
//! ```text
//! source ──split_program──▶ forms ──parse──▶ Expr ──Evaluator──▶ Value
//! ```
//!
//! The phases live in their own crates:
//!
//! - `lispi_syntax`: splitter, atom lexer and parser
//! - `lispi_eval`: values, environments and the evaluator
//! - `lispi_stack`: stack growth and depth limiting shared by both
//!
//! This crate ties them together and adds the command-line front end.

pub mod cli;
mod config;
mod error;
mod program;
mod tracing_setup;

pub use config::Config;
pub use error::Error;
pub use program::{evaluate, format_results, interpret, run_file, Interpreter};
pub use tracing_setup::init_tracing;

pub use lispi_eval::{EvalConfig, EvalError, Value};
pub use lispi_syntax::SyntaxError;
