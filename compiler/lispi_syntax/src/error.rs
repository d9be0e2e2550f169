//! Syntax errors raised while splitting and parsing.

use thiserror::Error;

/// A malformed program or expression.
///
/// Every variant carries the offending fragment of source text so the
/// caller can show the user what was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("expected an expression, found nothing")]
    Empty,

    #[error("unbalanced brackets in `{0}`")]
    Unbalanced(String),

    #[error("unexpected `{trailing}` after the end of `{form}`")]
    TrailingInput { form: String, trailing: String },

    #[error("empty form `{0}`")]
    EmptyForm(String),

    #[error("`{0}` is not a binding, expected `([name expr])`")]
    MalformedBinding(String),

    #[error("`{0}` is not a parameter list, expected `(name)`")]
    MalformedParameter(String),

    #[error("`{keyword}` takes {expected} operands, found {found} in `{form}`")]
    Arity {
        keyword: &'static str,
        expected: usize,
        found: usize,
        form: String,
    },

    #[error("a call takes exactly one argument: `{0}`")]
    CallArity(String),

    #[error("unrecognized token `{0}`")]
    UnrecognizedToken(String),

    #[error("integer literal `{0}` does not fit in 64 bits")]
    IntegerOutOfRange(String),

    #[error("`{0}` is reserved and cannot be used as a value")]
    ReservedWord(String),
}

impl SyntaxError {
    /// Stable diagnostic code: `E0xxx` for lexical errors, `E1xxx` for
    /// structural ones.
    pub fn code(&self) -> &'static str {
        match self {
            SyntaxError::UnrecognizedToken(_) => "E0002",
            SyntaxError::IntegerOutOfRange(_) => "E0003",
            SyntaxError::Empty => "E1002",
            SyntaxError::Unbalanced(_) => "E1003",
            SyntaxError::TrailingInput { .. } => "E1004",
            SyntaxError::EmptyForm(_) => "E1005",
            SyntaxError::MalformedBinding(_) => "E1006",
            SyntaxError::MalformedParameter(_) => "E1007",
            SyntaxError::Arity { .. } => "E1008",
            SyntaxError::CallArity(_) => "E1009",
            SyntaxError::ReservedWord(_) => "E1010",
        }
    }
}
