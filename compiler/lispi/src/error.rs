//! Errors reported by the driver.

use std::io;
use std::path::PathBuf;

use lispi_eval::EvalError;
use lispi_syntax::SyntaxError;
use thiserror::Error;

/// Anything that can stop a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// Diagnostic code, if the error comes from the language rather than
    /// the host.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Error::Read { .. } => None,
            Error::Syntax(e) => Some(e.code()),
            Error::Eval(e) => Some(e.code()),
        }
    }
}
