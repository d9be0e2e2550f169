//! Command-line argument handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::Config;

pub const USAGE: &str = "\
Usage: lispi <FILE> [options]

Evaluate every top-level expression in FILE and print the results.

Options:
  --parallel          Evaluate top-level expressions on a thread pool
  --max-depth=<N>     Maximum evaluation depth (default: unlimited)
  -h, --help          Print this help
  -V, --version       Print the version";

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run { path: PathBuf, config: Config },
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("missing file path")]
    MissingFile,
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid value '{0}' for --max-depth: expected a positive integer")]
    InvalidMaxDepth(String),
}

/// Parse arguments, excluding the program name.
///
/// `--help` and `--version` win over everything else on the line.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command, UsageError> {
    let mut config = Config::default();
    let mut path = None;

    for arg in args {
        let arg: &str = arg.as_ref();
        match arg {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--parallel" => config = config.with_parallel(true),
            _ => {
                if let Some(value) = arg.strip_prefix("--max-depth=") {
                    config = config.with_max_depth(parse_max_depth(value)?);
                } else if arg.starts_with('-') && arg != "-" {
                    return Err(UsageError::UnknownOption(arg.to_owned()));
                } else if path.is_none() {
                    path = Some(PathBuf::from(arg));
                } else {
                    return Err(UsageError::UnexpectedArgument(arg.to_owned()));
                }
            }
        }
    }

    let path = path.ok_or(UsageError::MissingFile)?;
    Ok(Command::Run { path, config })
}

fn parse_max_depth(value: &str) -> Result<usize, UsageError> {
    match value.parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(UsageError::InvalidMaxDepth(value.to_owned())),
    }
}
