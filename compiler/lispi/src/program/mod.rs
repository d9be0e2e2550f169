//! Program driver: split, parse and evaluate every top-level expression.

use std::path::Path;

use lispi_eval::{Environment, Evaluator, Value};
use lispi_syntax::{parse, split_program};
use rayon::prelude::*;
use tracing::{debug, debug_span, warn};

use crate::config::Config;
use crate::error::Error;

/// Worker stack size for parallel runs. Deep recursion still grows the stack
/// on demand; a larger start means fewer growth steps.
const WORKER_STACK_SIZE: usize = 16 * 1024 * 1024;

/// Runs programs with a fixed configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Interpreter {
    config: Config,
}

impl Interpreter {
    pub fn new(config: Config) -> Self {
        Interpreter { config }
    }

    /// Evaluate every top-level expression of `source`, in order.
    ///
    /// Each expression starts from an empty environment. The first failure
    /// in source order is returned and nothing after it is reported.
    pub fn run(&self, source: &str) -> Result<Vec<Value>, Error> {
        let forms = split_program(source)?;
        debug!(count = forms.len(), parallel = self.config.parallel, "run program");
        if self.config.parallel {
            self.run_parallel(&forms)
        } else {
            self.run_sequential(&forms)
        }
    }

    /// Parse and evaluate a single expression in an empty environment.
    pub fn evaluate(&self, text: &str) -> Result<Value, Error> {
        let expr = parse(text)?;
        let value = Evaluator::new(self.config.eval).eval(&expr, &Environment::new())?;
        Ok(value)
    }

    fn run_sequential(&self, forms: &[&str]) -> Result<Vec<Value>, Error> {
        forms
            .iter()
            .enumerate()
            .map(|(index, form)| self.run_form(index, form))
            .collect()
    }

    /// Evaluate the forms on a scoped pool, then pick the earliest failure so
    /// the outcome is the one a sequential run would report.
    fn run_parallel(&self, forms: &[&str]) -> Result<Vec<Value>, Error> {
        let outcomes = rayon::ThreadPoolBuilder::new()
            .stack_size(WORKER_STACK_SIZE)
            .build_scoped(rayon::ThreadBuilder::run, |pool| {
                pool.install(|| {
                    forms
                        .par_iter()
                        .enumerate()
                        .map(|(index, form)| self.run_form(index, form))
                        .collect::<Vec<_>>()
                })
            });

        match outcomes {
            Ok(outcomes) => outcomes.into_iter().collect(),
            Err(e) => {
                warn!("failed to create thread pool ({e}), running sequentially");
                self.run_sequential(forms)
            }
        }
    }

    fn run_form(&self, index: usize, form: &str) -> Result<Value, Error> {
        let _span = debug_span!("expr", index).entered();
        match self.evaluate(form) {
            Ok(value) => {
                debug!(result = %value, "evaluated");
                Ok(value)
            }
            Err(e) => {
                debug!(error = %e, "failed");
                Err(e)
            }
        }
    }
}

/// Run `source` with the default configuration.
pub fn interpret(source: &str) -> Result<Vec<Value>, Error> {
    Interpreter::default().run(source)
}

/// Evaluate one expression with the default configuration.
pub fn evaluate(text: &str) -> Result<Value, Error> {
    Interpreter::default().evaluate(text)
}

/// Read `path` as UTF-8 and run it.
pub fn run_file(path: &Path, config: Config) -> Result<Vec<Value>, Error> {
    let source = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Interpreter::new(config).run(&source)
}

/// Render results the way the command line prints them: `[3, #t]`.
pub fn format_results(values: &[Value]) -> String {
    let items: Vec<String> = values.iter().map(Value::to_string).collect();
    format!("[{}]", items.join(", "))
}
