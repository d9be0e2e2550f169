//! Run configuration.

use lispi_eval::EvalConfig;

/// How a program is run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Evaluate top-level expressions on a thread pool.
    pub parallel: bool,
    /// Settings for each expression's evaluator.
    pub eval: EvalConfig,
}

impl Config {
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Cap evaluation depth at `max_depth` nested steps.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.eval.max_depth = Some(max_depth);
        self
    }
}
