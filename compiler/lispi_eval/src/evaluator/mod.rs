//! Tree-walking evaluator.

use std::sync::Arc;

use lispi_stack::{ensure_sufficient_stack, DepthLimit};
use lispi_syntax::Expr;
use tracing::trace;

use crate::environment::Environment;
use crate::error::{EvalError, EvalResult};
use crate::operators::evaluate_binary;
use crate::value::{Closure, Value};

/// Evaluator settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of nested evaluation steps before giving up with
    /// [`EvalError::RecursionLimit`]. `None` leaves recursion bounded only by
    /// the native stack, which grows on demand.
    pub max_depth: Option<usize>,
}

/// Evaluates expressions against environments.
///
/// The evaluator itself only carries the depth counter; all bindings live in
/// the [`Environment`] passed to [`Evaluator::eval`].
#[derive(Debug)]
pub struct Evaluator {
    depth: DepthLimit,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new(EvalConfig::default())
    }
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        Evaluator {
            depth: DepthLimit::new(config.max_depth),
        }
    }

    /// Evaluate `expr` in `env`.
    ///
    /// On error the depth counter is restored, so the evaluator can be reused.
    pub fn eval(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        self.depth
            .enter()
            .map_err(|exceeded| EvalError::RecursionLimit {
                limit: exceeded.max,
            })?;
        let result = ensure_sufficient_stack(|| self.eval_inner(expr, env));
        self.depth.leave();
        result
    }

    fn eval_inner(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Var(name) => env
                .lookup(name.as_str())
                .cloned()
                .ok_or_else(|| EvalError::UnboundVariable(name.clone())),
            Expr::Binary { op, left, right } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                evaluate_binary(left, right, *op)
            }
            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => match self.eval(cond, env)? {
                Value::Bool(true) => self.eval(then_branch, env),
                Value::Bool(false) => self.eval(else_branch, env),
                other => Err(EvalError::TypeMismatch {
                    context: "if",
                    expected: "boolean",
                    found: other.type_name(),
                }),
            },
            Expr::Let { name, init, body } => {
                let bound = self.eval(init, env)?;
                self.eval(body, &env.extend(name.clone(), bound))
            }
            Expr::Lambda { param, body } => Ok(Value::closure(
                env.clone(),
                param.clone(),
                Arc::clone(body),
            )),
            Expr::Call { callee, arg } => {
                let closure = match self.eval(callee, env)? {
                    Value::Closure(closure) => closure,
                    other => return Err(EvalError::ApplyNonFunction(other)),
                };
                let arg = self.eval(arg, env)?;
                self.apply(&closure, arg)
            }
        }
    }

    fn apply(&mut self, closure: &Closure, arg: Value) -> EvalResult {
        trace!(
            param = %closure.param,
            arg = %arg,
            depth = self.depth.depth(),
            "apply closure"
        );
        let env = closure.env.extend(closure.param.clone(), arg);
        self.eval(&closure.body, &env)
    }
}
