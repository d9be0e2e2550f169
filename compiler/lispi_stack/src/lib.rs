//! Stack safety for the recursive parser and evaluator.
//!
//! Both the parser and the evaluator recurse once per nesting level of the
//! program, and self-applying closures recurse once per call. Two tools keep
//! that recursion from taking down the process:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand (via
//!   `stacker`) so deeply nested but finite programs run to completion.
//! - [`DepthLimit`] counts nesting levels and, when a maximum is configured,
//!   refuses to go past it, so runaway self-application becomes an error
//!   instead of unbounded memory growth.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: plain call; the runtime owns the stack.

use std::fmt;

/// Stack space that must remain before we allocate a new segment (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone is left.
///
/// ```text
/// fn eval(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(expr, env))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Counter of active recursion levels with an optional ceiling.
///
/// Without a ceiling only the native stack bounds recursion. Callers pair
/// every successful [`DepthLimit::enter`] with a [`DepthLimit::leave`] once
/// the nested work has finished, whether it succeeded or not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthLimit {
    depth: usize,
    max: Option<usize>,
}

/// Returned by [`DepthLimit::enter`] when the ceiling would be crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthExceeded {
    /// The ceiling that was hit.
    pub max: usize,
}

impl fmt::Display for DepthExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "recursion depth exceeded {}", self.max)
    }
}

impl DepthLimit {
    /// Create a counter at depth zero that allows up to `max` levels, or any
    /// number of levels when `max` is `None`.
    pub const fn new(max: Option<usize>) -> Self {
        DepthLimit { depth: 0, max }
    }

    /// Current number of active levels.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Enter one more level.
    ///
    /// The depth is left untouched on failure, so the caller must not call
    /// [`DepthLimit::leave`] for a rejected entry.
    #[inline]
    pub fn enter(&mut self) -> Result<(), DepthExceeded> {
        if let Some(max) = self.max {
            if self.depth >= max {
                return Err(DepthExceeded { max });
            }
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave the innermost level.
    #[inline]
    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
