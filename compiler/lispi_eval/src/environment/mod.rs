//! Persistent environments.
//!
//! An environment is a linked chain of frames, one binding per frame, shared
//! through `Arc`. `extend` allocates one frame pointing at the receiver and
//! leaves the receiver unchanged, so any closure that captured an environment
//! keeps seeing exactly the bindings that existed when it was created.

use std::fmt;
use std::iter;
use std::sync::Arc;

use lispi_syntax::Name;

use crate::value::Value;

/// An immutable name-to-value mapping.
///
/// Cloning is a reference-count bump.
#[derive(Clone, Default)]
pub struct Environment {
    head: Option<Arc<Frame>>,
}

struct Frame {
    name: Name,
    value: Value,
    parent: Environment,
}

impl Environment {
    /// The empty environment.
    pub fn new() -> Self {
        Environment::default()
    }

    /// A new environment with `name` bound to `value` in front of `self`.
    ///
    /// An existing binding for `name` is shadowed, not replaced.
    #[must_use]
    pub fn extend(&self, name: Name, value: Value) -> Environment {
        Environment {
            head: Some(Arc::new(Frame {
                name,
                value,
                parent: self.clone(),
            })),
        }
    }

    /// The innermost binding for `name`.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.frames()
            .find(|frame| frame.name.as_str() == name)
            .map(|frame| &frame.value)
    }

    fn frames(&self) -> impl Iterator<Item = &Frame> {
        iter::successors(self.head.as_deref(), |frame| frame.parent.head.as_deref())
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.frames().map(|frame| (&frame.name, &frame.value)))
            .finish()
    }
}
