//! Abstract syntax tree for lispi expressions.

use std::fmt;
use std::sync::Arc;

/// A variable name.
///
/// Cheap to clone: closures and environment frames share the same string.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Arc<str>);

impl Name {
    pub fn new(name: &str) -> Self {
        Name(Arc::from(name))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Binary operators: the four integer operations plus equality.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
}

impl BinaryOp {
    /// Source spelling of the operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "=",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An expression node.
///
/// Children are owned by their parent. The one exception is a lambda body,
/// which sits behind an `Arc` so that every closure created from the lambda
/// can point at it without copying the subtree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// Integer literal: `42`, `-2`
    Number(i64),
    /// Boolean literal: `#t`, `#f`
    Bool(bool),
    /// Variable reference: `x`
    Var(Name),
    /// `(op left right)`
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `(if cond then else)`
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    /// `(let ([name init]) body)`; `name` is not in scope inside `init`.
    Let {
        name: Name,
        init: Box<Expr>,
        body: Box<Expr>,
    },
    /// `(lambda (param) body)`
    Lambda { param: Name, body: Arc<Expr> },
    /// `(callee arg)`
    Call { callee: Box<Expr>, arg: Box<Expr> },
}

impl Expr {
    pub fn var(name: &str) -> Self {
        Expr::Var(Name::new(name))
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn if_else(cond: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::If {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn let_in(name: Name, init: Expr, body: Expr) -> Self {
        Expr::Let {
            name,
            init: Box::new(init),
            body: Box::new(body),
        }
    }

    pub fn lambda(param: Name, body: Expr) -> Self {
        Expr::Lambda {
            param,
            body: Arc::new(body),
        }
    }

    pub fn call(callee: Expr, arg: Expr) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            arg: Box::new(arg),
        }
    }
}

#[cfg(test)]
mod tests;
