//! Lispi Syntax - text to abstract syntax tree.
//!
//! The front end is deliberately text-driven. A form is never tokenized as a
//! whole; instead:
//!
//! 1. the **splitter** ([`split_form`]) cuts one bracketed form into its
//!    immediate sub-expression strings, keeping nested forms intact,
//! 2. the **atom lexer** ([`classify`]) turns bracket-free text into one of a
//!    small fixed set of tokens,
//! 3. the **parser** ([`parse`]) classifies a form by its head and recurses
//!    into the parts with an explicit arity check per construct.
//!
//! [`split_program`] applies the same depth tracking to a whole source file
//! and yields one string per top-level expression.
//!
//! ```text
//! (let ([a 3]) (+ a -2))
//!   split_form -> ["let", "([a 3])", "(+ a -2)"]
//!   classify("let") -> Atom::Keyword(Keyword::Let)
//! ```

mod ast;
mod error;
mod lexer;
mod parser;
mod split;

pub use ast::{BinaryOp, Expr, Name};
pub use error::SyntaxError;
pub use lexer::{classify, Atom, Keyword};
pub use parser::parse;
pub use split::{split_form, split_program};
