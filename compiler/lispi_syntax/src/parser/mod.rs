//! Recursive-descent parser over split forms.
//!
//! A form is classified by its head part:
//!
//! | head              | shape                              |
//! |-------------------|------------------------------------|
//! | `let`             | `(let ([name init]) body)`         |
//! | `lambda`          | `(lambda (param) body)`            |
//! | `if`              | `(if cond then else)`              |
//! | `+ - * / =`       | `(op left right)`                  |
//! | anything else     | `(callee arg)`                     |
//!
//! Every construct checks its exact arity before recursing.

use lispi_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::ast::{BinaryOp, Expr, Name};
use crate::error::SyntaxError;
use crate::lexer::{classify, Atom, Keyword};
use crate::split::split_form;

const OPENERS: &[char] = &['(', '['];

/// Parse one expression.
pub fn parse(text: &str) -> Result<Expr, SyntaxError> {
    ensure_sufficient_stack(|| {
        let text = text.trim();
        if text.is_empty() {
            Err(SyntaxError::Empty)
        } else if text.starts_with(OPENERS) {
            parse_form(text)
        } else {
            parse_atom(text)
        }
    })
}

fn parse_atom(text: &str) -> Result<Expr, SyntaxError> {
    match classify(text)? {
        Atom::Bool(b) => Ok(Expr::Bool(b)),
        Atom::Int(n) => Ok(Expr::Number(n)),
        Atom::Ident(name) => Ok(Expr::var(name)),
        Atom::Keyword(_) | Atom::Operator(_) => Err(SyntaxError::ReservedWord(text.to_owned())),
    }
}

fn parse_form(form: &str) -> Result<Expr, SyntaxError> {
    trace!(form, "parse form");
    let parts = split_form(form)?;
    let Some((&head, rest)) = parts.split_first() else {
        return Err(SyntaxError::EmptyForm(form.to_owned()));
    };

    if head.starts_with(OPENERS) {
        return parse_call(form, &parts);
    }
    match classify(head)? {
        Atom::Keyword(Keyword::Let) => parse_let(form, rest),
        Atom::Keyword(Keyword::Lambda) => parse_lambda(form, rest),
        Atom::Keyword(Keyword::If) => parse_if(form, rest),
        Atom::Operator(op) => parse_binary(form, op, rest),
        Atom::Bool(_) | Atom::Int(_) | Atom::Ident(_) => parse_call(form, &parts),
    }
}

/// Take exactly `N` parts following a keyword or operator.
fn expect_parts<'a, const N: usize>(
    keyword: &'static str,
    form: &str,
    rest: &[&'a str],
) -> Result<[&'a str; N], SyntaxError> {
    <[&'a str; N]>::try_from(rest).map_err(|_| SyntaxError::Arity {
        keyword,
        expected: N,
        found: rest.len(),
        form: form.to_owned(),
    })
}

fn parse_let(form: &str, rest: &[&str]) -> Result<Expr, SyntaxError> {
    let [binding, body] = expect_parts(Keyword::Let.as_str(), form, rest)?;
    let (name, init) = parse_binding(binding)?;
    Ok(Expr::let_in(name, parse(init)?, parse(body)?))
}

/// `([name init])`, or the bare `[name init]`.
fn parse_binding(text: &str) -> Result<(Name, &str), SyntaxError> {
    let malformed = || SyntaxError::MalformedBinding(text.to_owned());

    let pair = if text.starts_with('(') {
        match split_form(text).map_err(|_| malformed())?.as_slice() {
            [pair] if pair.starts_with('[') => *pair,
            _ => return Err(malformed()),
        }
    } else if text.starts_with('[') {
        text
    } else {
        return Err(malformed());
    };

    match split_form(pair).map_err(|_| malformed())?.as_slice() {
        [name, init] => {
            let name = parse_ident(name).ok_or_else(malformed)?;
            Ok((name, *init))
        }
        _ => Err(malformed()),
    }
}

fn parse_lambda(form: &str, rest: &[&str]) -> Result<Expr, SyntaxError> {
    let [params, body] = expect_parts(Keyword::Lambda.as_str(), form, rest)?;
    let param = parse_parameter(params)?;
    Ok(Expr::lambda(param, parse(body)?))
}

/// `(name)`: exactly one identifier in parentheses.
fn parse_parameter(text: &str) -> Result<Name, SyntaxError> {
    let malformed = || SyntaxError::MalformedParameter(text.to_owned());
    if !text.starts_with('(') {
        return Err(malformed());
    }
    match split_form(text).map_err(|_| malformed())?.as_slice() {
        [name] => parse_ident(name).ok_or_else(malformed),
        _ => Err(malformed()),
    }
}

fn parse_ident(text: &str) -> Option<Name> {
    match classify(text) {
        Ok(Atom::Ident(name)) => Some(Name::new(name)),
        _ => None,
    }
}

fn parse_if(form: &str, rest: &[&str]) -> Result<Expr, SyntaxError> {
    let [cond, then_branch, else_branch] = expect_parts(Keyword::If.as_str(), form, rest)?;
    Ok(Expr::if_else(
        parse(cond)?,
        parse(then_branch)?,
        parse(else_branch)?,
    ))
}

fn parse_binary(form: &str, op: BinaryOp, rest: &[&str]) -> Result<Expr, SyntaxError> {
    let [left, right] = expect_parts(op.symbol(), form, rest)?;
    Ok(Expr::binary(op, parse(left)?, parse(right)?))
}

fn parse_call(form: &str, parts: &[&str]) -> Result<Expr, SyntaxError> {
    match parts {
        [callee, arg] => Ok(Expr::call(parse(callee)?, parse(arg)?)),
        _ => Err(SyntaxError::CallArity(form.to_owned())),
    }
}
