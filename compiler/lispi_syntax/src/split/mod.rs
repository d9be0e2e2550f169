//! Bracket-aware splitting of source text.
//!
//! `(` and `[` are interchangeable for depth counting, as are `)` and `]`.
//! Parts are returned as slices of the input, so nested forms come back
//! byte-for-byte as they were written and reparse identically.

use crate::error::SyntaxError;

#[inline]
fn is_open(c: char) -> bool {
    matches!(c, '(' | '[')
}

#[inline]
fn is_close(c: char) -> bool {
    matches!(c, ')' | ']')
}

#[inline]
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Split one form into its immediate sub-expressions.
///
/// `(+ 1 (* 2 3))` yields `["+", "1", "(* 2 3)"]`. Whitespace separates parts
/// only at depth 1; runs of it never produce empty parts. A nested form is
/// always a part of its own, whitespace or not. A bare atom is returned as
/// its own single part.
pub fn split_form(text: &str) -> Result<Vec<&str>, SyntaxError> {
    let form = text.trim();
    if form.is_empty() {
        return Err(SyntaxError::Empty);
    }
    if !form.starts_with(is_open) {
        return split_atom(form);
    }

    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut part_start: Option<usize> = None;

    for (i, c) in form.char_indices() {
        if is_open(c) {
            if depth == 1 {
                // A nested form starts a new part even without whitespace.
                if let Some(start) = part_start.take() {
                    parts.push(&form[start..i]);
                }
                part_start = Some(i);
            }
            depth += 1;
        } else if is_close(c) {
            // The form starts with an opener, so depth is at least 1 here.
            depth -= 1;
            if depth == 1 {
                if let Some(start) = part_start.take() {
                    parts.push(&form[start..i + c.len_utf8()]);
                }
            } else if depth == 0 {
                if let Some(start) = part_start.take() {
                    parts.push(&form[start..i]);
                }
                let end = i + c.len_utf8();
                let rest = form[end..].trim_start();
                if !rest.is_empty() {
                    return Err(SyntaxError::TrailingInput {
                        form: form[..end].to_owned(),
                        trailing: rest.to_owned(),
                    });
                }
                return Ok(parts);
            }
        } else if depth == 1 && is_separator(c) {
            if let Some(start) = part_start.take() {
                parts.push(&form[start..i]);
            }
        } else if part_start.is_none() {
            part_start = Some(i);
        }
    }

    Err(SyntaxError::Unbalanced(form.to_owned()))
}

fn split_atom(atom: &str) -> Result<Vec<&str>, SyntaxError> {
    match atom.find(|c: char| is_open(c) || is_close(c) || is_separator(c)) {
        None => Ok(vec![atom]),
        Some(at) if atom[at..].starts_with(is_close) => {
            Err(SyntaxError::Unbalanced(atom.to_owned()))
        }
        Some(at) => Err(SyntaxError::TrailingInput {
            form: atom[..at].to_owned(),
            trailing: atom[at..].trim_start().to_owned(),
        }),
    }
}

/// Split a whole program into its top-level expressions.
///
/// Each bracketed form that returns to depth 0 is one expression, and so is
/// each bare atom at depth 0. A closer with nothing open, or a form still open
/// at the end of input, is an error.
pub fn split_program(source: &str) -> Result<Vec<&str>, SyntaxError> {
    let mut exprs = Vec::new();
    let mut depth = 0usize;
    let mut start: Option<usize> = None;

    for (i, c) in source.char_indices() {
        if is_open(c) {
            if depth == 0 {
                // An atom glued to the form, as in `a(b c)`, ends here.
                if let Some(s) = start.take() {
                    exprs.push(&source[s..i]);
                }
                start = Some(i);
            }
            depth += 1;
        } else if is_close(c) {
            let end = i + c.len_utf8();
            if depth == 0 {
                let from = start.unwrap_or(i);
                return Err(SyntaxError::Unbalanced(source[from..end].to_owned()));
            }
            depth -= 1;
            if depth == 0 {
                if let Some(s) = start.take() {
                    exprs.push(&source[s..end]);
                }
            }
        } else if depth == 0 && is_separator(c) {
            if let Some(s) = start.take() {
                exprs.push(&source[s..i]);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }

    match start {
        Some(s) if depth > 0 => Err(SyntaxError::Unbalanced(source[s..].trim_end().to_owned())),
        Some(s) => {
            exprs.push(&source[s..]);
            Ok(exprs)
        }
        None => Ok(exprs),
    }
}
