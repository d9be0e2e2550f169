//! Atom lexer.
//!
//! Classifies bracket-free text (a form's head, a leaf expression, a bound
//! name) into a fixed token set. Keywords are exact tokens and identifiers are
//! a longest-match regex, so `letter` or `iffy` are identifiers rather than a
//! keyword followed by junk.

use logos::Logos;

use crate::ast::BinaryOp;
use crate::error::SyntaxError;

/// Raw token produced by logos.
#[derive(Logos, Copy, Clone, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    #[token("let")]
    Let,
    #[token("lambda")]
    Lambda,
    #[token("if")]
    If,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Eq,

    #[token("#t")]
    True,
    #[token("#f")]
    False,

    // Parsed after lexing so an overflowing literal gets its own error.
    #[regex(r"-?[0-9]+")]
    Int,

    // Below the operator tokens, so a lone `-` is subtraction.
    #[regex(r"[a-z_-]+", priority = 1)]
    Ident,
}

/// Keywords that open a special form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Keyword {
    Let,
    Lambda,
    If,
}

impl Keyword {
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Let => "let",
            Keyword::Lambda => "lambda",
            Keyword::If => "if",
        }
    }
}

/// A classified atom.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Atom<'src> {
    Keyword(Keyword),
    Operator(BinaryOp),
    Bool(bool),
    Int(i64),
    Ident(&'src str),
}

/// Classify `text` as exactly one atom.
///
/// Surrounding whitespace is ignored; anything else that does not lex to a
/// single token covering the whole text is rejected.
pub fn classify(text: &str) -> Result<Atom<'_>, SyntaxError> {
    let text = text.trim();
    let mut lexer = Token::lexer(text);

    let token = match lexer.next() {
        None => return Err(SyntaxError::Empty),
        Some(Err(())) => return Err(SyntaxError::UnrecognizedToken(text.to_owned())),
        Some(Ok(token)) => token,
    };
    if lexer.span() != (0..text.len()) {
        return Err(SyntaxError::UnrecognizedToken(text.to_owned()));
    }

    let atom = match token {
        Token::Let => Atom::Keyword(Keyword::Let),
        Token::Lambda => Atom::Keyword(Keyword::Lambda),
        Token::If => Atom::Keyword(Keyword::If),
        Token::Plus => Atom::Operator(BinaryOp::Add),
        Token::Minus => Atom::Operator(BinaryOp::Sub),
        Token::Star => Atom::Operator(BinaryOp::Mul),
        Token::Slash => Atom::Operator(BinaryOp::Div),
        Token::Eq => Atom::Operator(BinaryOp::Eq),
        Token::True => Atom::Bool(true),
        Token::False => Atom::Bool(false),
        Token::Int => text
            .parse::<i64>()
            .map(Atom::Int)
            .map_err(|_| SyntaxError::IntegerOutOfRange(text.to_owned()))?,
        Token::Ident => Atom::Ident(text),
    };
    Ok(atom)
}
