//! Tokenizer
//!
//! Splits program text into atoms and parentheses. Patterns are tried in a
//! fixed priority order at every position and the first match wins:
//! whitespace, atom, open paren, close paren. Whitespace is dropped.
//!
//! Whitespace is the ASCII set `\t \n \f \r` and space. Other Unicode
//! spaces such as U+00A0 are part of an atom.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Whitespace,
    Atom,
    Open,
    Close,
}

/// A lexical token with the byte offset where it starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
        }
    }

    /// Byte offset one past the end of the token
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Whitespace => write!(f, "WHITESPACE {:?}", self.text),
            TokenKind::Atom => write!(f, "ATOM {}", self.text),
            TokenKind::Open => write!(f, "OPEN {}", self.text),
            TokenKind::Close => write!(f, "CLOSE {}", self.text),
        }
    }
}

/// Token patterns in priority order. Together they cover every character.
static PATTERNS: LazyLock<[(TokenKind, Regex); 4]> = LazyLock::new(|| {
    [
        (TokenKind::Whitespace, r"^[\t\n\f\r ]+"),
        (TokenKind::Atom, r"^[^()\t\n\f\r ]+"),
        (TokenKind::Open, r"^\("),
        (TokenKind::Close, r"^\)"),
    ]
    .map(|(kind, pattern)| (kind, Regex::new(pattern).expect("static token pattern")))
});

/// Split `text` into tokens, in source order, without whitespace.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut position = 0;

    while position < text.len() {
        let rest = &text[position..];
        let Some((kind, matched)) = PATTERNS
            .iter()
            .find_map(|(kind, pattern)| pattern.find(rest).map(|m| (*kind, m.as_str())))
        else {
            unreachable!("token patterns cover every character");
        };

        if kind != TokenKind::Whitespace {
            tokens.push(Token::new(kind, matched, position));
        }
        position += matched.len();
    }

    tracing::trace!(count = tokens.len(), "tokenized program");
    tokens
}

/// Deepest parenthesis nesting in a token stream.
///
/// Unbalanced close parens never push the depth below zero.
pub fn nesting_depth(tokens: &[Token]) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    for token in tokens {
        match token.kind {
            TokenKind::Open => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            TokenKind::Close => depth = depth.saturating_sub(1),
            TokenKind::Atom | TokenKind::Whitespace => {}
        }
    }
    deepest
}
