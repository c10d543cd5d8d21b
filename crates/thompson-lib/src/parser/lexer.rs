//! Lexer for regular expressions.
//!
//! Tokens are span-based; text is sliced from the source only when a
//! diagnostic needs it. Consecutive unrecognized characters (whitespace
//! included) are coalesced into a single `Garbage` token so that `a 12b`
//! yields one diagnostic for ` 12` instead of three.

use logos::Logos;
use std::ops::Range;

use crate::diagnostics::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A single ASCII letter; every letter is its own operand.
    #[regex("[A-Za-z]")]
    Letter,

    #[token("|")]
    Pipe,

    #[token("*")]
    Star,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    /// Coalesced unrecognized characters
    Garbage,
}

impl TokenKind {
    /// Human-readable description used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Letter => "letter",
            TokenKind::Pipe => "`|`",
            TokenKind::Star => "`*`",
            TokenKind::ParenOpen => "`(`",
            TokenKind::ParenClose => "`)`",
            TokenKind::Garbage => "invalid characters",
        }
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: impl Into<Span>) -> Self {
        Self {
            kind,
            span: span.into(),
        }
    }
}

/// Tokenizes an expression into span-based tokens, coalescing lexer errors.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(source.len());
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => {
                if let Some(start) = error_start.take() {
                    tokens.push(garbage(start..lexer.span().start));
                }
                tokens.push(Token::new(kind, lexer.span()));
            }
            Err(()) => {
                error_start.get_or_insert(lexer.span().start);
            }
        }
    }

    if let Some(start) = error_start {
        tokens.push(garbage(start..source.len()));
    }

    tokens
}

fn garbage(range: Range<usize>) -> Token {
    Token::new(TokenKind::Garbage, range)
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[token.span.range()]
}
