//! Expression parser and Thompson construction.
//!
//! Parsing and construction happen in a single left-to-right pass: each
//! production appends its states to an [`NfaBuilder`](crate::nfa::NfaBuilder)
//! and hands the resulting fragment to its caller. Nothing is ever
//! backtracked, so a malformed expression is rejected at the first
//! violation and no partial automaton escapes.

pub mod lexer;

mod core;
mod grammar;

#[cfg(test)]
mod lexer_tests;

pub use core::Parser;

use crate::Result;
use crate::nfa::Nfa;
use lexer::lex;

/// Default bound on nested `expr` productions (groups plus `|` branches).
pub const DEFAULT_RECURSION_LIMIT: u32 = 1024;

/// Builder-pattern entry point for constructing an automaton.
///
/// ```
/// use thompson_lib::ExpressionBuilder;
///
/// let nfa = ExpressionBuilder::new("a(b|c)*").recursion_limit(64).build()?;
/// assert!(nfa.is_match("abcb"));
/// # Ok::<(), thompson_lib::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExpressionBuilder<'src> {
    source: &'src str,
    recursion_limit: u32,
}

impl<'src> ExpressionBuilder<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn build(self) -> Result<Nfa> {
        Parser::new(self.source, lex(self.source))
            .with_recursion_limit(self.recursion_limit)
            .parse()
    }
}

/// Build an automaton with the default recursion limit.
///
/// The empty string builds the empty automaton.
pub fn build(source: &str) -> Result<Nfa> {
    ExpressionBuilder::new(source).build()
}
