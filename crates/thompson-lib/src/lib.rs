//! Thompson NFA construction and simulation for a small regular-expression grammar.
//!
//! Expressions use letters, juxtaposition (concatenation), `|` (alternation),
//! `*` (Kleene star) and parentheses. They compile to a non-deterministic
//! automaton that is matched directly, without determinization.
//!
//! # Example
//!
//! ```
//! use thompson_lib::Nfa;
//!
//! let nfa = Nfa::build("(a|b)*a").expect("valid expression");
//! assert!(nfa.is_match("abba"));
//! assert!(!nfa.is_match("ab"));
//! println!("{}", nfa.to_dot());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod dot;
pub mod engine;
pub mod nfa;
pub mod parser;

#[cfg(test)]
mod test_utils;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Span};
pub use engine::{EMPTY_INPUT_SENTINEL, Matcher, normalize_input};
pub use nfa::{Label, Nfa, State, StateId};
pub use parser::{DEFAULT_RECURSION_LIMIT, ExpressionBuilder, build};
pub use thompson_core::Colors;

/// Errors that can occur while building an automaton.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The expression violates the grammar.
    #[error("malformed expression: {} error(s)", .0.error_count())]
    MalformedExpression(Diagnostics),

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

impl Error {
    /// Diagnostics attached to the error, if any.
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            Error::MalformedExpression(diagnostics) => Some(diagnostics),
            Error::RecursionLimitExceeded => None,
        }
    }
}

/// Result type for automaton construction.
pub type Result<T> = std::result::Result<T, Error>;
