//! Thompson automata.
//!
//! States live in a flat `Vec` and reference each other by position
//! (`StateId`). Construction goes through [`NfaBuilder`], which guarantees
//! that the accepting state is the last one appended and has no outgoing
//! edges. Once built, an `Nfa` is immutable.

mod build;
mod dump;

#[cfg(test)]
mod build_tests;

pub use build::{Fragment, NfaBuilder};
pub use dump::NfaPrinter;

use serde::Serialize;

use crate::Result;
use crate::dot;
use crate::engine::Matcher;

/// Index into `Nfa::states`.
pub type StateId = u32;

/// What a state consumes before following `out1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Epsilon,
    Symbol(char),
}

/// A node with at most two outgoing edges.
///
/// A `Symbol` state has exactly one edge (`out1`); `out2` is only ever set
/// on `Epsilon` states (splits and star loops).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct State {
    pub label: Label,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out1: Option<StateId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out2: Option<StateId>,
}

impl State {
    /// Epsilon state with no edges yet: a fragment exit awaiting patching.
    pub fn stub() -> Self {
        Self {
            label: Label::Epsilon,
            out1: None,
            out2: None,
        }
    }

    pub fn symbol(c: char, next: StateId) -> Self {
        Self {
            label: Label::Symbol(c),
            out1: Some(next),
            out2: None,
        }
    }

    pub fn split(first: StateId, second: StateId) -> Self {
        Self {
            label: Label::Epsilon,
            out1: Some(first),
            out2: Some(second),
        }
    }

    #[inline]
    pub fn is_epsilon(&self) -> bool {
        self.label == Label::Epsilon
    }

    /// Outgoing edges in `out1`, `out2` order.
    pub fn successors(&self) -> impl Iterator<Item = StateId> {
        self.out1.into_iter().chain(self.out2)
    }

    /// Target of the consuming edge, if this state consumes `c`.
    #[inline]
    pub fn step(&self, c: char) -> Option<StateId> {
        match self.label {
            Label::Symbol(s) if s == c => self.out1,
            _ => None,
        }
    }
}

/// A Thompson NFA with an explicitly tagged accepting state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Nfa {
    states: Vec<State>,
    initial: StateId,
    accept: Option<StateId>,
}

impl Nfa {
    pub(crate) fn from_parts(states: Vec<State>, initial: StateId, accept: Option<StateId>) -> Self {
        Self {
            states,
            initial,
            accept,
        }
    }

    /// The automaton of the empty expression. Accepts only the empty string.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an automaton from expression text with default settings.
    pub fn build(text: &str) -> Result<Self> {
        crate::parser::build(text)
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id as usize]
    }

    /// Entry state. Meaningless (0) for the empty automaton.
    pub fn initial(&self) -> StateId {
        self.initial
    }

    pub fn accept(&self) -> Option<StateId> {
        self.accept
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (i as StateId, s))
    }

    /// Number of present `out1`/`out2` edges across all states.
    pub fn transition_count(&self) -> usize {
        self.states.iter().map(|s| s.successors().count()).sum()
    }

    /// Test `input` against this automaton. `input` is matched literally; map
    /// caller sentinels with [`crate::normalize_input`] first.
    pub fn is_match(&self, input: &str) -> bool {
        Matcher::new(self).is_match(input)
    }

    /// Graphviz rendering.
    pub fn to_dot(&self) -> String {
        dot::render(self)
    }

    pub fn dump(&self) -> String {
        NfaPrinter::new(self).dump()
    }

    pub fn printer(&self) -> NfaPrinter<'_> {
        NfaPrinter::new(self)
    }
}
