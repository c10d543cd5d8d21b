//! Epsilon-closure simulation of a Thompson NFA.

use super::state_set::StateSet;
use super::trace::{NoopTracer, Tracer};
use crate::nfa::{Nfa, StateId};

/// Read-only simulator over a built automaton.
///
/// Holds no state between calls: every `is_match` recomputes its sets from
/// scratch, so repeated calls with the same input always agree.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    nfa: &'a Nfa,
}

impl<'a> Matcher<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        Self { nfa }
    }

    /// Whether `input` is in the automaton's language.
    ///
    /// The empty automaton accepts exactly the empty string.
    pub fn is_match(&self, input: &str) -> bool {
        self.is_match_traced(input, &mut NoopTracer)
    }

    pub fn is_match_traced<T: Tracer>(&self, input: &str, tracer: &mut T) -> bool {
        let mut current = self.start();
        tracer.trace_start(input, &current);

        for (position, symbol) in input.chars().enumerate() {
            current = self.step(&current, symbol);
            if current.is_empty() {
                tracer.trace_stuck(position, symbol);
                tracer.trace_finish(false);
                return false;
            }
            tracer.trace_step(position, symbol, &current);
        }

        let matched = self.is_accepting(&current);
        tracer.trace_finish(matched);
        matched
    }

    /// Closure of the initial state; empty for the empty automaton.
    pub fn start(&self) -> StateSet {
        if self.nfa.is_empty() {
            return StateSet::new(0);
        }
        self.epsilon_closure([self.nfa.initial()])
    }

    /// States reachable from `seeds` through epsilon edges, seeds included.
    ///
    /// Uses an explicit stack; a state is expanded at most once, so star
    /// back-edges cannot loop.
    pub fn epsilon_closure(&self, seeds: impl IntoIterator<Item = StateId>) -> StateSet {
        let mut set = StateSet::new(self.nfa.len());
        let mut stack: Vec<StateId> = Vec::new();

        for seed in seeds {
            if set.insert(seed) {
                stack.push(seed);
            }
        }

        while let Some(id) = stack.pop() {
            let state = self.nfa.state(id);
            if !state.is_epsilon() {
                continue;
            }
            for target in state.successors() {
                if set.insert(target) {
                    stack.push(target);
                }
            }
        }

        set
    }

    /// Consume `symbol` from every state in `current`, then close over epsilon edges.
    pub fn step(&self, current: &StateSet, symbol: char) -> StateSet {
        let targets = current.iter().filter_map(|id| self.nfa.state(id).step(symbol));
        self.epsilon_closure(targets)
    }

    /// Accepting if the tagged accept state is present. The empty automaton
    /// has no accept state and is accepting only before consuming anything.
    pub fn is_accepting(&self, set: &StateSet) -> bool {
        match self.nfa.accept() {
            Some(accept) => set.contains(accept),
            None => self.nfa.is_empty(),
        }
    }
}
