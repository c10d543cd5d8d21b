//! Automaton simulation.
//!
//! The matcher walks the NFA directly, keeping the set of states reachable
//! after each input symbol. Execution can be observed through a [`Tracer`].

mod input;
mod matcher;
mod state_set;
mod trace;

#[cfg(test)]
mod engine_tests;
#[cfg(test)]
mod state_set_tests;
#[cfg(test)]
mod trace_tests;

pub use input::{EMPTY_INPUT_SENTINEL, normalize_input};
pub use matcher::Matcher;
pub use state_set::StateSet;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
