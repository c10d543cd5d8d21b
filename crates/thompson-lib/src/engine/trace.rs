//! Tracing infrastructure for observing matcher execution.
//!
//! `NoopTracer` methods are `#[inline(always)]` empty functions, so an
//! untraced match carries no tracing cost. `PrintTracer` collects one line
//! per event for display.

use thompson_core::Colors;
use thompson_core::utils::{format_state_set, format_symbol, quote_input, width_for_count};

use super::state_set::StateSet;
use crate::nfa::{Nfa, StateId};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// One line per symbol with the size of the reachable set.
    #[default]
    Default,
    /// Reachable sets listed by state id.
    Verbose,
}

/// Matcher instrumentation.
///
/// Each method is called at a specific point during a match:
/// - `trace_start` - after the initial epsilon closure
/// - `trace_step` - after a symbol was consumed and the result closed
/// - `trace_stuck` - when a symbol left no reachable state
/// - `trace_finish` - once, with the verdict
pub trait Tracer {
    fn trace_start(&mut self, input: &str, closure: &StateSet);

    fn trace_step(&mut self, position: usize, symbol: char, closure: &StateSet);

    fn trace_stuck(&mut self, position: usize, symbol: char);

    fn trace_finish(&mut self, matched: bool);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_start(&mut self, _input: &str, _closure: &StateSet) {}

    #[inline(always)]
    fn trace_step(&mut self, _position: usize, _symbol: char, _closure: &StateSet) {}

    #[inline(always)]
    fn trace_stuck(&mut self, _position: usize, _symbol: char) {}

    #[inline(always)]
    fn trace_finish(&mut self, _matched: bool) {}
}

/// Tracer that collects a human-readable trace.
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    accept: Option<StateId>,
    /// Zero-padded width for input positions.
    position_width: usize,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(nfa: &Nfa, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            accept: nfa.accept(),
            position_width: 1,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Print all lines to stdout.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn prefix(&self, position: usize, symbol: char) -> String {
        let c = &self.colors;
        format!(
            "{}{:0w$}{} {}",
            c.dim,
            position,
            c.reset,
            format_symbol(symbol),
            w = self.position_width
        )
    }

    /// Set contents for the current verbosity, with an acceptance marker.
    fn describe(&self, set: &StateSet) -> String {
        let c = &self.colors;
        let body = match self.verbosity {
            Verbosity::Default => pluralize_states(set.len()),
            Verbosity::Verbose => format_state_set(set.as_slice()),
        };
        match self.accept {
            Some(accept) if set.contains(accept) => {
                format!("{body} {}accepting{}", c.green, c.reset)
            }
            _ => body,
        }
    }
}

impl Tracer for PrintTracer {
    fn trace_start(&mut self, input: &str, closure: &StateSet) {
        self.position_width = width_for_count(input.chars().count());
        let c = &self.colors;
        let header = format!("{}input{} {}", c.dim, c.reset, quote_input(input));
        self.lines.push(header);
        let line = format!("start  {}", self.describe(closure));
        self.lines.push(line);
    }

    fn trace_step(&mut self, position: usize, symbol: char, closure: &StateSet) {
        let line = format!("{}  {}", self.prefix(position, symbol), self.describe(closure));
        self.lines.push(line);
    }

    fn trace_stuck(&mut self, position: usize, symbol: char) {
        let c = self.colors;
        let line = format!("{}  {}stuck{}", self.prefix(position, symbol), c.red, c.reset);
        self.lines.push(line);
    }

    fn trace_finish(&mut self, matched: bool) {
        let c = &self.colors;
        let line = if matched {
            format!("{}match{}", c.green, c.reset)
        } else {
            format!("{}no match{}", c.red, c.reset)
        };
        self.lines.push(line);
    }
}

fn pluralize_states(count: usize) -> String {
    if count == 1 {
        "1 state".to_string()
    } else {
        format!("{count} states")
    }
}
