//! Plain-text listing of an automaton, for debugging and snapshot tests.

use std::fmt::Write;

use thompson_core::Colors;
use thompson_core::utils::{format_state_list, format_symbol};

use super::{Label, Nfa, StateId};

/// Printer for `Nfa` with optional colors.
pub struct NfaPrinter<'a> {
    nfa: &'a Nfa,
    colors: Colors,
}

impl<'a> NfaPrinter<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            colors: Colors::OFF,
        }
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        let c = &self.colors;
        if self.nfa.is_empty() {
            writeln!(w, "initial = ∅")?;
            return writeln!(w, "accept = ∅");
        }

        writeln!(w, "initial = S{}", self.nfa.initial())?;
        match self.nfa.accept() {
            Some(accept) => writeln!(w, "accept = S{}", accept)?,
            None => writeln!(w, "accept = ∅")?,
        }
        writeln!(w)?;

        for (id, state) in self.nfa.iter() {
            let targets: Vec<StateId> = state.successors().collect();
            let label = match state.label {
                Label::Epsilon => format!("{}ε{}", c.dim, c.reset),
                Label::Symbol(s) => format!("{}{}{}", c.blue, format_symbol(s), c.reset),
            };
            let marker = if Some(id) == self.nfa.accept() {
                format!("{}S{}{}", c.green, id, c.reset)
            } else {
                format!("S{}", id)
            };
            writeln!(w, "{}: {} → {}", marker, label, format_state_list(&targets))?;
        }
        Ok(())
    }
}
