//! Graphviz rendering.
//!
//! Node `0` is an invisible start marker; state `Sn` is node `n + 1`.
//! Every present `out1`/`out2` edge becomes one edge line, so the output
//! has `transition_count() + 1` edge lines.

use std::fmt::Write;

use crate::nfa::{Label, Nfa, StateId};

const EPSILON: &str = "&epsilon;";

/// Render `nfa` as a left-to-right `digraph`.
pub fn render(nfa: &Nfa) -> String {
    let mut out = String::new();
    write_dot(nfa, &mut out).expect("String write never fails");
    out
}

pub fn write_dot(nfa: &Nfa, w: &mut impl Write) -> std::fmt::Result {
    // The empty automaton still gets a placeholder accepting node.
    let accept = nfa.accept().map_or(1, node);

    writeln!(w, "digraph {{")?;
    writeln!(w, "\trankdir = LR")?;
    writeln!(w, "\tnode [shape = circle, style = filled, fillcolor = gray93]")?;
    writeln!(w, "\t{} [shape = doublecircle]", accept)?;
    writeln!(w, "\t0 [style = invisible]")?;
    writeln!(w, "\t0 -> {}", node(nfa.initial()))?;

    for (id, state) in nfa.iter() {
        let label = match state.label {
            Label::Epsilon => EPSILON.to_string(),
            Label::Symbol(c) => c.to_string(),
        };
        for target in state.successors() {
            writeln!(w, "\t{} -> {} [label=\"{}\"]", node(id), node(target), label)?;
        }
    }

    writeln!(w, "}}")
}

#[inline]
fn node(id: StateId) -> u32 {
    id + 1
}
