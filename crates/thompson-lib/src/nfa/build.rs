//! Thompson construction over an index arena.
//!
//! Every combinator returns a [`Fragment`] whose `exit` is a fresh stub
//! appended last. Because ids are positions, the id of a state not yet
//! pushed is always `states.len()`, which is what lets a split point at a
//! join that does not exist yet.

use super::{Label, Nfa, State, StateId};

/// A sub-automaton with single entry and exit states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub entry: StateId,
    pub exit: StateId,
}

impl Fragment {
    pub fn new(entry: StateId, exit: StateId) -> Self {
        Self { entry, exit }
    }
}

#[derive(Debug, Default)]
pub struct NfaBuilder {
    states: Vec<State>,
}

impl NfaBuilder {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Id the next pushed state will receive.
    #[inline]
    pub fn next_id(&self) -> StateId {
        self.states.len() as StateId
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    fn push(&mut self, state: State) -> StateId {
        let id = self.next_id();
        self.states.push(state);
        id
    }

    fn stub(&mut self) -> StateId {
        self.push(State::stub())
    }

    /// Point the exit stub `exit` at `first` (and `second` if given).
    fn patch(&mut self, exit: StateId, first: StateId, second: Option<StateId>) {
        let state = &mut self.states[exit as usize];
        debug_assert!(
            state.label == Label::Epsilon && state.out1.is_none() && state.out2.is_none(),
            "S{exit} is not an unpatched exit stub"
        );
        state.out1 = Some(first);
        state.out2 = second;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Fragment Combinators
    // ─────────────────────────────────────────────────────────────────────

    /// `c`: symbol state followed by its exit stub.
    pub fn letter(&mut self, c: char) -> Fragment {
        let exit = self.next_id() + 1;
        let entry = self.push(State::symbol(c, exit));
        self.stub();
        Fragment::new(entry, exit)
    }

    /// `f*`: the old exit loops back to `f.entry` or leaves; a new split in
    /// front either enters `f` or skips it.
    pub fn star(&mut self, f: Fragment) -> Fragment {
        let split = self.next_id();
        let exit = split + 1;
        self.patch(f.exit, f.entry, Some(exit));
        self.push(State::split(f.entry, exit));
        self.stub();
        Fragment::new(split, exit)
    }

    /// `f g`: `f`'s exit falls through to `g`'s entry. `g` must be built after `f`.
    pub fn concat(&mut self, f: Fragment, g: Fragment) -> Fragment {
        debug_assert!(f.exit < g.entry.min(g.exit), "fragments built out of order");
        self.patch(f.exit, g.entry, None);
        Fragment::new(f.entry, g.exit)
    }

    /// `f|g`: a split enters either branch, both exits join on a new stub.
    pub fn alternate(&mut self, f: Fragment, g: Fragment) -> Fragment {
        let split = self.next_id();
        let join = split + 1;
        self.patch(f.exit, join, None);
        self.patch(g.exit, join, None);
        self.push(State::split(f.entry, g.entry));
        self.stub();
        Fragment::new(split, join)
    }

    /// Seal the arena. `None` means the expression was empty.
    pub fn finish(self, root: Option<Fragment>) -> Nfa {
        let Some(root) = root else {
            return Nfa::empty();
        };
        debug_assert_eq!(
            root.exit as usize + 1,
            self.states.len(),
            "accepting state must be the last state"
        );
        Nfa::from_parts(self.states, root.entry, Some(root.exit))
    }
}
