use crate::nfa::StateId;

/// Set of state ids with O(1) membership and insertion-ordered iteration.
///
/// Membership is a dense bitmap sized to the automaton, so two sets over
/// the same automaton compare equal only if they were filled in the same
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSet {
    present: Vec<bool>,
    order: Vec<StateId>,
}

impl StateSet {
    /// Empty set able to hold ids below `capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            present: vec![false; capacity],
            order: Vec::new(),
        }
    }

    /// Returns `true` if `id` was not already present.
    pub fn insert(&mut self, id: StateId) -> bool {
        let slot = &mut self.present[id as usize];
        if *slot {
            return false;
        }
        *slot = true;
        self.order.push(id);
        true
    }

    #[inline]
    pub fn contains(&self, id: StateId) -> bool {
        self.present.get(id as usize).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.order.iter().copied()
    }

    pub fn as_slice(&self) -> &[StateId] {
        &self.order
    }
}
