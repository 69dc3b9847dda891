// DFA state record
//
// Wraps the shared State identity with the data a DFA keeps per vertex.
// Destinations are registry indices into the owning Dfa, so states never
// hold references to each other.

use ahash::RandomState;
use fa_core::{State, Symbol};
use indexmap::IndexMap;

/// A DFA state: identity, accepting flag and outgoing transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfaState {
    pub(crate) state: State,

    pub(crate) is_final: bool,

    /// Transitions: symbol -> destination index in the owning registry
    pub(crate) transitions: IndexMap<Symbol, usize, RandomState>,
}

impl DfaState {
    pub(crate) fn new(state: State) -> Self {
        Self {
            state,
            is_final: false,
            transitions: IndexMap::default(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn name(&self) -> &str {
        self.state.name()
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Overwrites any previous transition on `symbol`
    pub(crate) fn add_transition(&mut self, symbol: Symbol, destination: usize) {
        self.transitions.insert(symbol, destination);
    }

    #[inline]
    pub(crate) fn transition(&self, symbol: Symbol) -> Option<usize> {
        self.transitions.get(&symbol).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = DfaState::new(State::new("q0"));
        assert_eq!(state.name(), "q0");
        assert!(!state.is_final());
        assert_eq!(state.transition_count(), 0);
    }

    #[test]
    fn test_transition_overwrite() {
        let mut state = DfaState::new(State::new("q0"));
        state.add_transition('a', 1);
        state.add_transition('a', 2);

        assert_eq!(state.transition('a'), Some(2));
        assert_eq!(state.transition('b'), None);
        assert_eq!(state.transition_count(), 1);
    }
}
