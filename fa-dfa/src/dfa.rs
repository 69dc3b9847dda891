// Deterministic Finite Automaton
//
// Owns the state registry, the alphabet and the start designation.
// Both the registry and the alphabet keep insertion order, which is
// what rendering enumerates.

use crate::state::DfaState;
use crate::{DfaConfig, DfaError, DfaResult};
use ahash::RandomState;
use fa_core::{State, Symbol};
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use tracing::{debug, trace};

/// Insertion-ordered alphabet
pub type Alphabet = IndexSet<Symbol, RandomState>;

/// A deterministic finite automaton (Q, Σ, δ, q0, F)
///
/// The transition function is partial: a missing entry means "no move" and
/// makes simulation reject.
#[derive(Clone, PartialEq, Eq)]
pub struct Dfa {
    /// State registry: name -> state record
    pub(crate) states: IndexMap<String, DfaState, RandomState>,

    /// Alphabet
    pub(crate) sigma: Alphabet,

    /// Start state, as a registry index
    pub(crate) start: Option<usize>,

    config: DfaConfig,
}

impl Dfa {
    pub fn new() -> Self {
        Self::with_config(DfaConfig::default())
    }

    pub fn with_config(config: DfaConfig) -> Self {
        Self {
            states: IndexMap::with_capacity_and_hasher(config.initial_capacity, RandomState::new()),
            sigma: Alphabet::default(),
            start: None,
            config,
        }
    }

    pub fn config(&self) -> &DfaConfig {
        &self.config
    }

    /// Add a new non-accepting state with no transitions
    pub fn try_add_state(&mut self, name: &str) -> DfaResult<()> {
        if self.states.contains_key(name) {
            debug!(state = %name, "Rejecting duplicate state");
            return Err(DfaError::DuplicateState(name.to_string()));
        }
        self.states
            .insert(name.to_string(), DfaState::new(State::new(name)));
        Ok(())
    }

    /// Add a new state. Returns false if the name is already taken.
    pub fn add_state(&mut self, name: &str) -> bool {
        self.try_add_state(name).is_ok()
    }

    /// Add a symbol to the alphabet. Re-adding a known symbol does nothing.
    pub fn add_sigma(&mut self, symbol: Symbol) {
        self.sigma.insert(symbol);
    }

    pub fn try_set_final(&mut self, name: &str) -> DfaResult<()> {
        let index = self.index_of(name)?;
        self.states[index].is_final = true;
        Ok(())
    }

    /// Mark a state as accepting. Returns false for an unknown state.
    pub fn set_final(&mut self, name: &str) -> bool {
        self.try_set_final(name).is_ok()
    }

    pub fn try_set_start(&mut self, name: &str) -> DfaResult<()> {
        let index = self.index_of(name)?;
        if let Some(previous) = self.start.replace(index) {
            if previous != index {
                trace!(
                    from = %self.states[previous].name(),
                    to = %name,
                    "Replacing start state"
                );
            }
        }
        Ok(())
    }

    /// Designate the start state, replacing any previous one.
    /// Returns false for an unknown state.
    pub fn set_start(&mut self, name: &str) -> bool {
        self.try_set_start(name).is_ok()
    }

    /// Record δ(from, symbol) = to
    ///
    /// Both states must exist and the symbol must already be in the alphabet.
    /// A later call for the same (from, symbol) pair overwrites this one.
    /// On error nothing is changed.
    pub fn try_add_transition(&mut self, from: &str, to: &str, symbol: Symbol) -> DfaResult<()> {
        let from_index = self.index_of(from)?;
        let to_index = self.index_of(to)?;
        if !self.sigma.contains(&symbol) {
            debug!(symbol = ?symbol, "Rejecting transition on undeclared symbol");
            return Err(DfaError::UnknownSymbol(symbol));
        }
        self.states[from_index].add_transition(symbol, to_index);
        Ok(())
    }

    pub fn add_transition(&mut self, from: &str, to: &str, symbol: Symbol) -> bool {
        self.try_add_transition(from, to, symbol).is_ok()
    }

    /// The alphabet in declaration order
    pub fn sigma(&self) -> &Alphabet {
        &self.sigma
    }

    pub fn get_state(&self, name: &str) -> Option<&State> {
        self.states.get(name).map(DfaState::state)
    }

    pub fn get_dfa_state(&self, name: &str) -> Option<&DfaState> {
        self.states.get(name)
    }

    /// True iff the state exists and is accepting
    pub fn is_final(&self, name: &str) -> bool {
        self.states.get(name).is_some_and(DfaState::is_final)
    }

    /// True iff the state exists and is the current start state
    pub fn is_start(&self, name: &str) -> bool {
        match (self.states.get_index_of(name), self.start) {
            (Some(index), Some(start)) => index == start,
            _ => false,
        }
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Total number of defined transitions across all states
    pub fn transition_count(&self) -> usize {
        self.states.values().map(DfaState::transition_count).sum()
    }

    /// States in insertion order
    pub fn states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.values().map(DfaState::state)
    }

    /// Accepting states in insertion order
    pub fn final_states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states
            .values()
            .filter(|s| s.is_final)
            .map(DfaState::state)
    }

    pub fn start_state(&self) -> Option<&State> {
        self.start.map(|index| self.states[index].state())
    }

    /// δ(from, symbol), if defined
    pub fn transition(&self, from: &str, symbol: Symbol) -> Option<&State> {
        let next = self.states.get(from)?.transition(symbol)?;
        Some(self.states[next].state())
    }

    /// Run the automaton over `input` and return the state it stops in
    ///
    /// Returns `None` when there is no start state, when a symbol is not in
    /// the alphabet, or when a transition is missing. The configured epsilon
    /// token consumes nothing and stops in the start state.
    pub fn run(&self, input: &str) -> Option<&State> {
        self.walk(input).map(|index| self.states[index].state())
    }

    /// Decide whether the automaton accepts `input`
    pub fn accepts(&self, input: &str) -> bool {
        self.walk(input)
            .is_some_and(|index| self.states[index].is_final)
    }

    fn walk(&self, input: &str) -> Option<usize> {
        let mut current = self.start?;
        if input == self.config.epsilon {
            return Some(current);
        }

        for symbol in input.chars() {
            if !self.sigma.contains(&symbol) {
                trace!(symbol = ?symbol, "Input symbol outside alphabet");
                return None;
            }
            current = self.states[current].transition(symbol)?;
        }

        Some(current)
    }

    /// Build an independent copy with the labels `a` and `b` exchanged
    ///
    /// States, alphabet order, start and accepting flags are copied as is.
    /// Swapping a symbol with itself yields a plain copy. When only one of
    /// the two symbols is in the alphabet, its transitions would be relabeled
    /// to an undeclared symbol and are dropped, as `add_transition` would
    /// reject them.
    pub fn swap(&self, a: Symbol, b: Symbol) -> Dfa {
        let relabel = |symbol: Symbol| {
            if symbol == a {
                b
            } else if symbol == b {
                a
            } else {
                symbol
            }
        };

        let states = self
            .states
            .iter()
            .map(|(name, original)| {
                let transitions = original
                    .transitions
                    .iter()
                    .map(|(&symbol, &destination)| (relabel(symbol), destination))
                    .filter(|(symbol, _)| self.sigma.contains(symbol))
                    .collect();
                let state = DfaState {
                    state: original.state.clone(),
                    is_final: original.is_final,
                    transitions,
                };
                (name.clone(), state)
            })
            .collect();

        debug!(a = ?a, b = ?b, states = self.states.len(), "Swapped symbols");

        Dfa {
            states,
            sigma: self.sigma.clone(),
            start: self.start,
            config: self.config.clone(),
        }
    }

    fn index_of(&self, name: &str) -> DfaResult<usize> {
        self.states.get_index_of(name).ok_or_else(|| {
            debug!(state = %name, "Unknown state");
            DfaError::UnknownState(name.to_string())
        })
    }
}

impl Default for Dfa {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dfa")
            .field("states", &self.states.keys().collect::<Vec<_>>())
            .field("sigma", &self.sigma)
            .field("start", &self.start_state().map(State::name))
            .field("transition_count", &self.transition_count())
            .finish()
    }
}
