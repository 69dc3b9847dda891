// FA DFA - Deterministic Finite Automaton
//!
// This crate provides a DFA over single-character symbols that is built
// incrementally and then queried, simulated, relabeled or rendered.
//
// ## Overview
//
// - Construction: states, alphabet, start state, accepting states and
//   transitions are added one at a time. Nothing is ever removed.
// - Simulation: `Dfa::accepts` decides membership in a single left-to-right
//   pass. Missing transitions and foreign symbols reject.
// - Transformation: `Dfa::swap` exchanges the labels of two symbols in an
//   independent copy.
// - Rendering: `Dfa::to_text` produces the canonical dump, enumerating
//   states and symbols in insertion order.
//
// ## Architecture
//
// ```text
// ┌──────────────────────────────────────────────┐
// │ Dfa                                          │
// │  states: name -> DfaState (insertion order)  │
// │  sigma:  Symbol set       (insertion order)  │
// │  start:  registry index                      │
// └──────────────┬───────────────────────────────┘
//                │
//                v
// ┌──────────────────────────────────────────────┐
// │ DfaState                                     │
// │  state:       fa_core::State (name)          │
// │  is_final:    bool                           │
// │  transitions: Symbol -> registry index       │
// └──────────────────────────────────────────────┘
// ```

mod dfa;
mod render;
mod state;

pub use dfa::{Alphabet, Dfa};
pub use fa_core::{State, Symbol};
pub use state::DfaState;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while building a DFA
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DfaError {
    #[error("State already exists: {0}")]
    DuplicateState(String),

    #[error("Unknown state: {0}")]
    UnknownState(String),

    #[error("Symbol not in alphabet: {0:?}")]
    UnknownSymbol(Symbol),
}

/// Result type for DFA operations
pub type DfaResult<T> = Result<T, DfaError>;

/// Configuration for a DFA
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DfaConfig {
    /// Input token that stands for the empty string
    pub epsilon: String,

    /// Number of states to pre-allocate room for
    pub initial_capacity: usize,
}

impl Default for DfaConfig {
    fn default() -> Self {
        Self {
            epsilon: "e".to_string(),
            initial_capacity: 16,
        }
    }
}
