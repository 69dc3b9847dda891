// FA Core - Shared primitives for finite automata
//
// This crate holds the pieces every automaton kind agrees on:
// - State: the identity of an automaton vertex (its name)
// - Symbol: a single input character

mod state;

pub use state::State;

/// An input symbol drawn from an automaton's alphabet
pub type Symbol = char;
