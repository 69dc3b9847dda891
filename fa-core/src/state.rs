// State identity
//
// A state is known only by its name. Richer per-automaton data (accepting
// flag, transitions) is kept by the owning automaton alongside this record.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A named automaton vertex
///
/// Names are not validated here; uniqueness within an automaton is the
/// owning automaton's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct State {
    name: String,
}

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The state's name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Borrow<str> for State {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl From<&str> for State {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for State {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
