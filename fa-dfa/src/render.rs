// Canonical text rendering
//
// Layout (tabs shown as \t):
//
// ```text
// Q = { q0 q1 }
// Sigma = { 0 1 }
// delta =
// \t\t0\t1
// \tq0\tq0\tq1
// \tq1\tq0\tq1
// q0 = q0
// F = { q1 }
// ```
//
// States and symbols are always listed in insertion order. Undefined
// transitions leave an empty cell. There is no trailing newline.

use crate::dfa::Dfa;
use std::fmt;

impl Dfa {
    /// Render the automaton in its canonical text form
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Q = { ")?;
        for name in self.states.keys() {
            write!(f, "{name} ")?;
        }
        f.write_str("}\n")?;

        f.write_str("Sigma = { ")?;
        for symbol in &self.sigma {
            write!(f, "{symbol} ")?;
        }
        f.write_str("}\n")?;

        f.write_str("delta =\n\t")?;
        for symbol in &self.sigma {
            write!(f, "\t{symbol}")?;
        }
        f.write_str("\n")?;

        for state in self.states.values() {
            write!(f, "\t{}", state.name())?;
            for &symbol in &self.sigma {
                f.write_str("\t")?;
                if let Some(next) = state.transition(symbol) {
                    f.write_str(self.states[next].name())?;
                }
            }
            f.write_str("\n")?;
        }

        writeln!(f, "q0 = {}", self.start_state().map_or("", |s| s.name()))?;

        f.write_str("F = { ")?;
        for state in self.final_states() {
            write!(f, "{state} ")?;
        }
        f.write_str("}")
    }
}
