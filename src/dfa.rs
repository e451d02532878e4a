use std::fmt;

use indexmap::IndexSet;
use log::debug;

use self::{builder::Builder, matcher::Matcher};
use crate::alphabet::Alphabet;
use crate::config::Limits;
use crate::error::RegexError;
use crate::parser::Parser;
use crate::position::{Position, PositionSet};

pub use matcher::{Rejection, Verdict};

mod builder;
mod matcher;


pub type StateId = usize;

/// Automaton built directly from the syntax tree of one expression.
///
/// Every state stands for a distinct set of leaf positions. State 0 is the
/// initial state, and a state accepts when its set holds the end marker.
/// Nothing changes once construction is done, so one `Dfa` can validate
/// any number of strings.
pub struct Dfa {
    pub(crate) states: IndexSet<PositionSet>,
    /// `trans[state][symbol]`, where `symbol` indexes the alphabet.
    pub(crate) trans: Vec<Vec<Option<StateId>>>,
    pub(crate) accepting: Vec<bool>,
    pub(crate) alphabet: Alphabet,
    pub(crate) end_marker: Option<Position>,
}

impl Dfa {
    pub const START: StateId = 0;

    pub fn new(pattern: &str) -> Result<Dfa, RegexError> {
        Dfa::with_limits(pattern, &Limits::default())
    }

    pub fn with_limits(pattern: &str, limits: &Limits) -> Result<Dfa, RegexError> {
        let tree = Parser::parse(pattern, limits)?;
        let dfa = Builder::build(&tree, limits)?;
        debug!("{pattern:?}: {} states", dfa.state_count());

        Ok(dfa)
    }

    /// Runs `input` through the automaton and explains a rejection.
    pub fn validate(&self, input: &str) -> Verdict {
        Matcher::new(self).execute(input)
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.validate(input).is_accepted()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Leaf positions a state stands for, `None` for an unknown state.
    pub fn positions(&self, state: StateId) -> Option<&PositionSet> {
        self.states.get_index(state)
    }

    /// `false` for an unknown state.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.get(state).copied().unwrap_or(false)
    }

    pub fn next_state(&self, state: StateId, c: char) -> Option<StateId> {
        let symbol = self.alphabet.index_of(c)?;
        self.trans.get(state)?.get(symbol).copied().flatten()
    }

    pub fn end_marker(&self) -> Option<Position> {
        self.end_marker
    }
}

impl fmt::Display for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "estado")?;
        for c in self.alphabet.iter() {
            write!(f, "\t{c}")?;
        }
        writeln!(f)?;

        for (id, positions) in self.states.iter().enumerate() {
            let mark = if self.accepting[id] { '*' } else { ' ' };
            write!(f, "{mark}{id} {positions:?}")?;
            for next in self.trans[id].iter() {
                match next {
                    Some(next) => write!(f, "\t{next}")?,
                    None => write!(f, "\t-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dfa")
            .field("states", &self.states)
            .field("trans", &self.trans)
            .field("alphabet", &self.alphabet)
            .field("end_marker", &self.end_marker)
            .finish()
    }
}
