mod alphabet;
mod config;
mod dfa;
mod error;
mod parser;
mod position;
mod shell;

pub use alphabet::{Alphabet, END_MARKER};
pub use config::{Config, Limits};
pub use dfa::{Dfa, Rejection, StateId, Verdict};
pub use error::{CapacityError, ParseError, RegexError};
pub use position::{Position, PositionSet};
pub use shell::{Shell, EMPTY_STRING_COMMAND};
