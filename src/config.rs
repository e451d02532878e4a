use crate::error::CapacityError;

pub const DEFAULT_MAX_POSITIONS: usize = 1024;
pub const DEFAULT_MAX_STATES: usize = 4096;
pub const DEFAULT_MAX_ALPHABET: usize = 32;

/// Upper bounds checked while an expression is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Leaves of the syntax tree, end marker included.
    pub max_positions: usize,
    pub max_states: usize,
    pub max_alphabet: usize,
}

impl Limits {
    pub(crate) fn check_positions(&self, count: usize) -> Result<(), CapacityError> {
        if count > self.max_positions {
            return Err(CapacityError::TooManyPositions {
                limit: self.max_positions,
            });
        }
        Ok(())
    }

    pub(crate) fn check_states(&self, count: usize) -> Result<(), CapacityError> {
        if count > self.max_states {
            return Err(CapacityError::TooManyStates {
                limit: self.max_states,
            });
        }
        Ok(())
    }

    pub(crate) fn check_alphabet(&self, count: usize) -> Result<(), CapacityError> {
        if count > self.max_alphabet {
            return Err(CapacityError::AlphabetTooLarge {
                limit: self.max_alphabet,
            });
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_positions: DEFAULT_MAX_POSITIONS,
            max_states: DEFAULT_MAX_STATES,
            max_alphabet: DEFAULT_MAX_ALPHABET,
        }
    }
}

/// Options of the interactive shell.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub limits: Limits,
    /// Print the transition table after every successful compilation.
    pub show_table: bool,
}
