use std::fmt;

use thiserror::Error;

use super::Dfa;

/// Outcome of validating one string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "Cadena ACEPTADA."),
            Verdict::Rejected(rejection) => write!(f, "{rejection}"),
        }
    }
}

/// Why a string was rejected. Positions are 1-based character offsets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Cadena RECHAZADA: caracter '{ch}' fuera del alfabeto en posicion {position}")]
    OutOfAlphabet { ch: char, position: usize },

    #[error("Cadena RECHAZADA en el caracter {position} ('{ch}')")]
    NoTransition { ch: char, position: usize },

    #[error("Cadena RECHAZADA: Falta transicion en el caracter {position} (finaliza con '{ch}').")]
    NotAccepting { ch: char, position: usize },

    #[error("Cadena RECHAZADA: la cadena vacia no es aceptada.")]
    EmptyString,
}

pub(crate) struct Matcher<'a> {
    dfa: &'a Dfa,
}

impl<'a> Matcher<'a> {
    pub fn new(dfa: &'a Dfa) -> Self {
        Matcher { dfa }
    }

    pub fn execute(&self, input: &str) -> Verdict {
        let mut state = Dfa::START;
        let mut last = None;

        for (i, ch) in input.chars().enumerate() {
            let position = i + 1;

            let Some(symbol) = self.dfa.alphabet.index_of(ch) else {
                return Verdict::Rejected(Rejection::OutOfAlphabet { ch, position });
            };
            match self.dfa.trans[state][symbol] {
                Some(next) => state = next,
                None => return Verdict::Rejected(Rejection::NoTransition { ch, position }),
            }

            last = Some((ch, position));
        }

        if self.dfa.accepting[state] {
            return Verdict::Accepted;
        }

        match last {
            Some((ch, position)) => Verdict::Rejected(Rejection::NotAccepting { ch, position }),
            None => Verdict::Rejected(Rejection::EmptyString),
        }
    }
}
