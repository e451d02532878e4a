use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegexError {
    #[error("Error de sintaxis: {0}")]
    Parse(#[from] ParseError),

    #[error("Capacidad excedida: {0}")]
    Capacity(#[from] CapacityError),
}

/// Malformed expression. Positions are 1-based over the text the user typed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("la expresion regular esta vacia")]
    Empty,

    #[error("caracter '{ch}' no permitido en la posicion {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("el simbolo reservado '#' no puede usarse (posicion {position})")]
    ReservedSymbol { position: usize },

    #[error("parentesis ')' sin abrir en la posicion {position}")]
    UnmatchedClose { position: usize },

    #[error("parentesis '(' sin cerrar en la posicion {position}")]
    UnclosedGroup { position: usize },

    #[error("falta un operando para el operador '{operator}' en la posicion {position}")]
    MissingOperand { operator: char, position: usize },

    #[error("grupo vacio '()' en la posicion {position}")]
    EmptyGroup { position: usize },

    #[error("expresion incompleta: quedaron {count} subexpresiones sin unir")]
    LeftoverOperands { count: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapacityError {
    #[error("la expresion tiene mas de {limit} simbolos")]
    TooManyPositions { limit: usize },

    #[error("el AFD necesita mas de {limit} estados")]
    TooManyStates { limit: usize },

    #[error("el alfabeto tiene mas de {limit} simbolos distintos")]
    AlphabetTooLarge { limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_cause() {
        let err: RegexError = ParseError::UnclosedGroup { position: 1 }.into();
        assert_eq!(
            err.to_string(),
            "Error de sintaxis: parentesis '(' sin cerrar en la posicion 1"
        );

        let err: RegexError = CapacityError::TooManyStates { limit: 8 }.into();
        assert_eq!(
            err.to_string(),
            "Capacidad excedida: el AFD necesita mas de 8 estados"
        );

        let err: RegexError = ParseError::MissingOperand {
            operator: '|',
            position: 3,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Error de sintaxis: falta un operando para el operador '|' en la posicion 3"
        );
    }
}
