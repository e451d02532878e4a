use crate::alphabet::{is_operator, is_symbol, END_MARKER};
use crate::error::ParseError;

/// True when `c` closes an operand, so an operator may follow it.
fn ends_operand(c: char) -> bool {
    is_symbol(c) || c == ')' || c == '*'
}

/// Checks the expression as typed, before it is expanded.
pub(crate) fn validate(pattern: &str) -> Result<(), ParseError> {
    if pattern.is_empty() {
        return Err(ParseError::Empty);
    }

    // positions of the '(' still waiting for their ')'
    let mut open = Vec::new();
    let mut prev: Option<char> = None;

    for (i, c) in pattern.chars().enumerate() {
        let position = i + 1;
        match c {
            END_MARKER => return Err(ParseError::ReservedSymbol { position }),
            '(' => open.push(position),
            ')' => {
                let Some(start) = open.pop() else {
                    return Err(ParseError::UnmatchedClose { position });
                };
                match prev {
                    Some('(') => return Err(ParseError::EmptyGroup { position: start }),
                    Some('|') => {
                        return Err(ParseError::MissingOperand {
                            operator: '|',
                            position: position - 1,
                        })
                    }
                    _ => {}
                }
            }
            '|' | '*' => {
                if !prev.is_some_and(ends_operand) {
                    return Err(ParseError::MissingOperand {
                        operator: c,
                        position,
                    });
                }
            }
            c if is_symbol(c) || is_operator(c) => {}
            ch => return Err(ParseError::InvalidCharacter { ch, position }),
        }
        prev = Some(c);
    }

    if let Some(position) = open.pop() {
        return Err(ParseError::UnclosedGroup { position });
    }
    match prev {
        Some('|') => Err(ParseError::MissingOperand {
            operator: '|',
            position: pattern.chars().count(),
        }),
        _ => Ok(()),
    }
}
