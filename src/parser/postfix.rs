use std::fmt;

use super::expand::CONCAT;
use crate::alphabet::{is_symbol, END_MARKER};
use crate::error::ParseError;

/// Postfix token. Operators keep the 1-based position they were typed at;
/// an inserted concatenation takes the position of its right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    Symbol(char),
    EndMarker,
    Star(usize),
    Concat(usize),
    Union(usize),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Token::Symbol(c) => *c,
            Token::EndMarker => END_MARKER,
            Token::Star(_) => '*',
            Token::Concat(_) => CONCAT,
            Token::Union(_) => '|',
        };
        write!(f, "{c}")
    }
}

#[derive(Debug)]
pub(crate) struct Postfix(pub Vec<Token>);

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.0.iter() {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

fn precedence(op: char) -> u8 {
    match op {
        '*' => 3,
        CONCAT => 2,
        '|' => 1,
        _ => 0,
    }
}

fn operator(op: char, position: usize) -> Token {
    match op {
        '*' => Token::Star(position),
        CONCAT => Token::Concat(position),
        _ => Token::Union(position),
    }
}

/// Shunting-yard over an expanded expression.
///
/// Positions count the characters of `expanded` without the inserted
/// concatenation operators, which is the expression as typed.
pub(crate) fn to_postfix(expanded: &str) -> Result<Postfix, ParseError> {
    let mut output = Vec::with_capacity(expanded.len());
    // '(' and operators, each with its position; a '(' also keeps the
    // output length it was opened at
    let mut stack: Vec<(char, usize, usize)> = Vec::new();
    let mut position = 0;

    for c in expanded.chars() {
        if c != CONCAT {
            position += 1;
        }

        match c {
            END_MARKER => output.push(Token::EndMarker),
            c if is_symbol(c) => output.push(Token::Symbol(c)),
            '(' => stack.push((c, position, output.len())),
            ')' => loop {
                match stack.pop() {
                    Some(('(', start, len)) if len == output.len() => {
                        return Err(ParseError::EmptyGroup { position: start })
                    }
                    Some(('(', _, _)) => break,
                    Some((op, at, _)) => output.push(operator(op, at)),
                    None => return Err(ParseError::UnmatchedClose { position }),
                }
            },
            '*' | CONCAT | '|' => {
                while let Some(&(top, at, _)) = stack.last() {
                    if precedence(top) < precedence(c) {
                        break;
                    }
                    stack.pop();
                    output.push(operator(top, at));
                }
                let at = if c == CONCAT { position + 1 } else { position };
                stack.push((c, at, output.len()));
            }
            ch => return Err(ParseError::InvalidCharacter { ch, position }),
        }
    }

    while let Some((op, position, _)) = stack.pop() {
        if op == '(' {
            return Err(ParseError::UnclosedGroup { position });
        }
        output.push(operator(op, position));
    }

    Ok(Postfix(output))
}
