/// Synthetic symbol appended to every expression; its leaf marks acceptance.
pub const END_MARKER: char = '#';

/// Symbols that may appear as leaves of an expression.
pub fn is_symbol(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Operators and grouping characters understood by the parser.
pub fn is_operator(c: char) -> bool {
    matches!(c, '(' | ')' | '|' | '*')
}

/// Distinct leaf symbols of one expression, in first-seen order.
/// The end marker is never part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    pub fn new() -> Alphabet {
        Alphabet::default()
    }

    /// Records `c` unless it is already known. Returns true when it was new.
    pub fn insert(&mut self, c: char) -> bool {
        if self.contains(c) {
            return false;
        }
        self.symbols.push(c);
        true
    }

    pub fn index_of(&self, c: char) -> Option<usize> {
        self.symbols.iter().position(|s| *s == c)
    }

    pub fn contains(&self, c: char) -> bool {
        self.index_of(c).is_some()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }
}
