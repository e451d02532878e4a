use std::collections::BTreeSet;
use std::fmt;
use std::ops::BitOr;

/// Index of one leaf of the syntax tree, assigned in postfix order.
pub type Position = usize;

/// Ordered set of leaf positions. A DFA state is identified by one of these.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct PositionSet {
    inner: BTreeSet<Position>,
}

impl PositionSet {
    pub fn new() -> PositionSet {
        PositionSet::default()
    }

    pub fn singleton(pos: Position) -> PositionSet {
        let mut set = PositionSet::new();
        set.insert(pos);
        set
    }

    pub fn insert(&mut self, pos: Position) -> bool {
        self.inner.insert(pos)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.inner.contains(&pos)
    }

    /// Adds every position of `other` to this set.
    pub fn union_with(&mut self, other: &PositionSet) {
        self.inner.extend(other.inner.iter().copied());
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.inner.iter().copied()
    }
}

impl BitOr for &PositionSet {
    type Output = PositionSet;

    fn bitor(self, rhs: &PositionSet) -> PositionSet {
        PositionSet {
            inner: &self.inner | &rhs.inner,
        }
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        PositionSet {
            inner: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut first = true;
        for pos in self.iter() {
            if first {
                write!(f, "{pos}")?;
            } else {
                write!(f, ", {pos}")?;
            }
            first = false;
        }
        f.write_str("}")
    }
}
