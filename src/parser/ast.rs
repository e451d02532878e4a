use std::fmt;

use crate::alphabet::Alphabet;
use crate::position::{Position, PositionSet};

pub(crate) type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Leaf { symbol: char, position: Position },
    Star(NodeId),
    Concat(NodeId, NodeId),
    Union(NodeId, NodeId),
}

/// A syntax tree node with its attributes, fixed once the node is built.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub kind: NodeKind,
    pub nullable: bool,
    pub firstpos: PositionSet,
    pub lastpos: PositionSet,
}

/// Arena holding every node of one compiled expression, plus the tables
/// derived while building it.
#[derive(Debug)]
pub(crate) struct SyntaxTree {
    pub nodes: Vec<Node>,
    pub root: NodeId,
    /// Symbol of each leaf, indexed by position.
    pub leaves: Vec<char>,
    pub followpos: Vec<PositionSet>,
    pub alphabet: Alphabet,
    pub end_marker: Option<Position>,
}

impl SyntaxTree {
    pub fn root(&self) -> &Node {
        &self.nodes[self.root]
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn symbol_at(&self, pos: Position) -> char {
        self.leaves[pos]
    }

    pub fn followpos(&self, pos: Position) -> &PositionSet {
        &self.followpos[pos]
    }

    pub fn position_count(&self) -> usize {
        self.leaves.len()
    }
}

enum Step {
    Node(NodeId),
    Text(&'static str),
}

/// Fully parenthesized expression; `{:#}` also shows leaf positions.
impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // explicit stack, trees can be as deep as the expression is long
        let mut steps = vec![Step::Node(self.root)];

        while let Some(step) = steps.pop() {
            let id = match step {
                Step::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Step::Node(id) => id,
            };

            match self.node(id).kind {
                NodeKind::Leaf { symbol, position } => match f.alternate() {
                    true => write!(f, "{symbol}{position}")?,
                    false => write!(f, "{symbol}")?,
                },
                NodeKind::Star(child) => {
                    steps.extend([Step::Text("*"), Step::Node(child)]);
                }
                NodeKind::Concat(left, right) => {
                    f.write_str("(")?;
                    steps.extend([
                        Step::Text(")"),
                        Step::Node(right),
                        Step::Text("."),
                        Step::Node(left),
                    ]);
                }
                NodeKind::Union(left, right) => {
                    f.write_str("(")?;
                    steps.extend([
                        Step::Text(")"),
                        Step::Node(right),
                        Step::Text("|"),
                        Step::Node(left),
                    ]);
                }
            }
        }
        Ok(())
    }
}
