use log::trace;

use super::ast::{Node, NodeId, NodeKind, SyntaxTree};
use super::postfix::Token;
use crate::alphabet::{Alphabet, END_MARKER};
use crate::config::Limits;
use crate::error::{ParseError, RegexError};
use crate::position::{Position, PositionSet};

/// Builds the syntax tree from postfix tokens, computing nullable,
/// firstpos and lastpos for every node and accumulating followpos.
pub(crate) struct Builder<'a> {
    limits: &'a Limits,
    nodes: Vec<Node>,
    stack: Vec<NodeId>,
    leaves: Vec<char>,
    followpos: Vec<PositionSet>,
    alphabet: Alphabet,
    end_marker: Option<Position>,
}

impl<'a> Builder<'a> {
    pub fn build(postfix: &[Token], limits: &'a Limits) -> Result<SyntaxTree, RegexError> {
        let mut builder = Builder {
            limits,
            nodes: Vec::with_capacity(postfix.len()),
            stack: vec![],
            leaves: vec![],
            followpos: vec![],
            alphabet: Alphabet::new(),
            end_marker: None,
        };

        for token in postfix.iter() {
            match *token {
                Token::Symbol(c) => builder.build_leaf(c)?,
                Token::EndMarker => builder.build_leaf(END_MARKER)?,
                Token::Star(at) => builder.build_star(at)?,
                Token::Concat(at) => builder.build_concat(at)?,
                Token::Union(at) => builder.build_union(at)?,
            }
        }

        let root = match builder.stack.len() {
            1 => builder.stack[0],
            0 => return Err(ParseError::Empty.into()),
            count => return Err(ParseError::LeftoverOperands { count }.into()),
        };

        Ok(SyntaxTree {
            nodes: builder.nodes,
            root,
            leaves: builder.leaves,
            followpos: builder.followpos,
            alphabet: builder.alphabet,
            end_marker: builder.end_marker,
        })
    }

    fn push(&mut self, node: Node) {
        self.stack.push(self.nodes.len());
        self.nodes.push(node);
    }

    fn pop(&mut self, operator: char, position: usize) -> Result<NodeId, ParseError> {
        self.stack
            .pop()
            .ok_or(ParseError::MissingOperand { operator, position })
    }

    fn build_leaf(&mut self, symbol: char) -> Result<(), RegexError> {
        let position = self.leaves.len();
        self.limits.check_positions(position + 1)?;

        if symbol == END_MARKER {
            self.end_marker = Some(position);
        } else if !self.alphabet.contains(symbol) {
            self.limits.check_alphabet(self.alphabet.len() + 1)?;
            self.alphabet.insert(symbol);
        }

        self.leaves.push(symbol);
        self.followpos.push(PositionSet::new());
        self.push(Node {
            kind: NodeKind::Leaf { symbol, position },
            nullable: false,
            firstpos: PositionSet::singleton(position),
            lastpos: PositionSet::singleton(position),
        });
        Ok(())
    }

    fn build_star(&mut self, at: usize) -> Result<(), RegexError> {
        let child = self.pop('*', at)?;

        // x** is x*
        if let NodeKind::Star(_) = self.nodes[child].kind {
            self.stack.push(child);
            return Ok(());
        }

        let firstpos = self.nodes[child].firstpos.clone();
        let lastpos = self.nodes[child].lastpos.clone();

        // the end of one repetition may be followed by the start of the next
        self.add_followpos(&lastpos, &firstpos);

        self.push(Node {
            kind: NodeKind::Star(child),
            nullable: true,
            firstpos,
            lastpos,
        });
        Ok(())
    }

    fn build_concat(&mut self, at: usize) -> Result<(), RegexError> {
        let right = self.pop('.', at)?;
        let left = self.pop('.', at)?;
        let (lhs, rhs) = (&self.nodes[left], &self.nodes[right]);

        let nullable = lhs.nullable && rhs.nullable;
        let firstpos = match lhs.nullable {
            true => &lhs.firstpos | &rhs.firstpos,
            false => lhs.firstpos.clone(),
        };
        let lastpos = match rhs.nullable {
            true => &lhs.lastpos | &rhs.lastpos,
            false => rhs.lastpos.clone(),
        };
        let (from, to) = (lhs.lastpos.clone(), rhs.firstpos.clone());

        self.add_followpos(&from, &to);

        self.push(Node {
            kind: NodeKind::Concat(left, right),
            nullable,
            firstpos,
            lastpos,
        });
        Ok(())
    }

    fn build_union(&mut self, at: usize) -> Result<(), RegexError> {
        let right = self.pop('|', at)?;
        let left = self.pop('|', at)?;
        let (lhs, rhs) = (&self.nodes[left], &self.nodes[right]);

        let node = Node {
            kind: NodeKind::Union(left, right),
            nullable: lhs.nullable || rhs.nullable,
            firstpos: &lhs.firstpos | &rhs.firstpos,
            lastpos: &lhs.lastpos | &rhs.lastpos,
        };

        self.push(node);
        Ok(())
    }

    fn add_followpos(&mut self, from: &PositionSet, to: &PositionSet) {
        for pos in from.iter() {
            trace!("followpos({pos}) += {to:?}");
            self.followpos[pos].union_with(to);
        }
    }
}
