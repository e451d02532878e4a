use indexmap::IndexSet;
use log::trace;

use super::{Dfa, StateId};
use crate::config::Limits;
use crate::error::RegexError;
use crate::parser::SyntaxTree;
use crate::position::PositionSet;

/// Subset construction over leaf positions, driven by followpos.
pub(crate) struct Builder<'a> {
    tree: &'a SyntaxTree,
    limits: &'a Limits,
    states: IndexSet<PositionSet>,
    trans: Vec<Vec<Option<StateId>>>,
}

impl<'a> Builder<'a> {
    pub fn build(tree: &'a SyntaxTree, limits: &'a Limits) -> Result<Dfa, RegexError> {
        let mut builder = Builder {
            tree,
            limits,
            states: IndexSet::new(),
            trans: vec![],
        };

        builder.add_state(tree.root().firstpos.clone())?;

        // states below `next` are marked; the rest are still pending
        let mut next = 0;
        while next < builder.states.len() {
            builder.build_state(next)?;
            next += 1;
        }

        let accepting = builder
            .states
            .iter()
            .map(|set| tree.end_marker.is_some_and(|pos| set.contains(pos)))
            .collect();

        Ok(Dfa {
            states: builder.states,
            trans: builder.trans,
            accepting,
            alphabet: tree.alphabet.clone(),
            end_marker: tree.end_marker,
        })
    }

    fn build_state(&mut self, id: StateId) -> Result<(), RegexError> {
        for (symbol, c) in self.tree.alphabet.iter().enumerate() {
            let target = self.move_on(id, c);
            if target.is_empty() {
                continue;
            }

            let to = match self.states.get_index_of(&target) {
                Some(to) => to,
                None => self.add_state(target)?,
            };
            trace!("{id} --{c}--> {to}");
            self.trans[id][symbol] = Some(to);
        }
        Ok(())
    }

    /// Union of followpos(p) over every p of the state labelled `c`.
    fn move_on(&self, id: StateId, c: char) -> PositionSet {
        let mut target = PositionSet::new();
        for pos in self.states[id].iter() {
            if self.tree.symbol_at(pos) == c {
                target.union_with(self.tree.followpos(pos));
            }
        }
        target
    }

    fn add_state(&mut self, positions: PositionSet) -> Result<StateId, RegexError> {
        self.limits.check_states(self.states.len() + 1)?;

        let (id, _) = self.states.insert_full(positions);
        self.trans.push(vec![None; self.tree.alphabet.len()]);
        Ok(id)
    }
}
