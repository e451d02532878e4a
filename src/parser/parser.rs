use log::debug;

use super::ast::SyntaxTree;
use super::builder::Builder;
use super::expand::expand;
use super::postfix::{to_postfix, Token};
use super::validate::validate;
use crate::config::Limits;
use crate::error::RegexError;

pub(crate) struct Parser;

impl Parser {
    pub fn parse(pattern: &str, limits: &Limits) -> Result<SyntaxTree, RegexError> {
        validate(pattern)?;

        let expanded = expand(pattern);
        debug!("expanded: {expanded}");

        // the whole expression is one group followed by the end marker
        let mut postfix = to_postfix(&expanded)?;
        let end = pattern.chars().count() + 1;
        postfix.0.extend([Token::EndMarker, Token::Concat(end)]);
        debug!("postfix: {postfix}");

        let tree = Builder::build(&postfix.0, limits)?;
        debug!(
            "syntax tree {tree:#}: {} nodes, {} positions, alphabet {:?}",
            tree.nodes.len(),
            tree.position_count(),
            tree.alphabet.iter().collect::<String>()
        );

        Ok(tree)
    }
}
