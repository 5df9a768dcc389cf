use crate::{
    engine::{number::parse_number, operator::Operator},
    error::ParseError,
};

/// Stable index of a node inside the chain's arena.
///
/// Ids are never reused within one chain, so a spliced-out node's id keeps
/// pointing at its tombstoned slot instead of at a new node.
pub type NodeId = usize;

/// Discriminates the two node flavors of the expression chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The node carries a numeric value.
    Value,
    /// The node carries an operator.
    Operator,
}

/// One node of the expression chain.
///
/// A node is either a value or an operator, never both: `value` is meaningful
/// only when `kind` is [`NodeKind::Value`], and `operator` is `Some` only
/// when `kind` is [`NodeKind::Operator`]. During reduction an operator node
/// is rewritten in place into a value node holding the computed result.
#[derive(Debug)]
pub struct ExprNode {
    pub(crate) kind:     NodeKind,
    pub(crate) value:    f64,
    pub(crate) operator: Option<Operator>,
    pub(crate) prev:     Option<NodeId>,
    pub(crate) next:     Option<NodeId>,
}

/// A doubly-linked chain of expression nodes backed by an arena.
///
/// The arena owns every node; links between nodes are arena indices rather
/// than references. Splicing a node out of the chain tombstones its slot, so
/// each node is destroyed exactly once and a stale id can never reach a live
/// node again.
#[derive(Debug)]
pub struct Chain {
    pub(crate) nodes: Vec<Option<ExprNode>>,
    pub(crate) head:  Option<NodeId>,
}

impl Chain {
    /// Builds an expression chain from a token sequence.
    ///
    /// Each token becomes exactly one node, appended at the tail with
    /// symmetric `prev`/`next` links. A token is classified as a numeric
    /// literal first; failing that, it is matched against the operator
    /// symbols.
    ///
    /// # Parameters
    /// - `tokens`: The token sequence, in input order.
    ///
    /// # Returns
    /// The chain, with its head at the node built from the first token.
    ///
    /// # Errors
    /// - `ParseError::EmptyInput` if the token sequence is empty.
    /// - `ParseError::UnknownToken` if a token is neither a numeric literal
    ///   nor one of `+ - * / ^`. Parentheses end up here as well: they are
    ///   tokenized but carry no meaning in a flat chain.
    ///
    /// # Example
    /// ```
    /// use reducta::engine::{chain::Chain, tokenizer::tokenize};
    ///
    /// let tokens = tokenize("2 + 3").unwrap();
    /// let chain = Chain::from_tokens(&tokens).unwrap();
    /// assert!(chain.validate().is_ok());
    /// ```
    pub fn from_tokens(tokens: &[String]) -> Result<Self, ParseError> {
        let mut chain = Self { nodes: Vec::with_capacity(tokens.len()),
                               head:  None, };
        let mut last: Option<NodeId> = None;

        for token in tokens {
            let node = if let Some(value) = parse_number(token) {
                ExprNode { kind:     NodeKind::Value,
                           value,
                           operator: None,
                           prev:     last,
                           next:     None, }
            } else if let Some(operator) = Operator::from_symbol(token) {
                ExprNode { kind:     NodeKind::Operator,
                           value:    0.0,
                           operator: Some(operator),
                           prev:     last,
                           next:     None, }
            } else {
                return Err(ParseError::UnknownToken { token: token.clone() });
            };

            let id = chain.nodes.len();
            chain.nodes.push(Some(node));
            match last {
                Some(tail) => chain.node_mut(tail).next = Some(id),
                None => chain.head = Some(id),
            }
            last = Some(id);
        }

        if chain.head.is_none() {
            return Err(ParseError::EmptyInput);
        }
        Ok(chain)
    }

    /// Returns the node behind `id`. The id must refer to a live node.
    pub(crate) fn node(&self, id: NodeId) -> &ExprNode {
        self.nodes[id].as_ref()
                      .expect("chain ids always point at live nodes")
    }
    /// Returns the node behind `id` mutably. The id must refer to a live
    /// node.
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut ExprNode {
        self.nodes[id].as_mut()
                      .expect("chain ids always point at live nodes")
    }
    /// Takes the node behind `id` out of the arena, tombstoning its slot.
    /// The id must refer to a live node; a second take of the same id is an
    /// internal invariant violation, not a recoverable state.
    pub(crate) fn remove(&mut self, id: NodeId) -> ExprNode {
        self.nodes[id].take()
                      .expect("a chain node is spliced out at most once")
    }
}
