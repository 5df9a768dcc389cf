use crate::{
    engine::{
        chain::{Chain, NodeId, NodeKind},
        operator::Operator,
    },
    error::EvalError,
};

/// One precedence tier of the reduction.
#[derive(Debug, Clone, Copy)]
enum Tier {
    Pow,
    MulDiv,
    AddSub,
}

/// The tiers in evaluation order. Each tier is fully exhausted before the
/// next one begins.
const TIERS: [Tier; 3] = [Tier::Pow, Tier::MulDiv, Tier::AddSub];

impl Tier {
    const fn contains(self, operator: Operator) -> bool {
        match self {
            Self::Pow => matches!(operator, Operator::Pow),
            Self::MulDiv => matches!(operator, Operator::Mul | Operator::Div),
            Self::AddSub => matches!(operator, Operator::Add | Operator::Sub),
        }
    }
}

impl Chain {
    /// Reduces a validated chain to its final scalar.
    ///
    /// Runs one left-to-right pass per precedence tier: `^` first, then
    /// `*`/`/`, then `+`/`-`. Within a tier, operators are applied in the
    /// order encountered; no further associativity rule exists. Because the
    /// scan continues from the rewritten node's successor, chained same-tier
    /// operators like `2*3*4` resolve progressively within a single pass.
    ///
    /// The chain must have passed [`Chain::validate`]; reduction relies on
    /// the alternation invariant when it takes an operator's two value
    /// neighbors.
    ///
    /// # Returns
    /// The scalar held by the single node left after the final tier.
    ///
    /// # Errors
    /// `EvalError::UnsupportedOperator` if an operator node carries no
    /// operator tag, which signals an internal inconsistency.
    ///
    /// # Example
    /// ```
    /// use reducta::engine::{chain::Chain, tokenizer::tokenize};
    ///
    /// let tokens = tokenize("2 + 3 * 4").unwrap();
    /// let chain = Chain::from_tokens(&tokens).unwrap();
    /// chain.validate().unwrap();
    /// assert_eq!(chain.reduce().unwrap(), 14.0);
    /// ```
    pub fn reduce(mut self) -> Result<f64, EvalError> {
        for tier in TIERS {
            let mut cursor = self.head;
            while let Some(id) = cursor {
                let node = self.node(id);
                if node.kind == NodeKind::Value {
                    cursor = node.next;
                    continue;
                }

                let operator = node.operator.ok_or(EvalError::UnsupportedOperator)?;
                if tier.contains(operator) {
                    self.reduce_at(id, operator);
                }
                cursor = self.node(id).next;
            }
        }

        let last = self.head.expect("a built chain always keeps a head");
        let node = self.remove(last);
        debug_assert!(node.next.is_none(), "reduction must leave a single node");
        Ok(node.value)
    }

    /// Applies `operator` at node `id` and splices out its value neighbors.
    ///
    /// The operator node is rewritten in place: it becomes a value node
    /// holding the result and its operator tag is cleared. The former left
    /// and right neighbors are taken out of the arena, and the nodes two
    /// positions out (when present) are reconnected directly to the
    /// rewritten node. When no node remains to the left, the rewritten node
    /// becomes the new chain head.
    fn reduce_at(&mut self, id: NodeId, operator: Operator) {
        let left = self.node(id)
                       .prev
                       .expect("validated operator nodes have a left value");
        let right = self.node(id)
                        .next
                        .expect("validated operator nodes have a right value");
        let result = operator.apply(self.node(left).value, self.node(right).value);

        let node = self.node_mut(id);
        node.kind = NodeKind::Value;
        node.value = result;
        node.operator = None;

        match self.remove(left).prev {
            Some(before) => {
                self.node_mut(before).next = Some(id);
                self.node_mut(id).prev = Some(before);
            },
            None => {
                self.node_mut(id).prev = None;
                self.head = Some(id);
            },
        }

        let after = self.remove(right).next;
        self.node_mut(id).next = after;
        if let Some(after) = after {
            self.node_mut(after).prev = Some(id);
        }
    }
}
