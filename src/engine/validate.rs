use crate::{
    engine::chain::{Chain, NodeKind},
    error::ParseError,
};

impl Chain {
    /// Checks the value/operator alternation invariant of the chain.
    ///
    /// Walks the chain head to tail. A value node followed by anything other
    /// than an operator node is rejected, as is an operator node missing a
    /// value node on either side. A chain that passes strictly alternates
    /// `Value, Operator, Value, …, Value` and is safe to reduce.
    ///
    /// # Errors
    /// - `ParseError::ExpectedOperator` naming the offending value, when two
    ///   values are adjacent.
    /// - `ParseError::ExpectedValueBefore` / `ParseError::ExpectedValueAfter`
    ///   naming the offending operator and the side the value was missing on.
    ///
    /// # Example
    /// ```
    /// use reducta::engine::{chain::Chain, tokenizer::tokenize};
    ///
    /// let tokens = tokenize("+ 2").unwrap();
    /// let chain = Chain::from_tokens(&tokens).unwrap();
    /// let err = chain.validate().unwrap_err();
    /// assert!(err.to_string().contains("Expected Value before"));
    /// ```
    pub fn validate(&self) -> Result<(), ParseError> {
        if let Some(head) = self.head {
            debug_assert!(self.node(head).prev.is_none(),
                          "the chain head must not have a predecessor");
        }

        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self.node(id);
            match node.kind {
                NodeKind::Value => {
                    if let Some(next) = node.next
                       && self.node(next).kind != NodeKind::Operator
                    {
                        return Err(ParseError::ExpectedOperator { value: node.value });
                    }
                },
                NodeKind::Operator => {
                    let operator = node.operator
                                       .expect("operator nodes are built with an operator tag");
                    match node.prev {
                        Some(prev) if self.node(prev).kind == NodeKind::Value => {},
                        _ => return Err(ParseError::ExpectedValueBefore { operator }),
                    }
                    match node.next {
                        Some(next) if self.node(next).kind == NodeKind::Value => {},
                        _ => return Err(ParseError::ExpectedValueAfter { operator }),
                    }
                },
            }
            cursor = node.next;
        }

        Ok(())
    }
}
