use crate::engine::operator::Operator;

#[derive(Debug)]
/// Represents all errors that can occur before an expression is reduced:
/// while tokenizing, while building the expression chain, or while validating
/// its syntax.
pub enum ParseError {
    /// Tokenizing the input produced no tokens at all.
    EmptyInput,
    /// A single token grew past the maximum supported length.
    TokenTooLong {
        /// The maximum number of characters a token may hold.
        limit: usize,
    },
    /// A token matched neither a numeric literal nor an operator symbol.
    UnknownToken {
        /// The token encountered.
        token: String,
    },
    /// A value node was followed by something other than an operator.
    ExpectedOperator {
        /// The numeric value of the offending node.
        value: f64,
    },
    /// An operator node had no value on its left side.
    ExpectedValueBefore {
        /// The offending operator.
        operator: Operator,
    },
    /// An operator node had no value on its right side.
    ExpectedValueAfter {
        /// The offending operator.
        operator: Operator,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "Tokenizing produced no tokens: the expression is empty.")
            },

            Self::TokenTooLong { limit } => write!(f,
                                                   "Tokenizing failed: a token exceeds the maximum length of {limit} characters."),

            Self::UnknownToken { token } => write!(f,
                                                   "Building the expression chain failed: unknown token '{token}'."),

            Self::ExpectedOperator { value } => {
                write!(f, "Syntax error at token with value {value}: Expected Operator.")
            },

            Self::ExpectedValueBefore { operator } => write!(f,
                                                             "Syntax error at token with operator '{operator}': Expected Value before."),

            Self::ExpectedValueAfter { operator } => write!(f,
                                                            "Syntax error at token with operator '{operator}': Expected Value after."),
        }
    }
}

impl std::error::Error for ParseError {}
