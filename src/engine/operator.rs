/// Represents an arithmetic operator carried by an operator node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl Operator {
    /// Matches a token against the literal operator symbols.
    ///
    /// # Parameters
    /// - `token`: The token text to classify.
    ///
    /// # Returns
    /// - `Some(Operator)`: If the token is exactly one of `+ - * / ^`.
    /// - `None`: For any other token.
    #[must_use]
    pub fn from_symbol(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "^" => Some(Self::Pow),
            _ => None,
        }
    }
    /// Returns the character this operator was tokenized from.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
    /// Applies the operator to two operands.
    ///
    /// Division by zero is not guarded: it follows native floating-point
    /// semantics and yields IEEE-754 infinity or NaN.
    ///
    /// # Parameters
    /// - `left`: The left operand.
    /// - `right`: The right operand.
    ///
    /// # Returns
    /// The result of `left <op> right` as an `f64`.
    ///
    /// # Example
    /// ```
    /// use reducta::engine::operator::Operator;
    ///
    /// assert_eq!(Operator::Pow.apply(2.0, 3.0), 8.0);
    /// assert_eq!(Operator::Div.apply(1.0, 0.0), f64::INFINITY);
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.powf(right),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
