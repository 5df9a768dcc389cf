#[derive(Debug)]
/// Represents all errors that can occur while reducing a validated expression
/// chain.
///
/// Division by zero and out-of-range exponentiation are deliberately absent:
/// reduction follows native floating-point semantics, so those cases yield
/// IEEE-754 infinity or NaN instead of an error.
pub enum EvalError {
    /// A reduction pass reached an operator node whose operator tag was
    /// already cleared. A correctly built chain never contains such a node,
    /// so this signals an internal inconsistency rather than bad input.
    UnsupportedOperator,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedOperator => write!(f,
                                                "Reduction failed: encountered an operator node without an operator tag."),
        }
    }
}

impl std::error::Error for EvalError {}
