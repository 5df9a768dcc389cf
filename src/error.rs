/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing an expression,
/// building the expression chain, or validating its syntax. Parse errors
/// include empty input, oversized or unrecognized tokens, and violations of
/// the value/operator alternation rule.
pub mod parse_error;

/// Reduction errors.
///
/// Contains the error types that can be raised while reducing a validated
/// expression chain to a scalar. These signal internal inconsistencies rather
/// than user mistakes; ordinary floating-point edge cases such as division by
/// zero are not errors and propagate as IEEE-754 special values.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
