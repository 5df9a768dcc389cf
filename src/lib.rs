//! # reducta
//!
//! reducta is a flat infix arithmetic calculator written in Rust.
//! It tokenizes an expression, builds a doubly-linked chain of expression
//! nodes, validates that values and operators alternate, and reduces the
//! chain in place, tier by tier, until a single scalar remains.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::engine::{chain::Chain, tokenizer::tokenize_into};

/// Implements the evaluation pipeline.
///
/// This module ties together the tokenizer, the numeric literal parser, the
/// expression chain, the syntax validator, and the reducer. Each stage feeds
/// the next and the first failure aborts the pipeline; there are no partial
/// results and no retries.
///
/// # Responsibilities
/// - Coordinates the core components: tokenizer, number parser, chain,
///   validator, and reducer.
/// - Defines the expression-node data model and its splice primitives.
/// - Manages the flow of data and errors between stages.
pub mod engine;
/// Provides unified error types for every pipeline stage.
///
/// This module defines all errors that can be raised while tokenizing,
/// building the chain, validating syntax, or reducing. Every error carries a
/// message naming the failing stage and, where applicable, the offending
/// token, value, or operator.
///
/// # Responsibilities
/// - Defines error enums for all failure modes of the pipeline.
/// - Supports integration with standard error handling traits.
pub mod error;

/// Evaluates a flat infix arithmetic expression to a scalar.
///
/// This function runs the whole pipeline on the provided text: each line is
/// tokenized into one shared token sequence (so multi-line input from a file
/// concatenates token-wise), the tokens become a doubly-linked expression
/// chain, the chain is validated and then reduced tier by tier until a single
/// value remains.
///
/// Division by zero does not fail: it follows native floating-point
/// semantics, so `1/0` evaluates to positive infinity.
///
/// # Parameters
/// - `expression`: The expression text, possibly spanning several lines.
/// - `print_tokens`: When `true`, every discovered token is printed on its
///   own line before evaluation.
///
/// # Returns
/// The final scalar the chain reduces to.
///
/// # Errors
/// Returns an error if tokenizing, chain building, validation, or reduction
/// fails, carrying a message that names the stage and the offending token.
///
/// # Examples
/// ```
/// use reducta::evaluate;
///
/// // Multiplication binds tighter than addition.
/// let result = evaluate("2 + 3 * 4", false).unwrap();
/// assert_eq!(result, 14.0);
///
/// // Two adjacent values violate the alternation invariant.
/// assert!(evaluate("2 3 +", false).is_err());
/// ```
pub fn evaluate(expression: &str, print_tokens: bool) -> Result<f64, Box<dyn std::error::Error>> {
    let mut tokens = Vec::new();
    for line in expression.lines() {
        tokenize_into(line, &mut tokens)?;
    }

    if print_tokens {
        for token in &tokens {
            println!("{token}");
        }
    }

    let chain = Chain::from_tokens(&tokens)?;
    chain.validate()?;
    Ok(chain.reduce()?)
}
