/// The tokenizer module splits raw input into token strings.
///
/// The tokenizer scans the input character by character, collecting runs of
/// non-whitespace, non-operator characters into a buffer and emitting each
/// operator character as its own one-character token. The end of the input
/// acts as whitespace so the final buffered token is flushed.
///
/// # Responsibilities
/// - Converts the input character stream into an ordered token sequence.
/// - Supports streaming: successive lines append to the same sequence.
/// - Rejects tokens that exceed the maximum supported length.
pub mod tokenizer;

/// The number module parses numeric literal tokens.
///
/// Conversion is done by hand, digit by digit: integer digits are scaled by
/// their power of ten relative to the decimal point and fractional digits are
/// divided by increasing powers of ten. No generic string-to-number routine
/// is involved.
///
/// # Responsibilities
/// - Classifies a token as a numeric literal or not.
/// - Parses multi-digit integer and fractional parts, including a leading
///   decimal point.
pub mod number;

/// The operator module defines the supported arithmetic operators.
///
/// # Responsibilities
/// - Maps operator tokens to their typed representation and back.
/// - Applies an operator to two floating-point operands.
pub mod operator;

/// The chain module builds the doubly-linked expression chain.
///
/// Nodes live in an arena addressed by stable indices, so splicing a node out
/// of the chain updates index links and tombstones the slot instead of
/// freeing raw pointers. Every node is destroyed exactly once.
///
/// # Responsibilities
/// - Builds one node per token, alternating values and operators, linked in
///   input order.
/// - Rejects unrecognized tokens and empty token sequences.
/// - Provides the link and splice primitives used during reduction.
pub mod chain;

/// The validate module checks the chain's alternation invariant.
///
/// # Responsibilities
/// - Ensures every operator node has a value node on both sides.
/// - Ensures no two value nodes are adjacent.
pub mod validate;

/// The reducer module collapses a validated chain to a single scalar.
///
/// Reduction runs one left-to-right pass per precedence tier, in fixed order:
/// exponentiation, then multiplication/division, then addition/subtraction.
/// Each reduction rewrites the operator node in place into a value node and
/// splices out its two value neighbors, shrinking the chain by two nodes.
///
/// # Responsibilities
/// - Applies operators tier by tier, left to right within a tier.
/// - Maintains the chain links and head across splices.
/// - Extracts the final scalar from the last remaining node.
pub mod reducer;
