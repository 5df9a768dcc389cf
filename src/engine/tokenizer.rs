use crate::error::ParseError;

/// Maximum number of characters a single token may hold.
pub const MAX_TOKEN_LEN: usize = 1048;

const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\t' | '\r')
}

const fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^' | '(' | ')')
}

/// Splits an expression into an ordered sequence of token strings.
///
/// Runs of characters that are neither whitespace nor operator characters
/// form one token; every operator character forms a one-character token of
/// its own. Classification of the tokens happens later, when the expression
/// chain is built.
///
/// # Parameters
/// - `expression`: The raw expression text.
///
/// # Returns
/// The tokens in input order.
///
/// # Errors
/// Returns `ParseError::TokenTooLong` if a single token exceeds
/// [`MAX_TOKEN_LEN`] characters.
///
/// # Example
/// ```
/// use reducta::engine::tokenizer::tokenize;
///
/// let tokens = tokenize("12.5 * 2").unwrap();
/// assert_eq!(tokens, vec!["12.5", "*", "2"]);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    tokenize_into(expression, &mut tokens)?;
    Ok(tokens)
}
/// Tokenizes one chunk of input, appending to an existing token sequence.
///
/// Calling this repeatedly over successive lines of a larger document yields
/// the same sequence as tokenizing the whole document at once, which is how
/// file input is concatenated token-wise.
///
/// # Parameters
/// - `expression`: The chunk of raw text to tokenize.
/// - `tokens`: The sequence the discovered tokens are appended to.
///
/// # Errors
/// Returns `ParseError::TokenTooLong` if a single token exceeds
/// [`MAX_TOKEN_LEN`] characters.
///
/// # Example
/// ```
/// use reducta::engine::tokenizer::{tokenize, tokenize_into};
///
/// let mut tokens = Vec::new();
/// tokenize_into("12 +", &mut tokens).unwrap();
/// tokenize_into("3", &mut tokens).unwrap();
/// assert_eq!(tokens, tokenize("12 + 3").unwrap());
/// ```
pub fn tokenize_into(expression: &str, tokens: &mut Vec<String>) -> Result<(), ParseError> {
    let mut buffer = String::new();

    // The trailing sentinel acts as whitespace so the last token is flushed.
    for c in expression.chars().chain(std::iter::once('\n')) {
        let whitespace = is_whitespace(c);
        let operator = is_operator_char(c);
        debug_assert!(!(whitespace && operator),
                      "the whitespace and operator character sets must stay disjoint");

        if whitespace {
            if !buffer.is_empty() {
                tokens.push(std::mem::take(&mut buffer));
            }
            continue;
        }

        if operator {
            if !buffer.is_empty() {
                tokens.push(std::mem::take(&mut buffer));
            }
            tokens.push(c.to_string());
            continue;
        }

        if buffer.len() >= MAX_TOKEN_LEN {
            return Err(ParseError::TokenTooLong { limit: MAX_TOKEN_LEN });
        }
        buffer.push(c);
    }

    Ok(())
}
