//! Lexical validation of input lines
//!
//! A line is a sequence of tokens separated by single spaces. Each token must
//! be a non-negative integer literal without leading zeros, one of the binary
//! operators `+ - * /`, or one of the words `sqrt`, `undo`, `clear`.

use once_cell::sync::Lazy;
use regex::Regex;

static VALID_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0|[1-9]\d*|\+|-|\*|/|sqrt|undo|clear)$").unwrap());

static INTEGER_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(0|[1-9]\d*)$").unwrap());

/// Token that undoes the latest reversible instruction
pub const UNDO: &str = "undo";

/// Token that empties the stack and the history
pub const CLEAR: &str = "clear";

/// Split a line into tokens on single spaces, preserving order.
///
/// Consecutive spaces produce empty tokens, which `validate` rejects.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(' ').collect()
}

/// Check whether a single token belongs to the grammar
pub fn is_valid_token(token: &str) -> bool {
    VALID_TOKEN.is_match(token)
}

/// Check whether a token is an integer literal
pub fn is_integer_literal(token: &str) -> bool {
    INTEGER_LITERAL.is_match(token)
}

/// Check that every token of `line` belongs to the grammar.
///
/// An empty line is a single empty token and is therefore rejected.
pub fn validate(line: &str) -> bool {
    tokenize(line).into_iter().all(is_valid_token)
}
