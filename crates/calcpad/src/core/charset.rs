//! The arithmetic character set and the numeric-segment rules built on it

use super::{CalcError, CalcResult};

/// Characters the append guards treat as operators
pub const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// Returns true for `+ - * /`
#[must_use]
pub fn is_operator(ch: char) -> bool {
    OPERATORS.contains(&ch)
}

/// Returns true for characters that end a numeric segment: operators and parentheses.
///
/// Whitespace does not end a segment.
#[must_use]
pub fn is_segment_boundary(ch: char) -> bool {
    is_operator(ch) || ch == '(' || ch == ')'
}

/// Returns true for digits, operators, `.`, parentheses and whitespace
#[must_use]
pub fn is_allowed(ch: char) -> bool {
    ch.is_ascii_digit() || is_segment_boundary(ch) || ch == '.' || ch.is_whitespace()
}

/// Full-match check: the expression is non-empty and every character is allowed
#[must_use]
pub fn is_valid_expression(expr: &str) -> bool {
    !expr.is_empty() && expr.chars().all(is_allowed)
}

/// Like [`is_valid_expression`] but reports the first offending character
pub fn validate(expr: &str) -> CalcResult<()> {
    if expr.is_empty() {
        return Err(CalcError::EmptyExpression);
    }
    match expr.chars().find(|&ch| !is_allowed(ch)) {
        Some(ch) => Err(CalcError::InvalidCharacter(ch)),
        None => Ok(()),
    }
}

/// Strips every character outside the allowed set
#[must_use]
pub fn sanitize(expr: &str) -> String {
    expr.chars().filter(|&ch| is_allowed(ch)).collect()
}

/// The numeric segment currently being typed: everything after the last
/// operator or parenthesis
#[must_use]
pub fn current_segment(expr: &str) -> &str {
    match expr.rfind(is_segment_boundary) {
        // boundaries are all single-byte ASCII
        Some(idx) => &expr[idx + 1..],
        None => expr,
    }
}
