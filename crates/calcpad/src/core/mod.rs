//! Arithmetic core: character set, tokenizer, parser and evaluator
//!
//! Nothing in here touches a display. The controller in [`crate::calculator`]
//! turns every [`CalcError`] into the error marker on the result line.

pub mod charset;
pub mod evaluator;
pub mod format;
mod operations;
pub mod parser;

pub use operations::Operation;

use thiserror::Error;

/// Result type for core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Failures while validating, parsing or evaluating an expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Expression is empty or whitespace only
    #[error("Empty expression")]
    EmptyExpression,
    /// A character outside the arithmetic character set
    #[error("Invalid character: '{0}'")]
    InvalidCharacter(char),
    /// Syntactically malformed expression
    #[error("Invalid expression: {0}")]
    ParseError(String),
}

impl CalcError {
    /// Creates a parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError(message.into())
    }
}
