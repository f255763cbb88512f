//! The guarded expression buffer
//!
//! Appends are checked before they touch the buffer so that it always holds
//! something that could still become a valid expression. A rejected append is
//! not an error; it is reported as [`Appended::Rejected`] and the buffer is
//! left alone.

use serde::{Deserialize, Serialize};

use crate::core::charset;

/// Whether anything has been typed yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BufferState {
    /// Nothing typed, or cleared
    Empty,
    /// At least one character in the buffer
    Building,
}

/// Why an append was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// `+`, `*` or `/` as the first character
    LeadingOperator,
    /// An operator directly after another operator
    DoubleOperator,
    /// A second `.` in the same number
    DuplicateDecimal,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeadingOperator => write!(f, "operator cannot start an expression"),
            Self::DoubleOperator => write!(f, "operator follows another operator"),
            Self::DuplicateDecimal => write!(f, "number already has a decimal point"),
        }
    }
}

/// Outcome of [`Expression::push`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appended {
    /// The character was appended as is
    Accepted,
    /// A `0` was inserted before the `.` so the number reads `0.`
    ZeroPadded,
    /// The buffer is unchanged
    Rejected(Rejection),
}

/// In-progress expression text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    text: String,
}

impl Expression {
    /// Creates an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The buffer contents
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true if nothing has been typed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Empty or building
    #[must_use]
    pub fn state(&self) -> BufferState {
        if self.text.is_empty() {
            BufferState::Empty
        } else {
            BufferState::Building
        }
    }

    /// The number currently being typed
    #[must_use]
    pub fn current_segment(&self) -> &str {
        charset::current_segment(&self.text)
    }

    /// Checks why `ch` cannot be appended, if it cannot
    #[must_use]
    pub fn check(&self, ch: char) -> Option<Rejection> {
        if self.text.is_empty() && matches!(ch, '+' | '*' | '/') {
            return Some(Rejection::LeadingOperator);
        }
        if charset::is_operator(ch) && self.text.ends_with(charset::is_operator) {
            return Some(Rejection::DoubleOperator);
        }
        if ch == '.' && self.current_segment().contains('.') {
            return Some(Rejection::DuplicateDecimal);
        }
        None
    }

    /// Appends a character if the guards allow it
    pub fn push(&mut self, ch: char) -> Appended {
        if let Some(rejection) = self.check(ch) {
            return Appended::Rejected(rejection);
        }

        let padded = ch == '.' && self.current_segment().is_empty();
        if padded {
            self.text.push('0');
        }
        self.text.push(ch);

        if padded {
            Appended::ZeroPadded
        } else {
            Appended::Accepted
        }
    }

    /// Removes the last character, returning it
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Empties the buffer
    pub fn clear(&mut self) {
        self.text.clear();
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
