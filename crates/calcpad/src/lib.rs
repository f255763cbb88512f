//! calcpad - keypad calculator core
//!
//! Keystrokes and button clicks build an arithmetic expression in a guarded
//! buffer; on demand the buffer is validated, parsed and evaluated, and the
//! outcome is rendered to a result line. Hosts (a browser page, a terminal,
//! the in-memory mock DOM used in tests) only implement [`Screen`] and feed
//! key names or keypad actions to a [`Calculator`].
//!
//! # Example
//!
//! ```rust
//! use calcpad::prelude::*;
//!
//! let mut calc = Calculator::new(TextScreen::new());
//! for key in ["2", "+", "3", "*", "4", "Enter"] {
//!     calc.press_key(key);
//! }
//! assert_eq!(calc.screen().input(), "2+3*4");
//! assert_eq!(calc.screen().result(), "14");
//!
//! // guarded input: a second operator is dropped
//! calc.press_key("+");
//! calc.press_key("*");
//! assert_eq!(calc.expression().as_str(), "2+3*4+");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod calculator;
pub mod core;
pub mod dom;
pub mod driver;
pub mod expression;
pub mod keypad;
pub mod screen;

#[cfg(feature = "wasm")]
pub mod browser;

pub use calculator::{Calculator, Snapshot, EMPTY_DISPLAY, ERROR_MARKER};
pub use screen::{Screen, TextScreen};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calculator::{Calculator, Snapshot, EMPTY_DISPLAY, ERROR_MARKER};
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::format::format_number;
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{CalcError, CalcResult, Operation};
    pub use crate::dom::{DomElement, DomEvent, MockDom};
    pub use crate::driver::{CalculatorDriver, DomDriver, HeadlessDriver};
    pub use crate::expression::{Appended, BufferState, Expression, Rejection};
    pub use crate::keypad::{Keypad, KeypadAction, KeypadButton};
    pub use crate::screen::{Screen, TextScreen};
}
