//! On-screen keypad layout and keyboard mapping
//!
//! Buttons and physical keys both resolve to a [`KeypadAction`]; the
//! controller only ever sees actions.

use serde::{Deserialize, Serialize};

use crate::core::Operation;
use crate::dom::DomElement;

/// What a button or key asks the calculator to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeypadAction {
    /// Append a digit (0-9)
    Digit(u8),
    /// Append a decimal point
    Decimal,
    /// Append an operator
    Operator(Operation),
    /// Append `(`
    OpenParen,
    /// Append `)`
    CloseParen,
    /// Evaluate the expression
    Equals,
    /// Clear buffer and both displays
    Clear,
    /// Delete the last character
    Backspace,
}

impl KeypadAction {
    /// Maps a keyboard key name to an action
    ///
    /// Recognized: digits, `+ - * /`, `( )`, `.`, `Enter`, `Backspace`, `c`/`C`.
    /// Anything else yields `None` and must be left to the host.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => return Some(Self::Equals),
            "Backspace" => return Some(Self::Backspace),
            _ => {}
        }

        let mut chars = key.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return None;
        };
        match ch {
            'c' | 'C' => Some(Self::Clear),
            other => Self::from_char(other),
        }
    }

    /// Maps a character that the keypad can append to its action
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => ch
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .map(Self::Digit),
            '.' => Some(Self::Decimal),
            '(' => Some(Self::OpenParen),
            ')' => Some(Self::CloseParen),
            other => Operation::from_char(other).map(Self::Operator),
        }
    }

    /// Returns the character this action appends, if it appends one
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            Self::Operator(op) => Some(op.symbol()),
            Self::OpenParen => Some('('),
            Self::CloseParen => Some(')'),
            Self::Equals | Self::Clear | Self::Backspace => None,
        }
    }

    /// Returns the key name that triggers this action
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::Equals => "Enter".to_string(),
            Self::Backspace => "Backspace".to_string(),
            Self::Clear => "c".to_string(),
            other => other.to_char().map(String::from).unwrap_or_default(),
        }
    }

    /// Returns the button label
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "⌫".to_string(),
            other => other.to_char().map(String::from).unwrap_or_default(),
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: KeypadAction,
    /// DOM element id
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button, deriving its element id from the action
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        let id = match action {
            KeypadAction::Digit(d) => format!("btn-{d}"),
            KeypadAction::Decimal => "btn-decimal".to_string(),
            KeypadAction::Operator(op) => format!("btn-{}", op_name(op)),
            KeypadAction::OpenParen => "btn-open-paren".to_string(),
            KeypadAction::CloseParen => "btn-close-paren".to_string(),
            KeypadAction::Equals => "btn-equals".to_string(),
            KeypadAction::Clear => "btn-clear".to_string(),
            KeypadAction::Backspace => "btn-backspace".to_string(),
        };
        Self {
            action,
            id,
            row,
            col,
        }
    }

    /// Builds the `<button>` element for this button
    #[must_use]
    pub fn to_dom_element(&self) -> DomElement {
        DomElement::new("button")
            .with_id(&self.id)
            .with_text(&self.action.label())
            .with_class("keypad-btn")
            .with_attr("data-key", &self.action.key())
    }
}

const fn op_name(op: Operation) -> &'static str {
    match op {
        Operation::Add => "plus",
        Operation::Subtract => "minus",
        Operation::Multiply => "times",
        Operation::Divide => "divide",
    }
}

/// Keypad layout:
/// ```text
/// [ C ] [ ( ] [ ) ] [ / ]
/// [ 7 ] [ 8 ] [ 9 ] [ * ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ 0 ] [ . ] [ ⌫ ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        use KeypadAction::{
            Backspace, Clear, CloseParen, Decimal, Digit, Equals, OpenParen, Operator,
        };

        let layout = [
            [Clear, OpenParen, CloseParen, Operator(Operation::Divide)],
            [Digit(7), Digit(8), Digit(9), Operator(Operation::Multiply)],
            [Digit(4), Digit(5), Digit(6), Operator(Operation::Subtract)],
            [Digit(1), Digit(2), Digit(3), Operator(Operation::Add)],
            [Digit(0), Decimal, Backspace, Equals],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, actions)| {
                actions
                    .iter()
                    .enumerate()
                    .map(move |(col, action)| KeypadButton::new(*action, row, col))
            })
            .collect();

        Self {
            buttons,
            rows: layout.len(),
            cols: 4,
        }
    }

    /// Number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Button at a grid position
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Button with the given element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Button that appends the given character
    #[must_use]
    pub fn find_button_by_char(&self, ch: char) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.action.to_char() == Some(ch))
    }

    /// Action for a click on the element with this id
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_button_by_id(element_id).map(|b| b.action)
    }

    /// Builds the keypad container with all buttons
    #[must_use]
    pub fn to_dom_element(&self) -> DomElement {
        self.buttons.iter().fold(
            DomElement::new("div").with_id("keypad").with_class("keypad"),
            |keypad, button| keypad.with_child(button.to_dom_element()),
        )
    }
}
