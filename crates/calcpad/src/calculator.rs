//! The calculator controller
//!
//! Owns the expression buffer and the screen. Every host (mock DOM, browser,
//! terminal) drives it through [`Calculator::apply`] or the four core
//! operations, one event at a time.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::charset;
use crate::core::evaluator::Evaluator;
use crate::core::format::format_number;
use crate::core::CalcResult;
use crate::expression::{Appended, BufferState, Expression};
use crate::keypad::{Keypad, KeypadAction};
use crate::screen::Screen;

/// Text shown on the result line when validation or evaluation fails
pub const ERROR_MARKER: &str = "Error";

/// Text shown on a display line that has nothing to show
pub const EMPTY_DISPLAY: &str = "0";

/// Serializable view of the calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Raw buffer contents
    pub expression: String,
    /// What the input line shows
    pub input: String,
    /// What the result line shows
    pub result: String,
    /// Empty or building
    pub state: BufferState,
}

impl Snapshot {
    /// Serializes the snapshot as JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Expression builder and evaluator bound to a screen
#[derive(Debug)]
pub struct Calculator<S: Screen> {
    expression: Expression,
    evaluator: Evaluator,
    screen: S,
    last_result: String,
}

impl<S: Screen> Calculator<S> {
    /// Creates a calculator and renders the (empty) input line
    pub fn new(screen: S) -> Self {
        let mut calc = Self {
            expression: Expression::new(),
            evaluator: Evaluator::new(),
            screen,
            last_result: EMPTY_DISPLAY.to_string(),
        };
        calc.render_input();
        calc
    }

    /// The expression buffer
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Empty or building
    pub fn state(&self) -> BufferState {
        self.expression.state()
    }

    /// The screen
    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// The screen, mutably
    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    /// Consumes the calculator, returning its screen
    pub fn into_screen(self) -> S {
        self.screen
    }

    /// Current view of buffer and displays
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            expression: self.expression.to_string(),
            input: self.input_text().to_string(),
            result: self.last_result.clone(),
            state: self.state(),
        }
    }

    /// Appends a character; rejected characters are dropped silently
    pub fn append(&mut self, ch: char) {
        match self.expression.push(ch) {
            Appended::Rejected(reason) => {
                debug!(%ch, %reason, buffer = %self.expression, "append rejected");
            }
            outcome => {
                trace!(%ch, ?outcome, buffer = %self.expression, "append");
            }
        }
        self.render_input();
    }

    /// Deletes the last character, if any
    pub fn backspace(&mut self) {
        if let Some(ch) = self.expression.pop() {
            trace!(%ch, buffer = %self.expression, "backspace");
        }
        self.render_input();
    }

    /// Empties the buffer and resets both displays
    pub fn clear(&mut self) {
        self.expression.clear();
        self.screen.show_input(EMPTY_DISPLAY);
        self.show_result(EMPTY_DISPLAY.to_string());
        trace!("cleared");
    }

    /// Evaluates the buffer and shows the result or the error marker
    ///
    /// An empty or whitespace-only buffer leaves the result line untouched.
    pub fn evaluate(&mut self) {
        let text = self.expression.as_str();
        if text.trim().is_empty() {
            return;
        }

        let shown = match self.compute(text) {
            Ok(value) => {
                debug!(expression = text, value, "evaluated");
                format_number(value)
            }
            Err(err) => {
                debug!(expression = text, error = %err, "evaluation failed");
                ERROR_MARKER.to_string()
            }
        };
        self.show_result(shown);
    }

    /// Dispatches a keypad action to the matching core operation
    pub fn apply(&mut self, action: KeypadAction) {
        match action {
            KeypadAction::Equals => self.evaluate(),
            KeypadAction::Clear => self.clear(),
            KeypadAction::Backspace => self.backspace(),
            other => {
                if let Some(ch) = other.to_char() {
                    self.append(ch);
                }
            }
        }
    }

    /// Handles a keyboard key; returns false if the key is not recognized
    /// and the host should keep its default handling
    pub fn press_key(&mut self, key: &str) -> bool {
        match KeypadAction::from_key(key) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => {
                trace!(key, "ignored key");
                false
            }
        }
    }

    /// Handles a click on a keypad button; returns false for unknown ids
    pub fn click(&mut self, keypad: &Keypad, element_id: &str) -> bool {
        match keypad.handle_click(element_id) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }

    fn compute(&self, text: &str) -> CalcResult<f64> {
        charset::validate(text)?;
        let sanitized = charset::sanitize(text);
        self.evaluator.evaluate_str(&sanitized)
    }

    fn input_text(&self) -> &str {
        input_line(&self.expression)
    }

    fn render_input(&mut self) {
        self.screen.show_input(input_line(&self.expression));
    }

    fn show_result(&mut self, text: String) {
        self.screen.show_result(&text);
        self.last_result = text;
    }
}

/// What the input line shows for a buffer
fn input_line(expression: &Expression) -> &str {
    if expression.is_empty() {
        EMPTY_DISPLAY
    } else {
        expression.as_str()
    }
}

impl Default for Calculator<crate::screen::TextScreen> {
    fn default() -> Self {
        Self::new(crate::screen::TextScreen::new())
    }
}
