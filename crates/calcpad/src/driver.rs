//! Unified driver interface
//!
//! Write a scenario once against [`CalculatorDriver`] and run it on every
//! host: through mock DOM events ([`DomDriver`]) or straight against the
//! controller ([`HeadlessDriver`]).

use crate::calculator::Calculator;
use crate::dom::{DomEvent, MockDom, INPUT_ID, RESULT_ID};
use crate::keypad::Keypad;
use crate::screen::TextScreen;

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses a keyboard key; returns true if the calculator handled it
    fn press_key(&mut self, key: &str) -> bool;

    /// Clicks a keypad button by element id; returns true if handled
    fn click_button(&mut self, element_id: &str) -> bool;

    /// Text of the input line
    fn input_text(&self) -> String;

    /// Text of the result line
    fn result_text(&self) -> String;

    /// Presses one key per character of `text`
    fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press_key(ch.encode_utf8(&mut [0; 4]));
        }
    }
}

/// Drives a calculator rendering into a [`MockDom`] by dispatching events
#[derive(Debug)]
pub struct DomDriver {
    calculator: Calculator<MockDom>,
    keypad: Keypad,
}

impl Default for DomDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl DomDriver {
    /// Creates the calculator page and mounts the controller on it
    #[must_use]
    pub fn new() -> Self {
        let keypad = Keypad::new();
        let dom = MockDom::calculator(&keypad);
        Self {
            calculator: Calculator::new(dom),
            keypad,
        }
    }

    /// Dispatches an event; returns whether its default action was prevented
    pub fn dispatch(&mut self, event: DomEvent) -> bool {
        let handled = match &event {
            DomEvent::Click { element_id } => self.calculator.click(&self.keypad, element_id),
            DomEvent::KeyDown { key } => self.calculator.press_key(key),
        };
        self.calculator.screen_mut().record_event(event, handled);
        handled
    }

    /// The page
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.calculator.screen()
    }

    /// The controller
    #[must_use]
    pub fn calculator(&self) -> &Calculator<MockDom> {
        &self.calculator
    }

    /// The keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }
}

impl CalculatorDriver for DomDriver {
    fn press_key(&mut self, key: &str) -> bool {
        self.dispatch(DomEvent::key_down(key))
    }

    fn click_button(&mut self, element_id: &str) -> bool {
        self.dispatch(DomEvent::click(element_id))
    }

    fn input_text(&self) -> String {
        self.dom()
            .get_element_text(INPUT_ID)
            .unwrap_or_default()
            .to_string()
    }

    fn result_text(&self) -> String {
        self.dom()
            .get_element_text(RESULT_ID)
            .unwrap_or_default()
            .to_string()
    }
}

/// Drives a calculator rendering into a [`TextScreen`]
#[derive(Debug)]
pub struct HeadlessDriver {
    calculator: Calculator<TextScreen>,
    keypad: Keypad,
}

impl Default for HeadlessDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDriver {
    /// Creates a headless calculator
    #[must_use]
    pub fn new() -> Self {
        Self {
            calculator: Calculator::new(TextScreen::new()),
            keypad: Keypad::new(),
        }
    }

    /// The controller
    #[must_use]
    pub fn calculator(&self) -> &Calculator<TextScreen> {
        &self.calculator
    }
}

impl CalculatorDriver for HeadlessDriver {
    fn press_key(&mut self, key: &str) -> bool {
        self.calculator.press_key(key)
    }

    fn click_button(&mut self, element_id: &str) -> bool {
        self.calculator.click(&self.keypad, element_id)
    }

    fn input_text(&self) -> String {
        self.calculator.screen().input().to_string()
    }

    fn result_text(&self) -> String {
        self.calculator.screen().result().to_string()
    }
}
