//! Mock DOM for exercising the calculator without a browser
//!
//! Mirrors the page the browser build mounts on: an `#input` line, a
//! `#result` line and the keypad buttons. [`MockDom`] is a [`Screen`], so a
//! [`Calculator`](crate::Calculator) can render straight into it.

use std::collections::HashMap;

use crate::keypad::Keypad;
use crate::screen::Screen;

/// Element id of the input line
pub const INPUT_ID: &str = "input";
/// Element id of the result line
pub const RESULT_ID: &str = "result";

/// A DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element id
    pub id: String,
    /// Tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates an element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the id
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Replaces the text content
    pub fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text_content);
    }

    /// Checks for a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Events the page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// Id of the clicked element
        element_id: String,
    },
    /// Key pressed while the page has focus
    KeyDown {
        /// Key name, as in `KeyboardEvent.key`
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a keydown event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// A dispatched event and whether its default action was prevented
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRecord {
    /// The event
    pub event: DomEvent,
    /// True when the calculator handled the event
    pub default_prevented: bool,
}

/// In-memory page
#[derive(Debug, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    event_history: Vec<DispatchRecord>,
}

impl MockDom {
    /// Creates an empty page
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator page: both lines showing `0` plus the keypad
    #[must_use]
    pub fn calculator(keypad: &Keypad) -> Self {
        let mut dom = Self::new();
        dom.register_element(
            DomElement::new("div")
                .with_id(INPUT_ID)
                .with_class("display-input")
                .with_text("0"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id(RESULT_ID)
                .with_class("display-result")
                .with_text("0"),
        );
        let keypad_element = keypad.to_dom_element();
        for button in &keypad_element.children {
            dom.register_element(button.clone());
        }
        dom.register_element(keypad_element);
        dom
    }

    /// Registers an element for id lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by id
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets element text by id
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Updates element text by id; unknown ids are ignored
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.set_text(text);
        }
    }

    /// Records a dispatched event
    pub fn record_event(&mut self, event: DomEvent, default_prevented: bool) {
        self.event_history.push(DispatchRecord {
            event,
            default_prevented,
        });
    }

    /// All dispatched events, oldest first
    #[must_use]
    pub fn event_history(&self) -> &[DispatchRecord] {
        &self.event_history
    }

    /// The most recently dispatched event
    #[must_use]
    pub fn last_event(&self) -> Option<&DispatchRecord> {
        self.event_history.last()
    }
}

impl Screen for MockDom {
    fn show_input(&mut self, text: &str) {
        self.set_element_text(INPUT_ID, text);
    }

    fn show_result(&mut self, text: &str) {
        self.set_element_text(RESULT_ID, text);
    }
}
