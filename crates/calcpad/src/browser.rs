//! Browser bindings
//!
//! Mounts a [`Calculator`] on a page that has `#input` and `#result`
//! elements and `<button data-key="...">` keypad buttons. Keyboard input is
//! read from the window; only keys the calculator handles get their default
//! action prevented.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, KeyboardEvent, MouseEvent};

use crate::calculator::Calculator;
use crate::dom::{INPUT_ID, RESULT_ID};
use crate::screen::Screen;

/// Screen backed by the document's display elements
#[derive(Debug)]
pub struct DocumentScreen {
    input: Element,
    result: Element,
}

impl DocumentScreen {
    /// Looks up `#input` and `#result`
    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        let lookup = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| JsValue::from_str(&format!("missing #{id} element")))
        };
        Ok(Self {
            input: lookup(INPUT_ID)?,
            result: lookup(RESULT_ID)?,
        })
    }
}

impl Screen for DocumentScreen {
    fn show_input(&mut self, text: &str) {
        self.input.set_text_content(Some(text));
    }

    fn show_result(&mut self, text: &str) {
        self.result.set_text_content(Some(text));
    }
}

type SharedCalculator = Rc<RefCell<Calculator<DocumentScreen>>>;

/// Handle to a mounted calculator, for pages that call it from script
#[wasm_bindgen]
#[derive(Debug)]
pub struct CalculatorHandle {
    inner: SharedCalculator,
}

#[wasm_bindgen]
impl CalculatorHandle {
    /// Appends every character of `value`
    pub fn append(&self, value: &str) {
        let mut calculator = self.inner.borrow_mut();
        for ch in value.chars() {
            calculator.append(ch);
        }
    }

    /// Deletes the last character
    pub fn backspace(&self) {
        self.inner.borrow_mut().backspace();
    }

    /// Clears buffer and both displays
    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }

    /// Evaluates the buffer
    pub fn evaluate(&self) {
        self.inner.borrow_mut().evaluate();
    }

    /// Current buffer contents
    #[wasm_bindgen(getter)]
    pub fn expression(&self) -> String {
        self.inner.borrow().expression().to_string()
    }
}

/// Mounts the calculator on the current document and wires its input sources
#[wasm_bindgen]
pub fn mount() -> Result<CalculatorHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let calculator: SharedCalculator = Rc::new(RefCell::new(Calculator::new(
        DocumentScreen::from_document(&document)?,
    )));

    let on_key = {
        let calculator = Rc::clone(&calculator);
        Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if calculator.borrow_mut().press_key(&event.key()) {
                event.prevent_default();
            }
        })
    };
    window.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();

    let buttons = document.query_selector_all("button[data-key]")?;
    let mut wired = 0;
    for index in 0..buttons.length() {
        let Some(button) = buttons
            .get(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let Some(key) = button.get_attribute("data-key") else {
            continue;
        };

        let calculator = Rc::clone(&calculator);
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
            calculator.borrow_mut().press_key(&key);
        });
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
        wired += 1;
    }

    console::log_1(&format!("calcpad mounted ({wired} buttons)").into());
    Ok(CalculatorHandle { inner: calculator })
}

/// Module start: installs the panic hook
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
