//! Display surfaces the controller renders to

/// The input line and the result line
///
/// Implemented by every host: the mock DOM, the browser document, the
/// terminal. Writes are plain text replacements.
pub trait Screen {
    /// Replaces the input line
    fn show_input(&mut self, text: &str);

    /// Replaces the result line
    fn show_result(&mut self, text: &str);
}

impl<S: Screen + ?Sized> Screen for &mut S {
    fn show_input(&mut self, text: &str) {
        (**self).show_input(text);
    }

    fn show_result(&mut self, text: &str) {
        (**self).show_result(text);
    }
}

/// In-memory screen holding the two lines as strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextScreen {
    input: String,
    result: String,
    writes: usize,
}

impl Default for TextScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TextScreen {
    /// Creates a screen showing `0` on both lines, like a freshly loaded page
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: "0".to_string(),
            result: "0".to_string(),
            writes: 0,
        }
    }

    /// Current input line
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current result line
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Total number of writes to either line
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Screen for TextScreen {
    fn show_input(&mut self, text: &str) {
        text.clone_into(&mut self.input);
        self.writes += 1;
    }

    fn show_result(&mut self, text: &str) {
        text.clone_into(&mut self.result);
        self.writes += 1;
    }
}
