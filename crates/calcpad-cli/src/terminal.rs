//! Interactive terminal host
//!
//! Draws the two display lines and a keypad legend with crossterm, and feeds
//! key presses to the calculator as key names, the same way a browser page
//! forwards `keydown` events.

use std::io::{self, IsTerminal, Write};

use calcpad::prelude::*;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

const TITLE_ROW: u16 = 0;
const INPUT_ROW: u16 = 2;
const RESULT_ROW: u16 = 3;
const KEYPAD_ROW: u16 = 5;

const HELP: &str = "Enter evaluates, Backspace deletes, c clears, Esc quits";

/// [`Screen`] that draws into a terminal through crossterm commands
///
/// `Screen` methods cannot fail, so the first write error is kept and
/// handed back through [`TerminalScreen::take_error`].
#[derive(Debug)]
pub struct TerminalScreen<W: Write> {
    out: W,
    input: String,
    result: String,
    keypad: Keypad,
    error: Option<io::Error>,
}

impl<W: Write> TerminalScreen<W> {
    /// Wraps a writer; nothing is drawn until [`TerminalScreen::draw`]
    pub fn new(out: W) -> Self {
        Self {
            out,
            input: EMPTY_DISPLAY.to_string(),
            result: EMPTY_DISPLAY.to_string(),
            keypad: Keypad::new(),
            error: None,
        }
    }

    /// Redraws the whole frame
    pub fn draw(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            Clear(ClearType::All),
            MoveTo(0, TITLE_ROW),
            Print("calcpad")
        )?;
        let (rows, cols) = self.keypad.dimensions();
        let mut y = KEYPAD_ROW;
        for row in 0..rows {
            let line = (0..cols)
                .filter_map(|col| self.keypad.get_button_at(row, col))
                .map(|button| format!("[{:^3}]", button.action.label()))
                .collect::<Vec<_>>()
                .join(" ");
            queue!(self.out, MoveTo(2, y), Print(line))?;
            y += 1;
        }
        queue!(self.out, MoveTo(0, y + 1), Print(HELP))?;

        let input = format!("  {}", self.input);
        let result = format!("= {}", self.result);
        self.draw_line(INPUT_ROW, &input)?;
        self.draw_line(RESULT_ROW, &result)
    }

    /// Text currently on the input line
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Text currently on the result line
    pub fn result(&self) -> &str {
        &self.result
    }

    /// First write error since the last call, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// The underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw_line(&mut self, row: u16, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            Print(text)
        )?;
        self.out.flush()
    }

    fn record(&mut self, outcome: io::Result<()>) {
        if let Err(err) = outcome {
            self.error.get_or_insert(err);
        }
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn show_input(&mut self, text: &str) {
        text.clone_into(&mut self.input);
        let line = format!("  {text}");
        let outcome = self.draw_line(INPUT_ROW, &line);
        self.record(outcome);
    }

    fn show_result(&mut self, text: &str) {
        text.clone_into(&mut self.result);
        let line = format!("= {text}");
        let outcome = self.draw_line(RESULT_ROW, &line);
        self.record(outcome);
    }
}

/// What a terminal event means to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A key name for [`Calculator::press_key`]
    Key(String),
    /// Terminal was resized
    Redraw,
    /// End the session
    Quit,
    /// Nothing to do
    Ignore,
}

impl Input {
    /// Translates a crossterm event
    #[must_use]
    pub fn from_event(event: &Event) -> Self {
        match event {
            Event::Key(key) => Self::from_key(key),
            Event::Resize(..) => Self::Redraw,
            _ => Self::Ignore,
        }
    }

    /// Translates a key event into the browser's key naming
    #[must_use]
    pub fn from_key(key: &KeyEvent) -> Self {
        if key.kind != KeyEventKind::Press {
            return Self::Ignore;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c' | 'q') => Self::Quit,
                _ => Self::Ignore,
            };
        }
        match key.code {
            KeyCode::Esc => Self::Quit,
            KeyCode::Enter => Self::Key("Enter".to_string()),
            KeyCode::Backspace => Self::Key("Backspace".to_string()),
            KeyCode::Char(c) => Self::Key(c.to_string()),
            _ => Self::Ignore,
        }
    }
}

/// A calculator bound to a terminal screen
#[derive(Debug)]
pub struct Session<W: Write> {
    calculator: Calculator<TerminalScreen<W>>,
}

impl<W: Write> Session<W> {
    /// Draws the frame and mounts the calculator on it
    pub fn new(out: W) -> CliResult<Self> {
        let mut screen = TerminalScreen::new(out);
        screen.draw()?;
        let mut calculator = Calculator::new(screen);
        if let Some(err) = calculator.screen_mut().take_error() {
            return Err(err.into());
        }
        Ok(Self { calculator })
    }

    /// Handles one event; returns false once the session should end
    pub fn handle(&mut self, event: &Event) -> CliResult<bool> {
        match Input::from_event(event) {
            Input::Quit => return Ok(false),
            Input::Key(name) => {
                if !self.calculator.press_key(&name) {
                    debug!(key = %name, "key not handled");
                }
            }
            Input::Redraw => self.calculator.screen_mut().draw()?,
            Input::Ignore => {}
        }
        match self.calculator.screen_mut().take_error() {
            Some(err) => Err(err.into()),
            None => Ok(true),
        }
    }

    /// The calculator
    pub fn calculator(&self) -> &Calculator<TerminalScreen<W>> {
        &self.calculator
    }
}

/// Runs the interactive keypad on stdout until Esc or Ctrl-C
pub fn run_interactive() -> CliResult<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        return Err(CliError::NotATerminal);
    }

    terminal::enable_raw_mode()?;
    if let Err(err) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
        let _ = terminal::disable_raw_mode();
        return Err(err.into());
    }

    let outcome = event_loop();

    let restored = execute!(io::stdout(), Show, LeaveAlternateScreen)
        .and_then(|()| terminal::disable_raw_mode());
    outcome?;
    restored?;
    Ok(())
}

fn event_loop() -> CliResult<()> {
    let mut session = Session::new(io::stdout())?;
    info!("interactive session started");
    while session.handle(&event::read()?)? {}
    info!(
        expression = %session.calculator().expression(),
        "interactive session ended"
    );
    Ok(())
}
