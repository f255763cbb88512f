//! One-shot commands: type or replay input, then report the displays

use calcpad::{Calculator, Snapshot, TextScreen};
use tracing::{info, warn};

use crate::error::{CliError, CliResult};

/// Types `expression` one character at a time, then evaluates
///
/// Characters the buffer rejects are dropped exactly as they would be at
/// the keypad, so `eval "2++3"` evaluates `2+3`.
pub fn eval_expression(expression: &str) -> CliResult<Snapshot> {
    if expression.trim().is_empty() {
        return Err(CliError::invalid_argument("expression is empty"));
    }

    let mut calc = Calculator::new(TextScreen::new());
    for ch in expression.chars() {
        calc.append(ch);
    }
    calc.evaluate();

    let snapshot = calc.snapshot();
    if snapshot.expression != expression {
        info!(
            typed = expression,
            kept = %snapshot.expression,
            "some characters were rejected"
        );
    }
    Ok(snapshot)
}

/// Replays key names in order; unrecognized keys are skipped with a warning
pub fn replay_keys<S: AsRef<str>>(keys: &[S]) -> Snapshot {
    let mut calc = Calculator::new(TextScreen::new());
    for key in keys {
        let key = key.as_ref();
        if !calc.press_key(key) {
            warn!(key, "unrecognized key skipped");
        }
    }
    calc.snapshot()
}
