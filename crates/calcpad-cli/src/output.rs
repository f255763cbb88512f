//! Output formatting for one-shot commands

use calcpad::{Snapshot, ERROR_MARKER};
use console::style;

use crate::error::CliResult;

/// Output format for one-shot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Input line, then result line
    #[default]
    Text,
    /// Snapshot as a single JSON object
    Json,
}

impl OutputFormat {
    /// Picks the format from a `--json` flag
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Renders a snapshot; `colored` only affects the text format
pub fn render(snapshot: &Snapshot, format: OutputFormat, colored: bool) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(snapshot.to_json()?),
        OutputFormat::Text => Ok(render_text(snapshot, colored)),
    }
}

fn render_text(snapshot: &Snapshot, colored: bool) -> String {
    let result = if snapshot.result == ERROR_MARKER {
        style(&snapshot.result).red().bold()
    } else {
        style(&snapshot.result).green().bold()
    };
    format!(
        "{}\n{}",
        style(&snapshot.input).dim().force_styling(colored),
        result.force_styling(colored)
    )
}
