//! calcpad CLI library
//!
//! Terminal host for the calcpad keypad calculator: an interactive
//! crossterm session plus one-shot `eval` and `keys` commands.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
mod output;
mod runner;
pub mod terminal;

pub use commands::{Cli, ColorArg, Commands, EvalArgs, KeysArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{render, OutputFormat};
pub use runner::{eval_expression, replay_keys};
pub use terminal::run_interactive;
