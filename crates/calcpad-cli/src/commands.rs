//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};

/// calcpad: keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "calcpad")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (log errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run; defaults to `interactive`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the keypad in the terminal (Esc or Ctrl-C quits)
    Interactive,

    /// Type an expression through the guarded buffer and evaluate it
    Eval(EvalArgs),

    /// Replay key names (`7`, `+`, `Enter`, `Backspace`, `c`) and print the displays
    Keys(KeysArgs),
}

/// Arguments for the eval command
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Expression, typed one character at a time (use `--` before one
    /// that starts with `-`)
    pub expression: String,

    /// Print the calculator snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the keys command
#[derive(Args, Debug)]
pub struct KeysArgs {
    /// Key names, in order
    #[arg(required = true, num_args = 1..)]
    pub keys: Vec<String>,

    /// Print the calculator snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
