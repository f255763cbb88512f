//! calcpad: keypad calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! calcpad                          # Interactive keypad
//! calcpad eval "2+3*4"             # Prints the input and result lines
//! calcpad eval --json -- "-5+3"    # Snapshot as JSON
//! calcpad keys 1 + 2 Enter         # Replay key names
//! ```

use calcpad_cli::{
    eval_expression, render, replay_keys, run_interactive, Cli, CliConfig, CliResult,
    ColorChoice, Commands, OutputFormat, Verbosity,
};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    init_tracing(&config);

    match cli.command {
        None | Some(Commands::Interactive) => run_interactive(),
        Some(Commands::Eval(args)) => {
            let snapshot = eval_expression(&args.expression)?;
            print_snapshot(&config, &snapshot, args.json)
        }
        Some(Commands::Keys(args)) => {
            let snapshot = replay_keys(&args.keys);
            print_snapshot(&config, &snapshot, args.json)
        }
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.into();
    CliConfig::new().with_verbosity(verbosity).with_color(color)
}

fn init_tracing(config: &CliConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.verbosity.log_filter())),
        )
        .with_target(false)
        .with_ansi(config.color.should_color())
        .with_writer(std::io::stderr)
        .init();
}

fn print_snapshot(config: &CliConfig, snapshot: &calcpad::Snapshot, json: bool) -> CliResult<()> {
    let format = OutputFormat::from_json_flag(json);
    println!("{}", render(snapshot, format, config.color.should_color())?);
    Ok(())
}
