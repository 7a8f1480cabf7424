//! `silkcode` binary: stdin to stdout filter.

mod cli;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use silkcode::Transcoder;

use crate::cli::Cli;

/// Environment variable that overrides the log filter.
const LOG_ENV: &str = "SILKCODE_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("silkcode: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> silkcode::Result<()> {
    let transcoder = Transcoder::with_config(cli.config()?);
    let stdin = io::stdin();
    let stdout = io::stdout();
    transcoder
        .process(stdin.lock(), stdout.lock(), cli.mode())
        .map(|_| ())
}

/// Installs a stderr `fmt` subscriber; stdout carries only transcoded data.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}
