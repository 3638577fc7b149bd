// src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use std::process::ExitCode;

/// Log to stderr; stdout carries the generated file
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match commands::cmd_generate(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("dep2bazel: {e:#}");
            ExitCode::FAILURE
        }
    }
}
