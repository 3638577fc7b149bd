// src/cli.rs
//! CLI definitions for dep2bazel
//!
//! The command implementation lives in the `commands` module.

use clap::{ArgAction, Parser};
use dep2bazel::config::DEFAULT_HTTP_TIMEOUT;
use std::path::PathBuf;

pub const USAGE: &str = "usage: dep2bazel path/to/Gopkg.lock";

#[derive(Parser, Debug)]
#[command(name = "dep2bazel")]
#[command(version)]
#[command(about = "Generate Bazel go_repository rules from a dep Gopkg.lock", long_about = None)]
pub struct Cli {
    /// Path to the Gopkg.lock file
    pub lockfile: String,

    /// Write the generated rules to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Timeout for each network request, in seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = DEFAULT_HTTP_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Probe only the declared repository URLs, without GitHub remapping
    #[arg(long)]
    pub no_remap: bool,

    /// Exit with status 2 when any project had to be skipped
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
