// SPDX-License-Identifier: MIT
//! File-to-TZX converter CLI

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tzxpack::{convert_file, InputMode};

#[derive(Parser)]
#[command(name = "tzxpack")]
#[command(about = "Convert a text or binary file into a single-block TZX tape image", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a restricted-alphabet text file
    ConvertText {
        /// Input text file
        input: PathBuf,
        /// Tape block name (padded or truncated to 10 characters)
        name: String,
        /// Output TZX path
        output: PathBuf,
    },
    /// Convert an arbitrary binary file
    ConvertBinary {
        /// Input binary file
        input: PathBuf,
        /// Tape block name (padded or truncated to 10 characters)
        name: String,
        /// Output TZX path
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let (mode, input, name, output) = match cli.command {
        Commands::ConvertText {
            input,
            name,
            output,
        } => (InputMode::Text, input, name, output),
        Commands::ConvertBinary {
            input,
            name,
            output,
        } => (InputMode::Binary, input, name, output),
    };

    match convert_file(mode, &input, &name, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
