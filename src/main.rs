mod commands;
mod diagnostics;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use makejump::types::Position;
use tracing_subscriber::EnvFilter;

use crate::commands::{Options, OutputFormat};

/// Environment variable holding the log filter (`tracing` directives).
const LOG_ENV: &str = "MAKEJUMP_LOG";

/// Exit code for any error.
const FAILURE: u8 = 2;

/// Command-line interface.
#[derive(Parser)]
#[command(name = "makejump", version, about = "Jump from `make <target>` to the target's declaration")]
struct Cli {
    /// Selected subcommand.
    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by every subcommand.
#[derive(Args)]
struct Common {
    /// Accept files that are not named like a Makefile.
    #[arg(long)]
    any_file: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Find the declaration of the target invoked at a cursor position
    Resolve {
        /// Makefile to search.
        file: PathBuf,
        /// Zero-based line of the cursor.
        line: usize,
        /// Zero-based character offset of the cursor.
        character: usize,
        /// Command name that starts an invocation (repeatable; overrides config).
        #[arg(long = "command", value_name = "NAME")]
        commands: Vec<String>,
        #[command(flatten)]
        common: Common,
    },
    /// Find the declaration of a target by name
    Lookup {
        /// Makefile to search.
        file: PathBuf,
        /// Target name.
        target: String,
        #[command(flatten)]
        common: Common,
    },
    /// List declared targets and their lines
    Targets {
        /// Makefile to list.
        file: PathBuf,
        #[command(flatten)]
        common: Common,
    },
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries results only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| return EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Resolve { file, line, character, commands: command_names, common } => {
            let options = options_from(common, command_names);
            commands::resolve(&file, Position::new(line, character), &options)
        },
        Commands::Lookup { file, target, common } => {
            commands::lookup(&file, &target, &options_from(common, Vec::new()))
        },
        Commands::Targets { file, common } => {
            commands::targets(&file, &options_from(common, Vec::new()))
        },
    };

    return match result {
        Ok(code) => code,
        Err(e) => {
            diagnostics::print_error(&e);
            ExitCode::from(FAILURE)
        },
    };
}

/// Merge shared flags with the resolve-only command list.
fn options_from(common: Common, commands: Vec<String>) -> Options {
    return Options {
        any_file: common.any_file,
        commands,
        format: common.format,
    };
}
