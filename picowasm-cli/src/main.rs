//! picowasm CLI — assemble and execute i32 instruction listings.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input/assembly error or invalid command-line usage
//! - 2: Runtime error

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "picowasm")]
#[command(about = "Run picowasm i32 instruction listings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble and execute a listing, printing the final stack
    Run {
        /// Path to a .pwat listing
        input: PathBuf,

        /// Print every executed instruction and the stack after it
        #[arg(long)]
        trace: bool,
    },
    /// Print the canonical form of a listing
    Fmt {
        /// Path to a .pwat listing
        input: PathBuf,
    },
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default `warn`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // `--help` and `--version` print to stdout and exit 0.
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    let result = match &cli.command {
        Command::Run { input, trace } => commands::run(input, *trace),
        Command::Fmt { input } => commands::fmt(input),
    };

    if let Err(code) = result {
        process::exit(code);
    }
}
