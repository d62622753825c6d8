//! CLI command definitions and dispatch for the `questa` binary.
//!
//! Uses clap derive macros for argument parsing. Commands are flat verbs
//! (e.g., `questa categories`, `questa run hpi`, `questa serve`).

pub mod categories;
pub mod run;
pub mod validate;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Run scripted quizzes from JSON question banks.
#[derive(Parser)]
#[command(name = "questa", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export OpenTelemetry traces to stdout.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the configured quiz categories.
    #[command(alias = "ls")]
    Categories,

    /// Check that bank documents parse and pass structural validation.
    Validate {
        /// Category to validate (defaults to the whole catalog).
        category: Option<String>,
    },

    /// Take a quiz in the terminal.
    Run {
        /// Category to start with (skips the menu prompt once).
        category: Option<String>,
    },

    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
