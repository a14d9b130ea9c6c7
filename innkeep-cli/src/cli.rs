//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, SessionCommand, ShowConfigCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use innkeep::config::OutputFormat;
use std::path::PathBuf;

/// Interactive console for managing hotel rooms, clients and bookings.
#[derive(Parser)]
#[command(name = "innkeep")]
#[command(version, about = "Manage hotel rooms, clients and bookings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Directory holding the user config.yaml
    #[arg(long, value_name = "PATH", global = true, env = "INNKEEP_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Output format for room and client listings
    #[arg(
        long,
        value_enum,
        global = true,
        env = "INNKEEP_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: Option<OutputFormat>,

    /// Command to run; the interactive session when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive hotel menu (default)
    Session(SessionCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Show the effective configuration
    ShowConfig(ShowConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
