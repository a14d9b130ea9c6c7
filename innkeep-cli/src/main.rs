//! Main entry point for the innkeep CLI.
//!
//! Commands:
//! - `session`: Run the interactive hotel menu (the default)
//! - `validate`: Validate a configuration file
//! - `show-config`: Print the effective configuration
//! - `completions`: Generate shell completion scripts

use clap::Parser;
use innkeep_cli::cli::{Cli, Command};
use innkeep_cli::commands::SessionCommand;
use innkeep_cli::utils::{install_logger, GlobalOptions};

fn main() {
    let cli = Cli::parse();

    install_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
        format: cli.format,
    };

    let result = match cli.command {
        None => SessionCommand::default().execute(&global),
        Some(Command::Session(cmd)) => cmd.execute(&global),
        Some(Command::Validate(cmd)) => cmd.execute(&global),
        Some(Command::ShowConfig(cmd)) => cmd.execute(&global),
        Some(Command::Completions(cmd)) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
