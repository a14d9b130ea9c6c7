//! Build script for innkeep-cli.
//!
//! Generates the `innkeep.1` man page with clap_mangen and places it in
//! OUT_DIR for packaging.
//!
//! The command structure is rebuilt here by hand because a build script
//! cannot depend on the crate it builds.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("innkeep")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage hotel rooms, clients and bookings")
        .long_about(
            "Interactive console for registering rooms and clients, booking and \
             cancelling rooms, and looking up nightly costs",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Directory holding the user config.yaml")
                .value_name("PATH")
                .global(true)
                .env("INNKEEP_CONFIG_DIR"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format for room and client listings")
                .value_name("FORMAT")
                .value_parser(["table", "json", "csv", "tsv"])
                .global(true)
                .env("INNKEEP_OUTPUT_FORMAT"),
        )
        .subcommands(vec![
            Command::new("session")
                .about("Run the interactive hotel menu (default)")
                .long_about("Run the interactive menu on standard input and output"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check an innkeep configuration file for errors"),
            Command::new("show-config")
                .about("Show the effective configuration")
                .long_about("Print the merged configuration from all sources as YAML"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("innkeep.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
