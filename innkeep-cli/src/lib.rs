//! Library exports for innkeep-cli.
//!
//! Exposes the CLI structure, the console prompts and the session so that
//! integration tests and benchmarks can drive them without a terminal.

pub mod cli;
pub mod commands;
pub mod console;
pub mod error;
pub mod render;
pub mod utils;

pub use cli::Cli;
