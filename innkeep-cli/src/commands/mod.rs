//! CLI command implementations.
//!
//! - `session`: Run the interactive hotel menu
//! - `validate`: Validate a configuration file
//! - `show_config`: Print the effective configuration
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod session;
pub mod show_config;
pub mod validate;

pub use completions::CompletionsCommand;
pub use session::SessionCommand;
pub use show_config::ShowConfigCommand;
pub use validate::ValidateCommand;
