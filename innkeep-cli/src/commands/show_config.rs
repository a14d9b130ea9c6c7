//! Command to print the effective configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;

/// Show the merged configuration from all sources.
#[derive(Args)]
pub struct ShowConfigCommand {}

impl ShowConfigCommand {
    /// Execute the show-config command.
    ///
    /// Unset fields are filled with their defaults so the output shows
    /// exactly what a session would use.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?.with_defaults();
        let yaml = serde_yaml::to_string(&config).map_err(innkeep::Error::from)?;
        print!("{yaml}");
        Ok(())
    }
}
