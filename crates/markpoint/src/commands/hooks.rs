//! `markpoint hooks` command implementation.

use std::path::PathBuf;

use clap::Args;
use markpoint_config::{CliSettings, Config};
use markpoint_markup::HookNames;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the hooks command.
#[derive(Args)]
pub(crate) struct HooksArgs {
    /// Markup identities (e.g. `main`, `nav_menu_item`).
    #[arg(required = true)]
    identities: Vec<String>,

    /// Path to configuration file (default: auto-discover markpoint.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hook-name prefix (overrides config).
    #[arg(long)]
    hook_prefix: Option<String>,
}

impl HooksArgs {
    /// Execute the hooks command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading fails or stdout is closed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            hook_prefix: self.hook_prefix,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if !config.markup.hook_prefix.is_empty() {
            output.info(&format!("Prefix: {}", config.markup.hook_prefix));
        }

        for id in &self.identities {
            if id.is_empty() {
                output.warning("Skipping empty identity");
                continue;
            }
            output.line(id, true)?;
            for line in describe(&HookNames::new(&config.markup.hook_prefix, id)) {
                output.line(&line, false)?;
            }
        }

        Ok(())
    }
}

/// One line per hook: kind and name.
fn describe(names: &HookNames) -> Vec<String> {
    let kinds = ["filter", "filter", "action", "action", "action", "action"];
    kinds
        .iter()
        .zip(names.all())
        .map(|(kind, name)| format!("  {kind:<6} {name}"))
        .collect()
}
