//! `markpoint render` command implementation.

use std::path::PathBuf;

use clap::Args;
use markpoint_config::{CliSettings, Config};
use markpoint_theme::{PageData, Theme, markup_hooks};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// JSON page description to render.
    page: PathBuf,

    /// Path to configuration file (default: auto-discover markpoint.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Mark every element with its markup identity (overrides config).
    #[arg(long)]
    debug_markup: bool,

    /// Hook-name prefix (overrides config).
    #[arg(long)]
    hook_prefix: Option<String>,

    /// Site title (overrides config).
    #[arg(long)]
    title: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or page loading fails, or the
    /// output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            debug_markup: self.debug_markup.then_some(true),
            hook_prefix: self.hook_prefix,
            title: self.title,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Using configuration");
        }

        let page = PageData::load(&self.page)?;
        if page.posts.is_empty() && page.menu.is_empty() {
            output.warning(&format!(
                "{} has no posts and no menu",
                self.page.display()
            ));
        }

        let theme = Theme::new(markup_hooks(&config), config);
        let html = theme.render_page(&page);

        match self.output {
            Some(path) => {
                std::fs::write(&path, &html)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => output.document(&html)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("markpoint.toml");
        let page = dir.path().join("page.json");
        let html = dir.path().join("index.html");
        std::fs::write(&config, "[site]\ntitle = \"Docs\"\n").unwrap();
        std::fs::write(&page, r#"{"posts": [{"id": 1, "title": "Hi"}]}"#).unwrap();

        let args = RenderArgs {
            page,
            config: Some(config),
            output: Some(html.clone()),
            debug_markup: true,
            hook_prefix: None,
            title: None,
            verbose: false,
        };
        args.execute().unwrap();

        let written = std::fs::read_to_string(&html).unwrap();
        assert!(written.contains("<title>Docs</title>"));
        assert!(written.contains(r#"<article id="post-1" class="entry" data-markup-id="post">"#));
    }

    #[test]
    fn test_render_missing_page() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("markpoint.toml");
        std::fs::write(&config, "").unwrap();

        let args = RenderArgs {
            page: dir.path().join("missing.json"),
            config: Some(config),
            output: None,
            debug_markup: false,
            hook_prefix: None,
            title: None,
            verbose: false,
        };

        assert!(matches!(args.execute(), Err(CliError::Theme(_))));
    }
}
