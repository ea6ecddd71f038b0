//! `${VAR}` expansion for configuration strings.

use crate::{Config, ConfigError};

/// Expands `${VAR}` and `${VAR:-default}` through a variable lookup.
///
/// A reference to an unset variable without a default is an error. Bare
/// `$VAR` is left as is.
pub(crate) struct Expander<L> {
    lookup: L,
}

impl Expander<fn(&str) -> Option<String>> {
    /// Expander reading the process environment.
    pub(crate) fn from_env() -> Self {
        Self::new(|var| std::env::var(var).ok())
    }
}

impl<L: Fn(&str) -> Option<String>> Expander<L> {
    pub(crate) fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Expand every string field of `config` that may reference variables.
    pub(crate) fn expand_config(&self, config: &mut Config) -> Result<(), ConfigError> {
        self.expand_field(&mut config.markup.hook_prefix, "markup.hook_prefix")?;
        self.expand_field(&mut config.site.title, "site.title")?;
        self.expand_field(&mut config.site.language, "site.language")?;
        Ok(())
    }

    fn expand_field(&self, value: &mut String, field: &str) -> Result<(), ConfigError> {
        if !value.contains("${") {
            return Ok(());
        }

        let expanded = shellexpand::env_with_context(value.as_str(), |var| {
            (self.lookup)(var).map(Some).ok_or(())
        })
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })?;
        *value = expanded.into_owned();
        Ok(())
    }
}
