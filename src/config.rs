//! Configuration file support for copa-lineaje.
//!
//! Provides YAML-based configuration through `copa-lineaje.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line arguments.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use copa_lineaje::application::dto::OutputFormat;
use copa_lineaje::patch_manifest::policies::UpdateScope;
use copa_lineaje::shared::Result;

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "copa-lineaje.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub output: Option<String>,
    pub scope: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Settings for one run after CLI arguments override config values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub format: OutputFormat,
    pub output: Option<String>,
    pub scope: UpdateScope,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Merge CLI arguments over an optional config file.
pub fn resolve_options(args: &Args, config: Option<&ConfigFile>) -> Result<ResolvedOptions> {
    let format = match (args.format, config.and_then(|c| c.format.as_deref())) {
        (Some(format), _) => format,
        (None, Some(value)) => OutputFormat::from_str(value).map_err(anyhow::Error::msg)?,
        (None, None) => OutputFormat::default(),
    };

    let scope = match (args.scope, config.and_then(|c| c.scope.as_deref())) {
        (Some(scope), _) => scope,
        (None, Some(value)) => UpdateScope::from_str(value).map_err(anyhow::Error::msg)?,
        (None, None) => UpdateScope::default(),
    };

    let output = args
        .output
        .clone()
        .or_else(|| config.and_then(|c| c.output.clone()));

    Ok(ResolvedOptions {
        format,
        output,
        scope,
    })
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!(
                "Invalid config: {}\n\n💡 Hint: Use 'format: json' or 'format: pretty'.",
                e
            );
        }
    }

    if let Some(ref scope) = config.scope {
        if let Err(e) = UpdateScope::from_str(scope) {
            bail!(
                "Invalid config: {}\n\n💡 Hint: Use 'scope: all' or 'scope: os'.",
                e
            );
        }
    }

    if let Some(ref output) = config.output {
        if output.trim().is_empty() {
            bail!(
                "Invalid config: output must not be empty.\n\n\
                 💡 Hint: Remove the 'output' field to write the manifest to stdout."
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
