//! Naming options from `--config` and command line overrides.

use anyhow::{Context, Result};
use std::path::Path;

use crate::args::CliArgs;
use jsnames_naming::NamingOptions;

pub fn parse_config(source: &str) -> Result<NamingOptions> {
    let options = serde_json::from_str(source).context("failed to parse config JSON")?;
    Ok(options)
}

pub fn load_config(path: &Path) -> Result<NamingOptions> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Options for this run: the config file (or defaults) with flags applied.
pub fn resolve_options(args: &CliArgs) -> Result<NamingOptions> {
    let mut options = match &args.config {
        Some(path) => load_config(path)?,
        None => NamingOptions::default(),
    };
    if let Some(mode) = args.mode {
        options.mode = mode.into();
    }
    options.validate().context("invalid naming options")?;
    Ok(options)
}
