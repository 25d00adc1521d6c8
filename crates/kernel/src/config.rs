//! Configuration loaded from environment variables.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail};

/// Output format for menus and catalogs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    /// Indented plain-text tree.
    Tree,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "tree" => Ok(Self::Tree),
            other => bail!("unknown output format '{other}' (expected json, yaml or tree)"),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Tree => "tree",
        })
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Catalog file to use instead of the built-in one (KOPERASI_MENU_CATALOG).
    pub menu_catalog: Option<PathBuf>,

    /// Default output format (KOPERASI_OUTPUT_FORMAT, default: json).
    pub output_format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let menu_catalog = lookup("KOPERASI_MENU_CATALOG")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let output_format = lookup("KOPERASI_OUTPUT_FORMAT")
            .map(|v| v.parse::<OutputFormat>())
            .transpose()
            .context("KOPERASI_OUTPUT_FORMAT must be json, yaml or tree")?
            .unwrap_or_default();

        Ok(Self {
            menu_catalog,
            output_format,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert!(config.menu_catalog.is_none());
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn reads_variables() {
        let config = config(&[
            ("KOPERASI_MENU_CATALOG", "/etc/koperasi/menu.yml"),
            ("KOPERASI_OUTPUT_FORMAT", "Tree"),
        ])
        .unwrap();

        assert_eq!(config.menu_catalog, Some(PathBuf::from("/etc/koperasi/menu.yml")));
        assert_eq!(config.output_format, OutputFormat::Tree);
    }

    #[test]
    fn blank_catalog_path_is_ignored() {
        let config = config(&[("KOPERASI_MENU_CATALOG", "  ")]).unwrap();
        assert!(config.menu_catalog.is_none());
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(config(&[("KOPERASI_OUTPUT_FORMAT", "xml")]).is_err());
    }
}
