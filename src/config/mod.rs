//! Configuration management.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "PADDOCK_CONFIG_PATH";

/// Output formats for rendered tables and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned text tables (default).
    #[default]
    Table,
    /// Machine-readable JSON.
    Json,
}

impl OutputFormat {
    /// Returns the format as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
        }
    }

    /// Parses a format string, falling back to the default for anything
    /// unrecognized.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Table,
        }
    }
}

/// Main configuration for paddock.
#[derive(Debug, Clone, Default)]
pub struct PaddockConfig {
    /// Catalog file to evaluate against instead of the built-in dataset.
    pub catalog_path: Option<PathBuf>,
    /// Default output format, overridable per invocation.
    pub default_format: OutputFormat,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    /// Catalog file path.
    catalog_path: Option<String>,
    /// Default output format.
    default_format: Option<String>,
}

impl PaddockConfig {
    /// Loads configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: format!("read config file {}", path.display()),
            cause: e.to_string(),
        })?;
        let file: ConfigFile = toml::from_str(&text).map_err(|e| Error::OperationFailed {
            operation: "parse config".to_string(),
            cause: e.to_string(),
        })?;
        Ok(Self::from(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks `PADDOCK_CONFIG_PATH` first, then the platform config
    /// directory. Missing files are not an error; defaults apply.
    #[must_use]
    pub fn load_default() -> Self {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV)
            && !path.trim().is_empty()
        {
            return Self::load_from_file(Path::new(&path)).unwrap_or_default();
        }

        directories::ProjectDirs::from("", "", "paddock")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .filter(|path| path.exists())
            .map_or_else(Self::default, |path| {
                Self::load_from_file(&path).unwrap_or_default()
            })
    }
}

impl From<ConfigFile> for PaddockConfig {
    fn from(file: ConfigFile) -> Self {
        Self {
            catalog_path: file.catalog_path.map(PathBuf::from),
            default_format: file
                .default_format
                .as_deref()
                .map(OutputFormat::parse)
                .unwrap_or_default(),
        }
    }
}
