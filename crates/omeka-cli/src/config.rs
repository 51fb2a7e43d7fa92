//! Layered build settings.
//!
//! Precedence, lowest first: built-in defaults, the TOML file passed with
//! `--config`, `OMEKA_METADATA_DIR` for the input directory, then CLI flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use omeka_output::RowOptions;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable overriding the metadata directory.
pub const METADATA_DIR_ENV_VAR: &str = "OMEKA_METADATA_DIR";

pub const DEFAULT_METADATA_DIR: &str = "item-metadata";
pub const DEFAULT_OUTPUT: &str = "omeka-ingest-data.csv";

/// Contents of a `--config` TOML file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub metadata_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub item_type: Option<String>,
    pub date_uploaded: Option<String>,
    pub dcterms_prefix: Option<String>,
    pub mods_prefix: Option<String>,
    pub list_separator: Option<String>,
}

impl ConfigFile {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("parse config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub metadata_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub item_type: Option<String>,
    pub date_uploaded: Option<String>,
}

/// Fully resolved settings for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub metadata_dir: PathBuf,
    pub output: PathBuf,
    pub row: RowOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            metadata_dir: PathBuf::from(DEFAULT_METADATA_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            row: RowOptions::default(),
        }
    }
}

impl Settings {
    /// Merge the layers. `env_metadata_dir` is the value of
    /// [`METADATA_DIR_ENV_VAR`], if set.
    pub fn resolve(
        file: ConfigFile,
        env_metadata_dir: Option<PathBuf>,
        overrides: Overrides,
    ) -> Self {
        let mut settings = Self::default();

        if let Some(dir) = file.metadata_dir {
            settings.metadata_dir = dir;
        }
        if let Some(output) = file.output {
            settings.output = output;
        }
        if let Some(item_type) = file.item_type {
            settings.row.item_type = item_type;
        }
        if let Some(date) = file.date_uploaded {
            settings.row.date_uploaded = date;
        }
        if let Some(prefix) = file.dcterms_prefix {
            settings.row.dcterms_prefix = prefix;
        }
        if let Some(prefix) = file.mods_prefix {
            settings.row.mods_prefix = prefix;
        }
        if let Some(separator) = file.list_separator {
            settings.row.list_separator = separator;
        }

        if let Some(dir) = env_metadata_dir {
            settings.metadata_dir = dir;
        }

        if let Some(dir) = overrides.metadata_dir {
            settings.metadata_dir = dir;
        }
        if let Some(output) = overrides.output {
            settings.output = output;
        }
        if let Some(item_type) = overrides.item_type {
            settings.row.item_type = item_type;
        }
        if let Some(date) = overrides.date_uploaded {
            settings.row.date_uploaded = date;
        }

        settings
    }

    /// Resolve from the process environment and an optional config file.
    pub fn load(config_path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let file = match config_path {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };
        Ok(Self::resolve(file, metadata_dir_from_env(), overrides))
    }
}

/// [`METADATA_DIR_ENV_VAR`], ignoring empty values.
pub fn metadata_dir_from_env() -> Option<PathBuf> {
    std::env::var_os(METADATA_DIR_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_import_conventions() {
        let settings = Settings::default();
        assert_eq!(settings.metadata_dir, PathBuf::from("item-metadata"));
        assert_eq!(settings.output, PathBuf::from("omeka-ingest-data.csv"));
        assert_eq!(settings.row.item_type, "Item");
        assert_eq!(settings.row.list_separator, ";");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ConfigFile::parse("colour = \"blue\"").is_err());
    }
}
