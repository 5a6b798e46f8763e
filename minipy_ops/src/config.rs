//! Compatibility switches for the dispatcher.
//!
//! Each switch reproduces one behavior of the earlier operator library
//! that is otherwise corrected. All default to off.
//!
//! ```toml
//! [compat]
//! legacy_numeric_eq = true
//! legacy_repeat = false
//! legacy_container_eq = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Behavior switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Compat {
    /// `int == float` fails (the int-left branch re-tests the left operand);
    /// `float == int` still promotes.
    pub legacy_numeric_eq: bool,
    /// `str * n` yields `""` for every count (the accumulator is discarded).
    pub legacy_repeat: bool,
    /// `==` between two strs, tuples, lists, dicts or sets fails instead of
    /// comparing structurally.
    pub legacy_container_eq: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    compat: Compat,
}

/// Failure to load a [`Compat`] configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid dispatch config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Compat {
    /// Every legacy behavior on
    pub fn legacy() -> Self {
        Self {
            legacy_numeric_eq: true,
            legacy_repeat: true,
            legacy_container_eq: true,
        }
    }

    /// Parse the `[compat]` table of a TOML document. A missing table or
    /// missing keys keep their defaults.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(src)?;
        Ok(file.compat)
    }

    /// Read and parse a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&src)
    }
}
