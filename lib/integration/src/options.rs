//! Codec options.
//!
//! Options are loaded via the `config` crate, either from environment
//! variables (`SWITCHBOARD__UNKNOWN_FIELDS=ignore`) or from a file.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to do with payload keys an integration type does not define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownFieldPolicy {
    /// Fail the decode with `UnknownField`.
    #[default]
    Reject,
    /// Drop the key and log a warning.
    Ignore,
}

/// Options controlling how payloads are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodecOptions {
    /// Handling of unknown payload keys.
    #[serde(default)]
    pub unknown_fields: UnknownFieldPolicy,
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("SWITCHBOARD")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl CodecOptions {
    /// Options that drop unknown keys instead of failing.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Ignore,
        }
    }

    /// Loads options from `SWITCHBOARD__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(environment())
    }

    fn from_environment(source: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    /// Loads options from a configuration file (format chosen by extension).
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()?
            .try_deserialize()
    }
}
