//! The persisted envelope around an encoded configuration payload.
//!
//! The envelope is the only shape handed to storage:
//!
//! ```json
//! { "config_type": "slack", "is_encrypted": true, "data": "<ciphertext>" }
//! ```
//!
//! `config_type` and `is_encrypted` always travel in plaintext next to the
//! payload, never inside it.

use crate::config_type::ConfigType;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use switchboard_core::Result;

/// A configuration record as persisted by storage.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEnvelope {
    /// Tag naming the integration type.
    pub config_type: String,
    /// Whether `data` is ciphertext.
    pub is_encrypted: bool,
    /// JSON text of the integration fields, or ciphertext when encrypted.
    pub data: String,
}

impl ConfigEnvelope {
    /// Creates a new envelope.
    #[must_use]
    pub fn new(config_type: impl Into<String>, is_encrypted: bool, data: impl Into<String>) -> Self {
        Self {
            config_type: config_type.into(),
            is_encrypted,
            data: data.into(),
        }
    }

    /// Reads an envelope from a stored JSON mapping.
    ///
    /// # Errors
    ///
    /// Returns `MalformedEnvelope` if a key is missing or has the wrong type.
    pub fn from_value(value: &JsonValue) -> Result<Self, ConfigError> {
        if !value.is_object() {
            return Err(ConfigError::MalformedEnvelope {
                reason: "expected a JSON object".to_string(),
            }
            .into());
        }
        Self::deserialize(value).map_err(|e| {
            ConfigError::MalformedEnvelope {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Parses an envelope from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `MalformedEnvelope` if the text is not a valid envelope.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let value: JsonValue =
            serde_json::from_str(json).map_err(|e| ConfigError::MalformedEnvelope {
                reason: e.to_string(),
            })?;
        Self::from_value(&value)
    }

    /// Whether `data` may carry secrets, either as ciphertext or as the
    /// plaintext payload of a type that is normally encrypted.
    fn may_hold_secrets(&self) -> bool {
        self.is_encrypted
            || self
                .config_type
                .parse::<ConfigType>()
                .map_or(true, |t| t.encrypted_by_default())
    }

    /// Converts the envelope into the stored JSON mapping.
    #[must_use]
    pub fn to_value(&self) -> JsonValue {
        serde_json::json!({
            "config_type": self.config_type,
            "is_encrypted": self.is_encrypted,
            "data": self.data,
        })
    }
}

impl std::fmt::Debug for ConfigEnvelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("ConfigEnvelope");
        s.field("config_type", &self.config_type)
            .field("is_encrypted", &self.is_encrypted);
        if self.may_hold_secrets() {
            s.field("data", &crate::REDACTED);
        } else {
            s.field("data", &self.data);
        }
        s.finish()
    }
}
