//! Integration configuration records and their envelope codec.
//!
//! A record pairs envelope metadata (`config_type`, `is_encrypted`) with the
//! typed settings of one integration type. [`IntegrationConfigRecord::to_dict`]
//! produces the persisted [`ConfigEnvelope`]; [`IntegrationConfigRecord::from_dict`]
//! rebuilds the settings from one.

use crate::cipher::{Decryptor, Encryptor};
use crate::config_type::ConfigType;
use crate::envelope::ConfigEnvelope;
use crate::error::{ConfigError, CryptoOperation};
use crate::options::{CodecOptions, UnknownFieldPolicy};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map as JsonMap, Value as JsonValue};
use std::fmt;
use switchboard_core::Result;
use tracing::{debug, instrument, warn};

/// The variant-specific fields of one integration type.
///
/// Implementors serialize to a flat JSON object whose keys are exactly
/// [`FIELD_NAMES`](Self::FIELD_NAMES).
pub trait IntegrationSettings:
    Serialize + DeserializeOwned + Default + Clone + fmt::Debug + Send + Sync + 'static
{
    /// The tag written to the envelope.
    const CONFIG_TYPE: ConfigType;

    /// Every key the payload may carry.
    const FIELD_NAMES: &'static [&'static str];
}

/// One integration's configuration, optionally encrypted at rest.
#[derive(Clone, PartialEq, Eq)]
pub struct IntegrationConfigRecord<S> {
    is_encrypted: bool,
    data: String,
    /// The integration fields, set directly by application code.
    pub settings: S,
}

impl<S: IntegrationSettings> IntegrationConfigRecord<S> {
    /// Creates a record with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(S::default())
    }

    /// Creates a record around the given settings.
    #[must_use]
    pub fn with_settings(settings: S) -> Self {
        Self {
            is_encrypted: S::CONFIG_TYPE.encrypted_by_default(),
            data: String::new(),
            settings,
        }
    }

    /// Overrides the encryption flag for this record.
    #[must_use]
    pub fn with_encryption(mut self, is_encrypted: bool) -> Self {
        self.is_encrypted = is_encrypted;
        self
    }

    /// Returns the integration type.
    #[must_use]
    pub fn config_type(&self) -> ConfigType {
        S::CONFIG_TYPE
    }

    /// Returns whether the payload is encrypted at rest.
    #[must_use]
    pub fn is_encrypted(&self) -> bool {
        self.is_encrypted
    }

    /// Returns the plaintext payload recovered by the last decode.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Returns the integration fields as a JSON mapping.
    ///
    /// # Errors
    ///
    /// Returns `MalformedPayload` if the settings do not serialize to an object.
    pub fn fields(&self) -> Result<JsonMap<String, JsonValue>, ConfigError> {
        match serde_json::to_value(&self.settings) {
            Ok(JsonValue::Object(map)) => Ok(map),
            Ok(other) => Err(ConfigError::malformed_payload(
                S::CONFIG_TYPE.as_str(),
                format!("settings serialized to {other}, expected an object"),
            )
            .into()),
            Err(e) => Err(ConfigError::malformed_payload(S::CONFIG_TYPE.as_str(), e).into()),
        }
    }

    /// Encodes the record into its persisted envelope.
    ///
    /// The envelope fields never appear inside the payload. When the record is
    /// encrypted the payload is passed through `encryptor` and stored as text.
    ///
    /// # Errors
    ///
    /// Returns `CryptoFailure` if encryption fails or yields non-UTF-8 output.
    #[instrument(skip_all, fields(config_type = S::CONFIG_TYPE.as_str(), encrypted = self.is_encrypted))]
    pub fn to_dict(&self, encryptor: &impl Encryptor) -> Result<ConfigEnvelope, ConfigError> {
        let plaintext = serde_json::to_string(&self.settings)
            .map_err(|e| ConfigError::malformed_payload(S::CONFIG_TYPE.as_str(), e))?;

        let data = if self.is_encrypted {
            let sealed = encryptor
                .encrypt(&plaintext)
                .map_err(|e| ConfigError::encrypt_failed(&e))?;
            String::from_utf8(sealed).map_err(|e| ConfigError::CryptoFailure {
                operation: CryptoOperation::Encrypt,
                reason: format!("ciphertext is not valid UTF-8: {e}"),
            })?
        } else {
            plaintext
        };

        debug!(payload_len = data.len(), "encoded integration config");

        Ok(ConfigEnvelope::new(
            S::CONFIG_TYPE.as_str(),
            self.is_encrypted,
            data,
        ))
    }

    /// Decodes a stored JSON mapping into this record, rejecting unknown keys.
    ///
    /// Returns the decoded integration fields.
    ///
    /// # Errors
    ///
    /// See [`decode_envelope`](Self::decode_envelope); additionally returns
    /// `MalformedEnvelope` if the mapping is not a valid envelope.
    pub fn from_dict(
        &mut self,
        mapping: &JsonValue,
        decryptor: &impl Decryptor,
    ) -> Result<JsonMap<String, JsonValue>, ConfigError> {
        self.from_dict_with_options(mapping, decryptor, CodecOptions::default())
    }

    /// Decodes a stored JSON mapping into this record using `options`.
    ///
    /// # Errors
    ///
    /// See [`from_dict`](Self::from_dict).
    pub fn from_dict_with_options(
        &mut self,
        mapping: &JsonValue,
        decryptor: &impl Decryptor,
        options: CodecOptions,
    ) -> Result<JsonMap<String, JsonValue>, ConfigError> {
        let envelope = ConfigEnvelope::from_value(mapping)?;
        self.decode_envelope(&envelope, decryptor, options)
    }

    /// Decodes an envelope into this record.
    ///
    /// `is_encrypted` is taken from the envelope. Fields missing from the
    /// payload keep their current values. The record is left untouched on
    /// error.
    ///
    /// # Errors
    ///
    /// - `ConfigTypeMismatch` if the envelope is for another integration type
    /// - `CryptoFailure` if decryption fails
    /// - `MalformedPayload` if the payload is not a JSON object of the right shape
    /// - `UnknownField` if the payload has an unknown key and `options` reject them
    #[instrument(skip_all, fields(config_type = S::CONFIG_TYPE.as_str(), encrypted = envelope.is_encrypted))]
    pub fn decode_envelope(
        &mut self,
        envelope: &ConfigEnvelope,
        decryptor: &impl Decryptor,
        options: CodecOptions,
    ) -> Result<JsonMap<String, JsonValue>, ConfigError> {
        let config_type = S::CONFIG_TYPE.as_str();
        if envelope.config_type != config_type {
            return Err(ConfigError::ConfigTypeMismatch {
                expected: config_type.to_string(),
                found: envelope.config_type.clone(),
            }
            .into());
        }

        let data = if envelope.is_encrypted {
            decryptor
                .decrypt(&envelope.data)
                .map_err(|e| ConfigError::decrypt_failed(&e))?
        } else {
            envelope.data.clone()
        };

        let decoded = match serde_json::from_str::<JsonValue>(&data) {
            Ok(JsonValue::Object(map)) => map,
            Ok(_) => {
                return Err(
                    ConfigError::malformed_payload(config_type, "expected a JSON object").into(),
                );
            }
            Err(e) => return Err(ConfigError::malformed_payload(config_type, e).into()),
        };

        let mut merged = self.fields()?;
        for (key, value) in decoded {
            if !S::FIELD_NAMES.contains(&key.as_str()) {
                match options.unknown_fields {
                    UnknownFieldPolicy::Reject => {
                        return Err(ConfigError::UnknownField {
                            config_type: config_type.to_string(),
                            field: key,
                        }
                        .into());
                    }
                    UnknownFieldPolicy::Ignore => {
                        warn!(field = %key, "ignoring unknown integration config field");
                        continue;
                    }
                }
            }
            merged.insert(key, value);
        }

        let settings: S = serde_json::from_value(JsonValue::Object(merged))
            .map_err(|e| ConfigError::malformed_payload(config_type, e))?;

        self.is_encrypted = envelope.is_encrypted;
        self.data = data;
        self.settings = settings;

        debug!("decoded integration config");

        self.fields()
    }
}

impl<S: IntegrationSettings> Default for IntegrationConfigRecord<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: IntegrationSettings> fmt::Debug for IntegrationConfigRecord<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("IntegrationConfigRecord");
        s.field("config_type", &S::CONFIG_TYPE)
            .field("is_encrypted", &self.is_encrypted);
        if self.is_encrypted || S::CONFIG_TYPE.encrypted_by_default() {
            s.field("data", &crate::REDACTED);
        } else {
            s.field("data", &self.data);
        }
        s.field("settings", &self.settings).finish()
    }
}
