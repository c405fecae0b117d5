//! Tag-dispatched integration configuration.
//!
//! Storage hands back envelopes of every type; [`IntegrationConfig`] picks the
//! record type from the envelope's `config_type` tag.

use crate::cipher::{Decryptor, Encryptor};
use crate::config_type::ConfigType;
use crate::discord::DiscordIntegrationConfig;
use crate::envelope::ConfigEnvelope;
use crate::error::ConfigError;
use crate::options::CodecOptions;
use crate::slack::SlackIntegrationConfig;
use crate::twilio::TwilioIntegrationConfig;
use crate::web::WebIntegrationConfig;
use serde_json::{Map as JsonMap, Value as JsonValue};
use switchboard_core::Result;

/// An integration configuration of any known type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrationConfig {
    Web(WebIntegrationConfig),
    Slack(SlackIntegrationConfig),
    Discord(DiscordIntegrationConfig),
    Twilio(TwilioIntegrationConfig),
}

impl IntegrationConfig {
    /// Creates a default record for the given type.
    #[must_use]
    pub fn new(config_type: ConfigType) -> Self {
        match config_type {
            ConfigType::Web => Self::Web(WebIntegrationConfig::new()),
            ConfigType::Slack => Self::Slack(SlackIntegrationConfig::new()),
            ConfigType::Discord => Self::Discord(DiscordIntegrationConfig::new()),
            ConfigType::Twilio => Self::Twilio(TwilioIntegrationConfig::new()),
        }
    }

    /// Decodes a stored JSON mapping, choosing the record type from its tag.
    ///
    /// # Errors
    ///
    /// Returns `MalformedEnvelope` for an invalid mapping, `UnknownConfigType`
    /// for a tag outside the catalog, and any error from decoding the payload.
    pub fn from_dict(
        mapping: &JsonValue,
        decryptor: &impl Decryptor,
        options: CodecOptions,
    ) -> Result<Self, ConfigError> {
        let envelope = ConfigEnvelope::from_value(mapping)?;
        Self::from_envelope(&envelope, decryptor, options)
    }

    /// Decodes an envelope, choosing the record type from its tag.
    ///
    /// # Errors
    ///
    /// See [`from_dict`](Self::from_dict).
    pub fn from_envelope(
        envelope: &ConfigEnvelope,
        decryptor: &impl Decryptor,
        options: CodecOptions,
    ) -> Result<Self, ConfigError> {
        let config_type: ConfigType = envelope.config_type.parse()?;
        let mut config = Self::new(config_type);
        match &mut config {
            Self::Web(record) => record.decode_envelope(envelope, decryptor, options)?,
            Self::Slack(record) => record.decode_envelope(envelope, decryptor, options)?,
            Self::Discord(record) => record.decode_envelope(envelope, decryptor, options)?,
            Self::Twilio(record) => record.decode_envelope(envelope, decryptor, options)?,
        };
        Ok(config)
    }

    /// Encodes the record into its persisted envelope.
    ///
    /// # Errors
    ///
    /// Returns `CryptoFailure` if encryption fails.
    pub fn to_dict(&self, encryptor: &impl Encryptor) -> Result<ConfigEnvelope, ConfigError> {
        match self {
            Self::Web(record) => record.to_dict(encryptor),
            Self::Slack(record) => record.to_dict(encryptor),
            Self::Discord(record) => record.to_dict(encryptor),
            Self::Twilio(record) => record.to_dict(encryptor),
        }
    }

    /// Returns the integration type.
    #[must_use]
    pub fn config_type(&self) -> ConfigType {
        match self {
            Self::Web(_) => ConfigType::Web,
            Self::Slack(_) => ConfigType::Slack,
            Self::Discord(_) => ConfigType::Discord,
            Self::Twilio(_) => ConfigType::Twilio,
        }
    }

    /// Returns whether the payload is encrypted at rest.
    #[must_use]
    pub fn is_encrypted(&self) -> bool {
        match self {
            Self::Web(record) => record.is_encrypted(),
            Self::Slack(record) => record.is_encrypted(),
            Self::Discord(record) => record.is_encrypted(),
            Self::Twilio(record) => record.is_encrypted(),
        }
    }

    /// Returns the integration fields as a JSON mapping.
    ///
    /// # Errors
    ///
    /// Returns `MalformedPayload` if the settings do not serialize to an object.
    pub fn fields(&self) -> Result<JsonMap<String, JsonValue>, ConfigError> {
        match self {
            Self::Web(record) => record.fields(),
            Self::Slack(record) => record.fields(),
            Self::Discord(record) => record.fields(),
            Self::Twilio(record) => record.fields(),
        }
    }
}

impl From<WebIntegrationConfig> for IntegrationConfig {
    fn from(record: WebIntegrationConfig) -> Self {
        Self::Web(record)
    }
}

impl From<SlackIntegrationConfig> for IntegrationConfig {
    fn from(record: SlackIntegrationConfig) -> Self {
        Self::Slack(record)
    }
}

impl From<DiscordIntegrationConfig> for IntegrationConfig {
    fn from(record: DiscordIntegrationConfig) -> Self {
        Self::Discord(record)
    }
}

impl From<TwilioIntegrationConfig> for IntegrationConfig {
    fn from(record: TwilioIntegrationConfig) -> Self {
        Self::Twilio(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::NoEncryption;
    use crate::testing::Base64Cipher;
    use serde_json::json;

    #[test]
    fn new_uses_variant_defaults() {
        for config_type in ConfigType::ALL {
            let config = IntegrationConfig::new(config_type);
            assert_eq!(config.config_type(), config_type);
            assert_eq!(config.is_encrypted(), config_type.encrypted_by_default());
        }
    }

    #[test]
    fn every_type_roundtrips_through_storage() {
        for config_type in ConfigType::ALL {
            let config = IntegrationConfig::new(config_type);
            let stored = config.to_dict(&Base64Cipher).expect("encode").to_value();

            let loaded = IntegrationConfig::from_dict(&stored, &Base64Cipher, CodecOptions::default())
                .expect("decode");

            assert_eq!(loaded.config_type(), config_type);
            assert_eq!(
                loaded.fields().expect("fields"),
                config.fields().expect("fields")
            );
        }
    }

    #[test]
    fn dispatches_on_tag() {
        let mut slack = SlackIntegrationConfig::new();
        slack.settings.bot_token = "xoxb-1".to_string();
        let stored = IntegrationConfig::from(slack)
            .to_dict(&Base64Cipher)
            .expect("encode")
            .to_value();

        let loaded = IntegrationConfig::from_dict(&stored, &Base64Cipher, CodecOptions::default())
            .expect("decode");

        match loaded {
            IntegrationConfig::Slack(record) => assert_eq!(record.settings.bot_token, "xoxb-1"),
            other => panic!("wrong config type: {:?}", other.config_type()),
        }
    }

    #[test]
    fn records_code_concurrently() {
        std::thread::scope(|scope| {
            for config_type in ConfigType::ALL {
                scope.spawn(move || {
                    let stored = IntegrationConfig::new(config_type)
                        .to_dict(&Base64Cipher)
                        .expect("encode")
                        .to_value();
                    let loaded =
                        IntegrationConfig::from_dict(&stored, &Base64Cipher, CodecOptions::default())
                            .expect("decode");
                    assert_eq!(loaded.config_type(), config_type);
                });
            }
        });
    }

    #[test]
    fn debug_redacts_plaintext_secrets() {
        let mapping = json!({
            "config_type": "discord",
            "is_encrypted": false,
            "data": r#"{"bot_token": "bot-secret", "public_key": "pk-secret"}"#,
        });

        let config = IntegrationConfig::from_dict(&mapping, &NoEncryption, CodecOptions::default())
            .expect("decode");

        let debug = format!("{config:?}");
        assert!(!debug.contains("bot-secret"));
        assert!(!debug.contains("pk-secret"));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let mapping = json!({"config_type": "telegram", "is_encrypted": false, "data": "{}"});

        let err = IntegrationConfig::from_dict(&mapping, &NoEncryption, CodecOptions::default())
            .expect_err("unknown tag");
        assert!(matches!(
            err.current_context(),
            ConfigError::UnknownConfigType { .. }
        ));
    }

    #[test]
    fn web_mapping_decodes_without_cipher() {
        let mapping = json!({
            "config_type": "web",
            "is_encrypted": false,
            "data": r#"{"domain": "example.com"}"#,
        });

        let config = IntegrationConfig::from_dict(&mapping, &NoEncryption, CodecOptions::default())
            .expect("decode");

        let fields = config.fields().expect("fields");
        assert_eq!(fields["domain"], "example.com");
        assert_eq!(fields["allowed_sites"], json!([]));
    }
}
