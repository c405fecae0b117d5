//! Twilio SMS and voice integration.

use crate::REDACTED;
use crate::config_type::ConfigType;
use crate::record::{IntegrationConfigRecord, IntegrationSettings};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Twilio account credentials and the numbers routed to the app.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwilioSettings {
    /// Twilio account SID.
    pub account_sid: String,
    /// Twilio auth token.
    pub auth_token: String,
    /// Phone numbers (E.164) routed to the app.
    pub phone_numbers: Vec<String>,
    /// Register the SMS webhook on the numbers automatically.
    pub auto_create_sms_webhook: bool,
    /// Register the voice webhook on the numbers automatically.
    pub auto_create_voice_webhook: bool,
}

impl IntegrationSettings for TwilioSettings {
    const CONFIG_TYPE: ConfigType = ConfigType::Twilio;
    const FIELD_NAMES: &'static [&'static str] = &[
        "account_sid",
        "auth_token",
        "phone_numbers",
        "auto_create_sms_webhook",
        "auto_create_voice_webhook",
    ];
}

impl fmt::Debug for TwilioSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioSettings")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &REDACTED)
            .field("phone_numbers", &self.phone_numbers)
            .field("auto_create_sms_webhook", &self.auto_create_sms_webhook)
            .field("auto_create_voice_webhook", &self.auto_create_voice_webhook)
            .finish()
    }
}

/// Twilio integration configuration record.
pub type TwilioIntegrationConfig = IntegrationConfigRecord<TwilioSettings>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::NoEncryption;
    use crate::error::ConfigError;
    use crate::testing::Base64Cipher;

    #[test]
    fn twilio_roundtrip() {
        let record = TwilioIntegrationConfig::with_settings(TwilioSettings {
            account_sid: "AC123".to_string(),
            auth_token: "tok".to_string(),
            phone_numbers: vec!["+15550100".to_string(), "+15550101".to_string()],
            auto_create_sms_webhook: true,
            auto_create_voice_webhook: false,
        });

        let envelope = record.to_dict(&Base64Cipher).expect("encode");
        let mut loaded = TwilioIntegrationConfig::new();
        let fields = loaded
            .from_dict(&envelope.to_value(), &Base64Cipher)
            .expect("decode");

        assert_eq!(loaded.settings, record.settings);
        assert_eq!(fields["auto_create_sms_webhook"], true);
        assert_eq!(fields["phone_numbers"][1], "+15550101");
    }

    #[test]
    fn twilio_rejects_string_flag() {
        let mut record = TwilioIntegrationConfig::new();
        let mapping = serde_json::json!({
            "config_type": "twilio",
            "is_encrypted": false,
            "data": r#"{"auto_create_sms_webhook": "yes"}"#,
        });

        let err = record.from_dict(&mapping, &NoEncryption).expect_err("string flag");
        assert!(matches!(
            err.current_context(),
            ConfigError::MalformedPayload { .. }
        ));
        assert!(!record.settings.auto_create_sms_webhook);
    }

    #[test]
    fn twilio_debug_redacts_auth_token() {
        let mut settings = TwilioSettings::default();
        settings.account_sid = "AC123".to_string();
        settings.auth_token = "tok-secret".to_string();

        let debug = format!("{settings:?}");
        assert!(debug.contains("AC123"));
        assert!(!debug.contains("tok-secret"));
    }
}
