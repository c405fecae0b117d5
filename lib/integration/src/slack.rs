//! Slack app integration.

use crate::REDACTED;
use crate::config_type::ConfigType;
use crate::record::{IntegrationConfigRecord, IntegrationSettings};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credentials for a Slack app. Encrypted at rest by default.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackSettings {
    /// Slack app ID.
    pub app_id: String,
    /// Bot user OAuth token (`xoxb-...`).
    pub bot_token: String,
    /// Legacy request verification token.
    pub verification_token: String,
    /// Secret used to verify request signatures.
    pub signing_secret: String,
}

impl IntegrationSettings for SlackSettings {
    const CONFIG_TYPE: ConfigType = ConfigType::Slack;
    const FIELD_NAMES: &'static [&'static str] =
        &["app_id", "bot_token", "verification_token", "signing_secret"];
}

impl fmt::Debug for SlackSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackSettings")
            .field("app_id", &self.app_id)
            .field("bot_token", &REDACTED)
            .field("verification_token", &REDACTED)
            .field("signing_secret", &REDACTED)
            .finish()
    }
}

/// Slack integration configuration record.
pub type SlackIntegrationConfig = IntegrationConfigRecord<SlackSettings>;
