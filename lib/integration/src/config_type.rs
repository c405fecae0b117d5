//! The closed set of integration types.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tag identifying an integration type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigType {
    /// Embeddable web widget.
    Web,
    /// Slack app.
    Slack,
    /// Discord bot with a slash command.
    Discord,
    /// Twilio SMS/voice numbers.
    Twilio,
}

impl ConfigType {
    /// All integration types.
    pub const ALL: [Self; 4] = [Self::Web, Self::Slack, Self::Discord, Self::Twilio];

    /// Returns the tag stored in the envelope.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Slack => "slack",
            Self::Discord => "discord",
            Self::Twilio => "twilio",
        }
    }

    /// Whether records of this type are encrypted unless told otherwise.
    ///
    /// Only the web widget is stored in plaintext; everything else carries
    /// tokens or secrets.
    #[must_use]
    pub const fn encrypted_by_default(&self) -> bool {
        !matches!(self, Self::Web)
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownConfigType {
                config_type: s.to_string(),
            })
    }
}
