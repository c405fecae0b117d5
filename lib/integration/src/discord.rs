//! Discord bot integration.

use crate::REDACTED;
use crate::config_type::ConfigType;
use crate::record::{IntegrationConfigRecord, IntegrationSettings};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credentials and slash command registration for a Discord bot.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordSettings {
    /// Discord application ID.
    pub app_id: String,
    /// Name of the slash command that invokes the app.
    pub slash_command_name: String,
    /// Description shown for the slash command.
    pub slash_command_description: String,
    /// Bot token.
    pub bot_token: String,
    /// Public key used to verify interaction signatures.
    pub public_key: String,
    /// ID assigned by Discord once the slash command is registered.
    pub slash_command_id: Option<String>,
}

impl IntegrationSettings for DiscordSettings {
    const CONFIG_TYPE: ConfigType = ConfigType::Discord;
    const FIELD_NAMES: &'static [&'static str] = &[
        "app_id",
        "slash_command_name",
        "slash_command_description",
        "bot_token",
        "public_key",
        "slash_command_id",
    ];
}

impl fmt::Debug for DiscordSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordSettings")
            .field("app_id", &self.app_id)
            .field("slash_command_name", &self.slash_command_name)
            .field("slash_command_description", &self.slash_command_description)
            .field("bot_token", &REDACTED)
            .field("public_key", &REDACTED)
            .field("slash_command_id", &self.slash_command_id)
            .finish()
    }
}

/// Discord integration configuration record.
pub type DiscordIntegrationConfig = IntegrationConfigRecord<DiscordSettings>;
