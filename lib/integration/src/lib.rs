//! Integration configuration records for switchboard.
//!
//! This crate provides:
//!
//! - **Records**: Typed settings for the web, Slack, Discord and Twilio
//!   integrations, wrapped in [`IntegrationConfigRecord`]
//! - **Envelope codec**: `to_dict`/`from_dict` between records and the
//!   persisted [`ConfigEnvelope`], encrypting the payload when required
//! - **Cipher seam**: [`Encryptor`]/[`Decryptor`] traits for the
//!   caller-supplied encryption primitives
//! - **Options**: [`CodecOptions`] loaded from the environment or a file

pub mod cipher;
pub mod config;
pub mod config_type;
pub mod discord;
pub mod envelope;
pub mod error;
pub mod options;
pub mod record;
pub mod slack;
pub mod twilio;
pub mod web;

#[cfg(test)]
pub(crate) mod testing;

/// Placeholder printed in place of secrets.
pub(crate) const REDACTED: &str = "[REDACTED]";

pub use cipher::{Decryptor, Encryptor, NoEncryption};
pub use config::IntegrationConfig;
pub use config_type::ConfigType;
pub use discord::{DiscordIntegrationConfig, DiscordSettings};
pub use envelope::ConfigEnvelope;
pub use error::{CipherError, ConfigError, CryptoOperation};
pub use options::{CodecOptions, UnknownFieldPolicy};
pub use record::{IntegrationConfigRecord, IntegrationSettings};
pub use slack::{SlackIntegrationConfig, SlackSettings};
pub use twilio::{TwilioIntegrationConfig, TwilioSettings};
pub use web::{WebIntegrationConfig, WebSettings};
