//! Web widget integration.

use crate::config_type::ConfigType;
use crate::record::{IntegrationConfigRecord, IntegrationSettings};
use serde::{Deserialize, Serialize};

/// Settings for embedding an app on third-party sites. Stored in plaintext.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebSettings {
    /// Sites allowed to embed the app.
    pub allowed_sites: Vec<String>,
    /// Custom domain serving the app, if any.
    pub domain: Option<String>,
}

impl IntegrationSettings for WebSettings {
    const CONFIG_TYPE: ConfigType = ConfigType::Web;
    const FIELD_NAMES: &'static [&'static str] = &["allowed_sites", "domain"];
}

/// Web integration configuration record.
pub type WebIntegrationConfig = IntegrationConfigRecord<WebSettings>;
