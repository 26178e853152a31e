//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Store identity.
    #[serde(default)]
    pub store: StoreConfig,

    /// Durable storage settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Interface timing knobs.
    #[serde(default)]
    pub ui: UiConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Store identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Brand name shown in headers and woven into the checkout message.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// WhatsApp number that receives orders, digits only with country
    /// code. Empty means the link opens WhatsApp's own chat chooser.
    #[serde(default)]
    pub whatsapp: String,
}

fn default_store_name() -> String {
    "VITRINE".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            whatsapp: String::new(),
        }
    }
}

/// Durable storage settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the cart snapshot.
    #[serde(default)]
    pub data_dir: Option<String>,
}

/// Interface timing knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hero slider auto-advance interval in milliseconds.
    #[serde(default = "default_slide_interval")]
    pub slide_interval_ms: u64,

    /// How long a notice stays live, in milliseconds.
    #[serde(default = "default_notice_ttl")]
    pub notice_ttl_ms: u64,

    /// Simulated authentication delay in milliseconds.
    #[serde(default = "default_login_delay")]
    pub login_delay_ms: u64,
}

fn default_slide_interval() -> u64 {
    5000
}

fn default_notice_ttl() -> u64 {
    3000
}

fn default_login_delay() -> u64 {
    1000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            slide_interval_ms: default_slide_interval(),
            notice_ttl_ms: default_notice_ttl(),
            login_delay_ms: default_login_delay(),
        }
    }
}

/// Generate a default vitrine.toml config file.
pub fn generate_default_config() -> String {
    r#"# Vitrine store configuration

[store]
name = "VITRINE"
# WhatsApp number for the checkout hand-off, digits only with country code.
# Leave empty to open WhatsApp's chat chooser instead.
# whatsapp = "5511999999999"

[storage]
# Where the cart snapshot lives. Defaults to ~/.local/share/vitrine.
# data_dir = "/var/lib/vitrine"

[ui]
slide_interval_ms = 5000
notice_ttl_ms = 3000
login_delay_ms = 1000
"#
    .to_string()
}
