//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storecart_core::ShopConfig;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storecart.toml", ".storecart.toml", "storecart.json"];

/// CLI configuration file: the shop settings at the top level plus a
/// `[cli]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Settings shared with the browser build.
    #[serde(flatten)]
    pub shop: ShopConfig,

    /// Terminal-only settings.
    #[serde(default)]
    pub cli: CliSection,
}

/// Terminal-only settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliSection {
    /// Where the cart is stored, relative to the working directory.
    #[serde(default = "default_cart_file")]
    pub cart_file: String,
}

fn default_cart_file() -> String {
    ".storecart/cart.json".to_string()
}

impl Default for CliSection {
    fn default() -> Self {
        Self {
            cart_file: default_cart_file(),
        }
    }
}

/// Only the `[cli]` table; shop keys are read by [`ShopConfig`] itself so
/// they go through its validation.
#[derive(Deserialize)]
struct CliOnly {
    #[serde(default)]
    cli: CliSection,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            Self::from_json_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Parse from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let shop = ShopConfig::from_toml_str(content)?;
        let CliOnly { cli } = toml::from_str(content)?;
        Ok(Self { shop, cli })
    }

    /// Parse from JSON.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let shop = ShopConfig::from_json_str(content)?;
        let CliOnly { cli } = serde_json::from_str(content)?;
        Ok(Self { shop, cli })
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Generate a default storecart.toml config file.
pub fn generate_default_config() -> String {
    let defaults = CliConfig::default();
    format!(
        r#"# storecart configuration

# Storage key the cart is kept under
storage_key = "{storage_key}"

# Display currency: INR, USD, EUR, GBP, AUD or CAD
currency = "{currency}"

# Orders are sent to this number, digits only with country code
merchant_phone = "{phone}"
channel_base_url = "{base_url}"

# Browser only
toast_duration_ms = {toast}

[cli]
cart_file = "{cart_file}"
"#,
        storage_key = defaults.shop.storage_key,
        currency = defaults.shop.currency.code(),
        phone = defaults.shop.merchant_phone,
        base_url = defaults.shop.channel_base_url,
        toast = defaults.shop.toast_duration_ms,
        cart_file = defaults.cli.cart_file,
    )
}
