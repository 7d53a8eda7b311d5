//! Shop configuration.

use serde::{Deserialize, Serialize};

use crate::checkout::WhatsAppLink;
use crate::error::ConfigError;
use crate::money::Currency;

/// Settings shared by every front end. Every field has a default, so an
/// empty document is a valid config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShopConfig {
    /// Storage key the cart is persisted under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Currency used when displaying prices.
    #[serde(default)]
    pub currency: Currency,

    /// Merchant number orders are sent to.
    #[serde(default = "default_merchant_phone")]
    pub merchant_phone: String,

    /// Click-to-chat endpoint.
    #[serde(default = "default_channel_base_url")]
    pub channel_base_url: String,

    /// How long a toast stays on screen.
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u32,
}

fn default_storage_key() -> String {
    "cart".to_string()
}

fn default_merchant_phone() -> String {
    "7051189082".to_string()
}

fn default_channel_base_url() -> String {
    "https://wa.me".to_string()
}

fn default_toast_duration_ms() -> u32 {
    2000
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            currency: Currency::default(),
            merchant_phone: default_merchant_phone(),
            channel_base_url: default_channel_base_url(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl ShopConfig {
    /// Parse from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()
    }

    /// Parse from JSON.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()
    }

    /// Serialize as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Link builder for the configured merchant.
    pub fn order_link(&self) -> WhatsAppLink {
        WhatsAppLink::new(&self.channel_base_url, &self.merchant_phone)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage_key",
                reason: "must not be empty".to_string(),
            });
        }
        if self.merchant_phone.trim().is_empty()
            || !self.merchant_phone.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ConfigError::InvalidValue {
                field: "merchant_phone",
                reason: format!("expected digits only, got {:?}", self.merchant_phone),
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(ShopConfig::from_toml_str("").unwrap(), ShopConfig::default());
        assert_eq!(ShopConfig::from_json_str("{}").unwrap(), ShopConfig::default());
    }

    #[test]
    fn test_toml_overrides() {
        let config = ShopConfig::from_toml_str(
            r#"
            storage_key = "chai-cart"
            currency = "USD"
            merchant_phone = "15551234567"
            toast_duration_ms = 3500
            "#,
        )
        .unwrap();

        assert_eq!(config.storage_key, "chai-cart");
        assert_eq!(config.currency, Currency::USD);
        assert_eq!(config.toast_duration_ms, 3500);
        assert_eq!(config.channel_base_url, "https://wa.me");
    }

    #[test]
    fn test_json_overrides() {
        let config = ShopConfig::from_json_str(r#"{"currency": "EUR"}"#).unwrap();
        assert_eq!(config.currency, Currency::EUR);
        assert_eq!(config.storage_key, "cart");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            ShopConfig::from_toml_str(r#"merchant_phone = "+91 70511""#),
            Err(ConfigError::InvalidValue {
                field: "merchant_phone",
                ..
            })
        ));
        assert!(matches!(
            ShopConfig::from_json_str(r#"{"storage_key": " "}"#),
            Err(ConfigError::InvalidValue {
                field: "storage_key",
                ..
            })
        ));
        assert!(matches!(
            ShopConfig::from_toml_str("currency = 5"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ShopConfig {
            currency: Currency::GBP,
            ..ShopConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(ShopConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_order_link() {
        let link = ShopConfig::default().order_link();
        assert_eq!(link, WhatsAppLink::new("https://wa.me", "7051189082"));
    }
}
