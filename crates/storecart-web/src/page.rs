//! The page contract: element ids, data attributes and their parsing.

use storecart_core::{ConfigError, Money, ShopConfig};
use storecart_observability::LogLevel;

/// Container the cart table is mounted into.
pub const CART_CONTAINER_ID: &str = "cart-items";
/// Checkout button, hidden while the cart is empty.
pub const CHECKOUT_BUTTON_ID: &str = "checkout-btn";

pub const CUSTOMER_NAME_ID: &str = "customerName";
pub const CUSTOMER_PHONE_ID: &str = "customerPhone";
pub const CUSTOMER_ADDRESS_ID: &str = "customerAddress";

/// `<body>` attribute holding the shop config as JSON.
pub const CONFIG_ATTR: &str = "data-storecart-config";
/// `<body>` attribute holding the minimum log level.
pub const LOG_LEVEL_ATTR: &str = "data-storecart-log-level";

/// Marks a storefront "add" button; paired with `data-name` and `data-price`.
pub const ADD_TO_CART_ATTR: &str = "data-add-to-cart";
pub const NAME_ATTR: &str = "data-name";
pub const PRICE_ATTR: &str = "data-price";

/// Marks any element that submits the order when clicked.
pub const CHECKOUT_ATTR: &str = "data-cart-checkout";

/// Shop config from the body attribute; an absent attribute means defaults.
pub fn parse_page_config(raw: Option<&str>) -> Result<ShopConfig, ConfigError> {
    match raw {
        Some(raw) if !raw.trim().is_empty() => ShopConfig::from_json_str(raw),
        _ => Ok(ShopConfig::default()),
    }
}

/// Log level from the body attribute, `Info` when absent or unknown.
pub fn parse_log_level(raw: Option<&str>) -> LogLevel {
    raw.and_then(LogLevel::from_name).unwrap_or(LogLevel::Info)
}

/// Price from a `data-price` attribute, in major units.
pub fn parse_price_attr(raw: &str) -> Option<Money> {
    raw.trim().parse::<f64>().ok().and_then(Money::from_decimal)
}

/// Quantity sent from script as a number: truncated toward zero, with
/// `NaN` counting as 0.
pub fn quantity_from_number(value: f64) -> i64 {
    if value.is_nan() {
        0
    } else {
        // Float-to-int `as` saturates at the bounds
        value.trunc() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storecart_core::Currency;

    #[test]
    fn test_page_config() {
        assert_eq!(parse_page_config(None).unwrap(), ShopConfig::default());
        assert_eq!(parse_page_config(Some("  ")).unwrap(), ShopConfig::default());

        let config =
            parse_page_config(Some(r#"{"currency": "USD", "toast_duration_ms": 500}"#)).unwrap();
        assert_eq!(config.currency, Currency::USD);
        assert_eq!(config.toast_duration_ms, 500);

        assert!(parse_page_config(Some("{not json")).is_err());
    }

    #[test]
    fn test_log_level() {
        assert_eq!(parse_log_level(None), LogLevel::Info);
        assert_eq!(parse_log_level(Some("debug")), LogLevel::Debug);
        assert_eq!(parse_log_level(Some("loud")), LogLevel::Info);
    }

    #[test]
    fn test_price_attr() {
        assert_eq!(parse_price_attr("20"), Some(Money::from_major(20)));
        assert_eq!(parse_price_attr(" 12.5 "), Some(Money::from_minor(1250)));
        assert_eq!(parse_price_attr("free"), None);
        assert_eq!(parse_price_attr("-3"), None);
    }

    #[test]
    fn test_quantity_from_number() {
        assert_eq!(quantity_from_number(3.0), 3);
        assert_eq!(quantity_from_number(2.9), 2);
        assert_eq!(quantity_from_number(-1.5), -1);
        assert_eq!(quantity_from_number(f64::NAN), 0);
        assert_eq!(quantity_from_number(f64::INFINITY), i64::MAX);
    }
}
