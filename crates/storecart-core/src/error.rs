//! Configuration error types.
//!
//! Cart operations never fail; checkout failures are
//! [`CheckoutError`](crate::checkout::CheckoutError).

use thiserror::Error;

/// Errors that can occur while reading or writing shop configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML input did not parse.
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML output could not be produced.
    #[error("Failed to write TOML config: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// JSON input did not parse.
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// A value parsed but is not usable.
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
