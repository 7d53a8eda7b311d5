//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;

use std::fmt;

use clap::{Args, Subcommand, ValueEnum};

/// A failure the command has already shown to the user. `main` exits with
/// status 1 without printing it again.
#[derive(Debug)]
pub struct AlreadyReported;

impl fmt::Display for AlreadyReported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("already reported")
    }
}

impl std::error::Error for AlreadyReported {}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Item name.
    pub name: String,

    /// Unit price in major units (e.g. 20 or 49.50).
    pub price: String,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Item name.
    pub name: String,
}

/// Arguments for the set command.
#[derive(Args)]
pub struct SetArgs {
    /// Item name.
    pub name: String,

    /// New quantity. Anything that does not start with a number counts as 0.
    #[arg(allow_hyphen_values = true)]
    pub quantity: String,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Customer name.
    #[arg(long)]
    pub name: Option<String>,

    /// Customer phone number.
    #[arg(long)]
    pub phone: Option<String>,

    /// Delivery address.
    #[arg(long)]
    pub address: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// File format to write.
        #[arg(long, value_enum, default_value_t = ConfigFormat::Toml)]
        format: ConfigFormat,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// File name written by `config init`.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Toml => "storecart.toml",
            Self::Json => "storecart.json",
        }
    }
}
