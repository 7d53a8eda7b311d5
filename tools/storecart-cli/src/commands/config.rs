//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand, ConfigFormat};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force, format } => init_config(force, format, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("source", &path.display().to_string()),
        None => ctx.output.kv("source", "(defaults)"),
    }

    let shop = &ctx.config.shop;
    ctx.output.info("");
    ctx.output.info("[shop]");
    ctx.output.kv("storage_key", &shop.storage_key);
    ctx.output.kv(
        "currency",
        &format!("{} ({})", shop.currency.code(), shop.currency.symbol()),
    );
    ctx.output.kv("merchant_phone", &shop.merchant_phone);
    ctx.output.kv("channel_base_url", &shop.channel_base_url);
    ctx.output
        .kv("toast_duration_ms", &shop.toast_duration_ms.to_string());

    ctx.output.info("");
    ctx.output.info("[cli]");
    ctx.output.kv("cart_file", &ctx.config.cli.cart_file);

    Ok(())
}

fn init_config(force: bool, format: ConfigFormat, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(format.file_name());

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    match format {
        ConfigFormat::Toml => std::fs::write(&config_path, generate_default_config())?,
        ConfigFormat::Json => CliConfig::default().save(&config_path)?,
    }

    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}
