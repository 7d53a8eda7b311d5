//! storecart - manage a cart file and send orders from the terminal.
//!
//! Commands:
//! - `storecart add` - Add one unit of an item
//! - `storecart remove` - Remove an item
//! - `storecart set` - Set an item's quantity
//! - `storecart show` - Print the cart
//! - `storecart total` - Print the grand total
//! - `storecart clear` - Empty the cart
//! - `storecart checkout` - Build the order message and its link
//! - `storecart config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{AddArgs, CheckoutArgs, ConfigArgs, RemoveArgs, SetArgs};

/// storecart - a shopping cart that checks out through a chat link
#[derive(Parser)]
#[command(name = "storecart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one unit of an item
    Add(AddArgs),

    /// Remove an item from the cart
    Remove(RemoveArgs),

    /// Set the quantity of an item (0 or less removes it)
    Set(SetArgs),

    /// Show the cart
    Show,

    /// Print the cart total
    Total,

    /// Empty the cart
    Clear,

    /// Send the cart as an order
    Checkout(CheckoutArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Add(args) => commands::cart::add(args, &ctx),
        Commands::Remove(args) => commands::cart::remove(args, &ctx),
        Commands::Set(args) => commands::cart::set(args, &ctx),
        Commands::Show => commands::cart::show(&ctx),
        Commands::Total => commands::cart::total(&ctx),
        Commands::Clear => commands::cart::clear(&ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        if !e.is::<commands::AlreadyReported>() {
            ctx.output.error(&format!("{:#}", e));
        }
        std::process::exit(1);
    }

    Ok(())
}
