//! Cart editing commands.

use anyhow::{bail, Context as _, Result};
use serde::Serialize;
use storecart_cache::FileStore;
use storecart_core::cart::{CartStore, LineItem};
use storecart_core::Money;

use super::{AddArgs, RemoveArgs, SetArgs};
use crate::context::Context;

/// JSON shape of the cart.
#[derive(Serialize)]
struct CartView<'a> {
    items: &'a [LineItem],
    item_count: u64,
    total: Money,
    currency: &'static str,
}

/// Add one unit of an item.
pub fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let price = parse_price(&args.price)?;
    let mut cart = ctx.open_cart()?;

    cart.add_item(&args.name, price);

    print_if_json(&cart, ctx);
    Ok(())
}

/// Remove an item.
pub fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;

    if cart.remove_item(&args.name) {
        ctx.output.success(&format!("{} removed from cart", args.name));
    } else {
        ctx.output.warn(&format!("{} is not in the cart", args.name));
    }

    print_if_json(&cart, ctx);
    Ok(())
}

/// Set an item's quantity.
pub fn set(args: SetArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;

    if cart.get(&args.name).is_none() {
        ctx.output.warn(&format!("{} is not in the cart", args.name));
    }
    cart.set_quantity_input(&args.name, &args.quantity);

    match cart.get(&args.name) {
        Some(item) => ctx.output.success(&format!(
            "{} quantity updated to {}",
            item.name, item.quantity
        )),
        None => ctx.output.debug(&format!("{} is no longer in the cart", args.name)),
    }

    print_if_json(&cart, ctx);
    Ok(())
}

/// Print the cart.
pub fn show(ctx: &Context) -> Result<()> {
    let cart = ctx.open_cart()?;

    if ctx.output.is_json() {
        ctx.output.json(&view(&cart, ctx));
        return Ok(());
    }

    ctx.output.header("Cart");
    ctx.output.cart_table(cart.items(), cart.total(), ctx.config.shop.currency);
    ctx.output.debug(&format!("Stored in {}", ctx.cart_file().display()));

    Ok(())
}

/// Print the grand total.
pub fn total(ctx: &Context) -> Result<()> {
    let cart = ctx.open_cart()?;
    let total = cart.total();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "total": total,
            "currency": ctx.config.shop.currency.code(),
        }));
    } else {
        println!("{}", ctx.config.shop.currency.format(total));
    }

    Ok(())
}

/// Empty the cart.
pub fn clear(ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;
    let lines = cart.len();

    cart.clear();

    ctx.output.success(&format!("Cart cleared ({} line(s) removed)", lines));
    print_if_json(&cart, ctx);
    Ok(())
}

fn view<'a>(cart: &'a CartStore<FileStore>, ctx: &Context) -> CartView<'a> {
    CartView {
        items: cart.items(),
        item_count: cart.item_count(),
        total: cart.total(),
        currency: ctx.config.shop.currency.code(),
    }
}

fn print_if_json(cart: &CartStore<FileStore>, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&view(cart, ctx));
    }
}

fn parse_price(raw: &str) -> Result<Money> {
    let amount: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("Invalid price: {}", raw))?;

    match Money::from_decimal(amount) {
        Some(price) => Ok(price),
        None => bail!("Invalid price: {} (must be a non-negative amount)", raw),
    }
}
