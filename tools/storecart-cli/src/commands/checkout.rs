//! Checkout command.

use std::cell::RefCell;

use anyhow::Result;
use storecart_core::checkout::{
    ChannelError, Checkout, CustomerDetails, OrderChannel, OrderMessage, WhatsAppLink,
};

use super::{AlreadyReported, CheckoutArgs};
use crate::context::Context;

/// Order channel for the terminal: builds the click-to-chat link and keeps
/// it for printing, since there is no browser to open.
pub struct LinkChannel {
    link: WhatsAppLink,
    sent: RefCell<Option<(OrderMessage, String)>>,
}

impl LinkChannel {
    pub fn new(link: WhatsAppLink) -> Self {
        Self {
            link,
            sent: RefCell::new(None),
        }
    }

    /// The last dispatched message and its URL.
    pub fn take_sent(&self) -> Option<(OrderMessage, String)> {
        self.sent.borrow_mut().take()
    }
}

impl OrderChannel for LinkChannel {
    fn dispatch(&self, message: &OrderMessage) -> Result<(), ChannelError> {
        let url = self.link.url_for(message);
        *self.sent.borrow_mut() = Some((message.clone(), url));
        Ok(())
    }
}

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;
    let mut form = CustomerDetails::new(
        args.name.unwrap_or_default(),
        args.phone.unwrap_or_default(),
        args.address.unwrap_or_default(),
    );
    let channel = LinkChannel::new(ctx.config.shop.order_link());
    let checkout = Checkout::new(ctx.config.shop.currency, ctx.logger.for_component("checkout"));

    // Failures were already shown through the notifier
    let summary = match checkout.submit(&mut cart, &mut form, &channel, &ctx.output) {
        Ok(summary) => summary,
        Err(e) => {
            ctx.output.debug(&format!("Checkout failed: {}", e));
            return Err(AlreadyReported.into());
        }
    };

    let Some((message, url)) = channel.take_sent() else {
        return Ok(());
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "order": summary,
            "message": message.as_str(),
            "url": url,
        }));
        return Ok(());
    }

    ctx.output.header(&format!("Order #{}", summary.order_number));
    println!("{}", message);
    println!();
    ctx.output.kv("Items", &summary.item_count().to_string());
    ctx.output.kv("Total", &ctx.config.shop.currency.format(summary.total));
    ctx.output.info("Open this link to send the order:");
    println!("{}", url);

    Ok(())
}
