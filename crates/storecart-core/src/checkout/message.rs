//! Order message formatting.

use std::fmt::{self, Write as _};

use crate::checkout::OrderSummary;
use crate::money::Currency;

/// The text handed to the order channel.
///
/// Uses messaging-app markup: `*bold*` headings and one bullet per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMessage {
    text: String,
}

impl OrderMessage {
    /// Render a summary with prices in `currency`.
    pub fn format(summary: &OrderSummary, currency: Currency) -> Self {
        let customer = &summary.customer;
        let mut text = String::new();

        // Writing into a String cannot fail
        let _ = write!(text, "*New Order #{}*\n\n", summary.order_number);
        text.push_str("*Customer Details:*\n");
        let _ = writeln!(text, "Name: {}", customer.name);
        let _ = writeln!(text, "Phone: {}", customer.phone);
        let _ = write!(text, "Address: {}\n\n", customer.address);
        text.push_str("*Order Items:*\n");
        for line in &summary.lines {
            let _ = writeln!(
                text,
                "\u{2022} {} x {} = {}",
                line.name,
                line.quantity,
                currency.format(line.subtotal)
            );
        }
        let _ = write!(
            text,
            "\n*Total Amount: {}*\n\n",
            currency.format(summary.total)
        );
        text.push_str("Thank you for your order!");

        Self { text }
    }

    /// Wrap pre-formatted text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for OrderMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
