//! Checkout submission.

use storecart_cache::KvStore;
use storecart_observability::StructuredLogger;
use thiserror::Error;

use crate::cart::{CartStore, LineItem};
use crate::checkout::{
    ChannelError, CustomerDetails, CustomerForm, OrderChannel, OrderMessage, OrderNumber,
    OrderSummary,
};
use crate::money::Currency;
use crate::notice::{Notice, Notifier};

/// Why a checkout attempt was aborted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// One or more identity fields are blank.
    #[error("Missing customer details: {}", .0.join(", "))]
    MissingDetails(Vec<&'static str>),

    /// Nothing to order.
    #[error("Cart is empty")]
    EmptyCart,

    /// The order channel refused the hand-off.
    #[error(transparent)]
    Channel(#[from] ChannelError),
}

impl CheckoutError {
    /// The notice shown to the user for this failure.
    pub fn notice(&self) -> Notice {
        match self {
            CheckoutError::MissingDetails(_) => Notice::MissingCustomerDetails,
            CheckoutError::EmptyCart => Notice::EmptyCart,
            CheckoutError::Channel(_) => Notice::ChannelUnavailable,
        }
    }
}

/// Turns a filled-in form and a non-empty cart into a dispatched order.
#[derive(Debug, Clone)]
pub struct Checkout {
    currency: Currency,
    logger: StructuredLogger,
}

impl Checkout {
    pub fn new(currency: Currency, logger: StructuredLogger) -> Self {
        Self { currency, logger }
    }

    /// Validate the inputs and build the order summary.
    ///
    /// Identity fields are checked before the cart so the user is asked to
    /// complete the form first. Nothing is mutated.
    pub fn prepare(
        &self,
        details: &CustomerDetails,
        items: &[LineItem],
    ) -> Result<OrderSummary, CheckoutError> {
        let missing = details.missing_fields();
        if !missing.is_empty() {
            return Err(CheckoutError::MissingDetails(missing));
        }
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        Ok(OrderSummary::new(
            OrderNumber::generate(),
            details.trimmed(),
            items,
        ))
    }

    /// Submit the order.
    ///
    /// On success the message has been dispatched once, the cart is empty
    /// and persisted, the form is blank, and the user has been told. On any
    /// failure the user is notified of the reason and the cart and form are
    /// left exactly as they were.
    pub fn submit<S, F>(
        &self,
        store: &mut CartStore<S>,
        form: &mut F,
        channel: &dyn OrderChannel,
        notifier: &dyn Notifier,
    ) -> Result<OrderSummary, CheckoutError>
    where
        S: KvStore,
        F: CustomerForm + ?Sized,
    {
        let result = self.prepare(&form.read(), store.items()).and_then(|summary| {
            let message = OrderMessage::format(&summary, self.currency);
            channel.dispatch(&message)?;
            Ok(summary)
        });

        let summary = match result {
            Ok(summary) => summary,
            Err(e) => {
                self.logger
                    .info_builder("checkout aborted")
                    .field("reason", e.to_string())
                    .emit();
                notifier.notify(&e.notice());
                return Err(e);
            }
        };

        store.clear();
        form.clear();

        self.logger
            .info_builder("order sent")
            .field("order_number", summary.order_number.as_str())
            .field_i64("lines", summary.lines.len() as i64)
            .field_i64("total_minor", summary.total.amount_minor())
            .emit();
        notifier.notify(&Notice::OrderSent);

        Ok(summary)
    }

    /// Display currency used for the message.
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn checkout() -> Checkout {
        Checkout::new(Currency::INR, StructuredLogger::disabled())
    }

    fn tea() -> Vec<LineItem> {
        vec![LineItem::new("Tea", Money::from_major(20))]
    }

    #[test]
    fn test_prepare_checks_fields_before_cart() {
        let err = checkout()
            .prepare(&CustomerDetails::default(), &[])
            .unwrap_err();
        assert_eq!(
            err,
            CheckoutError::MissingDetails(vec!["name", "phone", "address"])
        );
        assert_eq!(err.notice(), Notice::MissingCustomerDetails);
    }

    #[test]
    fn test_prepare_empty_cart() {
        let details = CustomerDetails::new("Asha", "98765", "12 MG Road");
        let err = checkout().prepare(&details, &[]).unwrap_err();
        assert_eq!(err, CheckoutError::EmptyCart);
        assert_eq!(err.notice(), Notice::EmptyCart);
    }

    #[test]
    fn test_prepare_trims_fields() {
        let details = CustomerDetails::new(" Asha ", "98765", "12 MG Road ");
        let summary = checkout().prepare(&details, &tea()).unwrap();
        assert_eq!(summary.customer.name, "Asha");
        assert_eq!(summary.customer.address, "12 MG Road");
        assert_eq!(summary.total, Money::from_major(20));
    }

    #[test]
    fn test_channel_error_maps_to_notice() {
        let err = CheckoutError::from(ChannelError::Unavailable("blocked".to_string()));
        assert_eq!(err.notice(), Notice::ChannelUnavailable);
        assert_eq!(err.to_string(), "Order channel unavailable: blocked");
    }
}
