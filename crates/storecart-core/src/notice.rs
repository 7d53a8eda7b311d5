//! User-facing notifications.

use std::fmt;
use std::rc::Rc;

/// A short acknowledgment shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A new item was appended to the cart.
    ItemAdded { name: String },
    /// An existing item's quantity went up.
    QuantityUpdated { name: String, quantity: u32 },
    /// Checkout was attempted with one or more identity fields blank.
    MissingCustomerDetails,
    /// Checkout was attempted with nothing in the cart.
    EmptyCart,
    /// The order message was handed to the order channel.
    OrderSent,
    /// The order channel could not be opened.
    ChannelUnavailable,
}

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
}

impl Notice {
    pub fn kind(&self) -> NoticeKind {
        match self {
            Notice::ItemAdded { .. } | Notice::QuantityUpdated { .. } | Notice::OrderSent => {
                NoticeKind::Success
            }
            Notice::MissingCustomerDetails | Notice::EmptyCart | Notice::ChannelUnavailable => {
                NoticeKind::Warning
            }
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ItemAdded { name } => write!(f, "{} added to cart", name),
            Notice::QuantityUpdated { name, quantity } => {
                write!(f, "{} quantity updated to {}", name, quantity)
            }
            Notice::MissingCustomerDetails => f.write_str("Please fill in all customer details"),
            Notice::EmptyCart => f.write_str("Your cart is empty"),
            Notice::OrderSent => f.write_str("Order sent successfully!"),
            Notice::ChannelUnavailable => f.write_str("Could not open the order channel"),
        }
    }
}

/// Displays notices to the user. Fire-and-forget.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

impl<T: Notifier + ?Sized> Notifier for Rc<T> {
    fn notify(&self, notice: &Notice) {
        (**self).notify(notice)
    }
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn notify(&self, notice: &Notice) {
        (**self).notify(notice)
    }
}

/// Notifier that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _notice: &Notice) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_text() {
        let added = Notice::ItemAdded {
            name: "Tea".to_string(),
        };
        let updated = Notice::QuantityUpdated {
            name: "Tea".to_string(),
            quantity: 2,
        };
        assert_eq!(added.to_string(), "Tea added to cart");
        assert_eq!(updated.to_string(), "Tea quantity updated to 2");
        assert_eq!(
            Notice::MissingCustomerDetails.to_string(),
            "Please fill in all customer details"
        );
        assert_eq!(Notice::EmptyCart.to_string(), "Your cart is empty");
        assert_eq!(Notice::OrderSent.to_string(), "Order sent successfully!");
    }

    #[test]
    fn test_notice_kind() {
        assert_eq!(Notice::OrderSent.kind(), NoticeKind::Success);
        assert_eq!(Notice::EmptyCart.kind(), NoticeKind::Warning);
    }
}
