//! External order channel.

use std::rc::Rc;

use thiserror::Error;

use crate::checkout::OrderMessage;

/// Errors reported by an order channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// The channel could not be opened (e.g. the browser blocked the popup).
    #[error("Order channel unavailable: {0}")]
    Unavailable(String),
}

/// Hands a finished order message to the merchant.
///
/// No response is awaited or interpreted; `Ok` means the hand-off happened.
pub trait OrderChannel {
    fn dispatch(&self, message: &OrderMessage) -> Result<(), ChannelError>;
}

impl<T: OrderChannel + ?Sized> OrderChannel for Rc<T> {
    fn dispatch(&self, message: &OrderMessage) -> Result<(), ChannelError> {
        (**self).dispatch(message)
    }
}

/// Builds `wa.me` style click-to-chat links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppLink {
    base_url: String,
    phone: String,
}

impl WhatsAppLink {
    /// Link builder for `phone` under `base_url` (e.g. "https://wa.me").
    pub fn new(base_url: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            phone: phone.into(),
        }
    }

    /// Full link opening a chat with the message prefilled.
    ///
    /// ```
    /// use storecart_core::checkout::{OrderMessage, WhatsAppLink};
    /// let link = WhatsAppLink::new("https://wa.me", "7051189082");
    /// let url = link.url_for(&OrderMessage::from_text("Hi there"));
    /// assert_eq!(url, "https://wa.me/7051189082?text=Hi%20there");
    /// ```
    pub fn url_for(&self, message: &OrderMessage) -> String {
        format!(
            "{}/{}?text={}",
            self.base_url.trim_end_matches('/'),
            self.phone,
            urlencoding::encode(message.as_str())
        )
    }
}
