//! Cart state and checkout for the storecart storefront widget.
//!
//! This crate holds everything that does not touch a display surface:
//!
//! - **Money**: integer-backed prices with currency formatting
//! - **Cart**: line items and the [`CartStore`](cart::CartStore), which
//!   mirrors the cart to key-value storage after every mutation
//! - **Checkout**: customer details, order summaries, the order message and
//!   the channel it is handed to
//! - **Config**: shop settings shared by the browser and CLI front ends
//!
//! Front ends plug in through three traits: [`CartListener`](cart::CartListener)
//! to render, [`Notifier`] to show notices, and
//! [`OrderChannel`](checkout::OrderChannel) to send the order.
//!
//! # Example
//!
//! ```rust
//! use storecart_cache::{Cache, MemoryStore};
//! use storecart_core::prelude::*;
//! use storecart_observability::StructuredLogger;
//!
//! let mut cart = CartStore::open(
//!     Cache::new(MemoryStore::new()),
//!     "cart",
//!     StructuredLogger::disabled(),
//! );
//!
//! cart.add_item("Tea", Money::from_major(20));
//! cart.add_item("Tea", Money::from_major(20));
//! assert_eq!(cart.total(), Money::from_major(40));
//!
//! cart.set_quantity("Tea", 0);
//! assert!(cart.is_empty());
//! ```

pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod money;
pub mod notice;

pub use config::ShopConfig;
pub use error::ConfigError;
pub use money::{Currency, Money};
pub use notice::{Notice, NoticeKind, Notifier, SilentNotifier};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::ShopConfig;
    pub use crate::error::ConfigError;
    pub use crate::money::{Currency, Money};
    pub use crate::notice::{Notice, NoticeKind, Notifier, SilentNotifier};

    // Cart
    pub use crate::cart::{parse_quantity, AddOutcome, CartListener, CartStore, LineItem};

    // Checkout
    pub use crate::checkout::{
        ChannelError, Checkout, CheckoutError, CustomerDetails, CustomerForm, OrderChannel,
        OrderLine, OrderMessage, OrderNumber, OrderSummary, WhatsAppLink,
    };
}
