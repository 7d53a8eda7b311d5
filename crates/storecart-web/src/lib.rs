//! Browser front end for the storecart widget.
//!
//! Built as a `cdylib` for `wasm32-unknown-unknown`. On load it restores the
//! cart from `localStorage` and mounts a Leptos cart table into
//! `#cart-items`, plus a toast stack on the body. Storefront markup outside
//! the table is wired through a delegated click listener:
//!
//! - buttons with `data-add-to-cart`, `data-name`, `data-price`
//! - anything with `data-cart-checkout` submits the order
//!
//! `addToCart`, `removeFromCart`, `updateQuantity` and `handleCheckout` are
//! exported for pages that call them from inline handlers.
//!
//! The [`model`] and [`page`] modules have no browser dependency and build
//! on every target.

pub mod model;
pub mod page;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod channel;
#[cfg(target_arch = "wasm32")]
mod form;
#[cfg(target_arch = "wasm32")]
mod toast;
#[cfg(target_arch = "wasm32")]
mod view;

#[cfg(target_arch = "wasm32")]
pub use app::{add_to_cart, handle_checkout, remove_from_cart, update_quantity};
#[cfg(target_arch = "wasm32")]
pub use channel::BrowserChannel;
#[cfg(target_arch = "wasm32")]
pub use form::DomCustomerForm;
#[cfg(target_arch = "wasm32")]
pub use toast::ToastNotifier;
#[cfg(target_arch = "wasm32")]
pub use view::{CartTable, CartViewSink, ToastStack};
