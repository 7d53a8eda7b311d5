//! Shopping cart module.
//!
//! Contains the line item type, quantity parsing and the cart store.

mod line_item;
mod quantity;
mod store;

pub use line_item::LineItem;
pub use quantity::parse_quantity;
pub use store::{AddOutcome, CartListener, CartStore};
