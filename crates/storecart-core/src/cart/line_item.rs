//! Line item type.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One product entry in the cart.
///
/// Stored as `{"name": .., "price": .., "quantity": ..}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// Product name; unique within a cart.
    pub name: String,
    /// Unit price.
    #[serde(rename = "price")]
    pub unit_price: Money,
    /// Quantity, always at least 1 while the item is in a cart.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item with quantity 1.
    pub fn new(name: impl Into<String>, unit_price: Money) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity: 1,
        }
    }

    /// Line total (unit price times quantity).
    pub fn subtotal(&self) -> Money {
        self.unit_price * self.quantity
    }
}
