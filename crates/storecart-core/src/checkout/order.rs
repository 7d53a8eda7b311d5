//! Order summary types.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cart::LineItem;
use crate::checkout::CustomerDetails;
use crate::money::Money;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Display-only order reference: one letter and four digits (e.g. "K0427").
///
/// Shown to the user and embedded in the order message. Not unique and
/// never used as a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Wrap an existing order number.
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Generate a random order number.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generate an order number from the given RNG.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let letter = char::from(LETTERS[rng.gen_range(0..LETTERS.len())]);
        let digits: u16 = rng.gen_range(0..10_000);
        Self(format!("{}{:04}", letter, digits))
    }

    /// Get the order number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of a submitted order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub subtotal: Money,
}

impl From<&LineItem> for OrderLine {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            subtotal: item.subtotal(),
        }
    }
}

/// Everything the merchant needs to fulfil an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    pub order_number: OrderNumber,
    pub customer: CustomerDetails,
    pub lines: Vec<OrderLine>,
    pub total: Money,
}

impl OrderSummary {
    /// Build a summary from the cart's lines.
    pub fn new(order_number: OrderNumber, customer: CustomerDetails, items: &[LineItem]) -> Self {
        let lines: Vec<OrderLine> = items.iter().map(OrderLine::from).collect();
        let total = lines.iter().map(|l| l.subtotal).sum();
        Self {
            order_number,
            customer,
            lines,
            total,
        }
    }

    /// Total units ordered.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_order_number_shape(n: &OrderNumber) {
        let s = n.as_str();
        assert_eq!(s.len(), 5, "{}", s);
        let mut chars = s.chars();
        assert!(chars.next().unwrap().is_ascii_uppercase());
        assert!(chars.all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_order_number_shape() {
        for _ in 0..200 {
            assert_order_number_shape(&OrderNumber::generate());
        }
    }

    #[test]
    fn test_order_number_seeded() {
        let a = OrderNumber::generate_with(&mut StdRng::seed_from_u64(7));
        let b = OrderNumber::generate_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_order_number_shape(&a);
    }

    #[test]
    fn test_summary_lines_and_total() {
        let mut tea = LineItem::new("Tea", Money::from_major(20));
        tea.quantity = 2;
        let samosa = LineItem::new("Samosa", Money::from_major(15));

        let summary = OrderSummary::new(
            OrderNumber::generate(),
            CustomerDetails::new("Asha", "98765", "12 MG Road"),
            &[tea, samosa],
        );

        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].subtotal, Money::from_major(40));
        assert_eq!(summary.total, Money::from_major(55));
        assert_eq!(summary.item_count(), 3);
    }
}
