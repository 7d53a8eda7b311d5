//! View models for the cart table and toasts.
//!
//! Plain data with display strings already formatted, so the components in
//! the wasm-only view layer stay thin and this part is testable on the host.

use storecart_core::cart::LineItem;
use storecart_core::{Currency, Money, Notice, NoticeKind};

/// Text shown in place of the table when the cart has no lines.
pub const EMPTY_CART_TEXT: &str = "Your cart is empty";

/// Column headings of the cart table.
pub const CART_COLUMNS: [&str; 5] = ["Item", "Price", "Quantity", "Total", "Action"];

/// One row of the cart table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub name: String,
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl CartRow {
    pub fn new(item: &LineItem, currency: Currency) -> Self {
        Self {
            name: item.name.clone(),
            price: currency.format(item.unit_price),
            quantity: item.quantity,
            line_total: currency.format(item.subtotal()),
        }
    }
}

/// Everything the cart table shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    pub total: String,
}

impl CartView {
    pub fn new(items: &[LineItem], total: Money, currency: Currency) -> Self {
        Self {
            rows: items.iter().map(|item| CartRow::new(item, currency)).collect(),
            total: currency.format(total),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// CSS `display` value for the checkout button.
    pub fn checkout_display(&self) -> &'static str {
        if self.is_empty() {
            "none"
        } else {
            "block"
        }
    }
}

/// A notice on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

impl Toast {
    pub fn new(id: u64, notice: &Notice) -> Self {
        Self {
            id,
            kind: notice.kind(),
            message: notice.to_string(),
        }
    }

    /// Class list of the toast element.
    pub fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => {
                "toast show align-items-center text-white bg-success border-0 mb-2"
            }
            NoticeKind::Warning => {
                "toast show align-items-center text-white bg-danger border-0 mb-2"
            }
        }
    }
}

/// Drop the toast with `id`; unknown ids are ignored.
pub fn dismiss_toast(toasts: &mut Vec<Toast>, id: u64) {
    toasts.retain(|toast| toast.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, price: Money, quantity: u32) -> LineItem {
        let mut item = LineItem::new(name, price);
        item.quantity = quantity;
        item
    }

    #[test]
    fn test_empty_view() {
        let view = CartView::new(&[], Money::ZERO, Currency::INR);
        assert!(view.is_empty());
        assert_eq!(view.total, "₹0");
        assert_eq!(view.checkout_display(), "none");
    }

    #[test]
    fn test_rows_are_formatted() {
        let items = [
            line("Tea", Money::from_major(20), 2),
            line("Samosa", Money::from_minor(1550), 1),
        ];
        let view = CartView::new(&items, Money::from_minor(5550), Currency::INR);

        assert_eq!(
            view.rows[0],
            CartRow {
                name: "Tea".to_string(),
                price: "₹20".to_string(),
                quantity: 2,
                line_total: "₹40".to_string(),
            }
        );
        assert_eq!(view.rows[1].price, "₹15.5");
        assert_eq!(view.total, "₹55.5");
        assert_eq!(view.checkout_display(), "block");
    }

    #[test]
    fn test_rows_keep_cart_order() {
        let items = [
            line("Lassi", Money::from_major(40), 1),
            line("Tea", Money::from_major(20), 1),
            line("Kachori", Money::from_major(15), 3),
        ];
        let view = CartView::new(&items, Money::from_major(105), Currency::INR);
        let names: Vec<&str> = view.rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["Lassi", "Tea", "Kachori"]);
    }

    #[test]
    fn test_toast_colours() {
        let added = Toast::new(
            1,
            &Notice::ItemAdded {
                name: "Chai & Bun".to_string(),
            },
        );
        assert_eq!(added.message, "Chai & Bun added to cart");
        assert!(added.class().contains("bg-success"));

        let empty = Toast::new(2, &Notice::EmptyCart);
        assert_eq!(empty.message, EMPTY_CART_TEXT);
        assert!(empty.class().contains("bg-danger"));
    }

    #[test]
    fn test_dismiss_toast() {
        let mut toasts = vec![
            Toast::new(1, &Notice::OrderSent),
            Toast::new(2, &Notice::EmptyCart),
        ];
        dismiss_toast(&mut toasts, 1);
        dismiss_toast(&mut toasts, 7);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, 2);
    }
}
