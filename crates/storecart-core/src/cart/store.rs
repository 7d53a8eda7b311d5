//! The cart store: in-memory line items mirrored to key-value storage.

use std::rc::Rc;

use storecart_cache::{Cache, KvStore};
use storecart_observability::StructuredLogger;

use crate::cart::quantity::{parse_quantity, stored_quantity};
use crate::cart::LineItem;
use crate::money::Money;
use crate::notice::{Notice, Notifier};

/// Receives the cart after every mutation. This is the rendering hook.
pub trait CartListener {
    fn cart_changed(&self, items: &[LineItem], total: Money);
}

impl<T: CartListener + ?Sized> CartListener for Rc<T> {
    fn cart_changed(&self, items: &[LineItem], total: Money) {
        (**self).cart_changed(items, total)
    }
}

impl<T: CartListener + ?Sized> CartListener for Box<T> {
    fn cart_changed(&self, items: &[LineItem], total: Money) {
        (**self).cart_changed(items, total)
    }
}

/// Result of [`CartStore::add_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended with quantity 1.
    Added,
    /// An existing line's quantity was raised to the contained value.
    QuantityUpdated(u32),
}

/// Single source of truth for the cart's contents.
///
/// Every mutating operation rewrites the whole cart to storage and then
/// notifies listeners before returning, so storage never lags memory. A
/// failed write is logged and otherwise ignored; the in-memory cart stays
/// authoritative for the rest of the page's life.
pub struct CartStore<S: KvStore> {
    items: Vec<LineItem>,
    cache: Cache<S>,
    key: String,
    listeners: Vec<Box<dyn CartListener>>,
    notifier: Option<Box<dyn Notifier>>,
    logger: StructuredLogger,
}

impl<S: KvStore> CartStore<S> {
    /// Restore the cart persisted under `key`.
    ///
    /// A missing or unreadable value yields an empty cart. Entries are
    /// decoded one by one, so a single malformed line (such as a `null`
    /// quantity) is dropped without losing the rest. Restored entries are
    /// sanitized: zero quantities are dropped and repeated names are merged
    /// into their first occurrence.
    pub fn open(cache: Cache<S>, key: impl Into<String>, logger: StructuredLogger) -> Self {
        let key = key.into();
        let items = match cache.get::<Vec<serde_json::Value>>(&key) {
            Ok(Some(entries)) => sanitize(decode_entries(entries, &logger)),
            Ok(None) => Vec::new(),
            Err(e) => {
                logger
                    .debug_builder("discarding unreadable stored cart")
                    .field("key", key.as_str())
                    .field("error", e.to_string())
                    .emit();
                Vec::new()
            }
        };

        logger
            .debug_builder("cart restored")
            .field("key", key.as_str())
            .field_i64("lines", items.len() as i64)
            .emit();

        Self {
            items,
            cache,
            key,
            listeners: Vec::new(),
            notifier: None,
            logger,
        }
    }

    /// Attach a listener called after every mutation.
    pub fn with_listener(mut self, listener: impl CartListener + 'static) -> Self {
        self.add_listener(listener);
        self
    }

    /// Attach a listener called after every mutation.
    pub fn add_listener(&mut self, listener: impl CartListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Set the notifier used for add acknowledgments.
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    /// Add one unit of `name`.
    ///
    /// An existing line gains one unit and keeps its stored price.
    /// Otherwise a new line is appended.
    pub fn add_item(&mut self, name: &str, unit_price: Money) -> AddOutcome {
        let outcome = match self.items.iter_mut().find(|i| i.name == name) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(1);
                AddOutcome::QuantityUpdated(existing.quantity)
            }
            None => {
                self.items.push(LineItem::new(name, unit_price));
                AddOutcome::Added
            }
        };

        self.logger
            .debug_builder("item added")
            .field("name", name)
            .field_bool("new_line", outcome == AddOutcome::Added)
            .emit();

        self.commit();

        let notice = match outcome {
            AddOutcome::Added => Notice::ItemAdded {
                name: name.to_string(),
            },
            AddOutcome::QuantityUpdated(quantity) => Notice::QuantityUpdated {
                name: name.to_string(),
                quantity,
            },
        };
        if let Some(notifier) = &self.notifier {
            notifier.notify(&notice);
        }

        outcome
    }

    /// Remove the line named `name`, if present.
    ///
    /// Persists and notifies listeners either way. Returns whether a line
    /// was removed.
    pub fn remove_item(&mut self, name: &str) -> bool {
        let removed = self.remove_entry(name);
        self.logger
            .debug_builder("item removed")
            .field("name", name)
            .field_bool("found", removed)
            .emit();
        self.commit();
        removed
    }

    /// Set the quantity of `name`.
    ///
    /// A quantity of zero or less removes the line; anything larger than
    /// `u32::MAX` saturates. A missing name changes nothing but still
    /// persists and notifies. Persists exactly once.
    pub fn set_quantity(&mut self, name: &str, quantity: i64) {
        match stored_quantity(quantity) {
            None => {
                self.remove_entry(name);
            }
            Some(quantity) => {
                if let Some(item) = self.items.iter_mut().find(|i| i.name == name) {
                    item.quantity = quantity;
                }
            }
        }

        self.logger
            .debug_builder("quantity set")
            .field("name", name)
            .field_i64("requested", quantity)
            .emit();

        self.commit();
    }

    /// Set the quantity of `name` from a raw input field value.
    ///
    /// See [`parse_quantity`] for how the text is read; unparsable input
    /// counts as 0 and removes the line.
    pub fn set_quantity_input(&mut self, name: &str, raw: &str) {
        self.set_quantity(name, parse_quantity(raw));
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.logger.debug("cart cleared");
        self.commit();
    }

    /// Notify listeners with the current cart without persisting.
    ///
    /// Used once at startup to render the restored cart.
    pub fn refresh(&self) {
        self.emit_changed();
    }

    /// Sum of unit price times quantity over all lines; zero when empty.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line by name.
    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Storage key the cart is persisted under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the underlying cache.
    pub fn cache(&self) -> &Cache<S> {
        &self.cache
    }

    fn remove_entry(&mut self, name: &str) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.name != name);
        self.items.len() < len_before
    }

    fn commit(&self) {
        self.persist();
        self.emit_changed();
    }

    fn persist(&self) {
        if let Err(e) = self.cache.set(&self.key, &self.items) {
            self.logger
                .warn_builder("failed to persist cart")
                .field("key", self.key.as_str())
                .field("error", e.to_string())
                .emit();
        }
    }

    fn emit_changed(&self) {
        let total = self.total();
        for listener in &self.listeners {
            listener.cart_changed(&self.items, total);
        }
    }
}

/// Decode stored entries individually, skipping the ones that don't fit.
fn decode_entries(entries: Vec<serde_json::Value>, logger: &StructuredLogger) -> Vec<LineItem> {
    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<LineItem>(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                logger
                    .debug_builder("skipping malformed cart entry")
                    .field("error", e.to_string())
                    .emit();
                None
            }
        })
        .collect()
}

/// Restore the cart invariants on data read from storage.
fn sanitize(items: Vec<LineItem>) -> Vec<LineItem> {
    let mut out: Vec<LineItem> = Vec::with_capacity(items.len());
    for item in items {
        if item.quantity == 0 {
            continue;
        }
        match out.iter_mut().find(|i| i.name == item.name) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => out.push(item),
        }
    }
    out
}
