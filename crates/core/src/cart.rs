//! The cart data model and its mutation operations.
//!
//! [`Cart`] is pure data: its operations mutate the in-memory line list and
//! report what happened through outcome enums. Persisting the cart, redrawing
//! the panel and showing toasts are layered on top by the widget crate, so
//! the state machine itself stays fully unit-testable.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A single product line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog id of the product.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Display image reference (URL or path).
    pub image: String,
    /// Number of units, at least 1 while the line exists.
    pub quantity: u32,
}

/// Result of [`Cart::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended with quantity 1.
    Added,
    /// An existing line's quantity grew by 1.
    Incremented,
}

/// Result of [`Cart::apply_delta`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeltaOutcome {
    /// No line with the given id exists; nothing changed.
    NotFound,
    /// The line's quantity was set to the contained value.
    Updated(u32),
    /// The delta drove the quantity to zero or below; the line was removed.
    Removed(LineItem),
}

/// An ordered collection of line items, unique by product id.
///
/// Lines keep insertion order: the first-added product stays first however
/// its quantity changes later. Every stored line has `quantity >= 1`; a line
/// whose quantity would drop to zero is removed instead.
///
/// Serializes transparently as an array of line objects
/// (`id`, `name`, `price`, `image`, `quantity`), which is the wire format
/// the widget writes to its storage backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// If a line with this id already exists its quantity grows by 1 and the
    /// stored name, price and image are kept — the values passed here are
    /// ignored (first write wins for display fields). Otherwise a new line
    /// with quantity 1 is appended at the end.
    pub fn add(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        image: impl Into<String>,
    ) -> AddOutcome {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = item.quantity.saturating_add(1);
            AddOutcome::Incremented
        } else {
            self.items.push(LineItem {
                id,
                name: name.into(),
                price,
                image: image.into(),
                quantity: 1,
            });
            AddOutcome::Added
        }
    }

    /// Remove the line with the given id, returning it if it existed.
    ///
    /// Removing an absent id is a no-op, not an error.
    pub fn remove(&mut self, id: &ProductId) -> Option<LineItem> {
        let pos = self.items.iter().position(|item| &item.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Change a line's quantity by a signed delta.
    ///
    /// A resulting quantity of zero or below removes the line entirely, so
    /// the `quantity >= 1` invariant is never observable as violated.
    pub fn apply_delta(&mut self, id: &ProductId, delta: i64) -> DeltaOutcome {
        let Some((pos, item)) = self
            .items
            .iter_mut()
            .enumerate()
            .find(|(_, item)| &item.id == id)
        else {
            return DeltaOutcome::NotFound;
        };

        let quantity = i64::from(item.quantity).saturating_add(delta);
        if quantity <= 0 {
            DeltaOutcome::Removed(self.items.remove(pos))
        } else {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            DeltaOutcome::Updated(item.quantity)
        }
    }

    /// Sum of all line quantities, recomputed from scratch.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `price * quantity` over all lines, recomputed from scratch.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items
            .iter()
            .map(|item| item.price.times(item.quantity))
            .sum()
    }

    /// True when the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The line with the given id, if any.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }
}
