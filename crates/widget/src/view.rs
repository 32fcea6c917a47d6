//! The pure cart view model and the render seam.
//!
//! Rendering is split in two: [`CartView`] is a pure projection of the cart
//! (display rows, formatted totals, the empty flag) and [`RenderTarget`] is
//! the surface that turns a view into pixels or markup. The store knows
//! nothing about how a view is drawn, which keeps it UI-agnostic and fully
//! unit-testable.

use trolley_core::{Cart, LineItem};

/// Rendering surface the widget draws into.
///
/// A DOM host replaces the cart content subtree wholesale from the view on
/// every call — there is no diffing. Each non-empty row carries the line's
/// `id`; the host binds the row's three controls to
/// [`CartStore::change_quantity`](crate::store::CartStore::change_quantity)
/// (`+1` and `-1`) and
/// [`CartStore::remove_item`](crate::store::CartStore::remove_item) with
/// that id, as explicit callbacks rather than action strings embedded in
/// markup.
pub trait RenderTarget {
    /// Replace the rendered cart with `view`.
    fn render(&mut self, view: &CartView);

    /// Reflect the panel's open state: toggle the "active" markers on the
    /// panel and overlay, suppress page scroll while open, restore it when
    /// closed.
    fn set_panel_open(&mut self, open: bool);
}

/// Display data for a single cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineView {
    /// Product id, echoed back through the row's controls.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display image reference.
    pub image: String,
    /// Units in the cart.
    pub quantity: u32,
    /// Unit price, formatted (`9,50€`).
    pub unit_display: String,
    /// Line total (unit price times quantity), formatted.
    pub line_display: String,
}

/// Display data for the whole cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// One row per line, in insertion order.
    pub lines: Vec<LineView>,
    /// Badge count: sum of all quantities.
    pub total_items: u64,
    /// Formatted total price.
    pub total_display: String,
    /// True when the placeholder (icon plus "your cart is empty") should
    /// show instead of the list.
    pub is_empty: bool,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self::from(&Cart::new())
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.items().iter().map(LineView::from).collect(),
            total_items: cart.total_items(),
            total_display: cart.total_price().to_string(),
            is_empty: cart.is_empty(),
        }
    }
}

impl From<&LineItem> for LineView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.as_str().to_owned(),
            name: item.name.clone(),
            image: item.image.clone(),
            quantity: item.quantity,
            unit_display: item.price.to_string(),
            line_display: item.price.times(item.quantity).to_string(),
        }
    }
}

/// Well-known element ids for DOM hosts.
///
/// The widget addresses its surface through these fixed identifiers; a host
/// page provides elements carrying them.
pub mod element_ids {
    /// Container whose subtree is replaced on every render.
    pub const CART_CONTENT: &str = "cart-content";
    /// Item-count badge.
    pub const CART_COUNT: &str = "cart-count";
    /// Total-price label.
    pub const CART_TOTAL: &str = "cart-total";
    /// Slide-out panel carrying the "active" marker while open.
    pub const CART_PANEL: &str = "cart-panel";
    /// Background overlay shown while the panel is open.
    pub const CART_OVERLAY: &str = "cart-overlay";
    /// Toast element.
    pub const TOAST: &str = "toast";
}
