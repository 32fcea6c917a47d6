//! Slide-out panel open/closed state.

/// Open/closed state of the cart panel.
///
/// The widget only tracks the boolean; mapping it onto the host's "active"
/// markers (panel and overlay) and suppressing page scroll while open is the
/// render target's job via
/// [`RenderTarget::set_panel_open`](crate::view::RenderTarget::set_panel_open).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    open: bool,
}

impl PanelState {
    /// A closed panel.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Whether the panel is currently open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Flip open/closed, returning the new state.
    pub const fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Force the panel open. Idempotent.
    pub const fn force_open(&mut self) {
        self.open = true;
    }

    /// Force the panel closed. Idempotent.
    pub const fn force_closed(&mut self) {
        self.open = false;
    }
}
