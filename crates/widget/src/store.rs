//! The cart store: state machine wired to storage, rendering and toasts.

use std::time::Duration;

use tracing::instrument;
use trolley_core::{Cart, DeltaOutcome, Price, ProductId};

use crate::config::StoreConfig;
use crate::notify::{Notifier, ToastKind};
use crate::panel::PanelState;
use crate::storage::StorageBackend;
use crate::timer::{TimerAction, TimerQueue};
use crate::view::{CartView, RenderTarget};

const REMOVED_TOAST: &str = "Item removed";
const EMPTY_CART_TOAST: &str = "Your cart is empty";
const CHECKOUT_TOAST: &str = "Proceeding to checkout!";
const GATEWAY_MESSAGE: &str =
    "This is where a real payment gateway such as Stripe would take over.";

/// The cart widget's single point of mutation.
///
/// Owns the [`Cart`], the panel state, a logical-time timer queue and the
/// three injected collaborators. Each instance is independent — tests build
/// as many as they like against in-memory backends; a browser shell builds
/// one per page session.
///
/// Every mutating operation runs to completion synchronously: mutate the
/// cart, persist the whole serialized cart under the configured key,
/// re-render the whole view, then raise whatever toast the operation calls
/// for. Delayed behavior is queued on the timer queue and applied when the
/// host calls [`advance`](Self::advance).
pub struct CartStore<S, R, N> {
    cart: Cart,
    panel: PanelState,
    timers: TimerQueue,
    config: StoreConfig,
    storage: S,
    render: R,
    notifier: N,
}

impl<S, R, N> CartStore<S, R, N>
where
    S: StorageBackend,
    R: RenderTarget,
    N: Notifier,
{
    /// Open a store: rehydrate the cart from storage and render it.
    ///
    /// A missing key or a stored value that fails to deserialize yields an
    /// empty cart; neither is surfaced to the user.
    pub fn open(storage: S, render: R, notifier: N, config: StoreConfig) -> Self {
        let cart = rehydrate(&storage, &config.storage_key);
        let mut store = Self {
            cart,
            panel: PanelState::new(),
            timers: TimerQueue::new(),
            config,
            storage,
            render,
            notifier,
        };
        store.rerender();
        store
    }

    /// Add one unit of a product to the cart.
    ///
    /// An existing line keeps its stored name, price and image — only the
    /// quantity grows. The success toast always quotes the name passed
    /// here, then the panel briefly reveals the result.
    #[instrument(skip_all, fields(id = %id))]
    pub fn add_item(&mut self, id: ProductId, name: &str, price: Price, image: &str) {
        let outcome = self.cart.add(id, name, price, image);
        tracing::debug!(?outcome, "Added to cart");

        self.persist();
        self.rerender();
        self.notify(&format!("{name} added to cart"), ToastKind::Success);
        self.brief_reveal();
    }

    /// Remove a line entirely.
    ///
    /// A no-op on unknown ids, but the removal toast shows either way.
    #[instrument(skip_all, fields(id = %id))]
    pub fn remove_item(&mut self, id: &ProductId) {
        let removed = self.cart.remove(id);
        tracing::debug!(found = removed.is_some(), "Removed from cart");

        self.finish_removal();
    }

    /// Change a line's quantity by a signed delta.
    ///
    /// Unknown ids are a complete no-op (no persistence, no render, no
    /// toast). A delta that drives the quantity to zero or below takes the
    /// full removal path, including its toast; an ordinary update persists
    /// and re-renders silently.
    #[instrument(skip_all, fields(id = %id, delta))]
    pub fn change_quantity(&mut self, id: &ProductId, delta: i64) {
        match self.cart.apply_delta(id, delta) {
            DeltaOutcome::NotFound => {}
            DeltaOutcome::Removed(_) => self.finish_removal(),
            DeltaOutcome::Updated(quantity) => {
                tracing::debug!(quantity, "Quantity changed");
                self.persist();
                self.rerender();
            }
        }
    }

    /// Flip the panel open or closed.
    pub fn toggle_open(&mut self) {
        let open = self.panel.toggle();
        self.render.set_panel_open(open);
    }

    /// Handle the designated cancel key (Escape in a browser host).
    ///
    /// Closes an open panel through the same path as
    /// [`toggle_open`](Self::toggle_open); does nothing while the panel is
    /// already closed.
    pub fn handle_cancel_key(&mut self) {
        if self.panel.is_open() {
            self.toggle_open();
        }
    }

    /// Checkout stub.
    ///
    /// An empty cart raises a neutral toast and stops. Otherwise a success
    /// toast shows immediately and, after the configured delay, the host is
    /// asked to present the gateway placeholder. Intentionally not a real
    /// payment flow.
    pub fn checkout(&mut self) {
        if self.cart.is_empty() {
            self.notify(EMPTY_CART_TOAST, ToastKind::Neutral);
            return;
        }

        self.notify(CHECKOUT_TOAST, ToastKind::Success);
        self.timers
            .schedule(self.config.checkout_delay, TimerAction::OpenGateway);
    }

    /// Advance logical time and apply every timer that comes due.
    pub fn advance(&mut self, elapsed: Duration) {
        for action in self.timers.advance(elapsed) {
            match action {
                TimerAction::ClosePanel => {
                    // Issued even if the user closed (or reopened) the panel
                    // in the meantime; forcing closed is idempotent.
                    self.panel.force_closed();
                    self.render.set_panel_open(false);
                }
                TimerAction::HideToast => self.notifier.hide(),
                TimerAction::OpenGateway => self.notifier.alert(GATEWAY_MESSAGE),
            }
        }
    }

    /// The current cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Whether the panel is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    /// The current view, as last handed to the render target.
    #[must_use]
    pub fn view(&self) -> CartView {
        CartView::from(&self.cart)
    }

    /// Number of scheduled timers that have not yet fired.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// The storage backend.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Shared tail of [`remove_item`](Self::remove_item) and a quantity
    /// change that depleted the line.
    fn finish_removal(&mut self) {
        self.persist();
        self.rerender();
        self.notify(REMOVED_TOAST, ToastKind::Neutral);
    }

    fn persist(&mut self) {
        match serde_json::to_vec(&self.cart) {
            Ok(bytes) => {
                if let Err(e) = self.storage.put(&self.config.storage_key, &bytes) {
                    tracing::error!("Failed to persist cart: {e}");
                }
            }
            Err(e) => tracing::error!("Failed to serialize cart: {e}"),
        }
    }

    fn rerender(&mut self) {
        self.render.render(&CartView::from(&self.cart));
    }

    fn notify(&mut self, message: &str, kind: ToastKind) {
        self.notifier.show(message, kind);
        self.timers
            .schedule(self.config.toast_duration, TimerAction::HideToast);
    }

    fn brief_reveal(&mut self) {
        self.panel.force_open();
        self.render.set_panel_open(true);
        self.timers
            .schedule(self.config.reveal_duration, TimerAction::ClosePanel);
    }
}

fn rehydrate<S: StorageBackend>(storage: &S, key: &str) -> Cart {
    match storage.get(key) {
        Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
            Ok(cart) => cart,
            Err(e) => {
                tracing::warn!("Discarding unreadable stored cart: {e}");
                Cart::new()
            }
        },
        Ok(None) => Cart::new(),
        Err(e) => {
            tracing::warn!("Failed to read stored cart: {e}");
            Cart::new()
        }
    }
}
