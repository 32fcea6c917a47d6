//! Store configuration.

use std::time::Duration;

/// Default key the serialized cart is written under.
pub const DEFAULT_STORAGE_KEY: &str = "trolley.cart";

/// Tunables for a [`CartStore`](crate::store::CartStore).
///
/// The defaults match the widget's documented behavior: a two second brief
/// reveal after adding an item, three second toast auto-hide, and a one
/// second pause before the checkout gateway placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key the cart is persisted under in the storage backend.
    pub storage_key: String,
    /// How long an add-to-cart reveal holds the panel open.
    pub reveal_duration: Duration,
    /// Toast auto-hide delay, counted from each show.
    pub toast_duration: Duration,
    /// Delay between the checkout toast and the gateway placeholder.
    pub checkout_delay: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            reveal_duration: Duration::from_secs(2),
            toast_duration: Duration::from_secs(3),
            checkout_delay: Duration::from_secs(1),
        }
    }
}
