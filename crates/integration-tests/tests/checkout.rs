//! Checkout stub behavior.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use trolley_core::{Price, ProductId};
use trolley_integration_tests::{RecordingNotifier, RecordingRender, memory_store};
use trolley_widget::ToastKind;

#[test]
fn test_checkout_on_empty_cart_only_toasts() {
    let render = RecordingRender::new();
    let notifier = RecordingNotifier::new();
    let mut store = memory_store(&render, &notifier);

    store.checkout();

    let (message, kind) = notifier.visible().unwrap();
    assert_eq!(message, "Your cart is empty");
    assert_eq!(kind, ToastKind::Neutral);

    // No gateway is ever scheduled.
    store.advance(Duration::from_secs(10));
    assert!(notifier.alerts().is_empty());
}

#[test]
fn test_checkout_on_populated_cart_toasts_then_alerts() {
    let render = RecordingRender::new();
    let notifier = RecordingNotifier::new();
    let mut store = memory_store(&render, &notifier);

    store.add_item(ProductId::new("p1"), "Shake", Price::from_cents(950), "img1");
    store.checkout();

    let (message, kind) = notifier.visible().unwrap();
    assert_eq!(message, "Proceeding to checkout!");
    assert_eq!(kind, ToastKind::Success);
    assert!(notifier.alerts().is_empty());

    // The gateway placeholder arrives after the fixed one second delay.
    store.advance(Duration::from_millis(999));
    assert!(notifier.alerts().is_empty());
    store.advance(Duration::from_millis(1));

    let alerts = notifier.alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("payment gateway"));
}

#[test]
fn test_checkout_does_not_mutate_or_rerender_the_cart() {
    let render = RecordingRender::new();
    let notifier = RecordingNotifier::new();
    let mut store = memory_store(&render, &notifier);

    store.add_item(ProductId::new("p1"), "Shake", Price::from_cents(950), "img1");
    let renders_before = render.render_count();

    store.checkout();
    store.advance(Duration::from_secs(5));

    assert_eq!(render.render_count(), renders_before);
    assert_eq!(store.cart().total_items(), 1);
}
