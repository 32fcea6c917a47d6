//! Persistence contract: every mutation writes the whole cart under one
//! key, and startup rehydrates from it (or silently starts empty).

#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::{Path, PathBuf};

use trolley_core::{Price, ProductId};
use trolley_integration_tests::{RecordingNotifier, RecordingRender, memory_store};
use trolley_widget::{CartStore, FileStorage, StorageBackend, StoreConfig};

fn temp_root(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("trolley-it-{tag}-{}", std::process::id()))
}

fn open_on_dir(root: &Path) -> CartStore<FileStorage, RecordingRender, RecordingNotifier> {
    CartStore::open(
        FileStorage::new(root).unwrap(),
        RecordingRender::new(),
        RecordingNotifier::new(),
        StoreConfig::default(),
    )
}

#[test]
fn test_cart_survives_across_store_instances() {
    let root = temp_root("survives");

    {
        let mut store = open_on_dir(&root);
        store.add_item(ProductId::new("p1"), "Shake", Price::from_cents(950), "img1");
        store.add_item(ProductId::new("p2"), "Juice", Price::from_cents(425), "img2");
        store.change_quantity(&ProductId::new("p1"), 2);
    }

    let reopened = open_on_dir(&root);
    let cart = reopened.cart();
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.get(&ProductId::new("p1")).unwrap().quantity, 3);
    assert_eq!(cart.total_items(), 4);

    // Insertion order survives the round trip.
    let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["p1", "p2"]);

    fs::remove_dir_all(root).unwrap();
}

#[test]
fn test_corrupt_stored_value_silently_starts_empty() {
    let root = temp_root("corrupt");

    let mut storage = FileStorage::new(&root).unwrap();
    storage
        .put("trolley.cart", b"{ definitely not a cart ]")
        .unwrap();

    let notifier = RecordingNotifier::new();
    let store = CartStore::open(
        FileStorage::new(&root).unwrap(),
        RecordingRender::new(),
        notifier.clone(),
        StoreConfig::default(),
    );

    assert!(store.cart().is_empty());
    // Never surfaced to the user.
    assert!(notifier.events().is_empty());

    fs::remove_dir_all(root).unwrap();
}

#[test]
fn test_every_mutation_overwrites_the_single_key() {
    let render = RecordingRender::new();
    let notifier = RecordingNotifier::new();
    let mut store = memory_store(&render, &notifier);

    store.add_item(ProductId::new("p1"), "Shake", Price::from_cents(950), "img1");
    let after_add = store.storage().get("trolley.cart").unwrap().unwrap();
    let lines: serde_json::Value = serde_json::from_slice(&after_add).unwrap();
    assert_eq!(lines.as_array().unwrap().len(), 1);
    assert_eq!(lines[0]["id"], "p1");
    assert_eq!(lines[0]["quantity"], 1);

    store.add_item(ProductId::new("p1"), "Shake", Price::from_cents(950), "img1");
    let after_second = store.storage().get("trolley.cart").unwrap().unwrap();
    let lines: serde_json::Value = serde_json::from_slice(&after_second).unwrap();
    assert_eq!(lines.as_array().unwrap().len(), 1);
    assert_eq!(lines[0]["quantity"], 2);

    store.remove_item(&ProductId::new("p1"));
    let after_remove = store.storage().get("trolley.cart").unwrap().unwrap();
    let lines: serde_json::Value = serde_json::from_slice(&after_remove).unwrap();
    assert!(lines.as_array().unwrap().is_empty());
}

#[test]
fn test_serialized_cart_deserializes_structurally_equal() {
    let render = RecordingRender::new();
    let notifier = RecordingNotifier::new();
    let mut store = memory_store(&render, &notifier);

    store.add_item(ProductId::new("p1"), "Shake", Price::from_cents(950), "img1");
    store.add_item(ProductId::new("p2"), "Juice", Price::from_cents(425), "img2");

    let bytes = store.storage().get("trolley.cart").unwrap().unwrap();
    let parsed: trolley_core::Cart = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(&parsed, store.cart());
}
