//! Integration tests for Trolley.
//!
//! This crate provides recording implementations of the widget's
//! collaborator seams ([`RenderTarget`] and [`Notifier`]) so the scenario
//! tests under `tests/` can drive a full [`CartStore`] and assert on every
//! side effect it produced — renders, panel transitions, toasts, hides and
//! alerts — without a browser.
//!
//! The doubles hand out shared handles (`Rc<RefCell<..>>`) because the
//! store takes ownership of its collaborators: tests keep a clone and read
//! the recorded events through it.
//!
//! [`CartStore`]: trolley_widget::CartStore

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::cell::RefCell;
use std::rc::Rc;

use trolley_widget::{
    CartStore, CartView, MemoryStorage, Notifier, RenderTarget, StoreConfig, ToastKind,
};

/// A recorded render-target call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    /// The full view handed to `render`.
    Render(CartView),
    /// A `set_panel_open` transition.
    PanelOpen(bool),
}

/// Render target that records every call.
#[derive(Debug, Default, Clone)]
pub struct RecordingRender {
    events: Rc<RefCell<Vec<RenderEvent>>>,
}

impl RecordingRender {
    /// Create a recorder with no events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded call, in order.
    #[must_use]
    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.borrow().clone()
    }

    /// The most recently rendered view, if any render happened.
    #[must_use]
    pub fn last_view(&self) -> Option<CartView> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            RenderEvent::Render(view) => Some(view.clone()),
            RenderEvent::PanelOpen(_) => None,
        })
    }

    /// The panel state after the last transition, closed if none happened.
    #[must_use]
    pub fn panel_open(&self) -> bool {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|event| match event {
                RenderEvent::PanelOpen(open) => Some(*open),
                RenderEvent::Render(_) => None,
            })
            .unwrap_or(false)
    }

    /// Number of full renders.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, RenderEvent::Render(_)))
            .count()
    }
}

impl RenderTarget for RecordingRender {
    fn render(&mut self, view: &CartView) {
        self.events.borrow_mut().push(RenderEvent::Render(view.clone()));
    }

    fn set_panel_open(&mut self, open: bool) {
        self.events.borrow_mut().push(RenderEvent::PanelOpen(open));
    }
}

/// A recorded notifier call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEvent {
    /// A toast was shown.
    Show {
        /// Toast text.
        message: String,
        /// Toast styling kind.
        kind: ToastKind,
    },
    /// The visible toast (if any) was hidden.
    Hide,
    /// A blocking informational message was presented.
    Alert(String),
}

/// Notifier that records every call.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    events: Rc<RefCell<Vec<ToastEvent>>>,
}

impl RecordingNotifier {
    /// Create a recorder with no events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded call, in order.
    #[must_use]
    pub fn events(&self) -> Vec<ToastEvent> {
        self.events.borrow().clone()
    }

    /// The toast currently visible, replayed from the event log: the last
    /// `Show` unless a `Hide` came after it.
    #[must_use]
    pub fn visible(&self) -> Option<(String, ToastKind)> {
        let mut visible = None;
        for event in self.events.borrow().iter() {
            match event {
                ToastEvent::Show { message, kind } => visible = Some((message.clone(), *kind)),
                ToastEvent::Hide => visible = None,
                ToastEvent::Alert(_) => {}
            }
        }
        visible
    }

    /// Every alert message, in order.
    #[must_use]
    pub fn alerts(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ToastEvent::Alert(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&mut self, message: &str, kind: ToastKind) {
        self.events.borrow_mut().push(ToastEvent::Show {
            message: message.to_owned(),
            kind,
        });
    }

    fn hide(&mut self) {
        self.events.borrow_mut().push(ToastEvent::Hide);
    }

    fn alert(&mut self, message: &str) {
        self.events.borrow_mut().push(ToastEvent::Alert(message.to_owned()));
    }
}

/// Open a store over fresh in-memory storage, recording through the given
/// doubles.
#[must_use]
pub fn memory_store(
    render: &RecordingRender,
    notifier: &RecordingNotifier,
) -> CartStore<MemoryStorage, RecordingRender, RecordingNotifier> {
    CartStore::open(
        MemoryStorage::new(),
        render.clone(),
        notifier.clone(),
        StoreConfig::default(),
    )
}
