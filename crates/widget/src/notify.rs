//! Toast notification contract.

/// Visual flavor of a toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    /// Default styling, used for removals and the empty-cart warning.
    #[default]
    Neutral,
    /// Highlighted styling for add-to-cart and checkout confirmations.
    Success,
}

impl ToastKind {
    /// CSS class a DOM host appends to the toast element. Empty for the
    /// neutral kind, matching a bare `toast show` class list.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Neutral => "",
            Self::Success => "success",
        }
    }
}

/// Transient message display.
///
/// `show` replaces whatever is currently visible — there is no queue, so a
/// fast second call overwrites a visible first one. Auto-hide is scheduled
/// by the store three seconds from each `show`; the earlier toast's hide
/// timer is never cancelled, so implementations must treat [`hide`] as
/// idempotent (hiding an already-hidden toast does nothing).
///
/// [`hide`]: Notifier::hide
pub trait Notifier {
    /// Display `message`, replacing any currently visible toast.
    fn show(&mut self, message: &str, kind: ToastKind);

    /// Clear the visible toast, if any.
    fn hide(&mut self);

    /// Present a blocking informational message (a browser host maps this
    /// to `alert`). Used only by the checkout stub.
    fn alert(&mut self, message: &str);
}
