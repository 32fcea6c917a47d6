//! Terminal implementations of the widget's render and notification seams.

#![allow(clippy::print_stdout)]

use trolley_widget::{CartView, Notifier, RenderTarget, ToastKind};

/// Renders the cart view as plain text on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalRender;

impl RenderTarget for TerminalRender {
    fn render(&mut self, view: &CartView) {
        if view.is_empty {
            println!("  (your cart is empty)");
            return;
        }

        for line in &view.lines {
            println!(
                "  {:>3} x {:<24} {:>10}  ({} each)",
                line.quantity, line.name, line.line_display, line.unit_display
            );
        }
        println!("  {} item(s), total {}", view.total_items, view.total_display);
    }

    fn set_panel_open(&mut self, open: bool) {
        // No slide-out panel on a terminal; still show the transition.
        println!("  [panel {}]", if open { "open" } else { "closed" });
    }
}

/// Prints toasts and alerts as bracketed lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn show(&mut self, message: &str, kind: ToastKind) {
        match kind {
            ToastKind::Success => println!("  [toast] ✓ {message}"),
            ToastKind::Neutral => println!("  [toast] {message}"),
        }
    }

    fn hide(&mut self) {
        // Printed toasts scroll away on their own.
    }

    fn alert(&mut self, message: &str) {
        println!("  [alert] {message}");
    }
}
