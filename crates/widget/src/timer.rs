//! Deterministic logical-time timers.
//!
//! The widget's delayed behaviors (panel auto-close, toast auto-hide, the
//! checkout gateway pause) are queue entries against a logical clock rather
//! than fire-and-forget callbacks on a wall clock. The host advances the
//! clock — a browser shell from `setTimeout` ticks, the CLI after each
//! command, tests by exact amounts — and applies whatever came due. Nothing
//! in this module ever reads real time.

use std::time::Duration;

/// Handle for a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// What to do when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Close the panel at the end of a brief reveal.
    ClosePanel,
    /// Hide the toast; scheduled once per `show`.
    HideToast,
    /// Present the checkout gateway placeholder.
    OpenGateway,
}

#[derive(Debug)]
struct Entry {
    id: TimerId,
    deadline: Duration,
    action: TimerAction,
}

/// Pending timers ordered by deadline against a logical clock.
///
/// [`cancel`](Self::cancel) exists for hosts that need it; the store itself
/// never cancels — its redundant firings (a stale panel close, a stale toast
/// hide) are idempotent by construction.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry>,
}

impl TimerQueue {
    /// Create an empty queue at logical time zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Schedule `action` to fire `delay` from the current logical time.
    pub fn schedule(&mut self, delay: Duration, action: TimerAction) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline: self.now.saturating_add(delay),
            action,
        });
        id
    }

    /// Cancel a pending timer.
    ///
    /// Returns `false` if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() < before
    }

    /// Advance the logical clock by `elapsed` and drain every timer that
    /// came due, in deadline order (schedule order breaks ties).
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerAction> {
        self.now = self.now.saturating_add(elapsed);
        let now = self.now;

        let (mut due, pending): (Vec<Entry>, Vec<Entry>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.deadline <= now);
        self.entries = pending;

        due.sort_by_key(|entry| (entry.deadline, entry.id.0));
        due.into_iter().map(|entry| entry.action).collect()
    }

    /// Number of timers that have not yet fired.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// The current logical time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_fires_at_deadline_not_before() {
        let mut timers = TimerQueue::new();
        timers.schedule(2 * SECOND, TimerAction::ClosePanel);

        assert!(timers.advance(SECOND).is_empty());
        assert_eq!(timers.advance(SECOND), vec![TimerAction::ClosePanel]);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_deadline_order_with_schedule_order_tiebreak() {
        let mut timers = TimerQueue::new();
        timers.schedule(3 * SECOND, TimerAction::HideToast);
        timers.schedule(SECOND, TimerAction::ClosePanel);
        timers.schedule(3 * SECOND, TimerAction::OpenGateway);

        assert_eq!(
            timers.advance(3 * SECOND),
            vec![
                TimerAction::ClosePanel,
                TimerAction::HideToast,
                TimerAction::OpenGateway,
            ]
        );
    }

    #[test]
    fn test_delays_are_relative_to_advanced_clock() {
        let mut timers = TimerQueue::new();
        timers.advance(10 * SECOND);
        timers.schedule(SECOND, TimerAction::HideToast);

        assert!(timers.advance(Duration::ZERO).is_empty());
        assert_eq!(timers.advance(SECOND), vec![TimerAction::HideToast]);
    }

    #[test]
    fn test_cancel() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule(SECOND, TimerAction::ClosePanel);

        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.advance(SECOND).is_empty());
    }

    #[test]
    fn test_zero_delay_fires_on_next_advance() {
        let mut timers = TimerQueue::new();
        timers.schedule(Duration::ZERO, TimerAction::OpenGateway);

        assert_eq!(
            timers.advance(Duration::ZERO),
            vec![TimerAction::OpenGateway]
        );
    }
}
