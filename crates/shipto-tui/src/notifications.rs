//! Toast queue. One toast is visible at a time; each stays for
//! [`TOAST_TTL`] and is then replaced by the next queued one.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use shipto_core::Notice;

pub const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Default)]
pub struct NotificationQueue {
    queue: VecDeque<Notice>,
    shown_at: Option<Instant>,
}

impl NotificationQueue {
    pub fn push(&mut self, notice: Notice, now: Instant) {
        self.queue.push_back(notice);
        if self.shown_at.is_none() {
            self.shown_at = Some(now);
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.queue.front()
    }

    /// Drop the visible toast and start the clock on the next one.
    pub fn dismiss(&mut self, now: Instant) {
        self.queue.pop_front();
        self.shown_at = (!self.queue.is_empty()).then_some(now);
    }

    /// Expire the visible toast once it has been up for `TOAST_TTL`.
    pub fn tick(&mut self, now: Instant) {
        if let Some(shown) = self.shown_at {
            if now.duration_since(shown) >= TOAST_TTL {
                self.dismiss(now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toasts_show_in_order_and_expire() {
        let t0 = Instant::now();
        let mut q = NotificationQueue::default();
        q.push(Notice::error("first"), t0);
        q.push(Notice::success("second"), t0);

        q.tick(t0 + Duration::from_secs(1));
        assert_eq!(q.current().map(|n| n.message.as_str()), Some("first"));

        q.tick(t0 + TOAST_TTL);
        assert_eq!(q.current().map(|n| n.message.as_str()), Some("second"));

        // The second toast gets its own full lifetime.
        q.tick(t0 + TOAST_TTL + Duration::from_secs(2));
        assert_eq!(q.current().map(|n| n.message.as_str()), Some("second"));

        q.tick(t0 + TOAST_TTL * 2);
        assert!(q.current().is_none());
    }

    #[test]
    fn dismiss_on_empty_queue_is_harmless() {
        let mut q = NotificationQueue::default();
        q.dismiss(Instant::now());
        assert!(q.current().is_none());
    }
}
