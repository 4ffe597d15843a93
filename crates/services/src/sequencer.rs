//! Last-request-wins bookkeeping for search-driven fetches.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Delay between the last keystroke and the fetch it triggers.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Hands out increasing tickets; only the newest ticket is current.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

/// Proof of which request a response belongs to.
#[derive(Debug, Clone)]
pub struct RequestTicket {
    generation: u64,
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket.
    #[must_use]
    pub fn issue(&self) -> RequestTicket {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            generation,
            latest: Arc::clone(&self.latest),
        }
    }

    /// Supersede outstanding tickets without starting a request.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

impl RequestTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether no newer ticket has been issued since this one.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.generation
    }

    /// Keep `value` only if this ticket is still current.
    pub fn accept<T>(&self, value: T) -> Option<T> {
        self.is_current().then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older() {
        let seq = RequestSequencer::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert_eq!(first.accept("stale"), None);
        assert_eq!(second.accept("fresh"), Some("fresh"));
    }

    #[test]
    fn late_response_from_old_request_is_dropped() {
        let seq = RequestSequencer::new();
        let slow = seq.issue();
        let fast = seq.clone().issue();
        // fast resolves first, slow resolves afterwards
        assert_eq!(fast.accept(2), Some(2));
        assert_eq!(slow.accept(1), None);
    }

    #[test]
    fn invalidate_cancels_outstanding_ticket() {
        let seq = RequestSequencer::new();
        let ticket = seq.issue();
        seq.invalidate();
        assert!(!ticket.is_current());
    }
}
