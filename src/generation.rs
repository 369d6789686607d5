//! Load Generations
//!
//! Every async load takes a ticket before it starts. A result is applied
//! only if no newer load (or a close) has bumped the generation since.

use std::future::Future;

/// Monotonic ticket counter
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    /// Invalidate outstanding tickets and issue a new one
    pub fn bump(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// Await `fetch`, dropping its output if `is_current` no longer holds
pub async fn latest<T>(fetch: impl Future<Output = T>, is_current: impl Fn() -> bool) -> Option<T> {
    let output = fetch.await;
    if is_current() {
        Some(output)
    } else {
        log::debug!("discarding superseded response");
        None
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_bump_invalidates_older_tickets() {
        let mut generation = Generation::default();
        let first = generation.bump();
        let second = generation.bump();

        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));

        // a close invalidates the outstanding load too
        generation.bump();
        assert!(!generation.is_current(second));
    }

    #[tokio::test]
    async fn test_older_response_resolving_last_is_dropped() {
        let generation = Cell::new(Generation::default());
        let take = || {
            let mut g = generation.get();
            let ticket = g.bump();
            generation.set(g);
            ticket
        };

        let slow_ticket = take();
        let slow = latest(async { "slow" }, || generation.get().is_current(slow_ticket));
        let fast_ticket = take();
        let fast = latest(async { "fast" }, || generation.get().is_current(fast_ticket));

        assert_eq!(fast.await, Some("fast"));
        assert_eq!(slow.await, None);
    }
}
