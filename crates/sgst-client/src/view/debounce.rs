//! Trailing-edge debounce for typed input.

use std::time::Duration;
use tokio::time::Instant;

/// Holds the latest input until it has been quiet for `delay`.
///
/// Every [`push`](Self::push) restarts the timer. [`fired`](Self::fired) is
/// cancel-safe: dropping it keeps the pending value.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub const fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }

    pub fn push(&mut self, value: T) {
        self.pending = Some((value, Instant::now() + self.delay));
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Resolves with the pending value once its quiet period ends.
    /// Never resolves while nothing is pending.
    pub async fn fired(&mut self) -> T {
        loop {
            let Some(deadline) = self.pending.as_ref().map(|(_, deadline)| *deadline) else {
                return std::future::pending().await;
            };
            tokio::time::sleep_until(deadline).await;
            if let Some((value, _)) = self.pending.take() {
                return value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    async fn test_burst_commits_last_value_once() {
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.push("a");
        tokio::time::advance(Duration::from_millis(200)).await;
        debouncer.push("ab");
        tokio::time::advance(Duration::from_millis(200)).await;
        debouncer.push("abc");

        let start = Instant::now();
        assert_eq!(debouncer.fired().await, "abc");
        assert_eq!(start.elapsed(), DELAY);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_debouncer_never_fires() {
        let mut debouncer: Debouncer<String> = Debouncer::new(DELAY);
        let fired = tokio::time::timeout(Duration::from_secs(5), debouncer.fired()).await;
        assert!(fired.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_wait_keeps_value() {
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.push(7_u32);

        let early = tokio::time::timeout(Duration::from_millis(100), debouncer.fired()).await;
        assert!(early.is_err());
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.fired().await, 7);
    }

    #[test]
    fn test_cancel() {
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.push(1);
        assert_eq!(debouncer.cancel(), Some(1));
        assert_eq!(debouncer.cancel(), None);
    }
}
