use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A flag shared between whoever started a simulation and the simulation
/// itself. Clones share the same flag.
///
/// Once cancelled a token stays cancelled. Create a new token for every run.
///
/// # Examples
///
/// ```
/// use holdem_odds::holdem::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handle = token.clone();
/// assert!(!token.is_cancelled());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Safe to call from any thread, any number of
    /// times.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_starts_not_cancelled() {
        assert!(!CancellationToken::new().is_cancelled());
    }

    #[test]
    fn test_cancel_is_sticky() {
        let token = CancellationToken::new();
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_cancel_from_other_thread() {
        let token = CancellationToken::new();
        let remote = token.clone();
        thread::spawn(move || remote.cancel())
            .join()
            .expect("cancel thread panicked");
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_separate_tokens_are_independent() {
        let a = CancellationToken::new();
        let b = CancellationToken::new();
        a.cancel();
        assert!(!b.is_cancelled());
    }
}
