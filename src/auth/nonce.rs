//! Nonce generation for signed MtGox requests.
//!
//! Every private request body starts with `nonce=<n>`; the exchange rejects a
//! nonce that is not larger than the last one it saw for the same key.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of nonces for authenticated requests.
///
/// Implementations must return strictly increasing values, also when called
/// from several threads at once.
pub trait NonceProvider: Send + Sync {
    /// Produce the next nonce.
    fn next_nonce(&self) -> u64;
}

/// Clock based nonce in microseconds since the UNIX epoch.
///
/// When two calls land in the same microsecond (or the clock steps back) the
/// previous value plus one is handed out instead.
#[derive(Debug, Default)]
pub struct MonotonicNonce {
    last: AtomicU64,
}

impl MonotonicNonce {
    /// Create a new provider.
    pub fn new() -> Self {
        Self::default()
    }

    fn clock_micros() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_micros() as u64)
            .unwrap_or_default()
    }
}

impl NonceProvider for MonotonicNonce {
    fn next_nonce(&self) -> u64 {
        let now = Self::clock_micros();
        let previous = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(previous + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_nonce_strictly_increasing() {
        let provider = MonotonicNonce::new();

        let mut last = 0u64;
        for _ in 0..1000 {
            let nonce = provider.next_nonce();
            assert!(nonce > last, "Nonce must be strictly increasing");
            last = nonce;
        }
    }

    #[test]
    fn test_nonce_tracks_clock() {
        let provider = MonotonicNonce::new();
        let before = MonotonicNonce::clock_micros();
        assert!(provider.next_nonce() >= before);
    }

    #[test]
    fn test_nonce_unique_across_threads() {
        let provider = Arc::new(MonotonicNonce::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let p = Arc::clone(&provider);
                thread::spawn(move || (0..1000).map(|_| p.next_nonce()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            let nonces = handle.join().unwrap();
            assert!(nonces.windows(2).all(|w| w[0] < w[1]));
            for nonce in nonces {
                assert!(seen.insert(nonce), "Nonce must be unique across threads");
            }
        }
    }
}
