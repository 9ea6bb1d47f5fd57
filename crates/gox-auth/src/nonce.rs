//! Strictly increasing nonce source

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

/// Process-wide nonce sources, one per API key
static SOURCES: OnceLock<DashMap<String, Arc<NonceSource>>> = OnceLock::new();

/// Issues strictly increasing nonces
///
/// Values follow wall-clock microseconds. When the clock has not advanced
/// (or moved backwards) since the last issued value, the previous value plus
/// one is issued instead, so the sequence never regresses. Issuance is a
/// single compare-and-swap, safe to share between threads.
#[derive(Debug, Default)]
pub struct NonceSource {
    last: AtomicU64,
}

impl NonceSource {
    /// Create a source seeded from the wall clock on first use
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source whose first nonce is greater than `floor`
    ///
    /// Useful when the previous run's last nonce is known and the clock
    /// cannot be trusted.
    pub fn starting_after(floor: u64) -> Self {
        Self {
            last: AtomicU64::new(floor),
        }
    }

    /// The process-wide source for an API key
    ///
    /// Every caller passing the same key gets the same source, so signers
    /// built independently from one credential set never reuse a nonce.
    pub fn for_key(api_key: &str) -> Arc<NonceSource> {
        SOURCES
            .get_or_init(DashMap::new)
            .entry(api_key.to_string())
            .or_default()
            .clone()
    }

    /// Issue the next nonce
    pub fn next(&self) -> u64 {
        let now = now_micros();
        let mut current = self.last.load(Ordering::SeqCst);

        loop {
            let candidate = now.max(current.saturating_add(1));
            match self
                .last
                .compare_exchange_weak(current, candidate, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return candidate,
                Err(actual) => current = actual,
            }
        }
    }

    /// Last nonce issued (0 if none yet)
    pub fn last(&self) -> u64 {
        self.last.load(Ordering::SeqCst)
    }
}

fn now_micros() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0)
}
