//! Bounded time-keyed dedup cache for fire-and-forget telemetry.
//!
//! Scene-state observation events fire on every player tick; without
//! suppression the same (video, state) pair would be reported hundreds of
//! times per playback. [`DedupWindow`] is an explicitly constructed,
//! caller-owned object — there is no process-wide singleton — so each
//! consumer scopes and bounds its own cache.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Suppresses repeat keys within a TTL, holding at most `capacity`
/// entries. When full, the oldest entry is evicted.
#[derive(Debug)]
pub struct DedupWindow {
    capacity: usize,
    ttl: Duration,
    seen: HashMap<String, Instant>,
}

impl DedupWindow {
    /// Create a window holding at most `capacity` keys for `ttl` each.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity,
            ttl,
            seen: HashMap::new(),
        }
    }

    /// Record `key` at `now`. Returns `true` if the key has not been seen
    /// within the TTL (i.e. the caller should emit), `false` if it is a
    /// duplicate to suppress.
    ///
    /// `now` is passed in rather than sampled internally so callers can
    /// drive the clock in tests.
    pub fn first_seen(&mut self, key: &str, now: Instant) -> bool {
        self.purge_expired(now);

        if let Some(&at) = self.seen.get(key) {
            if now.duration_since(at) < self.ttl {
                return false;
            }
        }

        if self.seen.len() >= self.capacity && !self.seen.contains_key(key) {
            self.evict_oldest();
        }

        self.seen.insert(key.to_string(), now);
        true
    }

    /// Number of live (unexpired) keys as of the last call.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    fn purge_expired(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.seen
            .retain(|_, &mut at| now.duration_since(at) < ttl);
    }

    fn evict_oldest(&mut self) {
        if let Some(key) = self
            .seen
            .iter()
            .min_by_key(|(_, &at)| at)
            .map(|(k, _)| k.clone())
        {
            self.seen.remove(&key);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
