//! Clock-derived asset id generation.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use stockroom_core::AssetId;

/// Hands out strictly increasing ids shaped like Unix-millisecond timestamps.
///
/// Two allocations inside the same millisecond (or after the clock steps
/// backwards) get `last + 1` instead of colliding.
#[derive(Debug)]
pub struct IdGenerator {
    last: AtomicI64,
    clock: fn() -> i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::with_clock(now_millis)
    }

    pub fn with_clock(clock: fn() -> i64) -> Self {
        Self {
            last: AtomicI64::new(i64::MIN),
            clock,
        }
    }

    /// Make sure future ids are strictly greater than `id`.
    pub fn observe(&self, id: AssetId) {
        self.last.fetch_max(id.get(), Ordering::AcqRel);
    }

    pub fn next_id(&self) -> AssetId {
        let now = (self.clock)();
        let mut current = self.last.load(Ordering::Acquire);
        loop {
            let candidate = now.max(current.saturating_add(1));
            match self.last.compare_exchange_weak(
                current,
                candidate,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return AssetId::new(candidate),
                Err(actual) => current = actual,
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
