use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic id source with a fixed prefix, e.g. `ORD-1001`, `ORD-1002`, ...
///
/// Owned by whichever component needs unique ids and passed in by handle, so
/// tests can pin the sequence start and replay runs deterministically.
#[derive(Debug)]
pub struct SequenceGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequenceGenerator {
    /// `seed` is the last value considered issued; the first generated id
    /// carries `seed + 1`.
    pub fn new(prefix: impl Into<String>, seed: u64) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(seed),
        }
    }

    pub fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}
