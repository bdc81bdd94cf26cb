//! Cache usage counters

use serde::Serialize;

/// Counters describing how a list's cache has been used
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups answered straight from the cache
    pub hits: u64,

    /// Values produced by the recurrence and stored
    pub generated: u64,

    /// Values dropped from the front of a bounded window
    pub evicted: u64,

    /// Recurrence calls spent recomputing values that fell out of the window
    pub recomputed: u64,

    /// Number of explicit cache clears
    pub clears: u64,
}

impl CacheStats {
    /// Total recurrence invocations, cached or not
    pub fn recurrence_calls(&self) -> u64 {
        self.generated + self.recomputed
    }

    /// Generate report
    pub fn report(&self) -> String {
        format!(
            "Cache:\n  Hits: {}\n  Generated: {}\n  Evicted: {}\n  Recomputed: {}\n  Clears: {}",
            self.hits, self.generated, self.evicted, self.recomputed, self.clears
        )
    }
}
