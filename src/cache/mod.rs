//! Memoization cache
//!
//! Ordered, gap-free store of generated values. Index `start` through
//! `start + len - 1` are populated; nothing else is. Without a limit `start`
//! stays at 0 and the cache only grows. With a limit the cache is a sliding
//! window: pushing past the limit drops the lowest indices.

mod stats;

pub use stats::CacheStats;

use std::collections::VecDeque;

/// Sliding-window memo store owned by a single list
#[derive(Debug, Clone)]
pub struct MemoCache<V> {
    /// Values for indices `start..start + values.len()`
    values: VecDeque<V>,

    /// Lowest index still held
    start: usize,

    /// Maximum number of values held at once
    limit: Option<usize>,

    stats: CacheStats,
}

impl<V> MemoCache<V> {
    /// Create an empty cache. A limit below 2 would lose the values a
    /// two-term recurrence needs; callers validate it before getting here.
    pub fn new(limit: Option<usize>) -> Self {
        debug_assert!(limit.map_or(true, |l| l >= 2));
        Self {
            values: VecDeque::new(),
            start: 0,
            limit,
            stats: CacheStats::default(),
        }
    }

    /// Number of values currently held
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been memoized yet (or since the last clear)
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Lowest index still held
    pub fn start(&self) -> usize {
        self.start
    }

    /// Next index to be generated
    pub fn frontier(&self) -> usize {
        self.start + self.values.len()
    }

    /// Greatest memoized index
    pub fn high_water_mark(&self) -> Option<usize> {
        self.frontier().checked_sub(1).filter(|_| !self.is_empty())
    }

    /// Configured window size
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Whether `index` has been evicted from the window
    pub fn is_evicted(&self, index: usize) -> bool {
        index < self.start
    }

    /// Value at `index`, if it is inside the window
    pub fn get(&self, index: usize) -> Option<&V> {
        index
            .checked_sub(self.start)
            .and_then(|offset| self.values.get(offset))
    }

    /// The two newest values: `(last, second_to_last)`
    pub fn tail(&self) -> (Option<&V>, Option<&V>) {
        let n = self.values.len();
        let last = n.checked_sub(1).and_then(|i| self.values.get(i));
        let before = n.checked_sub(2).and_then(|i| self.values.get(i));
        (last, before)
    }

    /// Append the value for index `frontier()`, evicting from the front if
    /// the window overflows. Returns the number of evicted values.
    pub fn push(&mut self, value: V) -> usize {
        self.values.push_back(value);

        let Some(limit) = self.limit else {
            return 0;
        };
        let mut evicted = 0;
        while self.values.len() > limit {
            self.values.pop_front();
            self.start += 1;
            evicted += 1;
        }
        self.stats.evicted += evicted as u64;
        evicted
    }

    /// Drop every memoized value. Statistics survive, apart from the clear
    /// counter being bumped.
    pub fn clear(&mut self) {
        self.values = VecDeque::new();
        self.start = 0;
        self.stats.clears += 1;
    }

    /// Usage counters
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub(crate) fn stats_mut(&mut self) -> &mut CacheStats {
        &mut self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(limit: Option<usize>, n: u32) -> MemoCache<u32> {
        let mut cache = MemoCache::new(limit);
        for v in 0..n {
            cache.push(v * 10);
        }
        cache
    }

    #[test]
    fn test_empty_cache() {
        let cache: MemoCache<u32> = MemoCache::new(None);
        assert!(cache.is_empty());
        assert_eq!(cache.frontier(), 0);
        assert_eq!(cache.high_water_mark(), None);
        assert_eq!(cache.tail(), (None, None));
    }

    #[test]
    fn test_unbounded_growth_is_contiguous() {
        let cache = filled(None, 6);
        assert_eq!(cache.len(), 6);
        assert_eq!(cache.start(), 0);
        assert_eq!(cache.high_water_mark(), Some(5));
        assert_eq!(cache.get(3), Some(&30));
        assert_eq!(cache.get(6), None);
        assert_eq!(cache.tail(), (Some(&50), Some(&40)));
    }

    #[test]
    fn test_window_evicts_lowest_indices() {
        let cache = filled(Some(3), 7);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.start(), 4);
        assert_eq!(cache.frontier(), 7);
        assert!(cache.is_evicted(3));
        assert_eq!(cache.get(3), None);
        assert_eq!(cache.get(4), Some(&40));
        assert_eq!(cache.stats().evicted, 4);
    }

    #[test]
    fn test_clear_resets_window() {
        let mut cache = filled(Some(2), 5);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.start(), 0);
        assert_eq!(cache.stats().clears, 1);
        assert_eq!(cache.stats().evicted, 3);
    }
}
