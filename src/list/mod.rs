//! Sequence engine
//!
//! Owns the seed, the recurrence and the memo cache, and answers
//! random-access lookups by generating forward from the cache frontier.
//!
//! ## Generation
//!
//! 1. Empty cache: element 0 is the seed.
//! 2. Index inside the cache window: answered from the cache, O(1).
//! 3. Index past the frontier: the recurrence is applied one step at a
//!    time from the frontier until the index is covered. Each step depends
//!    on the previous one or two values, so no index can be skipped.
//! 4. Index below a bounded window: recomputed from the seed without
//!    touching the cache.

mod iter;
mod recurrence;

pub use iter::Iter;
pub use recurrence::{Recurrence, Successor};

use std::cell::RefCell;
use std::fmt;

use tracing::{debug, trace};

use crate::cache::{CacheStats, MemoCache};
use crate::index::{Index, ToIndex};
use crate::item::Item;
use crate::render::{Render, RenderError};
use crate::{ListConfig, ListError};

/// Lazily generated, memoized, unbounded sequence
pub struct InfiniteList<V, R> {
    seed: V,
    recurrence: R,
    config: ListConfig,

    /// Interior mutability lets `get` take `&self`, so handles can hold a
    /// shared reference back into the list.
    cache: RefCell<MemoCache<V>>,
}

impl<V, R> InfiniteList<V, R>
where
    V: Clone,
    R: Recurrence<V>,
{
    /// Create a list with an unbounded cache. Nothing is computed yet.
    pub fn new(seed: V, recurrence: R) -> Self {
        Self {
            seed,
            recurrence,
            config: ListConfig::unbounded(),
            cache: RefCell::new(MemoCache::new(None)),
        }
    }

    /// Create a list with explicit configuration
    pub fn with_config(seed: V, recurrence: R, config: ListConfig) -> Result<Self, ListError> {
        config.validate()?;
        let cache = MemoCache::new(config.cache_limit);
        Ok(Self {
            seed,
            recurrence,
            config,
            cache: RefCell::new(cache),
        })
    }

    /// Element handle at `index`, or `None` if the index is not a valid
    /// position. `Infinity` yields the infinity handle without touching the
    /// cache.
    pub fn get(&self, index: impl ToIndex) -> Option<Item<'_, V, R>> {
        self.try_get(index).ok()
    }

    /// Like [`get`](Self::get), reporting why a lookup missed
    pub fn try_get(&self, index: impl ToIndex) -> Result<Item<'_, V, R>, ListError> {
        match index.to_index().ok_or(ListError::InvalidIndex)? {
            Index::Infinity => Ok(Item::infinity(self)),
            Index::At(position) => {
                let value = self.value_at(position)?;
                Ok(Item::finite(self, value, position))
            }
        }
    }

    /// First element (the seed)
    pub fn first(&self) -> Option<Item<'_, V, R>> {
        self.get(0usize)
    }

    /// Alias for [`first`](Self::first)
    pub fn top(&self) -> Option<Item<'_, V, R>> {
        self.first()
    }

    /// The infinity handle standing for the end of the list
    pub fn last(&self) -> Option<Item<'_, V, R>> {
        self.get(Index::Infinity)
    }

    /// Alias for [`last`](Self::last)
    pub fn end(&self) -> Option<Item<'_, V, R>> {
        self.last()
    }

    /// The first `count` elements, indices `0..count`
    pub fn take(&self, count: usize) -> Vec<Item<'_, V, R>> {
        (0..count).filter_map(|i| self.get(i)).collect()
    }

    /// Elements `from` through `to`, inclusive. Empty when `from > to`.
    pub fn take_range(&self, from: usize, to: usize) -> Vec<Item<'_, V, R>> {
        if from > to {
            return Vec::new();
        }
        (from..=to).filter_map(|i| self.get(i)).collect()
    }

    /// Infinite iterator starting at element 0. Bound it before consuming.
    pub fn iter(&self) -> Iter<'_, V, R> {
        Iter::starting_at(self, Index::At(0))
    }

    /// Discard every memoized value. The next lookup regenerates from the
    /// seed.
    pub fn clear_cache(&mut self) {
        let cache = self.cache.get_mut();
        debug!(discarded = cache.len(), "clearing cache");
        cache.clear();
    }

    fn value_at(&self, position: usize) -> Result<V, ListError> {
        let mut cache = self
            .cache
            .try_borrow_mut()
            .map_err(|_| ListError::Reentrant { index: position })?;

        if let Some(value) = cache.get(position) {
            let value = value.clone();
            cache.stats_mut().hits += 1;
            trace!(position, "cache hit");
            return Ok(value);
        }

        if cache.is_evicted(position) {
            let (value, calls) = self.recompute(position);
            cache.stats_mut().recomputed += calls;
            debug!(position, calls, window_start = cache.start(), "recomputed evicted value");
            return Ok(value);
        }

        let frontier = cache.frontier();
        let mut calls = 0u64;
        while cache.frontier() <= position {
            let (next, generated) = match cache.tail() {
                (Some(previous), before_previous) => {
                    (self.recurrence.next_value(previous, before_previous), true)
                }
                (None, _) => (self.seed.clone(), false),
            };
            cache.push(next);
            // Counted per push so a panicking recurrence leaves the counter
            // in step with the cache
            if generated {
                calls += 1;
                cache.stats_mut().generated += 1;
            }
        }
        debug!(
            from = frontier,
            to = position,
            calls,
            window_start = cache.start(),
            "generated values"
        );

        cache
            .get(position)
            .cloned()
            .ok_or(ListError::InvalidIndex)
    }

    /// Walk forward from the seed without caching
    fn recompute(&self, position: usize) -> (V, u64) {
        let mut before_previous: Option<V> = None;
        let mut previous = self.seed.clone();
        for _ in 0..position {
            let next = self
                .recurrence
                .next_value(&previous, before_previous.as_ref());
            before_previous = Some(std::mem::replace(&mut previous, next));
        }
        (previous, position as u64)
    }
}

impl<V, R> InfiniteList<V, R> {
    /// Value of element 0
    pub fn seed(&self) -> &V {
        &self.seed
    }

    /// Active configuration
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Number of values currently memoized
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Greatest memoized index
    pub fn high_water_mark(&self) -> Option<usize> {
        self.cache.borrow().high_water_mark()
    }

    /// Lowest index still held by the cache
    pub fn window_start(&self) -> usize {
        self.cache.borrow().start()
    }

    /// Cache usage counters
    pub fn stats(&self) -> CacheStats {
        *self.cache.borrow().stats()
    }
}

impl<V, F> InfiniteList<V, F>
where
    V: Clone,
    F: Fn(&V, Option<&V>) -> V,
{
    /// Create a list from a two-term closure, `f(previous, before_previous)`
    pub fn from_fn(seed: V, f: F) -> Self {
        Self::new(seed, f)
    }
}

impl<V, F> InfiniteList<V, Successor<F>>
where
    V: Clone,
    F: Fn(&V) -> V,
{
    /// Create a list where each element depends only on the one before it
    pub fn successor(seed: V, f: F) -> Self {
        Self::new(seed, Successor(f))
    }
}

impl<V, R> InfiniteList<V, R>
where
    V: Clone + Render,
    R: Recurrence<V>,
{
    /// Short preview of the list: `InfiniteList [ v0, v1, ..., ... ]`
    pub fn render(&self) -> Result<String, RenderError> {
        let len = self
            .config
            .preview_len
            .unwrap_or(if self.seed.is_composite() { 2 } else { 5 });

        let mut out = String::from("InfiniteList [");
        for item in self.take(len) {
            out.push(' ');
            out.push_str(&item.value().render()?);
            out.push(',');
        }
        out.push_str(" ... ]");
        Ok(out)
    }
}

impl<V, R> fmt::Display for InfiniteList<V, R>
where
    V: Clone + Render,
    R: Recurrence<V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl<V: fmt::Debug, R> fmt::Debug for InfiniteList<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("InfiniteList");
        s.field("seed", &self.seed).field("config", &self.config);
        match self.cache.try_borrow() {
            Ok(cache) => s.field("cached", &cache.len()).field("window_start", &cache.start()),
            Err(_) => s.field("cached", &"<generating>"),
        };
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evens() -> InfiniteList<u64, Successor<impl Fn(&u64) -> u64>> {
        InfiniteList::successor(0u64, |x| x + 2)
    }

    #[test]
    fn test_construction_is_lazy() {
        let list = evens();
        assert_eq!(list.cached_len(), 0);
        assert_eq!(list.high_water_mark(), None);
        assert_eq!(list.stats(), CacheStats::default());
    }

    #[test]
    fn test_generation_fills_gap_free() {
        let list = evens();
        let item = list.get(5usize).expect("valid index");
        assert_eq!(item.finite_value(), Some(&10));
        assert_eq!(list.cached_len(), 6);
        assert_eq!(list.high_water_mark(), Some(5));
        assert_eq!(list.stats().generated, 5);
    }

    #[test]
    fn test_repeat_lookup_is_a_hit() {
        let list = evens();
        list.get(5usize);
        list.get(3usize);
        list.get(5usize);
        let stats = list.stats();
        assert_eq!(stats.generated, 5);
        assert_eq!(stats.hits, 2);
    }

    #[test]
    fn test_infinity_does_not_touch_cache() {
        let list = evens();
        let end = list.last().expect("infinity is valid");
        assert!(end.is_infinite());
        assert_eq!(end.index(), Index::Infinity);
        assert_eq!(list.cached_len(), 0);
    }

    #[test]
    fn test_two_term_recurrence() {
        let fib = InfiniteList::from_fn(0u64, |a: &u64, b: Option<&u64>| {
            b.map_or(1, |b| a + b)
        });
        let values: Vec<u64> = fib
            .take(8)
            .iter()
            .filter_map(|item| item.finite_value().copied())
            .collect();
        assert_eq!(values, vec![0, 1, 1, 2, 3, 5, 8, 13]);
    }

    #[test]
    fn test_bounded_window_recomputes_evicted() {
        let list = InfiniteList::with_config(
            0u64,
            Successor(|x: &u64| x + 2),
            ListConfig::unbounded().with_cache_limit(3),
        )
        .expect("valid config");

        list.get(10usize);
        assert_eq!(list.cached_len(), 3);
        assert_eq!(list.window_start(), 8);

        let early = list.get(4usize).expect("valid index");
        assert_eq!(early.finite_value(), Some(&8));
        assert_eq!(list.stats().recomputed, 4);
        assert_eq!(list.window_start(), 8);
    }

    #[test]
    fn test_invalid_cache_limit() {
        let err = InfiniteList::with_config(
            0u64,
            Successor(|x: &u64| x + 1),
            ListConfig::unbounded().with_cache_limit(1),
        )
        .unwrap_err();
        assert_eq!(err, ListError::InvalidCacheLimit { limit: 1 });
    }

    #[test]
    fn test_clear_cache_regenerates() {
        let mut list = evens();
        list.get(4usize);
        list.clear_cache();
        assert_eq!(list.cached_len(), 0);
        assert_eq!(list.first().and_then(|i| i.finite_value().copied()), Some(0));
        list.get(4usize);
        assert_eq!(list.stats().generated, 8);
        assert_eq!(list.stats().clears, 1);
    }

    #[test]
    fn test_render_preview() {
        let list = evens();
        assert_eq!(list.to_string(), "InfiniteList [ 0, 2, 4, 6, 8, ... ]");

        let pairs = InfiniteList::successor(vec![0u8], |v| {
            let mut next = v.clone();
            next.push(0);
            next
        });
        let text = pairs.to_string();
        assert!(text.starts_with("InfiniteList [ [\n  0\n],"));
        assert_eq!(pairs.cached_len(), 2);
    }

    #[test]
    fn test_preview_len_override() {
        let list = InfiniteList::with_config(
            1u32,
            Successor(|x: &u32| x * 3),
            ListConfig::unbounded().with_preview_len(3),
        )
        .expect("valid config");
        assert_eq!(list.to_string(), "InfiniteList [ 1, 3, 9, ... ]");
    }
}
