//! # Infinite lists
//!
//! Lazily generated, memoized, unbounded sequences with random access.
//!
//! A list is a seed plus a recurrence: element 0 is the seed and element
//! `n` is `recurrence(element[n - 1], element[n - 2])`. Nothing is computed
//! until an index is asked for; every value computed on the way is cached,
//! so each index is generated at most once.
//!
//! ## Usage Example
//!
//! ```
//! use infinite_list::InfiniteList;
//!
//! let evens = InfiniteList::successor(0u64, |x| x + 2);
//! assert_eq!(evens.get(11).unwrap().finite_value(), Some(&22));
//!
//! let values: Vec<u64> = evens
//!     .take_range(8, 10)
//!     .into_iter()
//!     .filter_map(|item| item.finite_value().copied())
//!     .collect();
//! assert_eq!(values, vec![16, 18, 20]);
//! ```
//!
//! Iteration over a list never ends on its own. Callers must bound it,
//! e.g. with [`Iterator::take`] or an explicit `break`.

#![warn(missing_docs, missing_debug_implementations)]

pub mod cache;  // Memoization window and counters
pub mod index;  // Index validation and the infinity marker
pub mod item;   // Element handles with neighbour navigation
pub mod list;   // Sequence engine
pub mod render; // Cycle-safe display helper

// Re-exports for convenience
pub use cache::{CacheStats, MemoCache};
pub use index::{Index, ToIndex};
pub use item::{Item, ItemValue};
pub use list::{InfiniteList, Iter, Recurrence, Successor};
pub use render::{Node, Render, RenderError};

use serde::Serialize;
use thiserror::Error;

/// Configuration parameters for a list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListConfig {
    /// Maximum number of memoized values; `None` keeps every value
    pub cache_limit: Option<usize>,

    /// Number of elements shown by `Display`; `None` picks 2 for
    /// composite values and 5 otherwise
    pub preview_len: Option<usize>,
}

impl ListConfig {
    /// Smallest usable cache window: a two-term recurrence needs the
    /// two newest values.
    pub const MIN_CACHE_LIMIT: usize = 2;

    /// Unbounded cache, default preview
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Bound the cache to a sliding window of `limit` values
    pub fn with_cache_limit(mut self, limit: usize) -> Self {
        self.cache_limit = Some(limit);
        self
    }

    /// Fix the number of previewed elements
    pub fn with_preview_len(mut self, len: usize) -> Self {
        self.preview_len = Some(len);
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<(), ListError> {
        match self.cache_limit {
            Some(limit) if limit < Self::MIN_CACHE_LIMIT => {
                Err(ListError::InvalidCacheLimit { limit })
            }
            _ => Ok(()),
        }
    }
}

/// Errors that can occur while building or reading a list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Index was negative, fractional, NaN or otherwise not a position
    #[error("invalid index: expected a non-negative whole number or infinity")]
    InvalidIndex,

    /// Cache window too small to hold the recurrence inputs
    #[error("cache limit {limit} is below the minimum of {}", ListConfig::MIN_CACHE_LIMIT)]
    InvalidCacheLimit {
        /// Limit that was requested
        limit: usize,
    },

    /// The list was read from inside its own recurrence.
    ///
    /// Every lookup made while the list is generating is refused, including
    /// indices that are already cached. A recurrence receives the values it
    /// may depend on as arguments.
    #[error("index {index} requested while the list is already generating")]
    Reentrant {
        /// Index that was requested
        index: usize,
    },
}
