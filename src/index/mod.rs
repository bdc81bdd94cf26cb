//! Positions within an infinite list
//!
//! An index is either a finite, non-negative position or the `Infinity`
//! marker standing for the tail of the list. Anything else a caller may
//! pass (negative numbers, `NaN`, fractions) is a soft miss: it converts
//! to `None` rather than an error.

use std::fmt;

use serde::Serialize;

/// A valid position in an infinite list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Index {
    /// Finite position, counted from the seed at 0.
    At(usize),
    /// The conceptual end of the list. Never cached.
    Infinity,
}

impl Index {
    /// Finite position, if any.
    pub fn position(self) -> Option<usize> {
        match self {
            Index::At(i) => Some(i),
            Index::Infinity => None,
        }
    }

    /// Whether this is the infinity marker.
    pub fn is_infinite(self) -> bool {
        matches!(self, Index::Infinity)
    }

    /// Step forward. Infinity absorbs any step; overflow saturates to it.
    pub fn forward(self, step: usize) -> Index {
        match self {
            Index::At(i) => i.checked_add(step).map_or(Index::Infinity, Index::At),
            Index::Infinity => Index::Infinity,
        }
    }

    /// Step backward. Returns `None` when the result would be negative.
    pub fn backward(self, step: usize) -> Option<Index> {
        match self {
            Index::At(i) => i.checked_sub(step).map(Index::At),
            Index::Infinity => Some(Index::Infinity),
        }
    }
}

impl From<usize> for Index {
    fn from(i: usize) -> Self {
        Index::At(i)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::At(i) => write!(f, "{}", i),
            Index::Infinity => f.write_str("Infinity"),
        }
    }
}

/// Conversion of loosely typed input into an [`Index`].
///
/// Returns `None` for anything that is not a whole, non-negative number or
/// positive infinity.
pub trait ToIndex {
    /// Validate and convert.
    fn to_index(self) -> Option<Index>;
}

impl ToIndex for Index {
    fn to_index(self) -> Option<Index> {
        Some(self)
    }
}

impl ToIndex for usize {
    fn to_index(self) -> Option<Index> {
        Some(Index::At(self))
    }
}

impl ToIndex for u32 {
    fn to_index(self) -> Option<Index> {
        usize::try_from(self).ok().map(Index::At)
    }
}

impl ToIndex for u64 {
    fn to_index(self) -> Option<Index> {
        usize::try_from(self).ok().map(Index::At)
    }
}

impl ToIndex for i32 {
    fn to_index(self) -> Option<Index> {
        usize::try_from(self).ok().map(Index::At)
    }
}

impl ToIndex for i64 {
    fn to_index(self) -> Option<Index> {
        usize::try_from(self).ok().map(Index::At)
    }
}

impl ToIndex for f64 {
    fn to_index(self) -> Option<Index> {
        if self == f64::INFINITY {
            return Some(Index::Infinity);
        }
        if !self.is_finite() || self < 0.0 || self.fract() != 0.0 {
            return None;
        }
        // Whole floats past usize::MAX are unreachable positions.
        if self >= usize::MAX as f64 {
            return None;
        }
        Some(Index::At(self as usize))
    }
}

impl<T: ToIndex> ToIndex for Option<T> {
    fn to_index(self) -> Option<Index> {
        self.and_then(ToIndex::to_index)
    }
}
