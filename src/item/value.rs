//! Values carried by element handles

use crate::render::{Render, RenderError};

/// A list value, or the infinity sentinel held by the end-of-list handle.
///
/// The sentinel is independent of `V`: the end of a list of strings is
/// still `Infinity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemValue<V> {
    /// Generated (or seed) value
    Finite(V),
    /// Value of the handle at `Index::Infinity`
    Infinity,
}

impl<V> ItemValue<V> {
    /// Borrow the finite value
    pub fn as_finite(&self) -> Option<&V> {
        match self {
            ItemValue::Finite(v) => Some(v),
            ItemValue::Infinity => None,
        }
    }

    /// Take the finite value
    pub fn into_finite(self) -> Option<V> {
        match self {
            ItemValue::Finite(v) => Some(v),
            ItemValue::Infinity => None,
        }
    }

    /// Whether this is the infinity sentinel
    pub fn is_infinite(&self) -> bool {
        matches!(self, ItemValue::Infinity)
    }

    /// Numeric view: finite values converted, infinity as `f64::INFINITY`
    pub fn to_f64(&self) -> f64
    where
        V: Copy + Into<f64>,
    {
        match self {
            ItemValue::Finite(v) => (*v).into(),
            ItemValue::Infinity => f64::INFINITY,
        }
    }
}

impl<V: Render> Render for ItemValue<V> {
    fn render(&self) -> Result<String, RenderError> {
        match self {
            ItemValue::Finite(v) => v.render(),
            ItemValue::Infinity => f64::INFINITY.render(),
        }
    }

    fn is_composite(&self) -> bool {
        match self {
            ItemValue::Finite(v) => v.is_composite(),
            ItemValue::Infinity => false,
        }
    }
}
