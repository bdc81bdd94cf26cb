//! Element handles
//!
//! An [`Item`] is an immutable snapshot of one position in a list: the value
//! and index at the time of lookup, plus a shared reference back to the list
//! for navigating to neighbours. Handles are created fresh by every lookup
//! and never change afterwards.

mod value;

pub use value::ItemValue;

use std::fmt;

use crate::index::Index;
use crate::list::{InfiniteList, Iter, Recurrence};
use crate::render::{Render, RenderError};

/// Snapshot of a value at an index, with navigation back into its list
pub struct Item<'a, V, R> {
    list: &'a InfiniteList<V, R>,
    value: ItemValue<V>,
    index: Index,
}

impl<'a, V, R> Item<'a, V, R> {
    pub(crate) fn finite(list: &'a InfiniteList<V, R>, value: V, position: usize) -> Self {
        Self {
            list,
            value: ItemValue::Finite(value),
            index: Index::At(position),
        }
    }

    pub(crate) fn infinity(list: &'a InfiniteList<V, R>) -> Self {
        Self {
            list,
            value: ItemValue::Infinity,
            index: Index::Infinity,
        }
    }

    /// Value held by this handle
    pub fn value(&self) -> &ItemValue<V> {
        &self.value
    }

    /// The finite value, or `None` for the infinity handle
    pub fn finite_value(&self) -> Option<&V> {
        self.value.as_finite()
    }

    /// Position of this handle
    pub fn index(&self) -> Index {
        self.index
    }

    /// Finite position, or `None` for the infinity handle
    pub fn position(&self) -> Option<usize> {
        self.index.position()
    }

    /// Whether this is the handle for the end of the list
    pub fn is_infinite(&self) -> bool {
        self.index.is_infinite()
    }

    /// The list this handle was read from
    pub fn list(&self) -> &'a InfiniteList<V, R> {
        self.list
    }

    /// Take the value out of the handle
    pub fn into_value(self) -> ItemValue<V> {
        self.value
    }
}

impl<'a, V, R> Item<'a, V, R>
where
    V: Clone,
    R: Recurrence<V>,
{
    /// The element after this one
    pub fn next(&self) -> Option<Item<'a, V, R>> {
        self.next_by(1)
    }

    /// The element `step` positions after this one. A zero step returns
    /// this position again.
    pub fn next_by(&self, step: usize) -> Option<Item<'a, V, R>> {
        self.list.get(self.index.forward(step))
    }

    /// The element before this one, or `None` at index 0
    pub fn previous(&self) -> Option<Item<'a, V, R>> {
        self.previous_by(1)
    }

    /// The element `step` positions before this one, or `None` if that
    /// would be a negative index
    pub fn previous_by(&self, step: usize) -> Option<Item<'a, V, R>> {
        self.list.get(self.index.backward(step))
    }

    /// Infinite iterator over the elements following this one
    pub fn iter(&self) -> Iter<'a, V, R> {
        Iter::starting_at(self.list, self.index.forward(1))
    }
}

impl<'a, V, R> IntoIterator for Item<'a, V, R>
where
    V: Clone,
    R: Recurrence<V>,
{
    type Item = Item<'a, V, R>;
    type IntoIter = Iter<'a, V, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V: Render, R> Item<'a, V, R> {
    /// `InfiniteListItem [ .. value .. ]`
    pub fn render(&self) -> Result<String, RenderError> {
        Ok(format!("InfiniteListItem [ .. {} .. ]", self.value.render()?))
    }
}

impl<'a, V: Render, R> fmt::Display for Item<'a, V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

// Manual impls: the recurrence type need not be Clone, Debug or PartialEq.
impl<'a, V: Clone, R> Clone for Item<'a, V, R> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            value: self.value.clone(),
            index: self.index,
        }
    }
}

impl<'a, V: fmt::Debug, R> fmt::Debug for Item<'a, V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("value", &self.value)
            .field("index", &self.index)
            .finish()
    }
}

impl<'a, V: PartialEq, R> PartialEq for Item<'a, V, R> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.value == other.value
    }
}
