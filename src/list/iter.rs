//! Unbounded forward iteration

use std::fmt;

use super::{InfiniteList, Recurrence};
use crate::index::Index;
use crate::item::Item;

/// Iterator over consecutive items of a list.
///
/// Never returns `None` for a well-behaved list: consumers must stop it
/// themselves (`take`, `take_while`, `break`). Each call to
/// [`InfiniteList::iter`] starts a fresh walk, so iteration is restartable.
pub struct Iter<'a, V, R> {
    list: &'a InfiniteList<V, R>,
    next: Index,
}

impl<'a, V, R> Iter<'a, V, R> {
    pub(crate) fn starting_at(list: &'a InfiniteList<V, R>, next: Index) -> Self {
        Self { list, next }
    }
}

impl<'a, V, R> Iterator for Iter<'a, V, R>
where
    V: Clone,
    R: Recurrence<V>,
{
    type Item = Item<'a, V, R>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.list.get(self.next)?;
        self.next = self.next.forward(1);
        Some(item)
    }
}

impl<'a, V, R> fmt::Debug for Iter<'a, V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("next", &self.next).finish()
    }
}

impl<'a, V, R> IntoIterator for &'a InfiniteList<V, R>
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
