//! Generator rules

use std::fmt;

/// Rule producing the next element from the one or two before it.
///
/// `before_previous` is `None` only when generating element 1. The rule
/// must be a pure function of the values; it must not read the list it
/// generates.
pub trait Recurrence<V> {
    /// Compute the element following `previous`.
    fn next_value(&self, previous: &V, before_previous: Option<&V>) -> V;
}

impl<V, F> Recurrence<V> for F
where
    F: Fn(&V, Option<&V>) -> V,
{
    fn next_value(&self, previous: &V, before_previous: Option<&V>) -> V {
        self(previous, before_previous)
    }
}

/// Adapter for rules that only look at the previous element
#[derive(Clone, Copy)]
pub struct Successor<F>(pub F);

impl<V, F> Recurrence<V> for Successor<F>
where
    F: Fn(&V) -> V,
{
    fn next_value(&self, previous: &V, _before_previous: Option<&V>) -> V {
        (self.0)(previous)
    }
}

impl<F> fmt::Debug for Successor<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Successor(..)")
    }
}
