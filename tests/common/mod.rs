use std::cell::Cell;
use std::rc::Rc;

use infinite_list::{InfiniteList, Recurrence};

/// `x + 2` that records how often it runs
#[derive(Debug, Clone, Default)]
pub struct CountingStep {
    calls: Rc<Cell<usize>>,
}

impl CountingStep {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Recurrence<u64> for CountingStep {
    fn next_value(&self, previous: &u64, _before_previous: Option<&u64>) -> u64 {
        self.calls.set(self.calls.get() + 1);
        previous + 2
    }
}

/// Even numbers from 0, plus a handle on the call counter
pub fn counting_evens() -> (InfiniteList<u64, CountingStep>, CountingStep) {
    let step = CountingStep::default();
    (InfiniteList::new(0, step.clone()), step)
}

/// Values of a batch of items, panicking on the infinity handle
pub fn values<R: Recurrence<u64>>(items: &[infinite_list::Item<'_, u64, R>]) -> Vec<u64> {
    items
        .iter()
        .map(|item| *item.finite_value().expect("finite item"))
        .collect()
}
