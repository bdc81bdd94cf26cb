use infinite_list::{Index, InfiniteList, ListConfig, Successor};
use proptest::prelude::*;

fn step(x: &i64, before: Option<&i64>) -> i64 {
    // Wrapping keeps long runs from overflowing
    x.wrapping_mul(3).wrapping_add(before.copied().unwrap_or(7))
}

proptest! {
    #[test]
    fn get_reports_its_index(seed in any::<i64>(), n in 0usize..500) {
        let list = InfiniteList::from_fn(seed, step);
        let item = list.get(n).expect("valid index");
        prop_assert_eq!(item.index(), Index::At(n));
    }

    #[test]
    fn values_follow_the_recurrence(seed in any::<i64>(), n in 1usize..200) {
        let list = InfiniteList::from_fn(seed, step);
        let value = |i: usize| list.get(i).and_then(|item| item.finite_value().copied());

        let previous = value(n - 1).expect("finite");
        let before_previous = n.checked_sub(2).and_then(|i| value(i));
        prop_assert_eq!(value(n), Some(step(&previous, before_previous.as_ref())));
    }

    #[test]
    fn lookup_order_does_not_change_values(
        seed in any::<i64>(),
        order in proptest::collection::vec(0usize..300, 1..20),
    ) {
        let fresh = InfiniteList::from_fn(seed, step);
        let expected: Vec<i64> = fresh
            .take(300)
            .iter()
            .filter_map(|item| item.finite_value().copied())
            .collect();

        let list = InfiniteList::from_fn(seed, step);
        for &i in &order {
            let got = list.get(i).and_then(|item| item.finite_value().copied());
            prop_assert_eq!(got, Some(expected[i]));
        }
        let highest = order.iter().copied().max().unwrap_or(0);
        prop_assert_eq!(list.high_water_mark(), Some(highest));
        prop_assert_eq!(list.stats().generated, highest as u64);
    }

    #[test]
    fn windowed_lists_agree_with_unbounded(
        limit in 2usize..16,
        order in proptest::collection::vec(0usize..200, 1..20),
    ) {
        let unbounded = InfiniteList::successor(1i64, |x| x.wrapping_mul(5).wrapping_sub(1));
        let windowed = InfiniteList::with_config(
            1i64,
            Successor(|x: &i64| x.wrapping_mul(5).wrapping_sub(1)),
            ListConfig::unbounded().with_cache_limit(limit),
        )
        .expect("valid config");

        for &i in &order {
            let a = unbounded.get(i).and_then(|item| item.finite_value().copied());
            let b = windowed.get(i).and_then(|item| item.finite_value().copied());
            prop_assert_eq!(a, b);
            prop_assert!(windowed.cached_len() <= limit);
        }
    }

    #[test]
    fn previous_by_never_goes_negative(n in 0usize..100, back in 0usize..200) {
        let list = InfiniteList::successor(0u32, |x| x + 1);
        let item = list.get(n).expect("valid index");
        match item.previous_by(back) {
            Some(prev) => prop_assert_eq!(prev.position(), Some(n - back)),
            None => prop_assert!(back > n),
        }
    }
}
