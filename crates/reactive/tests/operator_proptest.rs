//! Property-based tests for the operator chain.
//!
//! These tests verify that operators preserve producer order, that the
//! reduce operators agree with their plain-Vec equivalents, and that
//! re-subscription is deterministic for a deterministic producer.

use proptest::prelude::*;
use rill_core::Error;
use rill_reactive::Stream;

/// Strategy for generating source sequences.
fn items_strategy(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1000i64..1000i64, 0..max_len)
}

proptest! {
    /// Property: map emits f(item) for every item, in producer order.
    #[test]
    fn map_preserves_order_and_length(items in items_strategy(64)) {
        let expected: Vec<i64> = items.iter().map(|n| n * 2 + 1).collect();

        let collected = Stream::from_vec(items)
            .map(|n| n * 2 + 1)
            .collect_to_list()
            .block();

        prop_assert_eq!(collected, Ok(Some(expected)));
    }

    /// Property: filter yields the same subsequence as Vec retain, in order.
    #[test]
    fn filter_matches_vec_retain(items in items_strategy(64)) {
        let expected: Vec<i64> =
            items.iter().copied().filter(|n| n % 3 == 0).collect();

        let collected = Stream::from_vec(items)
            .filter(|n| n % 3 == 0)
            .collect_to_list()
            .block();

        prop_assert_eq!(collected, Ok(Some(expected)));
    }

    /// Property: two maps compose the same way as one fused map.
    #[test]
    fn map_composition(items in items_strategy(64)) {
        let chained = Stream::from_vec(items.clone())
            .map(|n| n + 7)
            .map(|n| n * 3)
            .collect_to_list()
            .block();

        let fused = Stream::from_vec(items)
            .map(|n| (n + 7) * 3)
            .collect_to_list()
            .block();

        prop_assert_eq!(chained, fused);
    }

    /// Property: next() agrees with Iterator::next on the filtered source.
    #[test]
    fn next_matches_first_element(items in items_strategy(64)) {
        let expected = items.iter().copied().find(|n| n % 2 == 0);

        let first = Stream::from_vec(items)
            .filter(|n| n % 2 == 0)
            .next()
            .block();

        prop_assert_eq!(first, Ok(expected));
    }

    /// Property: single() succeeds exactly when the source has one item,
    /// and reports the observed cardinality otherwise.
    #[test]
    fn single_enforces_cardinality(items in items_strategy(8)) {
        let outcome = Stream::from_vec(items.clone()).single().block();

        match items.len() {
            1 => prop_assert_eq!(outcome, Ok(Some(items[0]))),
            0 => prop_assert_eq!(outcome, Err(Error::cardinality(0))),
            _ => prop_assert_eq!(outcome, Err(Error::cardinality(2))),
        }
    }

    /// Property: collect_to_list round-trips the source sequence.
    #[test]
    fn collect_to_list_is_identity(items in items_strategy(64)) {
        let collected = Stream::from_vec(items.clone())
            .collect_to_list()
            .block();
        prop_assert_eq!(collected, Ok(Some(items)));
    }

    /// Property: subscribing the same chain twice yields identical output.
    #[test]
    fn resubscription_is_deterministic(items in items_strategy(64)) {
        let chain = Stream::from_vec(items).map(|n| n - 1).filter(|n| *n != 0);

        let mut first_run = Vec::new();
        chain.subscribe(|n| first_run.push(n));

        let mut second_run = Vec::new();
        chain.subscribe(|n| second_run.push(n));

        prop_assert_eq!(first_run, second_run);
    }
}
