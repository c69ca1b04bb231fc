//! Property-based tests for pipeline evaluation

use std::collections::HashSet;

use millrace::collector::grouping_by;
use millrace::Pipeline;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_filter_preserves_order(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let expected: Vec<i32> = values.iter().copied().filter(|n| n % 3 == 0).collect();
        let actual = Pipeline::of(values).filter(|n| n % 3 == 0).to_vec().unwrap();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_map_preserves_order(values in prop::collection::vec(any::<i16>(), 0..100)) {
        let expected: Vec<i32> = values.iter().map(|n| i32::from(*n) * 2).collect();
        let actual = Pipeline::of(values).map(|n| i32::from(n) * 2).to_vec().unwrap();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_peek_sees_every_element_in_order(values in prop::collection::vec(any::<u8>(), 0..50)) {
        let mut seen = Vec::new();
        let out = Pipeline::of(values.clone())
            .peek(|n| seen.push(*n))
            .to_vec()
            .unwrap();
        prop_assert_eq!(&out, &values);
        prop_assert_eq!(seen, values);
    }

    #[test]
    fn prop_slice_matches_iterator_skip_take(
        values in prop::collection::vec(any::<u8>(), 0..60),
        skip in 0usize..80,
        limit in 0usize..80,
    ) {
        let expected: Vec<u8> = values.iter().copied().skip(skip).take(limit).collect();
        let actual = Pipeline::of(values).slice(skip, Some(limit)).to_vec().unwrap();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_flat_map_concatenates_in_order(values in prop::collection::vec(0u8..5, 0..30)) {
        let expected: Vec<u8> = values.iter().flat_map(|n| 0..*n).collect();
        let actual = Pipeline::of(values).flat_map(|n| 0..n).to_vec().unwrap();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_distinct_is_idempotent(values in prop::collection::vec(0u8..20, 0..100)) {
        let once = Pipeline::of(values).distinct().to_vec().unwrap();
        let twice = Pipeline::of(once.clone()).distinct().to_vec().unwrap();
        prop_assert_eq!(&once, &twice);

        let unique: HashSet<u8> = once.iter().copied().collect();
        prop_assert_eq!(unique.len(), once.len());
    }

    #[test]
    fn prop_sorted_matches_stable_sort(values in prop::collection::vec(any::<(u8, u8)>(), 0..60)) {
        let mut expected = values.clone();
        expected.sort_by_key(|pair| pair.0);
        let actual = Pipeline::of(values).sorted_by_key(|pair| pair.0).to_vec().unwrap();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_limit_never_pulls_more(values in prop::collection::vec(any::<u8>(), 0..60), limit in 0usize..40) {
        let (source, pulls) = millrace::testing::probe(values.clone());
        let out = Pipeline::wrap(source).limit(limit).to_vec().unwrap();
        prop_assert_eq!(out.len(), values.len().min(limit));
        prop_assert!(pulls.get() <= limit);
    }

    #[test]
    fn prop_grouping_covers_input(values in prop::collection::vec(any::<u16>(), 0..100)) {
        let groups = Pipeline::of(values.clone())
            .collect(grouping_by(|n: &u16| n % 7))
            .unwrap();

        let total: usize = groups.values().map(Vec::len).sum();
        prop_assert_eq!(total, values.len());

        let mut first_seen = Vec::new();
        for n in &values {
            let key = n % 7;
            if !first_seen.contains(&key) {
                first_seen.push(key);
            }
        }
        prop_assert_eq!(groups.keys().copied().collect::<Vec<_>>(), first_seen);
    }

    #[test]
    fn prop_count_matches_len(values in prop::collection::vec(any::<i64>(), 0..100)) {
        let len = values.len();
        prop_assert_eq!(Pipeline::of(values).count().unwrap(), len);
    }
}
