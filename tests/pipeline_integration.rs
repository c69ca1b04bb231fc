//! End-to-end scenarios for building and evaluating pipelines.

use std::cell::Cell;

use millrace::collector::{to_map, to_map_with};
use millrace::prelude::*;
use millrace::terminal::{CollectOp, MatchKind, MatchOp};
use millrace::testing::probe;
use millrace::{assert_already_consumed, assert_duplicate_key};

#[derive(Debug, Clone, PartialEq)]
struct Record {
    id: u32,
    name: &'static str,
}

#[test]
fn test_reduce_sums_values() {
    let total = Pipeline::of(vec![2, 4, 8, 18, 32]).reduce(0, |acc, n| acc + n);
    assert_eq!(total, Ok(64));
}

#[test]
fn test_filter_even_numbers() {
    let evens = Pipeline::of(1..=10).filter(|n| n % 2 == 0).to_vec();
    assert_eq!(evens, Ok(vec![2, 4, 6, 8, 10]));
}

#[test]
fn test_find_first_odd_below_five() {
    let found = Pipeline::of(vec![5, 4, 3, 2, 1])
        .filter(|n| *n < 5)
        .filter(|n| n % 2 == 1)
        .find_first();
    assert_eq!(found, Ok(Some(3)));
}

#[test]
fn test_distinct_keeps_first_occurrences() {
    let unique = Pipeline::of(vec![1, 2, 2, 3, 4, 5, 5, 1]).distinct().to_vec();
    assert_eq!(unique, Ok(vec![1, 2, 3, 4, 5]));
}

#[test]
fn test_sum_of_lengths() {
    let total = Pipeline::of(vec!["a", "bb", "ccc"]).map(|s| s.len()).sum();
    assert_eq!(total, Ok(6));
}

#[test]
fn test_to_map_collision_names_key() {
    let records = vec![
        Record { id: 1, name: "first" },
        Record { id: 1, name: "second" },
    ];
    let result = Pipeline::of(records).collect(to_map(|r: &Record| r.id, |r: Record| r.name));
    assert_duplicate_key!(result, "1");
}

#[test]
fn test_to_map_with_merge() {
    let records = vec![
        Record { id: 1, name: "first" },
        Record { id: 2, name: "other" },
        Record { id: 1, name: "second" },
    ];
    let names = Pipeline::of(records)
        .collect(to_map_with(
            |r: &Record| r.id,
            |r: Record| r.name.to_string(),
            |existing, new, _| format!("{}/{}", existing, new),
        ))
        .unwrap();

    assert_eq!(names.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(names[&1], "first/second");
}

#[test]
fn test_limit_short_circuits_source() {
    let (source, pulls) = probe(1..=1000);
    let first = Pipeline::wrap(source).limit(5).to_vec();

    assert_eq!(first, Ok(vec![1, 2, 3, 4, 5]));
    assert!(pulls.get() <= 5);
}

#[test]
fn test_find_short_circuits_after_map() {
    let (source, pulls) = probe(1..=1000);
    let found = Pipeline::wrap(source).map(|n| n * 3).find(|n| n % 4 == 0);

    assert_eq!(found, Ok(Some(12)));
    assert_eq!(pulls.get(), 4);
}

#[test]
fn test_building_is_lazy() {
    let (source, pulls) = probe(vec![3, 1, 2]);
    let calls = Cell::new(0);

    let pipeline = Pipeline::wrap(source)
        .peek(|_| calls.set(calls.get() + 1))
        .sorted()
        .map(|n| n + 1);

    assert_eq!(pulls.get(), 0);
    assert_eq!(calls.get(), 0);
    assert_eq!(pipeline.to_vec(), Ok(vec![2, 3, 4]));
    assert_eq!(pulls.get(), 3);
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_second_evaluation_fails() {
    let mut pipeline = Pipeline::of(vec![1, 2, 3]);
    let any_even = pipeline.evaluate(MatchOp::new(MatchKind::Any, |n: &i32| Ok(n % 2 == 0)));
    assert_eq!(any_even, Ok(true));

    assert_already_consumed!(pipeline.evaluate(CollectOp::new(collector::counting())));
}

#[test]
fn test_chained_operations() {
    let words = vec!["pear", "apple", "fig", "apple", "kiwi", "banana", "fig"];

    let result = Pipeline::of(words)
        .distinct()
        .filter(|w| w.len() > 3)
        .sorted()
        .map(str::to_uppercase)
        .skip(1)
        .to_vec();

    assert_eq!(
        result,
        Ok(vec!["BANANA".to_string(), "KIWI".to_string(), "PEAR".to_string()])
    );
}

#[test]
fn test_flat_map_expands_and_drops() {
    let lines = vec!["a b", "", "c"];
    let words = Pipeline::of(lines)
        .flat_map(|line| line.split_whitespace().collect::<Vec<_>>())
        .to_vec();
    assert_eq!(words, Ok(vec!["a", "b", "c"]));

    let none = Pipeline::of(vec![1, 2, 3])
        .flat_map(|_| None::<i32>)
        .count();
    assert_eq!(none, Ok(0));
}

#[test]
fn test_empty_source() {
    assert_eq!(Pipeline::of(Vec::<i32>::new()).to_vec(), Ok(vec![]));
    assert_eq!(Pipeline::of(Vec::<i32>::new()).sorted().count(), Ok(0));
    assert_eq!(Pipeline::of(Vec::<i32>::new()).sum(), Ok(0));
    assert_eq!(Pipeline::of(Vec::<i32>::new()).min(), Ok(None));
}

#[test]
fn test_callback_error_from_fallible_map() {
    let result = Pipeline::of(vec!["10", "20", "x"])
        .with_error::<std::num::ParseIntError>()
        .try_map(|s| s.parse::<u32>())
        .sum();

    let err = result.unwrap_err();
    assert!(err.is_callback());
    assert!(err.to_string().contains("invalid digit"));
}
