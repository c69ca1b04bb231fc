//! Collectors driven through pipelines.

use millrace::collector::{
    averaging, counting, grouping_by, grouping_by_with, joining, mapping, max_by, min_by,
    summing, to_vec, Joining,
};
use millrace::Pipeline;

#[derive(Debug, Clone, PartialEq)]
struct Sale {
    region: &'static str,
    product: &'static str,
    amount: u32,
}

fn sales() -> Vec<Sale> {
    vec![
        Sale { region: "north", product: "tea", amount: 12 },
        Sale { region: "south", product: "coffee", amount: 30 },
        Sale { region: "north", product: "coffee", amount: 25 },
        Sale { region: "east", product: "tea", amount: 8 },
        Sale { region: "south", product: "tea", amount: 10 },
        Sale { region: "north", product: "cocoa", amount: 5 },
    ]
}

#[test]
fn test_grouping_by_region_keeps_first_seen_order() {
    let groups = Pipeline::of(sales())
        .collect(grouping_by(|s: &Sale| s.region))
        .unwrap();

    assert_eq!(
        groups.keys().copied().collect::<Vec<_>>(),
        vec!["north", "south", "east"]
    );
    assert_eq!(groups.values().map(Vec::len).sum::<usize>(), 6);
}

#[test]
fn test_grouping_by_with_downstreams() {
    let totals = Pipeline::of(sales())
        .collect(grouping_by_with(
            |s: &Sale| s.region,
            mapping(|s: Sale| s.amount, summing()),
        ))
        .unwrap();
    assert_eq!(totals["north"], 42);
    assert_eq!(totals["south"], 40);
    assert_eq!(totals["east"], 8);

    let counts = Pipeline::of(sales())
        .collect(grouping_by_with(|s: &Sale| s.product, counting()))
        .unwrap();
    assert_eq!(counts["tea"], 3);
    assert_eq!(counts["cocoa"], 1);
}

#[test]
fn test_grouping_then_joining() {
    let products = Pipeline::of(sales())
        .collect(grouping_by_with(
            |s: &Sale| s.region,
            mapping(|s: Sale| s.product, joining(", ")),
        ))
        .unwrap();

    assert_eq!(products["north"], "tea, coffee, cocoa");
    assert_eq!(products["east"], "tea");
}

#[test]
fn test_min_and_max_by_amount() {
    let by_amount = |a: &Sale, b: &Sale| a.amount.cmp(&b.amount);

    let smallest = Pipeline::of(sales()).collect(min_by(by_amount)).unwrap();
    let largest = Pipeline::of(sales()).collect(max_by(by_amount)).unwrap();

    assert_eq!(smallest.map(|s| s.product), Some("cocoa"));
    assert_eq!(largest.map(|s| s.region), Some("south"));
}

#[test]
fn test_averaging_amounts() {
    let mean = Pipeline::of(sales())
        .map(|s| s.amount)
        .collect(averaging())
        .unwrap();
    assert!((mean - 15.0).abs() < f64::EPSILON);
}

#[test]
fn test_joining_default_delimiter() {
    let joined = Pipeline::of(vec![1, 2, 3]).collect(Joining::default());
    assert_eq!(joined, Ok("1,2,3".to_string()));

    let empty = Pipeline::of(Vec::<u8>::new()).collect(joining("-"));
    assert_eq!(empty, Ok(String::new()));
}

#[test]
fn test_collect_after_limit() {
    let first_two = Pipeline::of(sales())
        .limit(2)
        .collect(mapping(|s: Sale| s.product, to_vec()))
        .unwrap();
    assert_eq!(first_two, vec!["tea", "coffee"]);
}
