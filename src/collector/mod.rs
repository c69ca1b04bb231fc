//! Collectors: composable, three-phase reductions for [`Pipeline::collect`].
//!
//! A [`Collector`] describes *how* to accumulate (begin, accept, finish)
//! while the accumulator itself is passed around by the caller. That makes
//! collectors nest: [`grouping_by_with`] keeps one downstream accumulator per
//! key, and [`mapping`] rewrites items on their way into another collector.
//!
//! # Example
//!
//! ```rust
//! use millrace::collector::{counting, grouping_by_with, joining, mapping};
//! use millrace::Pipeline;
//!
//! let words = vec!["apple", "avocado", "banana", "blueberry", "cherry"];
//!
//! let by_letter = Pipeline::of(words.clone())
//!     .collect(grouping_by_with(|w: &&str| w.chars().next(), counting()))
//!     .unwrap();
//! assert_eq!(by_letter[&Some('a')], 2);
//! assert_eq!(by_letter[&Some('c')], 1);
//!
//! let upper = Pipeline::of(words)
//!     .collect(mapping(|w: &str| w.to_uppercase(), joining("|")))
//!     .unwrap();
//! assert_eq!(upper, "APPLE|AVOCADO|BANANA|BLUEBERRY|CHERRY");
//! ```
//!
//! [`Pipeline::collect`]: crate::Pipeline::collect

use std::cmp::Ordering;

mod counting;
mod grouping_by;
mod joining;
mod mapping;
mod min_max;
mod numeric;
mod to_map;
mod to_vec;
mod trait_def;

// Re-export core trait
pub use trait_def::Collector;

// Re-export collector types
pub use counting::Counting;
pub use grouping_by::GroupingBy;
pub use joining::Joining;
pub use mapping::Mapping;
pub use min_max::Extremum;
pub use numeric::{Averaging, Summing};
pub use to_map::ToMap;
pub use to_vec::ToVec;

/// Collect items into a `Vec`.
///
/// ```rust
/// use millrace::collector::{to_vec, Collector};
///
/// assert_eq!(to_vec().collect_all(1..4), Ok(vec![1, 2, 3]));
/// ```
pub fn to_vec() -> ToVec {
    ToVec
}

/// Count items.
pub fn counting() -> Counting {
    Counting
}

/// Sum numeric items; the sum of nothing is zero.
///
/// ```rust
/// use millrace::collector::{summing, Collector};
///
/// assert_eq!(summing().collect_all(vec![1.5, 2.5]), Ok(4.0));
/// ```
pub fn summing() -> Summing {
    Summing
}

/// Arithmetic mean of numeric items as `f64`; `0.0` when there are none.
pub fn averaging() -> Averaging {
    Averaging
}

/// The smallest item according to `comparator`, earliest on ties.
///
/// ```rust
/// use millrace::collector::{min_by, Collector};
///
/// let shortest = min_by(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// assert_eq!(shortest.collect_all(["ccc", "a", "bb", "d"]), Ok(Some("a")));
/// ```
pub fn min_by<T, C>(comparator: C) -> Extremum<C>
where
    C: Fn(&T, &T) -> Ordering,
{
    Extremum::min(comparator)
}

/// The largest item according to `comparator`, earliest on ties.
pub fn max_by<T, C>(comparator: C) -> Extremum<C>
where
    C: Fn(&T, &T) -> Ordering,
{
    Extremum::max(comparator)
}

/// Map every item with `mapper` before handing it to `downstream`.
pub fn mapping<T, U, F, D>(mapper: F, downstream: D) -> Mapping<F, D>
where
    F: Fn(T) -> U,
    D: Collector<U>,
{
    Mapping::new(mapper, downstream)
}

/// [`mapping`] into a `Vec`.
///
/// ```rust
/// use millrace::collector::{mapping_to_vec, Collector};
///
/// let lengths = mapping_to_vec(|w: &str| w.len()).collect_all(["ab", "c"]);
/// assert_eq!(lengths, Ok(vec![2, 1]));
/// ```
pub fn mapping_to_vec<T, U, F>(mapper: F) -> Mapping<F, ToVec>
where
    F: Fn(T) -> U,
{
    Mapping::new(mapper, ToVec)
}

/// Group items by `classifier` into vectors, keys in first-seen order.
///
/// ```rust
/// use millrace::collector::{grouping_by, Collector};
///
/// let groups = grouping_by(|n: &i32| n % 3).collect_all(1..=7).unwrap();
/// assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![1, 2, 0]);
/// assert_eq!(groups[&1], vec![1, 4, 7]);
/// ```
pub fn grouping_by<T, K, F>(classifier: F) -> GroupingBy<F, ToVec>
where
    F: Fn(&T) -> K,
{
    GroupingBy::new(classifier, ToVec)
}

/// Group items by `classifier`, collecting each group with `downstream`.
pub fn grouping_by_with<T, K, F, D>(classifier: F, downstream: D) -> GroupingBy<F, D>
where
    F: Fn(&T) -> K,
    D: Collector<T>,
{
    GroupingBy::new(classifier, downstream)
}

/// Build a map; a repeated key is a [`DuplicateKey`](crate::DuplicateKey) error.
pub fn to_map<T, K, V, KF, VF>(
    key_mapper: KF,
    value_mapper: VF,
) -> ToMap<KF, VF, fn(V, V, &K) -> V>
where
    KF: Fn(&T) -> K,
    VF: Fn(T) -> V,
{
    ToMap::new(key_mapper, value_mapper, None)
}

/// [`to_map`] keeping each item itself as the value.
pub fn to_map_by_key<T, K, KF>(key_mapper: KF) -> ToMap<KF, fn(T) -> T, fn(T, T, &K) -> T>
where
    KF: Fn(&T) -> K,
{
    ToMap::new(key_mapper, std::convert::identity as fn(T) -> T, None)
}

/// Build a map, resolving repeated keys with `merge(existing, new, &key)`.
///
/// ```rust
/// use millrace::collector::{to_map_with, Collector};
///
/// let totals = to_map_with(
///     |(name, _): &(&str, u32)| name.to_string(),
///     |(_, amount): (&str, u32)| amount,
///     |existing, new, _key| existing + new,
/// )
/// .collect_all(vec![("ann", 5), ("bob", 1), ("ann", 2)])
/// .unwrap();
///
/// assert_eq!(totals["ann"], 7);
/// assert_eq!(totals["bob"], 1);
/// ```
pub fn to_map_with<T, K, V, KF, VF, M>(
    key_mapper: KF,
    value_mapper: VF,
    merge: M,
) -> ToMap<KF, VF, M>
where
    KF: Fn(&T) -> K,
    VF: Fn(T) -> V,
    M: Fn(V, V, &K) -> V,
{
    ToMap::new(key_mapper, value_mapper, Some(merge))
}

/// Join the `Display` form of every item with `delimiter`.
pub fn joining(delimiter: impl Into<String>) -> Joining {
    Joining::new(delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        key: &'static str,
        value: (u8, u8),
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry { key: "one", value: (1, 1) },
            Entry { key: "one", value: (1, 2) },
            Entry { key: "one", value: (1, 3) },
            Entry { key: "two", value: (2, 1) },
            Entry { key: "two", value: (2, 2) },
            Entry { key: "three", value: (3, 1) },
        ]
    }

    fn render(entry: Entry) -> String {
        format!("{} - {}", entry.value.0, entry.value.1)
    }

    #[test]
    fn test_grouping_by_keeps_items_per_key() {
        let groups = grouping_by(|e: &Entry| e.key).collect_all(entries()).unwrap();

        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec!["one", "two", "three"]);
        assert_eq!(groups["one"].len(), 3);
        assert_eq!(groups["two"].len(), 2);
        assert_eq!(groups["three"][0].value, (3, 1));
    }

    #[test]
    fn test_grouping_by_then_mapping() {
        let collector = grouping_by_with(|e: &Entry| e.key, mapping(render, to_vec()));
        let groups = collector.collect_all(entries()).unwrap();

        assert_eq!(groups["one"], vec!["1 - 1", "1 - 2", "1 - 3"]);
        assert_eq!(groups["two"], vec!["2 - 1", "2 - 2"]);
        assert_eq!(groups["three"], vec!["3 - 1"]);
    }

    #[test]
    fn test_mapping_alone() {
        let rendered = mapping(render, to_vec()).collect_all(entries()).unwrap();
        assert_eq!(rendered.len(), 6);
        assert_eq!(rendered[3], "2 - 1");
    }

    #[test]
    fn test_mapping_to_vec_matches_explicit_downstream() {
        let shorthand = mapping_to_vec(render).collect_all(entries()).unwrap();
        let explicit = mapping(render, to_vec()).collect_all(entries()).unwrap();
        assert_eq!(shorthand, explicit);
    }

    #[test]
    fn test_to_map_by_key_keeps_items() {
        let by_key = to_map_by_key(|e: &Entry| e.value).collect_all(entries()).unwrap();
        assert_eq!(by_key.len(), entries().len());
        assert_eq!(by_key[&(2, 1)].key, entries()[3].key);

        let err = to_map_by_key(|e: &Entry| e.key).collect_all(entries()).unwrap_err();
        assert_eq!(err.key(), format!("{:?}", entries()[0].key));
    }

    #[test]
    fn test_nested_grouping() {
        let collector = grouping_by_with(
            |n: &u32| n % 2 == 0,
            grouping_by_with(|n: &u32| n % 3, summing()),
        );
        let groups = collector.collect_all(1..=6).unwrap();

        assert_eq!(groups[&false][&1], 1);
        assert_eq!(groups[&false][&0], 3);
        assert_eq!(groups[&false][&2], 5);
        assert_eq!(groups[&true][&2], 2);
        assert_eq!(groups[&true][&1], 4);
        assert_eq!(groups[&true][&0], 6);
    }

    #[test]
    fn test_grouped_collision_propagates() {
        let collector = grouping_by_with(|n: &u32| n % 2, to_map(|n: &u32| n / 10, |n: u32| n));
        // 1 and 3 are both odd and both land on key 0.
        let err = collector.collect_all(vec![1, 12, 3, 15]).unwrap_err();
        assert_eq!(err.key(), "0");
    }
}
