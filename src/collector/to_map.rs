//! ToMap collector.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::collector::Collector;
use crate::error::DuplicateKey;

/// Builds an insertion-ordered map from a key mapper and a value mapper.
///
/// When two items map to the same key, `merge(existing, new, &key)` decides
/// the stored value. Without a merge function a repeated key fails with
/// [`DuplicateKey`] naming the key.
///
/// Created by [`to_map`](crate::collector::to_map) and
/// [`to_map_with`](crate::collector::to_map_with).
pub struct ToMap<KF, VF, M> {
    key_mapper: KF,
    value_mapper: VF,
    merge: Option<M>,
}

impl<KF, VF, M> ToMap<KF, VF, M> {
    pub(crate) fn new(key_mapper: KF, value_mapper: VF, merge: Option<M>) -> Self {
        Self {
            key_mapper,
            value_mapper,
            merge,
        }
    }
}

impl<KF, VF, M> std::fmt::Debug for ToMap<KF, VF, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToMap")
            .field("key_mapper", &"<function>")
            .field("value_mapper", &"<function>")
            .field("merge", &self.merge.as_ref().map(|_| "<function>"))
            .finish()
    }
}

impl<T, K, V, KF, VF, M> Collector<T> for ToMap<KF, VF, M>
where
    KF: Fn(&T) -> K,
    VF: Fn(T) -> V,
    M: Fn(V, V, &K) -> V,
    K: Hash + Eq + Debug,
{
    // A slot is only empty while its merge function runs.
    type Acc = IndexMap<K, Option<V>>;
    type Output = IndexMap<K, V>;

    fn begin(&self) -> Self::Acc {
        IndexMap::new()
    }

    fn accept(&self, acc: &mut Self::Acc, item: T) -> Result<(), DuplicateKey> {
        let key = (self.key_mapper)(&item);
        let value = (self.value_mapper)(item);
        match acc.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(Some(value));
            }
            Entry::Occupied(mut slot) => {
                let Some(merge) = &self.merge else {
                    return Err(DuplicateKey::new(slot.key()));
                };
                let existing = slot.get_mut().take();
                let merged = match existing {
                    Some(existing) => merge(existing, value, slot.key()),
                    None => value,
                };
                *slot.get_mut() = Some(merged);
            }
        }
        Ok(())
    }

    fn finish(&self, acc: Self::Acc) -> Self::Output {
        acc.into_iter()
            .filter_map(|(key, value)| value.map(|value| (key, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::{to_map, to_map_with};

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        id: u32,
        name: &'static str,
    }

    fn records() -> Vec<Record> {
        vec![
            Record { id: 2, name: "b" },
            Record { id: 1, name: "a" },
            Record { id: 2, name: "c" },
        ]
    }

    #[test]
    fn test_duplicate_without_merge_names_key() {
        let collector = to_map(|r: &Record| r.id, |r: Record| r.name);
        let err = collector.collect_all(records()).unwrap_err();
        assert_eq!(err.key(), "2");
    }

    #[test]
    fn test_merge_resolves_collision() {
        let collector = to_map_with(
            |r: &Record| r.id,
            |r: Record| r.name.to_string(),
            |existing: String, new: String, key: &u32| format!("{}{}@{}", existing, new, key),
        );
        let map = collector.collect_all(records()).unwrap();

        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(map[&2], "bc@2");
        assert_eq!(map[&1], "a");
    }
}
