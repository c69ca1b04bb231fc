//! GroupingBy collector.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::collector::Collector;
use crate::error::DuplicateKey;

/// Groups items by a classification key, collecting each group with a
/// downstream collector.
///
/// The accumulator maps every key to its own downstream accumulator, created
/// with `downstream.begin()` the first time the key is seen. `finish` runs
/// `downstream.finish` on each of them. Keys keep first-seen order.
///
/// Created by [`grouping_by`](crate::collector::grouping_by) and
/// [`grouping_by_with`](crate::collector::grouping_by_with).
pub struct GroupingBy<F, D> {
    classifier: F,
    downstream: D,
}

impl<F, D> GroupingBy<F, D> {
    pub(crate) fn new(classifier: F, downstream: D) -> Self {
        Self {
            classifier,
            downstream,
        }
    }
}

impl<F, D: std::fmt::Debug> std::fmt::Debug for GroupingBy<F, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupingBy")
            .field("classifier", &"<function>")
            .field("downstream", &self.downstream)
            .finish()
    }
}

impl<T, K, F, D> Collector<T> for GroupingBy<F, D>
where
    F: Fn(&T) -> K,
    K: Hash + Eq,
    D: Collector<T>,
{
    type Acc = IndexMap<K, D::Acc>;
    type Output = IndexMap<K, D::Output>;

    fn begin(&self) -> Self::Acc {
        IndexMap::new()
    }

    fn accept(&self, acc: &mut Self::Acc, item: T) -> Result<(), DuplicateKey> {
        let key = (self.classifier)(&item);
        let group = acc
            .entry(key)
            .or_insert_with(|| self.downstream.begin());
        self.downstream.accept(group, item)
    }

    fn finish(&self, acc: Self::Acc) -> Self::Output {
        acc.into_iter()
            .map(|(key, group)| (key, self.downstream.finish(group)))
            .collect()
    }
}
