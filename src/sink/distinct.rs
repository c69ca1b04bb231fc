//! DistinctSink - drop elements equal to one already seen.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::PipelineError;
use crate::sink::Sink;

/// Forwards the first occurrence of every value and silently drops the rest.
///
/// The set of seen values grows with the number of distinct elements and is
/// owned by this sink for one evaluation.
pub(crate) struct DistinctSink<'a, K, T> {
    downstream: &'a mut K,
    seen: HashSet<T>,
}

impl<'a, K, T> DistinctSink<'a, K, T> {
    pub(crate) fn new(downstream: &'a mut K) -> Self {
        Self {
            downstream,
            seen: HashSet::new(),
        }
    }
}

impl<T, E, K> Sink<T, E> for DistinctSink<'_, K, T>
where
    K: Sink<T, E>,
    T: Eq + Hash + Clone,
{
    fn begin(&mut self, _size_hint: Option<usize>) -> Result<(), PipelineError<E>> {
        self.seen.clear();
        self.downstream.begin(None)
    }

    fn accept(&mut self, item: T) -> Result<(), PipelineError<E>> {
        if self.seen.contains(&item) {
            return Ok(());
        }
        self.seen.insert(item.clone());
        self.downstream.accept(item)
    }

    fn end(&mut self) -> Result<(), PipelineError<E>> {
        self.downstream.end()
    }

    fn cancellation_requested(&self) -> bool {
        self.downstream.cancellation_requested()
    }
}
