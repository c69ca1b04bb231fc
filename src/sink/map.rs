//! MapSink - transform every element.

use crate::error::PipelineError;
use crate::sink::Sink;

/// Forwards `mapper(item)` for every element.
pub(crate) struct MapSink<'a, K, F> {
    downstream: &'a mut K,
    mapper: F,
}

impl<'a, K, F> MapSink<'a, K, F> {
    pub(crate) fn new(downstream: &'a mut K, mapper: F) -> Self {
        Self { downstream, mapper }
    }
}

impl<T, U, E, K, F> Sink<T, E> for MapSink<'_, K, F>
where
    K: Sink<U, E>,
    F: FnMut(T) -> Result<U, E>,
{
    fn begin(&mut self, size_hint: Option<usize>) -> Result<(), PipelineError<E>> {
        self.downstream.begin(size_hint)
    }

    fn accept(&mut self, item: T) -> Result<(), PipelineError<E>> {
        let mapped = (self.mapper)(item).map_err(PipelineError::Callback)?;
        self.downstream.accept(mapped)
    }

    fn end(&mut self) -> Result<(), PipelineError<E>> {
        self.downstream.end()
    }

    fn cancellation_requested(&self) -> bool {
        self.downstream.cancellation_requested()
    }
}
