//! PeekSink - observe elements as they pass.

use crate::error::PipelineError;
use crate::sink::Sink;

/// Calls `action(&item)` and forwards the element unchanged.
pub(crate) struct PeekSink<'a, K, F> {
    downstream: &'a mut K,
    action: F,
}

impl<'a, K, F> PeekSink<'a, K, F> {
    pub(crate) fn new(downstream: &'a mut K, action: F) -> Self {
        Self { downstream, action }
    }
}

impl<T, E, K, F> Sink<T, E> for PeekSink<'_, K, F>
where
    K: Sink<T, E>,
    F: FnMut(&T) -> Result<(), E>,
{
    fn begin(&mut self, size_hint: Option<usize>) -> Result<(), PipelineError<E>> {
        self.downstream.begin(size_hint)
    }

    fn accept(&mut self, item: T) -> Result<(), PipelineError<E>> {
        (self.action)(&item).map_err(PipelineError::Callback)?;
        self.downstream.accept(item)
    }

    fn end(&mut self) -> Result<(), PipelineError<E>> {
        self.downstream.end()
    }

    fn cancellation_requested(&self) -> bool {
        self.downstream.cancellation_requested()
    }
}
