//! FilterSink - forward only the elements a predicate accepts.

use crate::error::PipelineError;
use crate::sink::Sink;

/// Forwards an element downstream only if the predicate returns true.
pub(crate) struct FilterSink<'a, K, P> {
    downstream: &'a mut K,
    predicate: P,
}

impl<'a, K, P> FilterSink<'a, K, P> {
    pub(crate) fn new(downstream: &'a mut K, predicate: P) -> Self {
        Self {
            downstream,
            predicate,
        }
    }
}

impl<T, E, K, P> Sink<T, E> for FilterSink<'_, K, P>
where
    K: Sink<T, E>,
    P: FnMut(&T) -> Result<bool, E>,
{
    fn begin(&mut self, _size_hint: Option<usize>) -> Result<(), PipelineError<E>> {
        self.downstream.begin(None)
    }

    fn accept(&mut self, item: T) -> Result<(), PipelineError<E>> {
        if (self.predicate)(&item).map_err(PipelineError::Callback)? {
            self.downstream.accept(item)
        } else {
            Ok(())
        }
    }

    fn end(&mut self) -> Result<(), PipelineError<E>> {
        self.downstream.end()
    }

    fn cancellation_requested(&self) -> bool {
        self.downstream.cancellation_requested()
    }
}
