//! FlatMapSink - replace every element with zero or more elements.

use crate::error::PipelineError;
use crate::sink::Sink;

/// Forwards each element of `mapper(item)` individually, in order.
///
/// An empty iterable (`None`, an empty `Vec`, ...) emits nothing. Elements of
/// one iterable stop being pushed as soon as downstream requests
/// cancellation.
pub(crate) struct FlatMapSink<'a, K, F> {
    downstream: &'a mut K,
    mapper: F,
}

impl<'a, K, F> FlatMapSink<'a, K, F> {
    pub(crate) fn new(downstream: &'a mut K, mapper: F) -> Self {
        Self { downstream, mapper }
    }
}

impl<T, U, I, E, K, F> Sink<T, E> for FlatMapSink<'_, K, F>
where
    K: Sink<U, E>,
    F: FnMut(T) -> Result<I, E>,
    I: IntoIterator<Item = U>,
{
    fn begin(&mut self, _size_hint: Option<usize>) -> Result<(), PipelineError<E>> {
        self.downstream.begin(None)
    }

    fn accept(&mut self, item: T) -> Result<(), PipelineError<E>> {
        let expanded = (self.mapper)(item).map_err(PipelineError::Callback)?;
        for next in expanded {
            if self.downstream.cancellation_requested() {
                break;
            }
            self.downstream.accept(next)?;
        }
        Ok(())
    }

    fn end(&mut self) -> Result<(), PipelineError<E>> {
        self.downstream.end()
    }

    fn cancellation_requested(&self) -> bool {
        self.downstream.cancellation_requested()
    }
}
