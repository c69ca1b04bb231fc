//! SortSink - buffer everything, then replay it in order.

use std::cmp::Ordering;

use crate::error::PipelineError;
use crate::sink::Sink;

/// Buffers every element and replays them sorted when upstream ends.
///
/// Downstream sees nothing until `end`: at that point the buffer is sorted
/// (stable), downstream is begun with the buffer length, elements are
/// pushed until downstream requests cancellation, and downstream is ended.
///
/// While buffering this sink never requests cancellation, so the whole
/// source is drained even when downstream only wants a few elements.
pub(crate) struct SortSink<'a, K, T, C> {
    downstream: &'a mut K,
    comparator: C,
    buffer: Vec<T>,
    delivered: bool,
}

impl<'a, K, T, C> SortSink<'a, K, T, C> {
    pub(crate) fn new(downstream: &'a mut K, comparator: C) -> Self {
        Self {
            downstream,
            comparator,
            buffer: Vec::new(),
            delivered: false,
        }
    }
}

impl<T, E, K, C> Sink<T, E> for SortSink<'_, K, T, C>
where
    K: Sink<T, E>,
    C: FnMut(&T, &T) -> Result<Ordering, E>,
{
    fn begin(&mut self, size_hint: Option<usize>) -> Result<(), PipelineError<E>> {
        self.buffer = Vec::with_capacity(size_hint.unwrap_or(0));
        self.delivered = false;
        Ok(())
    }

    fn accept(&mut self, item: T) -> Result<(), PipelineError<E>> {
        self.buffer.push(item);
        Ok(())
    }

    fn end(&mut self) -> Result<(), PipelineError<E>> {
        let mut buffer = std::mem::take(&mut self.buffer);
        let comparator = &mut self.comparator;
        let mut failure = None;

        // The first comparator error wins; later comparisons are skipped.
        buffer.sort_by(|a, b| {
            if failure.is_some() {
                return Ordering::Equal;
            }
            comparator(a, b).unwrap_or_else(|e| {
                failure = Some(e);
                Ordering::Equal
            })
        });
        if let Some(e) = failure {
            return Err(PipelineError::Callback(e));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(buffered = buffer.len(), "sort sink delivering");

        self.delivered = true;
        self.downstream.begin(Some(buffer.len()))?;
        for item in buffer {
            if self.downstream.cancellation_requested() {
                break;
            }
            self.downstream.accept(item)?;
        }
        self.downstream.end()
    }

    fn cancellation_requested(&self) -> bool {
        self.delivered && self.downstream.cancellation_requested()
    }
}
