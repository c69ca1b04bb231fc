//! SliceSink - skip a prefix and cap the number of elements.

use crate::error::PipelineError;
use crate::sink::Sink;

/// Drops the first `skip` elements and forwards at most `limit` after that.
///
/// Every element seen moves a single offset forward, skipped or not. As soon
/// as the offset reaches `skip + limit` this sink requests cancellation, so
/// upstream stops pulling from the source.
pub(crate) struct SliceSink<'a, K> {
    downstream: &'a mut K,
    skip: usize,
    limit: Option<usize>,
    offset: usize,
}

impl<'a, K> SliceSink<'a, K> {
    pub(crate) fn new(downstream: &'a mut K, skip: usize, limit: Option<usize>) -> Self {
        Self {
            downstream,
            skip,
            limit,
            offset: 0,
        }
    }

    fn end_offset(&self) -> Option<usize> {
        self.limit.map(|limit| self.skip.saturating_add(limit))
    }
}

impl<T, E, K> Sink<T, E> for SliceSink<'_, K>
where
    K: Sink<T, E>,
{
    fn begin(&mut self, size_hint: Option<usize>) -> Result<(), PipelineError<E>> {
        self.offset = 0;
        let remaining = size_hint.map(|n| {
            let n = n.saturating_sub(self.skip);
            self.limit.map_or(n, |limit| n.min(limit))
        });
        self.downstream.begin(remaining)
    }

    fn accept(&mut self, item: T) -> Result<(), PipelineError<E>> {
        self.offset += 1;
        if self.offset <= self.skip {
            return Ok(());
        }
        if self.end_offset().is_some_and(|end| self.offset > end) {
            return Ok(());
        }
        self.downstream.accept(item)
    }

    fn end(&mut self) -> Result<(), PipelineError<E>> {
        self.downstream.end()
    }

    fn cancellation_requested(&self) -> bool {
        self.end_offset().is_some_and(|end| self.offset >= end)
            || self.downstream.cancellation_requested()
    }
}
