//! Sorted stage.

use std::cmp::Ordering;

use crate::error::PipelineError;
use crate::pipeline::Stage;
use crate::sink::{Sink, SortSink};

/// Emits the elements of `previous` in comparator order.
///
/// Created by [`Pipeline::sorted`](crate::Pipeline::sorted) and its
/// `sorted_by*` siblings.
pub struct Sorted<S, C> {
    pub(crate) previous: S,
    pub(crate) comparator: C,
}

impl<S: std::fmt::Debug, C> std::fmt::Debug for Sorted<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sorted")
            .field("previous", &self.previous)
            .field("comparator", &"<function>")
            .finish()
    }
}

impl<S, C, E> Stage<E> for Sorted<S, C>
where
    S: Stage<E>,
    C: FnMut(&S::Out, &S::Out) -> Result<Ordering, E>,
{
    type Out = S::Out;

    fn copy_into<K>(self, sink: &mut K) -> Result<(), PipelineError<E>>
    where
        K: Sink<S::Out, E>,
    {
        let mut wrapped: SortSink<'_, K, S::Out, C> = SortSink::new(sink, self.comparator);
        self.previous.copy_into(&mut wrapped)
    }

    fn depth(&self) -> usize {
        self.previous.depth() + 1
    }
}
