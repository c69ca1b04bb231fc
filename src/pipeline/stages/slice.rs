//! Slice stage.

use crate::error::PipelineError;
use crate::pipeline::Stage;
use crate::sink::{Sink, SliceSink};

/// Skips a prefix of `previous` and caps how many elements follow.
///
/// Created by [`Pipeline::limit`](crate::Pipeline::limit),
/// [`Pipeline::skip`](crate::Pipeline::skip) and
/// [`Pipeline::slice`](crate::Pipeline::slice).
#[derive(Debug)]
pub struct Slice<S> {
    pub(crate) previous: S,
    pub(crate) skip: usize,
    pub(crate) limit: Option<usize>,
}

impl<S, E> Stage<E> for Slice<S>
where
    S: Stage<E>,
{
    type Out = S::Out;

    fn copy_into<K>(self, sink: &mut K) -> Result<(), PipelineError<E>>
    where
        K: Sink<S::Out, E>,
    {
        let mut wrapped = SliceSink::new(sink, self.skip, self.limit);
        self.previous.copy_into(&mut wrapped)
    }

    fn depth(&self) -> usize {
        self.previous.depth() + 1
    }
}
