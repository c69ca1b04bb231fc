//! Distinct stage.

use std::hash::Hash;

use crate::error::PipelineError;
use crate::pipeline::Stage;
use crate::sink::{DistinctSink, Sink};

/// Drops elements of `previous` equal to one already emitted.
///
/// Created by [`Pipeline::distinct`](crate::Pipeline::distinct).
#[derive(Debug)]
pub struct Distinct<S> {
    pub(crate) previous: S,
}

impl<S, E> Stage<E> for Distinct<S>
where
    S: Stage<E>,
    S::Out: Eq + Hash + Clone,
{
    type Out = S::Out;

    fn copy_into<K>(self, sink: &mut K) -> Result<(), PipelineError<E>>
    where
        K: Sink<S::Out, E>,
    {
        let mut wrapped: DistinctSink<'_, K, S::Out> = DistinctSink::new(sink);
        self.previous.copy_into(&mut wrapped)
    }

    fn depth(&self) -> usize {
        self.previous.depth() + 1
    }
}
