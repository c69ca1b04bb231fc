//! Filter stage.

use crate::error::PipelineError;
use crate::pipeline::Stage;
use crate::sink::{FilterSink, Sink};

/// Keeps the elements of `previous` that satisfy a predicate.
///
/// Created by [`Pipeline::filter`](crate::Pipeline::filter) and
/// [`Pipeline::try_filter`](crate::Pipeline::try_filter).
pub struct Filter<S, P> {
    pub(crate) previous: S,
    pub(crate) predicate: P,
}

impl<S: std::fmt::Debug, P> std::fmt::Debug for Filter<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("previous", &self.previous)
            .field("predicate", &"<function>")
            .finish()
    }
}

impl<S, P, E> Stage<E> for Filter<S, P>
where
    S: Stage<E>,
    P: FnMut(&S::Out) -> Result<bool, E>,
{
    type Out = S::Out;

    fn copy_into<K>(self, sink: &mut K) -> Result<(), PipelineError<E>>
    where
        K: Sink<S::Out, E>,
    {
        let mut wrapped = FilterSink::new(sink, self.predicate);
        self.previous.copy_into(&mut wrapped)
    }

    fn depth(&self) -> usize {
        self.previous.depth() + 1
    }
}
