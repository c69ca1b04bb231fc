//! FlatMap stage.

use crate::error::PipelineError;
use crate::pipeline::Stage;
use crate::sink::{FlatMapSink, Sink};

/// Replaces every element of `previous` with the elements of an iterable.
///
/// Created by [`Pipeline::flat_map`](crate::Pipeline::flat_map) and
/// [`Pipeline::try_flat_map`](crate::Pipeline::try_flat_map).
pub struct FlatMap<S, F> {
    pub(crate) previous: S,
    pub(crate) mapper: F,
}

impl<S: std::fmt::Debug, F> std::fmt::Debug for FlatMap<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMap")
            .field("previous", &self.previous)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<S, F, I, E> Stage<E> for FlatMap<S, F>
where
    S: Stage<E>,
    F: FnMut(S::Out) -> Result<I, E>,
    I: IntoIterator,
{
    type Out = I::Item;

    fn copy_into<K>(self, sink: &mut K) -> Result<(), PipelineError<E>>
    where
        K: Sink<I::Item, E>,
    {
        let mut wrapped = FlatMapSink::new(sink, self.mapper);
        self.previous.copy_into(&mut wrapped)
    }

    fn depth(&self) -> usize {
        self.previous.depth() + 1
    }
}
