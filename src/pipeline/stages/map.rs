//! Map stage.

use crate::error::PipelineError;
use crate::pipeline::Stage;
use crate::sink::{MapSink, Sink};

/// Transforms every element of `previous`.
///
/// Created by [`Pipeline::map`](crate::Pipeline::map) and
/// [`Pipeline::try_map`](crate::Pipeline::try_map).
pub struct Map<S, F> {
    pub(crate) previous: S,
    pub(crate) mapper: F,
}

impl<S: std::fmt::Debug, F> std::fmt::Debug for Map<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("previous", &self.previous)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<S, F, U, E> Stage<E> for Map<S, F>
where
    S: Stage<E>,
    F: FnMut(S::Out) -> Result<U, E>,
{
    type Out = U;

    fn copy_into<K>(self, sink: &mut K) -> Result<(), PipelineError<E>>
    where
        K: Sink<U, E>,
    {
        let mut wrapped = MapSink::new(sink, self.mapper);
        self.previous.copy_into(&mut wrapped)
    }

    fn depth(&self) -> usize {
        self.previous.depth() + 1
    }
}
