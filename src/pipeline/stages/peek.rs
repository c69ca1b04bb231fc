//! Peek stage.

use crate::error::PipelineError;
use crate::pipeline::Stage;
use crate::sink::{PeekSink, Sink};

/// Runs an action on every element of `previous` as it passes.
///
/// Created by [`Pipeline::peek`](crate::Pipeline::peek) and
/// [`Pipeline::try_peek`](crate::Pipeline::try_peek).
pub struct Peek<S, F> {
    pub(crate) previous: S,
    pub(crate) action: F,
}

impl<S: std::fmt::Debug, F> std::fmt::Debug for Peek<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Peek")
            .field("previous", &self.previous)
            .field("action", &"<function>")
            .finish()
    }
}

impl<S, F, E> Stage<E> for Peek<S, F>
where
    S: Stage<E>,
    F: FnMut(&S::Out) -> Result<(), E>,
{
    type Out = S::Out;

    fn copy_into<K>(self, sink: &mut K) -> Result<(), PipelineError<E>>
    where
        K: Sink<S::Out, E>,
    {
        let mut wrapped = PeekSink::new(sink, self.action);
        self.previous.copy_into(&mut wrapped)
    }

    fn depth(&self) -> usize {
        self.previous.depth() + 1
    }
}
