//! Stage trait definition.

use std::convert::Infallible;

use crate::error::PipelineError;
use crate::sink::Sink;

/// One node of a pipeline's stage chain.
///
/// The head stage owns the source; every other stage owns its `previous`
/// stage by value together with the parameters of its operation. A stage
/// does nothing until [`copy_into`](Stage::copy_into) is called.
///
/// `copy_into` wraps `sink` with this stage's operation sink and hands the
/// wrapped sink to `previous`, so by the time the recursion reaches the head
/// the head-adjacent operation is the outermost sink. The head then drives
/// the source into it.
///
/// `E` is the error type of the pipeline's callbacks.
pub trait Stage<E = Infallible>: Sized {
    /// Type of the elements this stage emits.
    type Out;

    /// Push every element this stage produces into `sink`, running the
    /// whole `begin → accept* → end` protocol.
    fn copy_into<K>(self, sink: &mut K) -> Result<(), PipelineError<E>>
    where
        K: Sink<Self::Out, E>;

    /// Number of stages from the head to this one, the head counting as 1.
    fn depth(&self) -> usize;
}
