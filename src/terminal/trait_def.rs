//! TerminalOp trait definition.

use std::convert::Infallible;

use crate::sink::Sink;

/// The sink at the end of a pipeline, producing the pipeline's result.
///
/// A terminal operation receives elements through its [`Sink`] methods and
/// is then finalized with [`into_output`](TerminalOp::into_output). Calling
/// `begin` again resets it, so a terminal operation may be reused only by
/// beginning it anew.
///
/// # Example
///
/// ```rust
/// use millrace::terminal::TerminalOp;
/// use millrace::{Pipeline, PipelineError, Sink};
///
/// /// Remembers the last element it saw.
/// struct Last<T>(Option<T>);
///
/// impl<T> Sink<T> for Last<T> {
///     fn accept(&mut self, item: T) -> Result<(), PipelineError> {
///         self.0 = Some(item);
///         Ok(())
///     }
/// }
///
/// impl<T> TerminalOp<T> for Last<T> {
///     type Output = Option<T>;
///
///     fn into_output(self) -> Option<T> {
///         self.0
///     }
/// }
///
/// let mut pipeline = Pipeline::of(vec![1, 2, 3]);
/// assert_eq!(pipeline.evaluate(Last(None)), Ok(Some(3)));
/// ```
pub trait TerminalOp<T, E = Infallible>: Sink<T, E> {
    /// The result of the evaluation.
    type Output;

    /// Finalize the operation and hand its result to the caller.
    fn into_output(self) -> Self::Output;
}
