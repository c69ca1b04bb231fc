//! Sink trait definition.

use std::convert::Infallible;

use crate::error::PipelineError;

/// A push-style consumer of pipeline elements.
///
/// Every intermediate operation and every terminal operation is a `Sink`.
/// At evaluation time the stages of a pipeline wrap the terminal sink one
/// inside the other, so that pushing an element into the outermost sink runs
/// it through the whole chain.
///
/// A sink goes through `begin → accept* → end`. After every `accept` the
/// driver polls [`cancellation_requested`](Sink::cancellation_requested) and
/// stops pulling from the source as soon as it returns true.
///
/// Sinks that wrap a downstream sink must forward all four calls, adding
/// their own behavior where needed.
///
/// # Example
///
/// ```rust
/// use millrace::{PipelineError, Sink};
///
/// /// Keeps the first three elements.
/// struct FirstThree(Vec<i32>);
///
/// impl Sink<i32> for FirstThree {
///     fn accept(&mut self, item: i32) -> Result<(), PipelineError> {
///         self.0.push(item);
///         Ok(())
///     }
///
///     fn cancellation_requested(&self) -> bool {
///         self.0.len() >= 3
///     }
/// }
///
/// let mut sink = FirstThree(Vec::new());
/// for n in 1.. {
///     sink.accept(n).unwrap();
///     if sink.cancellation_requested() {
///         break;
///     }
/// }
/// assert_eq!(sink.0, vec![1, 2, 3]);
/// ```
pub trait Sink<T, E = Infallible> {
    /// Reset the sink before the first element arrives.
    ///
    /// `size_hint` is the exact number of elements about to be pushed, when
    /// it is known.
    fn begin(&mut self, size_hint: Option<usize>) -> Result<(), PipelineError<E>> {
        let _ = size_hint;
        Ok(())
    }

    /// Push one element into the sink.
    fn accept(&mut self, item: T) -> Result<(), PipelineError<E>>;

    /// Signal that no more elements will be pushed.
    fn end(&mut self) -> Result<(), PipelineError<E>> {
        Ok(())
    }

    /// Returns true once this sink (or anything downstream of it) needs no
    /// more elements.
    fn cancellation_requested(&self) -> bool {
        false
    }
}
