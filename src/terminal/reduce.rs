//! ReduceOp - fold every element into a running state.

use crate::error::PipelineError;
use crate::sink::Sink;
use crate::terminal::TerminalOp;

/// Terminal operation folding elements into a value, starting from an identity.
///
/// `begin` resets the running state to a clone of the identity, `accept`
/// replaces it with `accumulator(state, item)`, and the result is the final
/// state. Never requests cancellation.
///
/// # Example
///
/// ```rust
/// use millrace::terminal::ReduceOp;
/// use millrace::Pipeline;
///
/// let mut pipeline = Pipeline::of(vec![2, 4, 8, 18, 32]);
/// let sum = pipeline.evaluate(ReduceOp::new(0, |acc: i32, n: i32| Ok(acc + n)));
/// assert_eq!(sum, Ok(64));
/// ```
pub struct ReduceOp<R, F> {
    identity: R,
    state: Option<R>,
    accumulator: F,
}

impl<R, F> ReduceOp<R, F> {
    /// Create a reduce operation from an identity and a fallible accumulator.
    pub fn new(identity: R, accumulator: F) -> Self {
        Self {
            identity,
            state: None,
            accumulator,
        }
    }
}

impl<R: std::fmt::Debug, F> std::fmt::Debug for ReduceOp<R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReduceOp")
            .field("identity", &self.identity)
            .field("state", &self.state)
            .field("accumulator", &"<function>")
            .finish()
    }
}

impl<T, E, R, F> Sink<T, E> for ReduceOp<R, F>
where
    R: Clone,
    F: FnMut(R, T) -> Result<R, E>,
{
    fn begin(&mut self, _size_hint: Option<usize>) -> Result<(), PipelineError<E>> {
        self.state = Some(self.identity.clone());
        Ok(())
    }

    fn accept(&mut self, item: T) -> Result<(), PipelineError<E>> {
        let state = match self.state.take() {
            Some(state) => state,
            None => self.identity.clone(),
        };
        let next = (self.accumulator)(state, item).map_err(PipelineError::Callback)?;
        self.state = Some(next);
        Ok(())
    }
}

impl<T, E, R, F> TerminalOp<T, E> for ReduceOp<R, F>
where
    R: Clone,
    F: FnMut(R, T) -> Result<R, E>,
{
    type Output = R;

    fn into_output(self) -> R {
        self.state.unwrap_or(self.identity)
    }
}
