//! ForEachOp - run an action for every element.

use crate::error::PipelineError;
use crate::sink::Sink;
use crate::terminal::TerminalOp;

/// Terminal operation that calls an action on every element for its effect.
///
/// Never requests cancellation. The result is `()`.
///
/// # Example
///
/// ```rust
/// use millrace::terminal::ForEachOp;
/// use millrace::Pipeline;
///
/// let mut seen = Vec::new();
/// let mut pipeline = Pipeline::of(vec![1, 2, 3]);
/// pipeline
///     .evaluate(ForEachOp::new(|n: i32| {
///         seen.push(n);
///         Ok(())
///     }))
///     .unwrap();
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
pub struct ForEachOp<F> {
    action: F,
}

impl<F> ForEachOp<F> {
    /// Create a for-each operation from a fallible action.
    pub fn new(action: F) -> Self {
        Self { action }
    }
}

impl<F> std::fmt::Debug for ForEachOp<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForEachOp")
            .field("action", &"<function>")
            .finish()
    }
}

impl<T, E, F> Sink<T, E> for ForEachOp<F>
where
    F: FnMut(T) -> Result<(), E>,
{
    fn accept(&mut self, item: T) -> Result<(), PipelineError<E>> {
        (self.action)(item).map_err(PipelineError::Callback)
    }
}

impl<T, E, F> TerminalOp<T, E> for ForEachOp<F>
where
    F: FnMut(T) -> Result<(), E>,
{
    type Output = ();

    fn into_output(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_each_runs_action() {
        let mut total = 0;
        let mut op = ForEachOp::new(|n: i32| {
            total += n;
            Ok::<_, String>(())
        });

        op.begin(None).unwrap();
        op.accept(2).unwrap();
        op.accept(5).unwrap();
        op.end().unwrap();
        assert!(!Sink::<i32, String>::cancellation_requested(&op));
        TerminalOp::<i32, String>::into_output(op);

        assert_eq!(total, 7);
    }

    #[test]
    fn test_for_each_error() {
        let mut op = ForEachOp::new(|n: i32| if n > 1 { Err(n) } else { Ok(()) });

        assert_eq!(op.accept(1), Ok(()));
        assert_eq!(op.accept(2), Err(PipelineError::Callback(2)));
    }
}
