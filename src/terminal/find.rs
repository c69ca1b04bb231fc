//! FindOp - the first element, optionally the first that matches.

use crate::error::PipelineError;
use crate::sink::Sink;
use crate::terminal::TerminalOp;

/// Terminal operation returning the first element, or the first element
/// accepted by a predicate.
///
/// Finding an answer requests cancellation. When nothing is found the result
/// is `None`, so a found `0`, `false` or empty string is never confused with
/// absence.
///
/// # Example
///
/// ```rust
/// use millrace::terminal::FindOp;
/// use millrace::Pipeline;
///
/// let mut pipeline = Pipeline::of(vec![5, 4, 3, 2, 1]);
/// let found = pipeline.evaluate(FindOp::matching(|n: &i32| Ok(*n < 5 && n % 2 != 0)));
/// assert_eq!(found, Ok(Some(3)));
/// ```
pub struct FindOp<T, P> {
    predicate: Option<P>,
    found: Option<T>,
}

impl<T, E> FindOp<T, fn(&T) -> Result<bool, E>> {
    /// Find the first element of the pipeline.
    pub fn first() -> Self {
        Self {
            predicate: None,
            found: None,
        }
    }
}

impl<T, P> FindOp<T, P> {
    /// Find the first element accepted by a fallible predicate.
    pub fn matching(predicate: P) -> Self {
        Self {
            predicate: Some(predicate),
            found: None,
        }
    }
}

impl<T: std::fmt::Debug, P> std::fmt::Debug for FindOp<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FindOp")
            .field(
                "predicate",
                &self.predicate.as_ref().map(|_| "<function>"),
            )
            .field("found", &self.found)
            .finish()
    }
}

impl<T, E, P> Sink<T, E> for FindOp<T, P>
where
    P: FnMut(&T) -> Result<bool, E>,
{
    fn begin(&mut self, _size_hint: Option<usize>) -> Result<(), PipelineError<E>> {
        self.found = None;
        Ok(())
    }

    fn accept(&mut self, item: T) -> Result<(), PipelineError<E>> {
        // The first answer is final.
        if self.found.is_some() {
            return Ok(());
        }
        let hit = match self.predicate.as_mut() {
            Some(predicate) => predicate(&item).map_err(PipelineError::Callback)?,
            None => true,
        };
        if hit {
            self.found = Some(item);
        }
        Ok(())
    }

    fn cancellation_requested(&self) -> bool {
        self.found.is_some()
    }
}

impl<T, E, P> TerminalOp<T, E> for FindOp<T, P>
where
    P: FnMut(&T) -> Result<bool, E>,
{
    type Output = Option<T>;

    fn into_output(self) -> Option<T> {
        self.found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[test]
    fn test_first_takes_first_element() {
        let mut op = FindOp::<i32, fn(&i32) -> Result<bool, Infallible>>::first();
        op.begin(None).unwrap();
        assert!(!Sink::<i32, Infallible>::cancellation_requested(&op));
        op.accept(0).unwrap();
        assert!(Sink::<i32, Infallible>::cancellation_requested(&op));
        op.accept(9).unwrap();
        assert_eq!(TerminalOp::<i32, Infallible>::into_output(op), Some(0));
    }

    #[test]
    fn test_nothing_found_is_none() {
        let mut op = FindOp::matching(|n: &i32| Ok::<_, Infallible>(*n > 10));
        op.begin(None).unwrap();
        op.accept(1).unwrap();
        op.accept(2).unwrap();
        assert_eq!(TerminalOp::<i32, Infallible>::into_output(op), None);
    }

    #[test]
    fn test_predicate_error_propagates() {
        let mut op = FindOp::matching(|_: &i32| Err::<bool, _>("bad"));
        assert_eq!(op.accept(1), Err(PipelineError::Callback("bad")));
        assert_eq!(TerminalOp::<i32, &str>::into_output(op), None);
    }
}
