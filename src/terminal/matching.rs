//! MatchOp - decide whether any, all or none of the elements match.

use crate::error::PipelineError;
use crate::sink::Sink;
use crate::terminal::TerminalOp;

/// Which question a [`MatchOp`] answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchKind {
    /// Does any element match?
    Any,
    /// Do all elements match?
    All,
    /// Does no element match?
    None,
}

impl MatchKind {
    /// The answer when no element decides the question.
    ///
    /// `false` for [`MatchKind::Any`], `true` otherwise (vacuous truth).
    pub fn initial(self) -> bool {
        !matches!(self, MatchKind::Any)
    }
}

/// Terminal operation evaluating a predicate under a [`MatchKind`].
///
/// The first element that settles the answer (a match for `Any` or `None`,
/// a non-match for `All`) fixes the result and requests cancellation.
///
/// # Example
///
/// ```rust
/// use millrace::terminal::{MatchKind, MatchOp};
/// use millrace::Pipeline;
///
/// let mut pipeline = Pipeline::of(vec![2, 4, 5, 6]);
/// let all_even = pipeline.evaluate(MatchOp::new(MatchKind::All, |n: &i32| Ok(n % 2 == 0)));
/// assert_eq!(all_even, Ok(false));
/// ```
pub struct MatchOp<P> {
    kind: MatchKind,
    predicate: P,
    result: bool,
    settled: bool,
}

impl<P> MatchOp<P> {
    /// Create a match operation from a fallible predicate.
    pub fn new(kind: MatchKind, predicate: P) -> Self {
        Self {
            kind,
            predicate,
            result: kind.initial(),
            settled: false,
        }
    }
}

impl<P> std::fmt::Debug for MatchOp<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchOp")
            .field("kind", &self.kind)
            .field("predicate", &"<function>")
            .field("result", &self.result)
            .field("settled", &self.settled)
            .finish()
    }
}

impl<T, E, P> Sink<T, E> for MatchOp<P>
where
    P: FnMut(&T) -> Result<bool, E>,
{
    fn begin(&mut self, _size_hint: Option<usize>) -> Result<(), PipelineError<E>> {
        self.result = self.kind.initial();
        self.settled = false;
        Ok(())
    }

    fn accept(&mut self, item: T) -> Result<(), PipelineError<E>> {
        if self.settled {
            return Ok(());
        }
        let matched = (self.predicate)(&item).map_err(PipelineError::Callback)?;
        match (self.kind, matched) {
            (MatchKind::Any, true) => {
                self.result = true;
                self.settled = true;
            }
            (MatchKind::All, false) | (MatchKind::None, true) => {
                self.result = false;
                self.settled = true;
            }
            _ => {}
        }
        Ok(())
    }

    fn cancellation_requested(&self) -> bool {
        self.settled
    }
}

impl<T, E, P> TerminalOp<T, E> for MatchOp<P>
where
    P: FnMut(&T) -> Result<bool, E>,
{
    type Output = bool;

    fn into_output(self) -> bool {
        self.result
    }
}
