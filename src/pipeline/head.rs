//! Head stages - the owners of a pipeline's source.

use std::fmt;

use crate::error::PipelineError;
use crate::pipeline::Stage;
use crate::sink::Sink;

/// Head stage over an infallible source.
///
/// Created by [`Pipeline::of`](crate::Pipeline::of) and
/// [`Pipeline::wrap`](crate::Pipeline::wrap).
pub struct Head<I> {
    source: I,
}

impl<I> Head<I> {
    pub(crate) fn new(source: I) -> Self {
        Self { source }
    }
}

impl<I> fmt::Debug for Head<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Head")
            .field("source", &std::any::type_name::<I>())
            .finish()
    }
}

impl<I, E> Stage<E> for Head<I>
where
    I: Iterator,
{
    type Out = I::Item;

    fn copy_into<K>(self, sink: &mut K) -> Result<(), PipelineError<E>>
    where
        K: Sink<I::Item, E>,
    {
        let hint = exact_len(&self.source);
        drive(self.source.map(Ok), hint, sink)
    }

    fn depth(&self) -> usize {
        1
    }
}

/// Head stage over a source of `Result`s.
///
/// The first `Err` pulled from the source aborts evaluation with
/// [`PipelineError::Callback`].
///
/// Created by [`Pipeline::try_wrap`](crate::Pipeline::try_wrap).
pub struct TryHead<I> {
    source: I,
}

impl<I> TryHead<I> {
    pub(crate) fn new(source: I) -> Self {
        Self { source }
    }
}

impl<I> fmt::Debug for TryHead<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryHead")
            .field("source", &std::any::type_name::<I>())
            .finish()
    }
}

impl<I, T, E> Stage<E> for TryHead<I>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Out = T;

    fn copy_into<K>(self, sink: &mut K) -> Result<(), PipelineError<E>>
    where
        K: Sink<T, E>,
    {
        let hint = exact_len(&self.source);
        drive(self.source, hint, sink)
    }

    fn depth(&self) -> usize {
        1
    }
}

fn exact_len<I: Iterator>(source: &I) -> Option<usize> {
    match source.size_hint() {
        (lower, Some(upper)) if lower == upper => Some(lower),
        _ => None,
    }
}

/// Run the sink protocol over `source`.
///
/// Cancellation is polled before every pull, so a sink that needs nothing
/// never touches the source.
fn drive<T, E, I, K>(
    mut source: I,
    size_hint: Option<usize>,
    sink: &mut K,
) -> Result<(), PipelineError<E>>
where
    I: Iterator<Item = Result<T, E>>,
    K: Sink<T, E>,
{
    sink.begin(size_hint)?;

    #[cfg(feature = "tracing")]
    let mut pulled = 0usize;
    let mut short_circuited = false;

    loop {
        if sink.cancellation_requested() {
            short_circuited = true;
            break;
        }
        let Some(item) = source.next() else {
            break;
        };
        #[cfg(feature = "tracing")]
        {
            pulled += 1;
        }
        sink.accept(item.map_err(PipelineError::Callback)?)?;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(pulled, short_circuited, "source drained");
    #[cfg(not(feature = "tracing"))]
    let _ = short_circuited;

    sink.end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[derive(Debug, Default)]
    struct Trace {
        hint: Option<Option<usize>>,
        items: Vec<i32>,
        ended: bool,
        want: Option<usize>,
    }

    impl<E> Sink<i32, E> for Trace {
        fn begin(&mut self, size_hint: Option<usize>) -> Result<(), PipelineError<E>> {
            self.hint = Some(size_hint);
            Ok(())
        }

        fn accept(&mut self, item: i32) -> Result<(), PipelineError<E>> {
            self.items.push(item);
            Ok(())
        }

        fn end(&mut self) -> Result<(), PipelineError<E>> {
            self.ended = true;
            Ok(())
        }

        fn cancellation_requested(&self) -> bool {
            self.want.is_some_and(|want| self.items.len() >= want)
        }
    }

    #[test]
    fn test_head_runs_full_protocol() {
        let mut trace = Trace::default();
        Stage::<Infallible>::copy_into(Head::new(vec![1, 2, 3].into_iter()), &mut trace).unwrap();

        assert_eq!(trace.hint, Some(Some(3)));
        assert_eq!(trace.items, vec![1, 2, 3]);
        assert!(trace.ended);
    }

    #[test]
    fn test_unknown_length_has_no_hint() {
        let mut trace = Trace::default();
        let source = (1..10).filter(|n| n % 2 == 0);
        Stage::<Infallible>::copy_into(Head::new(source), &mut trace).unwrap();

        assert_eq!(trace.hint, Some(None));
        assert_eq!(trace.items, vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_cancellation_stops_pulling() {
        let mut pulls = 0;
        let source = (1..).inspect(|_| pulls += 1);
        let mut trace = Trace {
            want: Some(2),
            ..Trace::default()
        };
        Stage::<Infallible>::copy_into(Head::new(source), &mut trace).unwrap();

        assert_eq!(trace.items, vec![1, 2]);
        assert!(trace.ended);
        assert_eq!(pulls, 2);
    }

    #[test]
    fn test_sink_wanting_nothing_pulls_nothing() {
        let mut pulls = 0;
        let source = (1..).inspect(|_| pulls += 1);
        let mut trace = Trace {
            want: Some(0),
            ..Trace::default()
        };
        Stage::<Infallible>::copy_into(Head::new(source), &mut trace).unwrap();

        assert!(trace.items.is_empty());
        assert_eq!(pulls, 0);
    }

    #[test]
    fn test_try_head_stops_at_first_error() {
        let source = vec![Ok(1), Err("broken"), Ok(3)].into_iter();
        let mut trace = Trace::default();
        let result = TryHead::new(source).copy_into(&mut trace);

        assert_eq!(result, Err(PipelineError::Callback("broken")));
        assert_eq!(trace.items, vec![1]);
        assert!(!trace.ended);
    }
}
