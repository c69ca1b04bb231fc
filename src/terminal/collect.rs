//! CollectOp - drive a Collector from the pipeline.

use crate::collector::Collector;
use crate::error::PipelineError;
use crate::sink::Sink;
use crate::terminal::TerminalOp;

/// Terminal operation threading a [`Collector`]'s accumulator through the pipeline.
///
/// `begin` asks the collector for a fresh accumulator, `accept` hands each
/// element to `collector.accept`, and the result is `collector.finish`.
/// Never requests cancellation.
///
/// # Example
///
/// ```rust
/// use millrace::collector::joining;
/// use millrace::terminal::CollectOp;
/// use millrace::Pipeline;
///
/// let mut pipeline = Pipeline::of(1..=5);
/// let joined = pipeline.evaluate(CollectOp::new(joining(" - ")));
/// assert_eq!(joined, Ok("1 - 2 - 3 - 4 - 5".to_string()));
/// ```
pub struct CollectOp<C, A> {
    collector: C,
    acc: Option<A>,
}

impl<C, A> CollectOp<C, A> {
    /// Create a collect operation around `collector`.
    pub fn new(collector: C) -> Self {
        Self {
            collector,
            acc: None,
        }
    }
}

impl<C: std::fmt::Debug, A> std::fmt::Debug for CollectOp<C, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectOp")
            .field("collector", &self.collector)
            .field("active", &self.acc.is_some())
            .finish()
    }
}

impl<T, E, C, A> Sink<T, E> for CollectOp<C, A>
where
    C: Collector<T, Acc = A>,
{
    fn begin(&mut self, _size_hint: Option<usize>) -> Result<(), PipelineError<E>> {
        self.acc = Some(self.collector.begin());
        Ok(())
    }

    fn accept(&mut self, item: T) -> Result<(), PipelineError<E>> {
        let acc = self.acc.get_or_insert_with(|| self.collector.begin());
        self.collector.accept(acc, item)?;
        Ok(())
    }
}

impl<T, E, C, A> TerminalOp<T, E> for CollectOp<C, A>
where
    C: Collector<T, Acc = A>,
{
    type Output = C::Output;

    fn into_output(self) -> C::Output {
        let acc = match self.acc {
            Some(acc) => acc,
            None => self.collector.begin(),
        };
        self.collector.finish(acc)
    }
}
