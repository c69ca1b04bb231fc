//! The pipeline builder and its evaluation entry points.
//!
//! A [`Pipeline`] is a chain of stages over a single-pass source. Building a
//! pipeline is pure bookkeeping: each builder call wraps the current stage
//! in a new one and returns a new `Pipeline`. Nothing is pulled from the
//! source and no callback runs until a terminal operation evaluates the
//! chain.
//!
//! # Example
//!
//! ```rust
//! use millrace::Pipeline;
//!
//! let evens: Vec<i32> = Pipeline::of(1..=10)
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * 10)
//!     .limit(3)
//!     .to_vec()
//!     .unwrap();
//!
//! assert_eq!(evens, vec![20, 40, 60]);
//! ```
//!
//! # Fallible callbacks
//!
//! Every callback-taking builder has a `try_` twin whose callback returns
//! `Result<_, E>`. The first `Err` aborts evaluation and comes back as
//! [`PipelineError::Callback`]. Pick `E` on the head with
//! [`with_error`](Pipeline::with_error), or start from a fallible source
//! with [`try_wrap`](Pipeline::try_wrap).
//!
//! ```rust
//! use millrace::{Pipeline, PipelineError};
//!
//! let result = Pipeline::of(vec![4, 2, 0, 1])
//!     .with_error::<String>()
//!     .try_map(|n| {
//!         if n == 0 {
//!             Err("division by zero".to_string())
//!         } else {
//!             Ok(8 / n)
//!         }
//!     })
//!     .to_vec();
//!
//! assert_eq!(result, Err(PipelineError::Callback("division by zero".to_string())));
//! ```

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::Add;

use num_traits::{ToPrimitive, Zero};

use crate::collector::{self, Collector};
use crate::error::PipelineError;
use crate::terminal::{CollectOp, FindOp, ForEachOp, MatchKind, MatchOp, ReduceOp, TerminalOp};

mod head;
mod stage;
mod stages;

pub use head::{Head, TryHead};
pub use stage::Stage;
pub use stages::{Distinct, Filter, FlatMap, Map, Peek, Slice, Sorted};

/// A lazily evaluated chain of operations over a single-pass source.
///
/// `S` is the last stage of the chain and `E` the error type of its
/// callbacks. A pipeline can be evaluated once: the terminal convenience
/// methods consume it, and [`evaluate`](Pipeline::evaluate) moves the
/// chain out so any later attempt fails with
/// [`PipelineError::AlreadyConsumed`].
pub struct Pipeline<S, E = Infallible> {
    stage: Option<S>,
    _error: PhantomData<fn() -> E>,
}

impl<S: fmt::Debug, E> fmt::Debug for Pipeline<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stage", &self.stage)
            .field("consumed", &self.stage.is_none())
            .finish()
    }
}

impl<I: Iterator> Pipeline<Head<I>> {
    /// Start a pipeline over any collection or iterable.
    ///
    /// ```rust
    /// use millrace::Pipeline;
    ///
    /// assert_eq!(Pipeline::of(["a", "b"]).count(), Ok(2));
    /// ```
    pub fn of<V>(values: V) -> Self
    where
        V: IntoIterator<IntoIter = I>,
    {
        Self::wrap(values.into_iter())
    }

    /// Start a pipeline over an iterator.
    pub fn wrap(source: I) -> Self {
        Pipeline::from_stage(Head::new(source))
    }

    /// Fix the error type of the pipeline's fallible callbacks.
    ///
    /// A pipeline starts out with [`Infallible`] callbacks. Choose `E` here,
    /// before the first `try_` builder.
    pub fn with_error<E>(self) -> Pipeline<Head<I>, E> {
        Pipeline {
            stage: self.stage,
            _error: PhantomData,
        }
    }
}

impl<I, T, E> Pipeline<TryHead<I>, E>
where
    I: Iterator<Item = Result<T, E>>,
{
    /// Start a pipeline over an iterator of `Result`s.
    ///
    /// The first `Err` pulled from the source aborts evaluation with
    /// [`PipelineError::Callback`].
    ///
    /// ```rust
    /// use millrace::{Pipeline, PipelineError};
    ///
    /// let lines = vec![Ok("a"), Err("read failed"), Ok("c")];
    /// let result = Pipeline::try_wrap(lines.into_iter()).to_vec();
    /// assert_eq!(result, Err(PipelineError::Callback("read failed")));
    /// ```
    pub fn try_wrap(source: I) -> Self {
        Pipeline::from_stage(TryHead::new(source))
    }
}

impl<S, E> Pipeline<S, E> {
    fn from_stage(stage: S) -> Self {
        Pipeline {
            stage: Some(stage),
            _error: PhantomData,
        }
    }

    fn then<S2>(self, next: impl FnOnce(S) -> S2) -> Pipeline<S2, E> {
        Pipeline {
            stage: self.stage.map(next),
            _error: PhantomData,
        }
    }

    /// Returns true once the pipeline's source has been handed to an
    /// evaluation.
    pub fn is_consumed(&self) -> bool {
        self.stage.is_none()
    }
}

// Intermediate operations
impl<S, E> Pipeline<S, E>
where
    S: Stage<E>,
{
    /// Keep only the elements for which `predicate` returns true.
    pub fn filter<P>(
        self,
        mut predicate: P,
    ) -> Pipeline<Filter<S, impl FnMut(&S::Out) -> Result<bool, E>>, E>
    where
        P: FnMut(&S::Out) -> bool,
    {
        self.try_filter(move |item: &S::Out| -> Result<bool, E> { Ok(predicate(item)) })
    }

    /// Like [`filter`](Pipeline::filter) with a fallible predicate.
    pub fn try_filter<P>(self, predicate: P) -> Pipeline<Filter<S, P>, E>
    where
        P: FnMut(&S::Out) -> Result<bool, E>,
    {
        self.then(|previous| Filter {
            previous,
            predicate,
        })
    }

    /// Transform every element.
    pub fn map<U, F>(self, mut mapper: F) -> Pipeline<Map<S, impl FnMut(S::Out) -> Result<U, E>>, E>
    where
        F: FnMut(S::Out) -> U,
    {
        self.try_map(move |item: S::Out| -> Result<U, E> { Ok(mapper(item)) })
    }

    /// Like [`map`](Pipeline::map) with a fallible mapper.
    pub fn try_map<U, F>(self, mapper: F) -> Pipeline<Map<S, F>, E>
    where
        F: FnMut(S::Out) -> Result<U, E>,
    {
        self.then(|previous| Map { previous, mapper })
    }

    /// Replace every element with the elements of the iterable `mapper`
    /// returns for it.
    ///
    /// An empty iterable, such as `None` or an empty `Vec`, emits nothing.
    ///
    /// ```rust
    /// use millrace::Pipeline;
    ///
    /// let parsed = Pipeline::of(vec!["1", "x", "3"])
    ///     .flat_map(|s| s.parse::<i32>().ok())
    ///     .to_vec();
    /// assert_eq!(parsed, Ok(vec![1, 3]));
    /// ```
    pub fn flat_map<I, F>(
        self,
        mut mapper: F,
    ) -> Pipeline<FlatMap<S, impl FnMut(S::Out) -> Result<I, E>>, E>
    where
        F: FnMut(S::Out) -> I,
        I: IntoIterator,
    {
        self.try_flat_map(move |item: S::Out| -> Result<I, E> { Ok(mapper(item)) })
    }

    /// Like [`flat_map`](Pipeline::flat_map) with a fallible mapper.
    pub fn try_flat_map<I, F>(self, mapper: F) -> Pipeline<FlatMap<S, F>, E>
    where
        F: FnMut(S::Out) -> Result<I, E>,
        I: IntoIterator,
    {
        self.then(|previous| FlatMap { previous, mapper })
    }

    /// Call `action` on every element as it passes, leaving it unchanged.
    pub fn peek<F>(self, mut action: F) -> Pipeline<Peek<S, impl FnMut(&S::Out) -> Result<(), E>>, E>
    where
        F: FnMut(&S::Out),
    {
        self.try_peek(move |item: &S::Out| -> Result<(), E> {
            action(item);
            Ok(())
        })
    }

    /// Like [`peek`](Pipeline::peek) with a fallible action.
    pub fn try_peek<F>(self, action: F) -> Pipeline<Peek<S, F>, E>
    where
        F: FnMut(&S::Out) -> Result<(), E>,
    {
        self.then(|previous| Peek { previous, action })
    }

    /// Drop elements equal to one already emitted; the first occurrence wins.
    pub fn distinct(self) -> Pipeline<Distinct<S>, E>
    where
        S::Out: Eq + Hash + Clone,
    {
        self.then(|previous| Distinct { previous })
    }

    /// Sort elements in their natural order.
    ///
    /// Sorting buffers the whole upstream before emitting anything, so a
    /// `limit` placed after it does not stop the source early.
    pub fn sorted(
        self,
    ) -> Pipeline<Sorted<S, impl FnMut(&S::Out, &S::Out) -> Result<Ordering, E>>, E>
    where
        S::Out: Ord,
    {
        self.try_sorted_by(|a: &S::Out, b: &S::Out| -> Result<Ordering, E> { Ok(a.cmp(b)) })
    }

    /// Sort elements with `comparator`. The sort is stable.
    pub fn sorted_by<C>(
        self,
        mut comparator: C,
    ) -> Pipeline<Sorted<S, impl FnMut(&S::Out, &S::Out) -> Result<Ordering, E>>, E>
    where
        C: FnMut(&S::Out, &S::Out) -> Ordering,
    {
        self.try_sorted_by(move |a: &S::Out, b: &S::Out| -> Result<Ordering, E> {
            Ok(comparator(a, b))
        })
    }

    /// Sort elements by the key `key` derives from them.
    ///
    /// ```rust
    /// use millrace::Pipeline;
    ///
    /// let words = Pipeline::of(vec!["ccc", "a", "bb"])
    ///     .sorted_by_key(|w| w.len())
    ///     .to_vec();
    /// assert_eq!(words, Ok(vec!["a", "bb", "ccc"]));
    /// ```
    pub fn sorted_by_key<K, F>(
        self,
        mut key: F,
    ) -> Pipeline<Sorted<S, impl FnMut(&S::Out, &S::Out) -> Result<Ordering, E>>, E>
    where
        F: FnMut(&S::Out) -> K,
        K: Ord,
    {
        self.try_sorted_by(move |a: &S::Out, b: &S::Out| -> Result<Ordering, E> {
            Ok(key(a).cmp(&key(b)))
        })
    }

    /// Like [`sorted_by`](Pipeline::sorted_by) with a fallible comparator.
    ///
    /// Collector callbacks cannot fail, so [`collect`](Pipeline::collect)
    /// has no `try_` form. Fallible orderings for a single element go
    /// through [`try_min_by`](Pipeline::try_min_by) and
    /// [`try_max_by`](Pipeline::try_max_by) instead.
    pub fn try_sorted_by<C>(self, comparator: C) -> Pipeline<Sorted<S, C>, E>
    where
        C: FnMut(&S::Out, &S::Out) -> Result<Ordering, E>,
    {
        self.then(|previous| Sorted {
            previous,
            comparator,
        })
    }

    /// Emit at most `max` elements, then stop pulling from the source.
    pub fn limit(self, max: usize) -> Pipeline<Slice<S>, E> {
        self.slice(0, Some(max))
    }

    /// Drop the first `count` elements.
    pub fn skip(self, count: usize) -> Pipeline<Slice<S>, E> {
        self.slice(count, None)
    }

    /// Drop the first `skip` elements and emit at most `limit` after them.
    ///
    /// ```rust
    /// use millrace::Pipeline;
    ///
    /// assert_eq!(Pipeline::of(1..).slice(2, Some(3)).to_vec(), Ok(vec![3, 4, 5]));
    /// ```
    pub fn slice(self, skip: usize, limit: Option<usize>) -> Pipeline<Slice<S>, E> {
        self.then(|previous| Slice {
            previous,
            skip,
            limit,
        })
    }
}

// Evaluation
impl<S, E> Pipeline<S, E>
where
    S: Stage<E>,
{
    /// Evaluate the pipeline into a terminal operation.
    ///
    /// This is the one entry point every terminal method goes through. The
    /// stage chain is moved out of the pipeline, so a second call fails with
    /// [`PipelineError::AlreadyConsumed`] instead of re-reading the source.
    ///
    /// ```rust
    /// use millrace::terminal::ReduceOp;
    /// use millrace::{Pipeline, PipelineError};
    ///
    /// let mut pipeline = Pipeline::of(vec![2, 4, 8, 18, 32]);
    /// let total = pipeline.evaluate(ReduceOp::new(0, |acc: i32, n: i32| Ok(acc + n)));
    /// assert_eq!(total, Ok(64));
    ///
    /// let again = pipeline.evaluate(ReduceOp::new(0, |acc: i32, n: i32| Ok(acc + n)));
    /// assert_eq!(again, Err(PipelineError::AlreadyConsumed));
    /// ```
    pub fn evaluate<O>(&mut self, mut op: O) -> Result<O::Output, PipelineError<E>>
    where
        O: TerminalOp<S::Out, E>,
    {
        let Some(stage) = self.stage.take() else {
            #[cfg(feature = "tracing")]
            tracing::warn!("evaluation attempted on a consumed pipeline");
            return Err(PipelineError::AlreadyConsumed);
        };
        stage.copy_into(&mut op)?;
        Ok(op.into_output())
    }

    /// Run `action` on every element.
    pub fn for_each<F>(self, mut action: F) -> Result<(), PipelineError<E>>
    where
        F: FnMut(S::Out),
    {
        self.try_for_each(move |item: S::Out| -> Result<(), E> {
            action(item);
            Ok(())
        })
    }

    /// Run a fallible `action` on every element, stopping at the first error.
    pub fn try_for_each<F>(mut self, action: F) -> Result<(), PipelineError<E>>
    where
        F: FnMut(S::Out) -> Result<(), E>,
    {
        self.evaluate(ForEachOp::new(action))
    }

    /// Fold every element into `identity` with `accumulator(acc, item)`.
    ///
    /// With no elements the result is `identity`.
    pub fn reduce<R, F>(self, identity: R, mut accumulator: F) -> Result<R, PipelineError<E>>
    where
        R: Clone,
        F: FnMut(R, S::Out) -> R,
    {
        self.try_reduce(identity, move |acc: R, item: S::Out| -> Result<R, E> {
            Ok(accumulator(acc, item))
        })
    }

    /// Like [`reduce`](Pipeline::reduce) with a fallible accumulator.
    pub fn try_reduce<R, F>(mut self, identity: R, accumulator: F) -> Result<R, PipelineError<E>>
    where
        R: Clone,
        F: FnMut(R, S::Out) -> Result<R, E>,
    {
        self.evaluate(ReduceOp::new(identity, accumulator))
    }

    /// Run a [`Collector`] over every element.
    ///
    /// ```rust
    /// use millrace::collector::joining;
    /// use millrace::Pipeline;
    ///
    /// let csv = Pipeline::of(vec![3, 1, 2]).sorted().collect(joining(", "));
    /// assert_eq!(csv, Ok("1, 2, 3".to_string()));
    /// ```
    pub fn collect<C>(mut self, collector: C) -> Result<C::Output, PipelineError<E>>
    where
        C: Collector<S::Out>,
    {
        self.evaluate(CollectOp::<C, C::Acc>::new(collector))
    }

    /// Collect every element into a `Vec`.
    pub fn to_vec(self) -> Result<Vec<S::Out>, PipelineError<E>> {
        self.collect(collector::to_vec())
    }

    /// Count the elements.
    pub fn count(self) -> Result<usize, PipelineError<E>> {
        self.collect(collector::counting())
    }

    /// The smallest element, the earliest one on ties.
    pub fn min(self) -> Result<Option<S::Out>, PipelineError<E>>
    where
        S::Out: Ord,
    {
        self.collect(collector::min_by(<S::Out as Ord>::cmp))
    }

    /// The largest element, the earliest one on ties.
    pub fn max(self) -> Result<Option<S::Out>, PipelineError<E>>
    where
        S::Out: Ord,
    {
        self.collect(collector::max_by(<S::Out as Ord>::cmp))
    }

    /// The smallest element according to `comparator`.
    pub fn min_by<C>(self, comparator: C) -> Result<Option<S::Out>, PipelineError<E>>
    where
        C: Fn(&S::Out, &S::Out) -> Ordering,
    {
        self.collect(collector::min_by(comparator))
    }

    /// The largest element according to `comparator`.
    pub fn max_by<C>(self, comparator: C) -> Result<Option<S::Out>, PipelineError<E>>
    where
        C: Fn(&S::Out, &S::Out) -> Ordering,
    {
        self.collect(collector::max_by(comparator))
    }

    /// Like [`min_by`](Pipeline::min_by) with a fallible comparator.
    ///
    /// ```rust
    /// use millrace::{Pipeline, PipelineError};
    ///
    /// let shortest = Pipeline::of(vec!["ccc", "a", "bb"])
    ///     .with_error::<String>()
    ///     .try_min_by(|a, b| Ok(a.len().cmp(&b.len())));
    /// assert_eq!(shortest, Ok(Some("a")));
    ///
    /// let failed = Pipeline::of(vec![1, 2])
    ///     .with_error::<&str>()
    ///     .try_min_by(|_, _| Err("incomparable"));
    /// assert_eq!(failed, Err(PipelineError::Callback("incomparable")));
    /// ```
    pub fn try_min_by<C>(self, comparator: C) -> Result<Option<S::Out>, PipelineError<E>>
    where
        C: FnMut(&S::Out, &S::Out) -> Result<Ordering, E>,
    {
        self.try_extremum(comparator, Ordering::Less)
    }

    /// Like [`max_by`](Pipeline::max_by) with a fallible comparator.
    pub fn try_max_by<C>(self, comparator: C) -> Result<Option<S::Out>, PipelineError<E>>
    where
        C: FnMut(&S::Out, &S::Out) -> Result<Ordering, E>,
    {
        self.try_extremum(comparator, Ordering::Greater)
    }

    // Keeps the current best unless a later element compares as `replace_on`,
    // so ties go to the earliest element.
    fn try_extremum<C>(
        self,
        mut comparator: C,
        replace_on: Ordering,
    ) -> Result<Option<S::Out>, PipelineError<E>>
    where
        C: FnMut(&S::Out, &S::Out) -> Result<Ordering, E>,
    {
        let mut best: Option<S::Out> = None;
        self.try_for_each(|item| {
            best = match best.take() {
                Some(current) if comparator(&item, &current)? != replace_on => Some(current),
                _ => Some(item),
            };
            Ok(())
        })?;
        Ok(best)
    }

    /// Sum of the elements; zero when there are none.
    pub fn sum(self) -> Result<S::Out, PipelineError<E>>
    where
        S::Out: Zero + Add<Output = S::Out>,
    {
        self.collect(collector::summing())
    }

    /// Arithmetic mean of the elements; `0.0` when there are none.
    pub fn average(self) -> Result<f64, PipelineError<E>>
    where
        S::Out: ToPrimitive,
    {
        self.collect(collector::averaging())
    }

    /// True if any element satisfies `predicate`. Stops at the first match.
    pub fn any_match<P>(self, predicate: P) -> Result<bool, PipelineError<E>>
    where
        P: FnMut(&S::Out) -> bool,
    {
        self.matching(MatchKind::Any, predicate)
    }

    /// True if every element satisfies `predicate`, and for no elements.
    /// Stops at the first mismatch.
    pub fn all_match<P>(self, predicate: P) -> Result<bool, PipelineError<E>>
    where
        P: FnMut(&S::Out) -> bool,
    {
        self.matching(MatchKind::All, predicate)
    }

    /// True if no element satisfies `predicate`. Stops at the first match.
    pub fn none_match<P>(self, predicate: P) -> Result<bool, PipelineError<E>>
    where
        P: FnMut(&S::Out) -> bool,
    {
        self.matching(MatchKind::None, predicate)
    }

    fn matching<P>(mut self, kind: MatchKind, mut predicate: P) -> Result<bool, PipelineError<E>>
    where
        P: FnMut(&S::Out) -> bool,
    {
        let lifted = move |item: &S::Out| -> Result<bool, E> { Ok(predicate(item)) };
        self.evaluate(MatchOp::new(kind, lifted))
    }

    /// The first element, if any. Pulls no further.
    pub fn find_first(mut self) -> Result<Option<S::Out>, PipelineError<E>> {
        self.evaluate(FindOp::first())
    }

    /// The first element satisfying `predicate`, if any.
    pub fn find<P>(mut self, mut predicate: P) -> Result<Option<S::Out>, PipelineError<E>>
    where
        P: FnMut(&S::Out) -> bool,
    {
        let lifted = move |item: &S::Out| -> Result<bool, E> { Ok(predicate(item)) };
        self.evaluate(FindOp::matching(lifted))
    }
}
