//! Testing utilities and helpers for Millrace
//!
//! This module provides ergonomic utilities for testing code built on
//! pipelines: a source probe that counts how many elements were pulled,
//! assertion macros for the engine's error variants, and property-based
//! testing support.
//!
//! # Examples
//!
//! ## Source probe
//!
//! ```rust
//! use millrace::testing::probe;
//! use millrace::Pipeline;
//!
//! let (source, pulls) = probe(1..=1000);
//! let first = Pipeline::wrap(source).limit(5).to_vec().unwrap();
//!
//! assert_eq!(first, vec![1, 2, 3, 4, 5]);
//! assert!(pulls.get() <= 5);
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use millrace::collector::to_map;
//! use millrace::terminal::CollectOp;
//! use millrace::{assert_already_consumed, assert_duplicate_key, Pipeline};
//!
//! let mut pipeline = Pipeline::of(vec![1, 2]);
//! pipeline.evaluate(CollectOp::new(to_map(|n: &i32| *n, |n: i32| n))).unwrap();
//! assert_already_consumed!(pipeline.evaluate(CollectOp::new(to_map(|n: &i32| *n, |n: i32| n))));
//!
//! let result = Pipeline::of(vec![1, 3]).collect(to_map(|n: &i32| n % 2, |n: i32| n));
//! assert_duplicate_key!(result, "1");
//! ```

use std::cell::Cell;
use std::rc::Rc;

/// Shared count of the elements pulled through a [`Probe`].
#[derive(Debug, Clone, Default)]
pub struct PullCounter(Rc<Cell<usize>>);

impl PullCounter {
    /// Number of elements pulled so far.
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

/// Iterator adapter that counts every element pulled from it.
///
/// Created by [`probe`].
#[derive(Debug)]
pub struct Probe<I> {
    inner: I,
    pulls: PullCounter,
}

impl<I: Iterator> Iterator for Probe<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.inner.next()?;
        self.pulls.0.set(self.pulls.0.get() + 1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Wrap `values` in a counting source.
///
/// The returned counter keeps reporting after the probe itself has been
/// moved into a pipeline.
pub fn probe<V: IntoIterator>(values: V) -> (Probe<V::IntoIter>, PullCounter) {
    let pulls = PullCounter::default();
    let probe = Probe {
        inner: values.into_iter(),
        pulls: pulls.clone(),
    };
    (probe, pulls)
}

/// Assert that an evaluation was rejected because the pipeline was already
/// consumed.
///
/// # Example
///
/// ```rust
/// use millrace::{assert_already_consumed, PipelineError};
///
/// let result: Result<u32, PipelineError> = Err(PipelineError::AlreadyConsumed);
/// assert_already_consumed!(result);
/// ```
#[macro_export]
macro_rules! assert_already_consumed {
    ($result:expr) => {
        match $result {
            Err($crate::PipelineError::AlreadyConsumed) => {}
            other => {
                panic!("Expected AlreadyConsumed, got {:?}", other);
            }
        }
    };
}

/// Assert that an evaluation failed with a duplicate key, rendered as
/// `$key`.
///
/// # Example
///
/// ```rust
/// use millrace::{assert_duplicate_key, DuplicateKey, PipelineError};
///
/// let result: Result<(), PipelineError> = Err(DuplicateKey::new(&7).into());
/// assert_duplicate_key!(result, "7");
/// ```
#[macro_export]
macro_rules! assert_duplicate_key {
    ($result:expr, $key:expr) => {
        match $result {
            Err($crate::PipelineError::DuplicateKey { key }) => {
                assert_eq!(key, $key, "duplicate key mismatch");
            }
            other => {
                panic!("Expected DuplicateKey {:?}, got {:?}", $key, other);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Strategy producing pipelines over vectors of `element` with a length
/// drawn from `size`.
///
/// ```rust
/// use millrace::testing::arb_pipeline;
/// use proptest::prelude::*;
///
/// proptest!(|(pipeline in arb_pipeline(any::<u8>(), 0..16))| {
///     prop_assert!(pipeline.count().unwrap() < 16);
/// });
/// ```
#[cfg(feature = "proptest")]
pub fn arb_pipeline<S>(
    element: S,
    size: impl Into<proptest::collection::SizeRange>,
) -> impl Strategy<Value = crate::Pipeline<crate::Head<std::vec::IntoIter<S::Value>>>>
where
    S: Strategy,
{
    proptest::collection::vec(element, size).prop_map(crate::Pipeline::of)
}
