//! # Millrace
//!
//! Lazy, single-pass stream pipelines.
//!
//! A [`Pipeline`] is declared as a chain of operations (filter, map,
//! flat-map, distinct, sort, slice, peek) over a source that can be read
//! once. Nothing runs while the chain is being built. A terminal operation
//! (for-each, reduce, collect, match, find) evaluates it exactly once: the
//! stages wrap the terminal in a chain of [`Sink`]s and the source is pushed
//! through them one element at a time, stopping as soon as a sink needs no
//! more.
//!
//! ## Quick Example
//!
//! ```rust
//! use millrace::collector::{grouping_by_with, joining};
//! use millrace::Pipeline;
//!
//! let first_squares = Pipeline::of(1..)
//!     .map(|n: u64| n * n)
//!     .filter(|n| n % 2 == 1)
//!     .limit(4)
//!     .to_vec()
//!     .unwrap();
//! assert_eq!(first_squares, vec![1, 9, 25, 49]);
//!
//! let by_length = Pipeline::of(vec!["kiwi", "fig", "pear", "yam", "plum"])
//!     .sorted()
//!     .collect(grouping_by_with(|w: &&str| w.len(), joining("+")))
//!     .unwrap();
//! assert_eq!(by_length[&3], "fig+yam");
//! assert_eq!(by_length[&4], "kiwi+pear+plum");
//! ```
//!
//! ## Features
//!
//! - `tracing`: debug and warn events from evaluation.
//! - `serde`: [`Pipeline::from_value`] over a `serde_json::Value`.
//! - `proptest`: strategies in [`testing`] for property tests.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod collector;
pub mod error;
pub mod pipeline;
pub mod sink;
pub mod terminal;
pub mod testing;
#[cfg(feature = "serde")]
pub mod value;

// Re-exports
pub use collector::Collector;
pub use error::{DuplicateKey, PipelineError};
pub use pipeline::{Head, Pipeline, Stage};
pub use sink::Sink;
pub use terminal::TerminalOp;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::collector::{self, Collector};
    pub use crate::error::{DuplicateKey, PipelineError};
    pub use crate::pipeline::{Pipeline, Stage};
    pub use crate::sink::Sink;
    pub use crate::terminal::TerminalOp;
}
