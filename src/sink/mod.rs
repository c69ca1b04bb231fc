//! The push-consumer protocol and the sinks behind each intermediate operation.
//!
//! A pipeline is declared front to back (`filter`, then `map`, ...) but
//! evaluated back to front: the terminal operation is a [`Sink`], and every
//! stage wraps the sink built so far with its own operation sink. The result
//! is a single nested sink whose outermost layer is the first operation and
//! whose innermost layer is the terminal operation.
//!
//! ```text
//! source ─▶ FilterSink ─▶ MapSink ─▶ SliceSink ─▶ terminal
//! ```
//!
//! # Operation sinks
//!
//! | Sink | Buffers | Cancellation |
//! |------|---------|--------------|
//! | filter, map, flat map, peek | nothing | downstream's |
//! | distinct | set of seen values | downstream's |
//! | sort | every element | never while buffering |
//! | slice | an offset counter | once the slice is full |
//!
//! The operation sinks are internal: they are created by the pipeline's
//! stages at evaluation time and borrow their downstream for that
//! evaluation only.

mod distinct;
mod filter;
mod flat_map;
mod map;
mod peek;
mod slice;
mod sort;
mod trait_def;

// Re-export core trait
pub use trait_def::Sink;

pub(crate) use distinct::DistinctSink;
pub(crate) use filter::FilterSink;
pub(crate) use flat_map::FlatMapSink;
pub(crate) use map::MapSink;
pub(crate) use peek::PeekSink;
pub(crate) use slice::SliceSink;
pub(crate) use sort::SortSink;
