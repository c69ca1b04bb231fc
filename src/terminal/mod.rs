//! Terminal operations: the sinks that end a pipeline and produce its result.
//!
//! Each terminal operation is a [`Sink`](crate::Sink) with a small state
//! machine: fresh after construction, active after `begin`, finalized by
//! [`TerminalOp::into_output`]. Calling `begin` again resets it.
//!
//! | Operation | Result | Requests cancellation |
//! |-----------|--------|-----------------------|
//! | [`ForEachOp`] | `()` | never |
//! | [`ReduceOp`] | folded value | never |
//! | [`CollectOp`] | collector output | never |
//! | [`MatchOp`] | `bool` | once the answer is settled |
//! | [`FindOp`] | `Option<T>` | once an element is found |
//!
//! Most code never builds these directly; the terminal methods on
//! [`Pipeline`](crate::Pipeline) (`for_each`, `reduce`, `collect`,
//! `any_match`, `find_first`, ...) do it for you. They are public so that
//! [`Pipeline::evaluate`](crate::Pipeline::evaluate) can be driven with a
//! custom or pre-built operation.

mod collect;
mod find;
mod for_each;
mod matching;
mod reduce;
mod trait_def;

pub use trait_def::TerminalOp;

pub use collect::CollectOp;
pub use find::FindOp;
pub use for_each::ForEachOp;
pub use matching::{MatchKind, MatchOp};
pub use reduce::ReduceOp;
