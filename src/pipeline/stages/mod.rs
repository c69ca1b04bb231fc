//! Intermediate stage types, one per operation.

mod distinct;
mod filter;
mod flat_map;
mod map;
mod peek;
mod slice;
mod sorted;

pub use distinct::Distinct;
pub use filter::Filter;
pub use flat_map::FlatMap;
pub use map::Map;
pub use peek::Peek;
pub use slice::Slice;
pub use sorted::Sorted;
