//! ToVec collector.

use crate::collector::Collector;
use crate::error::DuplicateKey;

/// Collects items into a `Vec` in arrival order.
///
/// Created by [`to_vec`](crate::collector::to_vec).
#[derive(Debug, Clone, Copy, Default)]
pub struct ToVec;

impl<T> Collector<T> for ToVec {
    type Acc = Vec<T>;
    type Output = Vec<T>;

    fn begin(&self) -> Vec<T> {
        Vec::new()
    }

    fn accept(&self, acc: &mut Vec<T>, item: T) -> Result<(), DuplicateKey> {
        acc.push(item);
        Ok(())
    }

    fn finish(&self, acc: Vec<T>) -> Vec<T> {
        acc
    }
}
