//! Counting collector.

use crate::collector::Collector;
use crate::error::DuplicateKey;

/// Counts the items.
///
/// Created by [`counting`](crate::collector::counting).
#[derive(Debug, Clone, Copy, Default)]
pub struct Counting;

impl<T> Collector<T> for Counting {
    type Acc = usize;
    type Output = usize;

    fn begin(&self) -> usize {
        0
    }

    fn accept(&self, acc: &mut usize, _item: T) -> Result<(), DuplicateKey> {
        *acc += 1;
        Ok(())
    }

    fn finish(&self, acc: usize) -> usize {
        acc
    }
}
