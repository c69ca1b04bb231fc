//! Mapping collector.

use crate::collector::Collector;
use crate::error::DuplicateKey;

/// Transforms each item before handing it to a downstream collector.
///
/// `begin` and `finish` are the downstream's own.
///
/// Created by [`mapping`](crate::collector::mapping).
pub struct Mapping<F, D> {
    mapper: F,
    downstream: D,
}

impl<F, D> Mapping<F, D> {
    pub(crate) fn new(mapper: F, downstream: D) -> Self {
        Self { mapper, downstream }
    }
}

impl<F, D: std::fmt::Debug> std::fmt::Debug for Mapping<F, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapping")
            .field("mapper", &"<function>")
            .field("downstream", &self.downstream)
            .finish()
    }
}

impl<T, U, F, D> Collector<T> for Mapping<F, D>
where
    F: Fn(T) -> U,
    D: Collector<U>,
{
    type Acc = D::Acc;
    type Output = D::Output;

    fn begin(&self) -> D::Acc {
        self.downstream.begin()
    }

    fn accept(&self, acc: &mut D::Acc, item: T) -> Result<(), DuplicateKey> {
        self.downstream.accept(acc, (self.mapper)(item))
    }

    fn finish(&self, acc: D::Acc) -> D::Output {
        self.downstream.finish(acc)
    }
}
