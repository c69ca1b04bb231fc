//! Collector trait definition.

use crate::error::DuplicateKey;

/// A three-phase accumulation strategy with an externally threaded accumulator.
///
/// A collector holds no state of its own. [`begin`](Collector::begin)
/// allocates a fresh accumulator, [`accept`](Collector::accept) folds one
/// item into it, and [`finish`](Collector::finish) turns it into the result.
/// Because the accumulator is passed in rather than hidden inside the
/// collector, one collector value can manage many accumulators at once; this
/// is what lets [`GroupingBy`](crate::collector::GroupingBy) keep a separate
/// downstream accumulator per key.
///
/// # Example
///
/// ```rust
/// use millrace::collector::Collector;
/// use millrace::DuplicateKey;
///
/// /// Collects the longest string.
/// struct Longest;
///
/// impl<'a> Collector<&'a str> for Longest {
///     type Acc = &'a str;
///     type Output = String;
///
///     fn begin(&self) -> &'a str {
///         ""
///     }
///
///     fn accept(&self, acc: &mut &'a str, item: &'a str) -> Result<(), DuplicateKey> {
///         if item.len() > acc.len() {
///             *acc = item;
///         }
///         Ok(())
///     }
///
///     fn finish(&self, acc: &'a str) -> String {
///         acc.to_string()
///     }
/// }
///
/// assert_eq!(Longest.collect_all(["a", "ccc", "bb"]), Ok("ccc".to_string()));
/// ```
pub trait Collector<T> {
    /// The mutable accumulation state.
    type Acc;
    /// The final result.
    type Output;

    /// Allocate a fresh accumulator.
    fn begin(&self) -> Self::Acc;

    /// Fold one item into `acc`.
    ///
    /// Only map-building collectors fail, when two items share a key and
    /// there is no merge function.
    fn accept(&self, acc: &mut Self::Acc, item: T) -> Result<(), DuplicateKey>;

    /// Turn the accumulator into the result.
    fn finish(&self, acc: Self::Acc) -> Self::Output;

    /// Run the collector over `items` without a pipeline.
    fn collect_all<I>(&self, items: I) -> Result<Self::Output, DuplicateKey>
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        let mut acc = self.begin();
        for item in items {
            self.accept(&mut acc, item)?;
        }
        Ok(self.finish(acc))
    }
}
