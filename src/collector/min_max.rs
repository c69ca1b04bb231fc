//! MinBy / MaxBy collectors.

use std::cmp::Ordering;

use crate::collector::Collector;
use crate::error::DuplicateKey;

/// Keeps the smallest or largest item according to a comparator.
///
/// The first item is always kept; a later item replaces it only when the
/// comparator orders it strictly before (min) or after (max) the kept one,
/// so ties keep the earliest item. The result is `None` for no items.
///
/// Created by [`min_by`](crate::collector::min_by) and
/// [`max_by`](crate::collector::max_by).
pub struct Extremum<C> {
    comparator: C,
    replace_when: Ordering,
}

impl<C> Extremum<C> {
    pub(crate) fn min(comparator: C) -> Self {
        Self {
            comparator,
            replace_when: Ordering::Less,
        }
    }

    pub(crate) fn max(comparator: C) -> Self {
        Self {
            comparator,
            replace_when: Ordering::Greater,
        }
    }
}

impl<C> std::fmt::Debug for Extremum<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.replace_when {
            Ordering::Less => "min",
            _ => "max",
        };
        f.debug_struct("Extremum")
            .field("kind", &kind)
            .field("comparator", &"<function>")
            .finish()
    }
}

impl<T, C> Collector<T> for Extremum<C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Acc = Option<T>;
    type Output = Option<T>;

    fn begin(&self) -> Option<T> {
        None
    }

    fn accept(&self, acc: &mut Option<T>, item: T) -> Result<(), DuplicateKey> {
        match acc {
            Some(kept) => {
                if (self.comparator)(&item, kept) == self.replace_when {
                    *kept = item;
                }
            }
            None => *acc = Some(item),
        }
        Ok(())
    }

    fn finish(&self, acc: Option<T>) -> Option<T> {
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_len(a: &&str, b: &&str) -> Ordering {
        a.len().cmp(&b.len())
    }

    #[test]
    fn test_min_keeps_earliest_tie() {
        let min = Extremum::min(by_len);
        assert_eq!(min.collect_all(["bb", "a", "c", "ddd"]), Ok(Some("a")));
    }

    #[test]
    fn test_max_keeps_earliest_tie() {
        let max = Extremum::max(by_len);
        assert_eq!(max.collect_all(["bb", "ccc", "ddd"]), Ok(Some("ccc")));
    }

    #[test]
    fn test_empty_is_none() {
        let max = Extremum::max(|a: &i32, b: &i32| a.cmp(b));
        assert_eq!(max.collect_all(Vec::new()), Ok(None));
    }
}
