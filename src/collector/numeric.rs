//! Summing and Averaging collectors.

use std::ops::Add;

use num_traits::{ToPrimitive, Zero};

use crate::collector::Collector;
use crate::error::DuplicateKey;

/// Adds the items together; the sum of nothing is zero.
///
/// Created by [`summing`](crate::collector::summing).
#[derive(Debug, Clone, Copy, Default)]
pub struct Summing;

impl<T> Collector<T> for Summing
where
    T: Zero + Add<Output = T>,
{
    type Acc = T;
    type Output = T;

    fn begin(&self) -> T {
        T::zero()
    }

    fn accept(&self, acc: &mut T, item: T) -> Result<(), DuplicateKey> {
        let total = std::mem::replace(acc, T::zero());
        *acc = total + item;
        Ok(())
    }

    fn finish(&self, acc: T) -> T {
        acc
    }
}

/// Arithmetic mean of the items as `f64`; the average of nothing is `0.0`.
///
/// Values with no `f64` representation count as `NaN`.
///
/// Created by [`averaging`](crate::collector::averaging).
#[derive(Debug, Clone, Copy, Default)]
pub struct Averaging;

impl<T> Collector<T> for Averaging
where
    T: ToPrimitive,
{
    type Acc = (f64, usize);
    type Output = f64;

    fn begin(&self) -> (f64, usize) {
        (0.0, 0)
    }

    fn accept(&self, acc: &mut (f64, usize), item: T) -> Result<(), DuplicateKey> {
        acc.0 += item.to_f64().unwrap_or(f64::NAN);
        acc.1 += 1;
        Ok(())
    }

    fn finish(&self, (total, count): (f64, usize)) -> f64 {
        if count == 0 {
            0.0
        } else {
            total / count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summing() {
        assert_eq!(Summing.collect_all(vec![1, 2, 3]), Ok(6));
        assert_eq!(Summing.collect_all(Vec::<i64>::new()), Ok(0));
        assert_eq!(Summing.collect_all(vec![0.5, 0.25]), Ok(0.75));
    }

    #[test]
    fn test_averaging() {
        assert_eq!(Averaging.collect_all(vec![1, 2, 3, 4]), Ok(2.5));
        assert_eq!(Averaging.collect_all(vec![10u8]), Ok(10.0));
    }

    #[test]
    fn test_average_of_nothing_is_zero() {
        assert_eq!(Averaging.collect_all(Vec::<i32>::new()), Ok(0.0));
    }
}
