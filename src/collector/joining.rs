//! Joining collector.

use std::fmt::Display;

use crate::collector::Collector;
use crate::error::DuplicateKey;

/// Renders each item with `Display` and joins them with a delimiter.
///
/// The default delimiter is `","`.
///
/// Created by [`joining`](crate::collector::joining).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joining {
    delimiter: String,
}

impl Joining {
    pub(crate) fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }
}

impl Default for Joining {
    fn default() -> Self {
        Self::new(",")
    }
}

impl<T: Display> Collector<T> for Joining {
    type Acc = Vec<String>;
    type Output = String;

    fn begin(&self) -> Vec<String> {
        Vec::new()
    }

    fn accept(&self, acc: &mut Vec<String>, item: T) -> Result<(), DuplicateKey> {
        acc.push(item.to_string());
        Ok(())
    }

    fn finish(&self, acc: Vec<String>) -> String {
        acc.join(&self.delimiter)
    }
}
