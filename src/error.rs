//! Error types for pipeline evaluation.
//!
//! Every terminal operation returns `Result<_, PipelineError<E>>`, where `E`
//! is the error type of the pipeline's fallible callbacks (and
//! [`Infallible`] when there are none).
//!
//! # Examples
//!
//! ```
//! use millrace::collector::counting;
//! use millrace::terminal::CollectOp;
//! use millrace::{Pipeline, PipelineError};
//!
//! let mut pipeline = Pipeline::of(vec![1, 2, 3]);
//! assert_eq!(pipeline.evaluate(CollectOp::new(counting())), Ok(3));
//! assert_eq!(
//!     pipeline.evaluate(CollectOp::new(counting())),
//!     Err(PipelineError::AlreadyConsumed)
//! );
//! ```

use std::convert::Infallible;
use std::fmt;

/// Error returned when a pipeline cannot produce its result.
///
/// The engine never swallows or retries a callback error: the first `Err`
/// returned by a predicate, mapper, comparator, action or fallible source
/// aborts evaluation and comes back as [`PipelineError::Callback`] holding the
/// original value.
///
/// # Examples
///
/// ```
/// use millrace::{Pipeline, PipelineError};
///
/// let result = Pipeline::of(vec!["1", "x", "3"])
///     .with_error::<std::num::ParseIntError>()
///     .try_map(|s| s.parse::<i32>())
///     .to_vec();
///
/// match result {
///     Err(PipelineError::Callback(err)) => assert!(err.to_string().contains("invalid digit")),
///     other => panic!("expected callback error, got {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError<E = Infallible> {
    /// The pipeline's source was already handed to an earlier evaluation.
    AlreadyConsumed,
    /// A construction helper was given a value that is not a sequence.
    InvalidSource {
        /// Description of what was supplied instead.
        found: String,
    },
    /// A map-building collector saw the same key twice and had no merge function.
    DuplicateKey {
        /// `Debug` rendering of the offending key.
        key: String,
    },
    /// A user callback or fallible source failed.
    Callback(E),
}

impl<E> PipelineError<E> {
    /// Returns true if this is [`PipelineError::AlreadyConsumed`].
    pub fn is_already_consumed(&self) -> bool {
        matches!(self, Self::AlreadyConsumed)
    }

    /// Returns true if this is [`PipelineError::DuplicateKey`].
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }

    /// Returns true if this error came from a user callback.
    pub fn is_callback(&self) -> bool {
        matches!(self, Self::Callback(_))
    }

    /// Get a reference to the callback error, if this is one.
    pub fn callback(&self) -> Option<&E> {
        match self {
            Self::Callback(e) => Some(e),
            _ => None,
        }
    }

    /// Extract the callback error, discarding the engine variants.
    pub fn into_callback(self) -> Option<E> {
        match self {
            Self::Callback(e) => Some(e),
            _ => None,
        }
    }

    /// Transform the callback error, leaving engine errors untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use millrace::PipelineError;
    ///
    /// let err: PipelineError<i32> = PipelineError::Callback(7);
    /// assert_eq!(err.map_callback(|n| n * 6), PipelineError::Callback(42));
    ///
    /// let err: PipelineError<i32> = PipelineError::AlreadyConsumed;
    /// assert_eq!(err.map_callback(|n| n * 6), PipelineError::AlreadyConsumed);
    /// ```
    pub fn map_callback<F, E2>(self, f: F) -> PipelineError<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::AlreadyConsumed => PipelineError::AlreadyConsumed,
            Self::InvalidSource { found } => PipelineError::InvalidSource { found },
            Self::DuplicateKey { key } => PipelineError::DuplicateKey { key },
            Self::Callback(e) => PipelineError::Callback(f(e)),
        }
    }
}

impl<E: fmt::Display> fmt::Display for PipelineError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyConsumed => write!(f, "pipeline source already consumed"),
            Self::InvalidSource { found } => {
                write!(f, "expected an array or sequence source, got {}", found)
            }
            Self::DuplicateKey { key } => write!(f, "duplicate key: {}", key),
            Self::Callback(e) => write!(f, "{}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for PipelineError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Callback(e) => Some(e),
            _ => None,
        }
    }
}

/// Collision reported by a map-building collector.
///
/// Collectors do not know the pipeline's callback error type, so they report
/// collisions through this type; it converts into
/// [`PipelineError::DuplicateKey`] with `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    key: String,
}

impl DuplicateKey {
    /// Record a collision on `key`, rendered with its `Debug` form.
    pub fn new<K: fmt::Debug + ?Sized>(key: &K) -> Self {
        Self {
            key: format!("{:?}", key),
        }
    }

    /// The offending key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate key: {}", self.key)
    }
}

impl std::error::Error for DuplicateKey {}

impl<E> From<DuplicateKey> for PipelineError<E> {
    fn from(err: DuplicateKey) -> Self {
        PipelineError::DuplicateKey { key: err.key }
    }
}
