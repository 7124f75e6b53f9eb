use std::fmt::Debug;

/// Errors returned by an [`IntervalTree`](crate::IntervalTree) or an
/// [`IntervalIndex`](crate::IntervalIndex).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error<R>
where
    R: Debug,
{
    /// A query was issued against an index that holds no tree.
    #[error("interval index is not initialised")]
    NotInitialized,

    /// A range query was issued with `start > end`.
    #[error("invalid query range: start {start:?} is greater than end {end:?}")]
    InvalidRange { start: R, end: R },

    /// An interval with `start > end` (or incomparable bounds) was offered
    /// for insertion.
    #[error("invalid interval [{start:?}, {end:?}]: start must not exceed end")]
    InvalidInterval { start: R, end: R },
}
