//! Error types for the seek-first crate.

use thiserror::Error;

/// Reasons a search window cannot be scanned.
///
/// The non-failing entry points ([`get_first`](crate::get_first),
/// [`Search::first`](crate::Search::first)) fold every one of these into
/// "not found". They surface only through [`check_range`](crate::check_range),
/// [`SearchRange::resolve`](crate::SearchRange::resolve) and
/// [`Search::try_first`](crate::Search::try_first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The sequence has no elements.
    #[error("cannot search an empty sequence")]
    EmptySequence,

    /// The lower bound of the window is negative.
    #[error("lower bound {index} is negative")]
    StartOutOfBounds { index: isize, len: usize },

    /// The lower bound is greater than the upper bound.
    #[error("lower bound {low} is greater than upper bound {high}")]
    Inverted { low: isize, high: isize },

    /// The upper bound of the window is at or past the end of the sequence.
    #[error("upper bound {index} is out of bounds for length {len}")]
    EndOutOfBounds { index: isize, len: usize },
}

/// Result type for seek-first operations.
pub type Result<T> = std::result::Result<T, RangeError>;
