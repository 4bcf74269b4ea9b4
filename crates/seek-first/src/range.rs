//! Search windows.
//!
//! A [`SearchRange`] is the caller's optional `(start, end)` pair. Resolving
//! it against a sequence length normalizes the defaults, checks the bounds
//! and yields a [`Window`]: where to begin, which way to walk, and how many
//! elements to visit.
//!
//! Windows are half-open and anchored at `start`. Walking from `start`
//! towards `end` visits exactly `|end - start|` elements, so the element at
//! `end` itself is never visited.

use serde::{Deserialize, Serialize};

use crate::error::{RangeError, Result};

/// Scan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Increasing indices.
    #[default]
    Forward,
    /// Decreasing indices.
    Backward,
}

impl Direction {
    /// Returns `true` if this is forward.
    pub fn is_forward(self) -> bool {
        matches!(self, Direction::Forward)
    }

    /// Returns `true` if this is backward.
    pub fn is_backward(self) -> bool {
        matches!(self, Direction::Backward)
    }

    /// Returns the index delta of one step in this direction.
    pub fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Optional start and end indices of a search.
///
/// Both ends are signed so callers can pass `-1` for "start at the last
/// element". Normalization, in order:
///
/// 1. `start` defaults to `0`.
/// 2. `end` defaults to `len - 1` when `start >= 0`, otherwise to `0`.
/// 3. A `start` of `-1` becomes `len - 1`.
///
/// Any other negative index leaves the range out of bounds.
///
/// ```
/// use seek_first::{Direction, SearchRange};
///
/// let window = SearchRange::from_end().resolve(4).unwrap();
/// assert_eq!(window.start(), 3);
/// assert_eq!(window.direction(), Direction::Backward);
/// assert_eq!(window.indices().collect::<Vec<_>>(), vec![3, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRange {
    /// First index visited.
    pub start: Option<isize>,
    /// Boundary the scan walks towards (never visited).
    pub end: Option<isize>,
}

impl SearchRange {
    /// Creates a range with both ends defaulted.
    pub fn new() -> Self {
        SearchRange::default()
    }

    /// Creates a range from explicit ends.
    pub fn between(start: isize, end: isize) -> Self {
        SearchRange {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Creates a range that starts at the last element and walks backward.
    pub fn from_end() -> Self {
        SearchRange::new().with_start(-1)
    }

    /// Sets the start index.
    pub fn with_start(mut self, start: isize) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the end index.
    pub fn with_end(mut self, end: isize) -> Self {
        self.end = Some(end);
        self
    }

    /// Applies the defaults and the `-1` rewrite for a sequence of `len`
    /// elements, returning `(start, end)`. No bounds are checked.
    pub fn normalize(&self, len: usize) -> (isize, isize) {
        let last = signed_len(len) - 1;
        let start = self.start.unwrap_or(0);
        // The end default looks at the raw start, before the -1 rewrite.
        let end = self.end.unwrap_or(if start >= 0 { last } else { 0 });
        let start = if start == -1 { last } else { start };
        (start, end)
    }

    /// Normalizes and bounds-checks this range for a sequence of `len`
    /// elements.
    pub fn resolve(&self, len: usize) -> Result<Window> {
        let (start, end) = self.normalize(len);
        check_range(len, start.min(end), start.max(end))?;

        let direction = if start <= end {
            Direction::Forward
        } else {
            Direction::Backward
        };

        Ok(Window {
            // Non-negative after the check above.
            start: start.unsigned_abs(),
            direction,
            count: start.abs_diff(end),
        })
    }
}

/// Checks that `[low, high]` lies inside a non-empty sequence of `len`
/// elements.
///
/// ```
/// use seek_first::{check_range, RangeError};
///
/// assert!(check_range(3, 0, 2).is_ok());
/// assert_eq!(
///     check_range(3, 5, 10),
///     Err(RangeError::EndOutOfBounds { index: 10, len: 3 })
/// );
/// ```
pub fn check_range(len: usize, low: isize, high: isize) -> Result<()> {
    if len == 0 {
        return Err(RangeError::EmptySequence);
    }
    if low < 0 {
        return Err(RangeError::StartOutOfBounds { index: low, len });
    }
    if low > high {
        return Err(RangeError::Inverted { low, high });
    }
    if high >= signed_len(len) {
        return Err(RangeError::EndOutOfBounds { index: high, len });
    }
    Ok(())
}

// Slices of zero-sized types can exceed isize::MAX elements.
fn signed_len(len: usize) -> isize {
    isize::try_from(len).unwrap_or(isize::MAX)
}

/// A validated scan plan: first index, direction and number of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    start: usize,
    direction: Direction,
    count: usize,
}

impl Window {
    /// The first index visited.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The scan direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of elements the scan visits.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the scan visits nothing.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` if the scan visits `index`.
    pub fn contains(&self, index: usize) -> bool {
        let offset = match self.direction {
            Direction::Forward => index.checked_sub(self.start),
            Direction::Backward => self.start.checked_sub(index),
        };
        offset.is_some_and(|offset| offset < self.count)
    }

    /// Iterates the visited indices in scan order.
    pub fn indices(&self) -> Indices {
        Indices {
            start: self.start,
            direction: self.direction,
            offset: 0,
            count: self.count,
        }
    }
}

/// Iterator over the indices of a [`Window`], in scan order.
#[derive(Debug, Clone)]
pub struct Indices {
    start: usize,
    direction: Direction,
    offset: usize,
    count: usize,
}

impl Iterator for Indices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.offset >= self.count {
            return None;
        }
        let index = match self.direction {
            Direction::Forward => self.start + self.offset,
            Direction::Backward => self.start - self.offset,
        };
        self.offset += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.offset;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Indices {}
