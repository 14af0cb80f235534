use serde::{Deserialize, Serialize};

/// A byte range `[start, end)` into the document.
///
/// Regions, decorations and visible ranges are all expressed as spans in the
/// coordinate space of the full document, never of the slice they were
/// parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// True if `pos` lies in `[start, end]`, both endpoints included.
    ///
    /// Hover hit-testing treats a caret sitting just after the closing
    /// bracket as still inside the region.
    #[must_use]
    pub fn contains_inclusive(self, pos: usize) -> bool {
        self.start <= pos && pos <= self.end
    }

    /// True if the two spans share at least one byte.
    #[must_use]
    pub fn overlaps(self, other: Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn range(self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(r: std::ops::Range<usize>) -> Self {
        Span {
            start: r.start,
            end: r.end,
        }
    }
}
