//! Source positions and ranges attached to statement nodes.

use std::fmt;

/// A line/column position in the analyzed source file.
///
/// Ordering is lexicographic: first by line, then by column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    /// Line number as reported by the CFG producer (1-based by convention)
    pub line: usize,
    /// Column number as reported by the CFG producer (1-based by convention)
    pub column: usize,
}

impl SourceLocation {
    /// Creates a new location.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// An inclusive range of source text covered by a statement node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceRange {
    /// First position covered by the node
    pub start: SourceLocation,
    /// Last position covered by the node
    pub end: SourceLocation,
}

impl SourceRange {
    /// Creates a range from two locations.
    #[must_use]
    pub const fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Self { start, end }
    }

    /// Creates a range from raw line/column coordinates.
    #[must_use]
    pub const fn from_coords(
        start_line: usize,
        start_column: usize,
        end_line: usize,
        end_column: usize,
    ) -> Self {
        Self {
            start: SourceLocation::new(start_line, start_column),
            end: SourceLocation::new(end_line, end_column),
        }
    }

    /// Returns `true` if the position lies within the range, bounds included.
    ///
    /// Positions are compared as (line, column) pairs, so a range spanning several
    /// lines covers every column of its inner lines.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdgslice::cfg::SourceRange;
    ///
    /// let range = SourceRange::from_coords(2, 10, 4, 3);
    /// assert!(range.contains(3, 1));
    /// assert!(range.contains(2, 10));
    /// assert!(!range.contains(2, 9));
    /// assert!(!range.contains(4, 4));
    /// ```
    #[must_use]
    pub fn contains(&self, line: usize, column: usize) -> bool {
        let position = SourceLocation::new(line, column);
        self.start <= position && position <= self.end
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
