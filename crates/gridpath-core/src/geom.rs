//! Geometry primitives: [`Coord`] and [`Range`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downward and columns grow
//! rightward, matching the row-major layout of a [`Board`](crate::Board).

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A cell coordinate on a board: `row` first, then `col`.
///
/// Components are signed so that neighbor offsets may step outside the board;
/// whether a coordinate is on the board is decided by [`Range::contains`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// One step up (towards row 0).
    pub const UP: Self = Self { row: -1, col: 0 };
    /// One step left (towards column 0).
    pub const LEFT: Self = Self { row: 0, col: -1 };
    /// One step down.
    pub const DOWN: Self = Self { row: 1, col: 0 };
    /// One step right.
    pub const RIGHT: Self = Self { row: 0, col: 1 };

    /// The four orthogonal unit offsets in enumeration order:
    /// up, left, down, right.
    pub const CARDINALS: [Self; 4] = [Self::UP, Self::LEFT, Self::DOWN, Self::RIGHT];

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four orthogonal neighbours, in [`CARDINALS`](Self::CARDINALS) order.
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        Self::CARDINALS.map(|d| self + d)
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
///
/// All empty ranges are considered equal.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Coord,
    pub max: Coord,
}

impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        (self.min == other.min && self.max == other.max) || (self.is_empty() && other.is_empty())
    }
}

impl Eq for Range {}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(row0: i32, col0: i32, row1: i32, col1: i32) -> Self {
        Self {
            min: Coord::new(row0.min(row1), col0.min(col1)),
            max: Coord::new(row0.max(row1), col0.max(col1)),
        }
    }

    /// Range covering `rows × cols` cells starting at the origin.
    #[inline]
    pub fn with_size(rows: i32, cols: i32) -> Self {
        Self::new(0, 0, rows.max(0), cols.max(0))
    }

    /// Number of rows.
    #[inline]
    pub fn rows(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns.
    #[inline]
    pub fn cols(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows() as usize) * (self.cols() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `c` is inside the half-open range.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row >= self.min.row
            && c.row < self.max.row
            && c.col >= self.min.col
            && c.col < self.max.col
    }

    /// Row-major iterator over every coordinate in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Coord,
}

impl Iterator for RangeIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.cur.row >= self.range.max.row || self.range.is_empty() {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.range.max.col {
            self.cur.col = self.range.min.col;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.row >= self.range.max.row {
            return (0, Some(0));
        }
        let w = self.range.cols() as usize;
        let remaining_in_row = (self.range.max.col - self.cur.col) as usize;
        let remaining_rows = (self.range.max.row - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(1, 2);
        let b = Coord::new(3, 4);
        assert_eq!(a + b, Coord::new(4, 6));
        assert_eq!(b - a, Coord::new(2, 2));
    }

    #[test]
    fn coord_order_is_row_major() {
        let mut cs = vec![Coord::new(1, 0), Coord::new(0, 3), Coord::new(0, 1)];
        cs.sort();
        assert_eq!(cs, vec![Coord::new(0, 1), Coord::new(0, 3), Coord::new(1, 0)]);
    }

    #[test]
    fn neighbors_4_order() {
        let n = Coord::new(2, 2).neighbors_4();
        assert_eq!(
            n,
            [
                Coord::new(1, 2),
                Coord::new(2, 1),
                Coord::new(3, 2),
                Coord::new(2, 3),
            ]
        );
    }

    #[test]
    fn coord_display() {
        assert_eq!(Coord::new(4, -1).to_string(), "(4, -1)");
    }

    #[test]
    fn coord_hash_distinguishes_axes() {
        let set: HashSet<Coord> = [Coord::new(1, 2), Coord::new(2, 1)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn range_basics() {
        let r = Range::with_size(2, 3);
        assert_eq!(r.rows(), 2);
        assert_eq!(r.cols(), 3);
        assert_eq!(r.len(), 6);
        assert!(r.contains(Coord::new(0, 0)));
        assert!(r.contains(Coord::new(1, 2)));
        assert!(!r.contains(Coord::new(2, 0)));
        assert!(!r.contains(Coord::new(0, 3)));
        assert!(!r.contains(Coord::new(-1, 0)));
        assert!(!r.contains(Coord::new(0, -1)));
    }

    #[test]
    fn range_auto_canonicalize() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r.min, Coord::new(0, 0));
        assert_eq!(r.max, Coord::new(3, 2));
    }

    #[test]
    fn range_iter_row_major() {
        let r = Range::with_size(2, 3);
        let cs: Vec<_> = r.iter().collect();
        assert_eq!(cs.len(), 6);
        assert_eq!(cs[0], Coord::new(0, 0));
        assert_eq!(cs[2], Coord::new(0, 2));
        assert_eq!(cs[3], Coord::new(1, 0));
        assert_eq!(cs[5], Coord::new(1, 2));
        assert_eq!(r.iter().len(), 6);
    }

    #[test]
    fn empty_ranges_are_equal() {
        let a = Range::with_size(0, 5);
        let b = Range::with_size(3, 0);
        assert!(a.is_empty());
        assert!(b.is_empty());
        assert_eq!(a, b);
        assert_eq!(a.iter().count(), 0);
        assert_eq!(a.len(), 0);
    }
}
