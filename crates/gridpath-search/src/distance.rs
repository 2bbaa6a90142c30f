use gridpath_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// This is the search heuristic: with unit-cost orthogonal steps it never
/// overestimates the remaining cost.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (b.row - a.row).abs() + (b.col - a.col).abs()
}
