//! The [`Board`] type — a rectangular grid of [`TileState`]s.
//!
//! A `Board` owns its cells in a single row-major buffer. Searches borrow it
//! mutably for the duration of one call and write their markings into it.

use std::fmt;

use crate::geom::{Coord, Range};
use crate::tile::TileState;

/// A rectangular, row-major grid of tiles.
///
/// With the `serde` feature a board is (de)serialized as a list of rows and
/// goes through [`Board::from_rows`] on the way in, so a deserialized board
/// is always rectangular.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BoardRows", into = "BoardRows")
)]
pub struct Board {
    cells: Vec<TileState>,
    bounds: Range,
}

impl Board {
    /// Create a board of `rows × cols` free tiles.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Range::with_size(rows, cols);
        Self {
            cells: vec![TileState::Free; bounds.len()],
            bounds,
        }
    }

    /// Build a board from a sequence of rows.
    ///
    /// Zero rows gives an empty board. Rows of differing length, or rows that
    /// are all empty, are rejected.
    pub fn from_rows(rows: Vec<Vec<TileState>>) -> Result<Self, BoardError> {
        let Some(first) = rows.first() else {
            return Ok(Self::default());
        };
        let width = first.len();
        if width == 0 {
            return Err(BoardError::ZeroWidth);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(BoardError::Ragged {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            bounds: Range::with_size(rows.len() as i32, width as i32),
            cells,
        })
    }

    /// Split the board back into owned rows.
    pub fn into_rows(self) -> Vec<Vec<TileState>> {
        if self.is_empty() {
            return Vec::new();
        }
        self.cells
            .chunks(self.cols() as usize)
            .map(<[TileState]>::to_vec)
            .collect()
    }

    /// The bounding range of the board.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Whether the board has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Whether `c` lies on the board.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if !self.bounds.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols() as usize + c.col as usize)
    }

    /// The tile at `c`, or `None` when `c` is off the board.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<TileState> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Set the tile at `c`. Returns `false` (and does nothing) when `c` is
    /// off the board.
    pub fn set(&mut self, c: Coord, tile: TileState) -> bool {
        match self.index(c) {
            Some(i) => {
                self.cells[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Fill every cell with `tile`.
    pub fn fill(&mut self, tile: TileState) {
        self.cells.fill(tile);
    }

    /// Iterator over the rows as slices, top to bottom.
    pub fn row_slices(&self) -> impl Iterator<Item = &[TileState]> {
        // `chunks` rejects a zero chunk size; an empty board has no cells anyway.
        self.cells.chunks(self.cols().max(1) as usize)
    }

    /// Number of tiles equal to `tile`.
    pub fn count(&self, tile: TileState) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }

    /// Row-major iterator over `(Coord, TileState)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, TileState)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

/// Serialized form of a [`Board`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
struct BoardRows(Vec<Vec<TileState>>);

#[cfg(feature = "serde")]
impl From<Board> for BoardRows {
    fn from(b: Board) -> Self {
        Self(b.into_rows())
    }
}

#[cfg(feature = "serde")]
impl TryFrom<BoardRows> for Board {
    type Error = BoardError;

    fn try_from(rows: BoardRows) -> Result<Self, Self::Error> {
        Board::from_rows(rows.0)
    }
}

/// Renders one row per line, glyphs separated by a single space.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_slices() {
            for (i, t) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{t}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Errors that can occur when building a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A row's length differs from the first row's. `row` is 0-based.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Same as `Ragged`, for board text. `line` is the 1-based source line.
    RaggedLine {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// Rows were given but none of them has any cell.
    ZeroWidth,
    /// A board text cell is not an integer. `line` and `column` are 1-based.
    InvalidToken {
        line: usize,
        column: usize,
        token: String,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "board: row {row} has {found} cells, expected {expected}"
            ),
            Self::RaggedLine {
                line,
                expected,
                found,
            } => write!(
                f,
                "board: line {line} has {found} cells, expected {expected}"
            ),
            Self::ZeroWidth => write!(f, "board: rows have no cells"),
            Self::InvalidToken {
                line,
                column,
                token,
            } => write!(
                f,
                "board: invalid cell \u{201c}{token}\u{201d} at line {line}, cell {column}"
            ),
        }
    }
}

impl std::error::Error for BoardError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_round_trip() {
        let mut b = Board::new(2, 3);
        b.set(Coord::new(1, 1), TileState::Blocked);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"[["Free","Free","Free"],["Free","Blocked","Free"]]"#);
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }

    #[test]
    fn ragged_rows_are_rejected_on_load() {
        let res = serde_json::from_str::<Board>(r#"[["Free","Free"],["Free"]]"#);
        let err = res.unwrap_err().to_string();
        assert!(err.contains("row 1 has 1 cells, expected 2"), "{err}");
    }

    #[test]
    fn struct_form_with_short_cells_is_rejected() {
        let json = concat!(
            r#"{"cells":["Free"],"#,
            r#""bounds":{"min":{"row":0,"col":0},"max":{"row":3,"col":3}}}"#
        );
        assert!(serde_json::from_str::<Board>(json).is_err());
    }

    #[test]
    fn empty_list_is_empty_board() {
        let b: Board = serde_json::from_str("[]").unwrap();
        assert!(b.is_empty());
    }
}
