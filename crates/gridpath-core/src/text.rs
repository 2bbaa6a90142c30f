//! Plain-text board format.
//!
//! One row per line. Cells are integers separated by commas and/or
//! whitespace; a trailing separator is fine. `0` is a free tile, any other
//! integer a blocked one. Lines with no cells are skipped.
//!
//! ```text
//! 0,1,0,0,0,0,
//! 0,1,0,0,0,0,
//! 0,0,0,0,1,0,
//! ```

use std::str::FromStr;

use crate::board::{Board, BoardError};
use crate::tile::TileState;

/// Parse a board from its text form.
pub fn parse_board(text: &str) -> Result<Board, BoardError> {
    let mut rows = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let row = parse_line(line, lineno + 1)?;
        if row.is_empty() {
            continue;
        }
        if let Some(first) = rows.first().map(Vec::len) {
            if row.len() != first {
                return Err(BoardError::RaggedLine {
                    line: lineno + 1,
                    expected: first,
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }
    Board::from_rows(rows)
}

fn parse_line(line: &str, lineno: usize) -> Result<Vec<TileState>, BoardError> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .enumerate()
        .map(|(i, tok)| {
            tok.parse::<i64>()
                .map(TileState::from_value)
                .map_err(|_| BoardError::InvalidToken {
                    line: lineno,
                    column: i + 1,
                    token: tok.to_string(),
                })
        })
        .collect()
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Coord;

    const SAMPLE: &str = "\
0,1,0,0,0,0,
0,1,0,0,0,0,
0,1,0,0,0,0,
0,1,0,0,0,0,
0,0,0,0,1,0,
";

    #[test]
    fn parses_comma_separated_rows() {
        let b: Board = SAMPLE.parse().unwrap();
        assert_eq!(b.rows(), 5);
        assert_eq!(b.cols(), 6);
        assert_eq!(b.at(Coord::new(0, 1)), Some(TileState::Blocked));
        assert_eq!(b.at(Coord::new(4, 1)), Some(TileState::Free));
        assert_eq!(b.at(Coord::new(4, 4)), Some(TileState::Blocked));
        assert_eq!(b.count(TileState::Blocked), 5);
    }

    #[test]
    fn accepts_whitespace_and_blank_lines() {
        let b = parse_board("\n0 0 2\n\n 3, 0 0 \n").unwrap();
        assert_eq!(b.rows(), 2);
        assert_eq!(b.cols(), 3);
        assert_eq!(b.at(Coord::new(0, 2)), Some(TileState::Blocked));
        assert_eq!(b.at(Coord::new(1, 0)), Some(TileState::Blocked));
    }

    #[test]
    fn empty_text_is_empty_board() {
        let b = parse_board("").unwrap();
        assert!(b.is_empty());
        assert!(parse_board(",,\n   \n").unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_token_with_position() {
        let err = parse_board("0,0\n0,x\n").unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidToken {
                line: 2,
                column: 2,
                token: "x".into()
            }
        );
    }

    #[test]
    fn rejects_ragged_text() {
        let err = parse_board("0,0,0\n0,0\n").unwrap_err();
        assert!(matches!(err, BoardError::RaggedLine { line: 2, expected: 3, found: 2 }));
    }

    #[test]
    fn ragged_error_counts_blank_lines() {
        let err = parse_board("\n0,0,0\n\n\n0,0\n").unwrap_err();
        assert_eq!(
            err,
            BoardError::RaggedLine {
                line: 5,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(err.to_string(), "board: line 5 has 2 cells, expected 3");
    }

    #[test]
    fn render_then_parse_keeps_obstacles() {
        let b: Board = SAMPLE.parse().unwrap();
        let text = b.to_string().replace('X', "1");
        let back: Board = text.parse().unwrap();
        assert_eq!(back, b);
    }
}
