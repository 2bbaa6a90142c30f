//! **gridpath-core** — board model for grid path planning.
//!
//! This crate provides the types shared across the *gridpath* workspace:
//! `(row, col)` geometry, the tile-state vocabulary, the rectangular
//! [`Board`], its plain-text format and a random obstacle generator.

pub mod board;
pub mod geom;
pub mod scatter;
pub mod text;
pub mod tile;

pub use board::{Board, BoardError};
pub use geom::{Coord, Range};
pub use scatter::ObstacleGen;
pub use text::parse_board;
pub use tile::TileState;
