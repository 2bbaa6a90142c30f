//! Random obstacle placement for building test and demo boards.

use rand::{Rng, RngExt};

use crate::board::Board;
use crate::geom::Coord;
use crate::tile::TileState;

/// Board generator that scatters blocked tiles at random.
pub struct ObstacleGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> ObstacleGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Reset `board` to free tiles, then block each cell with probability
    /// `density` (clamped to 0.0–1.0). Cells listed in `keep_free` are never
    /// blocked.
    ///
    /// Returns the number of blocked cells.
    pub fn scatter(&mut self, board: &mut Board, density: f64, keep_free: &[Coord]) -> usize {
        let density = density.clamp(0.0, 1.0);
        board.fill(TileState::Free);
        for c in board.bounds().iter() {
            let r: f64 = self.rng.random();
            if r < density && !keep_free.contains(&c) {
                board.set(c, TileState::Blocked);
            }
        }
        board.count(TileState::Blocked)
    }

    /// Convenience: a fresh `rows × cols` board with obstacles scattered.
    pub fn board(&mut self, rows: i32, cols: i32, density: f64, keep_free: &[Coord]) -> Board {
        let mut board = Board::new(rows, cols);
        self.scatter(&mut board, density, keep_free);
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_density_leaves_board_free() {
        let mut g = ObstacleGen::new(StdRng::seed_from_u64(1));
        let b = g.board(6, 7, 0.0, &[]);
        assert_eq!(b.count(TileState::Free), 42);
    }

    #[test]
    fn full_density_blocks_all_but_kept() {
        let mut g = ObstacleGen::new(StdRng::seed_from_u64(2));
        let keep = [Coord::new(0, 0), Coord::new(3, 3)];
        let mut b = Board::new(4, 4);
        let blocked = g.scatter(&mut b, 1.5, &keep);
        assert_eq!(blocked, 14);
        assert_eq!(b.at(Coord::new(0, 0)), Some(TileState::Free));
        assert_eq!(b.at(Coord::new(3, 3)), Some(TileState::Free));
    }

    #[test]
    fn same_seed_same_board() {
        let a = ObstacleGen::new(StdRng::seed_from_u64(42)).board(10, 10, 0.3, &[]);
        let b = ObstacleGen::new(StdRng::seed_from_u64(42)).board(10, 10, 0.3, &[]);
        assert_eq!(a, b);
    }

    #[test]
    fn scatter_produces_mixed_board() {
        let mut g = ObstacleGen::new(rand::rng());
        let b = g.board(30, 30, 0.5, &[]);
        let blocked = b.count(TileState::Blocked);
        assert!(blocked > 0 && blocked < 900, "blocked={blocked}");
    }
}
