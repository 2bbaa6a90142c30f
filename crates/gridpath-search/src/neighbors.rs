use gridpath_core::{Board, Coord};

use crate::distance::manhattan;
use crate::open::Node;

/// Whether `c` is on the board and its tile is `Free`.
///
/// Bounds are checked before the tile is looked at.
#[inline]
pub fn is_open(c: Coord, board: &Board) -> bool {
    board.contains(c) && board.at(c).is_some_and(|t| t.is_free())
}

/// Append the open orthogonal neighbors of `current` to `buf`, in the order
/// up, left, down, right. The caller clears `buf` before calling.
///
/// Each neighbor costs one step more than `current` and is scored against
/// `goal`. The board is only read.
pub fn expand_into(current: &Node, board: &Board, goal: Coord, buf: &mut Vec<Node>) {
    for c in current.pos.neighbors_4() {
        if is_open(c, board) {
            buf.push(Node::new(c, current.g + 1, manhattan(c, goal)));
        }
    }
}

/// Allocating form of [`expand_into`].
pub fn expand(current: &Node, board: &Board, goal: Coord) -> Vec<Node> {
    let mut buf = Vec::with_capacity(4);
    expand_into(current, board, goal, &mut buf);
    buf
}
