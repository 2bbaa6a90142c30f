use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::{Board, Coord, TileState};

/// A search-frontier record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub pos: Coord,
    /// Cost of the path from the start to `pos`.
    pub g: i32,
    /// Heuristic estimate from `pos` to the goal.
    pub h: i32,
}

impl Node {
    #[inline]
    pub const fn new(pos: Coord, g: i32, h: i32) -> Self {
        Self { pos, g, h }
    }

    /// Total estimated cost `g + h`.
    #[inline]
    pub const fn f(&self) -> i32 {
        self.g + self.h
    }
}

/// Handle to a node admitted into an [`OpenList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

// ---------------------------------------------------------------------------
// Heap entries
// ---------------------------------------------------------------------------

/// Reference into the node arena, ordered for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    f: i32,
    h: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, then
        // smallest h, then the earliest admitted.
        other
            .f
            .cmp(&self.f)
            .then(other.h.cmp(&self.h))
            .then(other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}(f={}, h={})", self.idx, self.f, self.h)
    }
}

// ---------------------------------------------------------------------------
// OpenList
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Slot {
    node: Node,
    parent: Option<NodeId>,
}

/// The frontier of a single search.
///
/// Every admitted node is kept in an arena for the lifetime of the list so
/// that routes can be walked back through parent links; the heap only holds
/// the nodes not yet selected. Arena indices double as the admission
/// sequence used to break ties.
#[derive(Debug, Default)]
pub struct OpenList {
    arena: Vec<Slot>,
    heap: BinaryHeap<NodeRef>,
}

impl OpenList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `node` onto the frontier and mark its tile `Closed`.
    ///
    /// Closing the tile at admission is what keeps a coordinate from ever
    /// being queued twice: a `Closed` tile is no longer open to expansion.
    pub fn admit(&mut self, node: Node, parent: Option<NodeId>, board: &mut Board) -> NodeId {
        let idx = self.arena.len();
        self.arena.push(Slot { node, parent });
        self.heap.push(NodeRef {
            idx,
            f: node.f(),
            h: node.h,
        });
        board.set(node.pos, TileState::Closed);
        log::trace!("admit {} g={} h={}", node.pos, node.g, node.h);
        NodeId(idx)
    }

    /// Remove and return the pending node with the smallest `f`.
    ///
    /// Ties go to the smaller `h`, then to the node admitted first.
    pub fn select_best(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|r| NodeId(r.idx))
    }

    /// The node behind `id`.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.arena[id.0].node
    }

    /// The node that admitted `id`, or `None` for the seed.
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id.0].parent
    }

    /// Coordinates from the seed to `id`, both inclusive.
    pub fn trace_back(&self, id: NodeId) -> Vec<Coord> {
        let mut cells = Vec::new();
        let mut cur = Some(id);
        while let Some(c) = cur {
            cells.push(self.node(c).pos);
            cur = self.parent(c);
        }
        cells.reverse();
        cells
    }

    /// Number of nodes still waiting to be selected.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of nodes ever admitted.
    #[inline]
    pub fn admitted(&self) -> usize {
        self.arena.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admit_all(open: &mut OpenList, board: &mut Board, nodes: &[Node]) -> Vec<NodeId> {
        nodes.iter().map(|&n| open.admit(n, None, board)).collect()
    }

    #[test]
    fn admit_closes_tile() {
        let mut board = Board::new(2, 2);
        let mut open = OpenList::new();
        open.admit(Node::new(Coord::new(1, 0), 0, 3), None, &mut board);
        assert_eq!(board.at(Coord::new(1, 0)), Some(TileState::Closed));
        assert_eq!(board.count(TileState::Closed), 1);
        assert_eq!(open.len(), 1);
        assert_eq!(open.admitted(), 1);
    }

    #[test]
    fn select_best_pops_lowest_f() {
        let mut board = Board::new(1, 4);
        let mut open = OpenList::new();
        let ids = admit_all(
            &mut open,
            &mut board,
            &[
                Node::new(Coord::new(0, 0), 3, 4),
                Node::new(Coord::new(0, 1), 1, 1),
                Node::new(Coord::new(0, 2), 2, 3),
                Node::new(Coord::new(0, 3), 0, 9),
            ],
        );
        let order: Vec<_> = std::iter::from_fn(|| open.select_best()).collect();
        assert_eq!(order, vec![ids[1], ids[2], ids[0], ids[3]]);
        assert!(open.is_empty());
        // Selection never forgets admitted nodes.
        assert_eq!(open.admitted(), 4);
        assert_eq!(open.node(ids[3]).f(), 9);
    }

    #[test]
    fn ties_prefer_smaller_h_then_earlier_admission() {
        let mut board = Board::new(1, 4);
        let mut open = OpenList::new();
        let ids = admit_all(
            &mut open,
            &mut board,
            &[
                Node::new(Coord::new(0, 0), 2, 4),
                Node::new(Coord::new(0, 1), 4, 2),
                Node::new(Coord::new(0, 2), 3, 3),
                Node::new(Coord::new(0, 3), 4, 2),
            ],
        );
        let order: Vec<_> = std::iter::from_fn(|| open.select_best()).collect();
        assert_eq!(order, vec![ids[1], ids[3], ids[2], ids[0]]);
    }

    #[test]
    fn trace_back_follows_parents() {
        let mut board = Board::new(1, 3);
        let mut open = OpenList::new();
        let a = open.admit(Node::new(Coord::new(0, 0), 0, 2), None, &mut board);
        let b = open.admit(Node::new(Coord::new(0, 1), 1, 1), Some(a), &mut board);
        let c = open.admit(Node::new(Coord::new(0, 2), 2, 0), Some(b), &mut board);
        assert_eq!(open.parent(a), None);
        assert_eq!(
            open.trace_back(c),
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
        );
    }
}
