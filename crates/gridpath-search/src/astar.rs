use gridpath_core::{Board, Coord, TileState};

use crate::config::{PathMarking, SearchConfig};
use crate::distance::manhattan;
use crate::error::{Endpoint, EndpointProblem, SearchError};
use crate::neighbors::expand_into;
use crate::open::{Node, NodeId, OpenList};

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes admitted to the open list, the seed included.
    pub admitted: usize,
    /// Nodes selected and expanded. The goal node is selected but not
    /// expanded, so `start == goal` gives zero.
    pub expanded: usize,
}

/// A route found by the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Cells from start to goal, both inclusive.
    pub cells: Vec<Coord>,
    /// Number of steps, i.e. `g` of the goal node.
    pub cost: i32,
    pub stats: SearchStats,
}

/// Result of a search that ran.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Found(Route),
    /// The open list ran dry before the goal was reached.
    NoPath(SearchStats),
}

impl Outcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The route, if one was found.
    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::Found(r) => Some(r),
            Self::NoPath(_) => None,
        }
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            Self::Found(r) => r.stats,
            Self::NoPath(s) => *s,
        }
    }
}

/// A* planner over a [`Board`].
///
/// The planner holds only its configuration: every call builds its own open
/// list and drops it on return, so calls are independent of each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct Planner {
    config: SearchConfig,
}

impl Planner {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Search for a route from `start` to `goal`, marking the board in place.
    ///
    /// On an empty board this returns [`Outcome::NoPath`] without looking at
    /// the endpoints. Otherwise both endpoints must be on the board and not
    /// blocked; they are checked before anything is written.
    ///
    /// Every admitted cell becomes `Closed`. With [`PathMarking::Route`] the
    /// route cells then go to `Path`; with [`PathMarking::Expanded`] each
    /// selected cell goes to `Path` when it is selected. A cell is admitted
    /// at most once and is never reconsidered, even if a cheaper way to it
    /// turns up later.
    pub fn search(
        &self,
        board: &mut Board,
        start: Coord,
        goal: Coord,
    ) -> Result<Outcome, SearchError> {
        if board.is_empty() {
            log::debug!("astar: empty board, no path");
            return Ok(Outcome::NoPath(SearchStats::default()));
        }
        check_endpoint(board, start, Endpoint::Start)?;
        check_endpoint(board, goal, Endpoint::Goal)?;
        log::debug!(
            "astar: {}x{} board, {start} -> {goal}",
            board.rows(),
            board.cols()
        );

        let mut open = OpenList::new();
        let mut stats = SearchStats::default();
        let mut nbuf = Vec::with_capacity(4);

        open.admit(Node::new(start, 0, manhattan(start, goal)), None, board);

        while let Some(id) = open.select_best() {
            let current = *open.node(id);
            log::trace!(
                "select {} g={} h={} f={}",
                current.pos,
                current.g,
                current.h,
                current.f()
            );
            if self.config.marking == PathMarking::Expanded {
                board.set(current.pos, TileState::Path);
            }

            if current.pos == goal {
                stats.admitted = open.admitted();
                let route = self.finish(board, &open, id, start, goal, stats);
                log::debug!(
                    "astar: found route of cost {} ({} admitted, {} expanded)",
                    route.cost,
                    stats.admitted,
                    stats.expanded
                );
                return Ok(Outcome::Found(route));
            }

            stats.expanded += 1;
            nbuf.clear();
            expand_into(&current, board, goal, &mut nbuf);
            for &n in nbuf.iter() {
                open.admit(n, Some(id), board);
            }
        }

        stats.admitted = open.admitted();
        log::debug!(
            "astar: no path ({} admitted, {} expanded)",
            stats.admitted,
            stats.expanded
        );
        Ok(Outcome::NoPath(stats))
    }

    /// Like [`search`](Self::search), but over raw rows.
    ///
    /// The rows are validated into a [`Board`] first (ragged rows are an
    /// [`SearchError::InvalidGrid`]) and handed back, marked, with the
    /// outcome.
    pub fn plan_rows(
        &self,
        rows: Vec<Vec<TileState>>,
        start: Coord,
        goal: Coord,
    ) -> Result<(Vec<Vec<TileState>>, Outcome), SearchError> {
        let mut board = Board::from_rows(rows)?;
        let outcome = self.search(&mut board, start, goal)?;
        Ok((board.into_rows(), outcome))
    }

    fn finish(
        &self,
        board: &mut Board,
        open: &OpenList,
        goal_id: NodeId,
        start: Coord,
        goal: Coord,
        stats: SearchStats,
    ) -> Route {
        let cells = open.trace_back(goal_id);
        if self.config.marking == PathMarking::Route {
            for &c in &cells {
                board.set(c, TileState::Path);
            }
        }
        if self.config.stamp_endpoints {
            board.set(start, TileState::Start);
            board.set(goal, TileState::Finish);
        }
        Route {
            cost: open.node(goal_id).g,
            cells,
            stats,
        }
    }
}

/// Search with the default [`SearchConfig`].
pub fn search(board: &mut Board, start: Coord, goal: Coord) -> Result<Outcome, SearchError> {
    Planner::default().search(board, start, goal)
}

fn check_endpoint(board: &Board, pos: Coord, endpoint: Endpoint) -> Result<(), SearchError> {
    let problem = match board.at(pos) {
        None => EndpointProblem::OutOfBounds,
        Some(TileState::Blocked) => EndpointProblem::Blocked,
        Some(_) => return Ok(()),
    };
    Err(SearchError::InvalidEndpoint {
        endpoint,
        pos,
        problem,
    })
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let mut board = Board::new(2, 2);
        let outcome = search(&mut board, Coord::new(0, 0), Coord::new(1, 1)).unwrap();
        let json = serde_json::to_string(&outcome).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }
}
