use std::fmt;

use gridpath_core::{BoardError, Coord};

/// Which end of the search an [`SearchError::InvalidEndpoint`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Why an endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointProblem {
    OutOfBounds,
    Blocked,
}

/// Errors that stop a search before it starts.
///
/// Not finding a path is not an error; see [`Outcome::NoPath`](crate::Outcome::NoPath).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The input rows do not form a rectangular board.
    InvalidGrid(BoardError),
    /// The start or goal is off the board or on a blocked tile.
    InvalidEndpoint {
        endpoint: Endpoint,
        pos: Coord,
        problem: EndpointProblem,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid(e) => write!(f, "invalid grid: {e}"),
            Self::InvalidEndpoint {
                endpoint,
                pos,
                problem: EndpointProblem::OutOfBounds,
            } => write!(f, "{endpoint} {pos} is outside the board"),
            Self::InvalidEndpoint {
                endpoint,
                pos,
                problem: EndpointProblem::Blocked,
            } => write!(f, "{endpoint} {pos} is on a blocked tile"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGrid(e) => Some(e),
            Self::InvalidEndpoint { .. } => None,
        }
    }
}

impl From<BoardError> for SearchError {
    fn from(e: BoardError) -> Self {
        Self::InvalidGrid(e)
    }
}
