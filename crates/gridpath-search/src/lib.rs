//! A* route planning on tile boards.
//!
//! [`Planner::search`] finds a route between two cells of a
//! [`Board`](gridpath_core::Board) using A* with the Manhattan heuristic and
//! four-way unit-cost movement, and records what it did on the board itself:
//!
//! - every cell admitted to the frontier becomes `Closed`,
//! - the route (or, with [`PathMarking::Expanded`], every selected cell)
//!   becomes `Path`,
//! - optionally the endpoints are stamped `Start` and `Finish`.
//!
//! The building blocks are public so they can be driven step by step:
//!
//! | Item | Role |
//! |---|---|
//! | [`manhattan`] | heuristic |
//! | [`is_open`] | bounds-then-state validity check |
//! | [`expand`] / [`expand_into`] | orthogonal neighbors in up, left, down, right order |
//! | [`OpenList`] | frontier: `admit` + `select_best` |
//! | [`Planner`] | the search loop |

mod astar;
mod config;
mod distance;
mod error;
mod neighbors;
mod open;

pub use astar::{Outcome, Planner, Route, SearchStats, search};
pub use config::{PathMarking, SearchConfig};
pub use distance::manhattan;
pub use error::{Endpoint, EndpointProblem, SearchError};
pub use neighbors::{expand, expand_into, is_open};
pub use open::{Node, NodeId, OpenList};
