//! # Overview
//!
//! This crate solves the problem of finding the set of routes that can
//! be run by a railway's trains to yield the highest possible revenue.
//!
//! The pipeline has three stages:
//!
//! 1. [RouteGraph::for_railway] derives a multigraph from the board and
//!    one railway's station placements. Nodes are settlement slots and
//!    the junctions on hex edges; edges carry the hex they traverse.
//! 2. [candidate_routes] enumerates every legal walk that starts and
//!    ends at a settlement and includes one of the railway's home
//!    stations, subject to the range cap, subtour and U-turn rules, and
//!    blocking cities.
//! 3. [best_assignment] pairs candidate routes with trains, maximising
//!    total revenue under per-train range limits and edge-disjointness
//!    between trains.
//!
//! ```no_run
//! use r18catalogue::{Phase, Train};
//! use r18map::Board;
//! use r18route::{best_assignment, candidate_routes, max_range, RouteGraph};
//!
//! fn best_revenue(
//!     board: &Board,
//!     railway_id: &str,
//!     trains: &[Train],
//!     phase: &Phase,
//! ) -> usize {
//!     let graph = RouteGraph::for_railway(board, railway_id);
//!     let routes =
//!         candidate_routes(&graph, board, railway_id, max_range(trains));
//!     best_assignment(trains, &routes, board, phase).value
//! }
//! ```

pub mod assign;

pub mod comb;

pub mod graph;

pub mod route;

pub mod search;

#[doc(inline)]
pub use assign::{best_assignment, Solution, TrainRun};

#[doc(inline)]
pub use graph::{Edge, Node, RouteGraph};

#[doc(inline)]
pub use route::Route;

#[doc(inline)]
pub use search::{
    candidate_routes, candidate_routes_cancellable, max_range, CancelToken,
    DIESEL_RANGE,
};

pub use r18hex::error::{Error, Result};
