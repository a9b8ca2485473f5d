//! Enumerate the legal routes for one railway.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use log::info;

use r18catalogue::Train;
use r18map::Board;

use crate::graph::{Edge, RouteGraph};
use crate::route::Route;

/// The walk cap used for diesel trains in place of a range.
pub const DIESEL_RANGE: usize = 30;

/// Requests cancellation of an in-progress enumeration.
///
/// The search checks the token between frontier expansions; on
/// cancellation all partial output is discarded.
#[derive(Debug, Default)]
pub struct CancelToken {
    flag: AtomicBool,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Returns the largest walk cap needed by any of the given trains.
pub fn max_range(trains: &[Train]) -> usize {
    trains
        .iter()
        .map(|train| {
            if train.diesel {
                DIESEL_RANGE
            } else {
                train.range.unwrap_or(0)
            }
        })
        .max()
        .unwrap_or(0)
}

/// Enumerates every candidate route for one railway: walks that start
/// and end at a settlement, include a home station, stop at no more than
/// `max_range` settlements, repeat no node, and never double back
/// through a hex at a junction.
pub fn candidate_routes(
    graph: &RouteGraph,
    board: &Board,
    railway_id: &str,
    max_range: usize,
) -> Vec<Route> {
    candidate_routes_cancellable(
        graph,
        board,
        railway_id,
        max_range,
        &CancelToken::new(),
    )
    .unwrap_or_default()
}

/// As [candidate_routes], returning `None` if the token is cancelled
/// while the search is running.
pub fn candidate_routes_cancellable(
    graph: &RouteGraph,
    board: &Board,
    railway_id: &str,
    max_range: usize,
    cancel: &CancelToken,
) -> Option<Vec<Route>> {
    let rooted = home_rooted_walks(graph, board, railway_id, max_range, cancel)?;
    info!("Found {} walks rooted at home stations", rooted.len());
    let candidates = merge_at_homes(&rooted, max_range);
    info!(
        "Found {} candidate routes after merging at home stations",
        candidates.len()
    );
    Some(candidates)
}

/// Explores the graph outwards from every home station, collecting each
/// partial walk that ends at a settlement.
fn home_rooted_walks(
    graph: &RouteGraph,
    board: &Board,
    railway_id: &str,
    max_range: usize,
    cancel: &CancelToken,
) -> Option<Vec<Route>> {
    let mut frontier: Vec<(Route, Edge)> = vec![];
    for &home in graph.homes() {
        for &edge in graph.incident_to(home) {
            frontier.push((Route::start_at(home), edge));
        }
    }
    let mut walks: HashSet<Route> =
        frontier.iter().map(|(walk, _)| walk.clone()).collect();

    while let Some((walk, edge)) = frontier.pop() {
        if cancel.is_cancelled() {
            return None;
        }
        let node = edge.other(walk.last());
        if walk.contains_node(node) || walk.num_cities() >= max_range {
            continue;
        }
        let extended = walk.add_stop(edge, node);
        let blocked = graph
            .settlement(board, node)
            .map(|settlement| settlement.is_blocking_for(railway_id))
            .unwrap_or(false);
        if !blocked {
            for &next in graph.incident_to(node) {
                if !extended.turns_back(next) {
                    frontier.push((extended.clone(), next));
                }
            }
        }
        walks.insert(extended);
    }

    Some(
        walks
            .into_iter()
            .filter(|walk| walk.last().is_city())
            .collect(),
    )
}

/// Joins pairs of walks that share a first node, producing the routes
/// that pass *through* a home station rather than ending at one.
///
/// Because the seed walks include each bare home node, every multi-stop
/// walk re-emerges from merging with its own seed; the output is exactly
/// the candidate set, and the trivial single-settlement seeds are never
/// candidates themselves.
fn merge_at_homes(rooted: &[Route], max_range: usize) -> Vec<Route> {
    let mut merged: HashSet<Route> = HashSet::new();
    for (ix, first) in rooted.iter().enumerate() {
        for second in rooted.iter().skip(ix + 1) {
            if first.first() != second.first() {
                continue;
            }
            let through = Route::merge(first, second);
            if through.num_cities() <= max_range && !through.has_subtour() {
                merged.insert(through);
            }
        }
    }
    merged.into_iter().collect()
}
