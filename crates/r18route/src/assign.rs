//! Pair candidate routes with trains to maximise total revenue.

use std::collections::BTreeSet;

use log::info;
use rayon::iter::{ParallelBridge, ParallelIterator};

use r18catalogue::{Phase, Train};
use r18map::Board;

use crate::comb::PrunedCombinations;
use crate::graph::{Edge, Node};
use crate::route::Route;

/// One train's share of a solution: the route it operates (if any) and
/// the revenue it earns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainRun {
    pub train: Train,
    pub route: Option<Route>,
    pub revenue: usize,
}

impl TrainRun {
    pub fn nodes(&self) -> BTreeSet<Node> {
        self.route
            .iter()
            .flat_map(|route| route.nodes().iter().copied())
            .collect()
    }

    pub fn edges(&self) -> BTreeSet<Edge> {
        self.route
            .iter()
            .flat_map(|route| route.edges().iter().copied())
            .collect()
    }

    pub fn cities(&self) -> BTreeSet<Node> {
        self.route.iter().flat_map(|route| route.cities()).collect()
    }
}

/// The best pairing found for one railway: a run per train (in the
/// railway's train order) and the total revenue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub value: usize,
    pub runs: Vec<TrainRun>,
}

impl Solution {
    fn unassigned(trains: &[Train]) -> Solution {
        Solution {
            value: 0,
            runs: trains
                .iter()
                .map(|train| TrainRun {
                    train: train.clone(),
                    route: None,
                    revenue: 0,
                })
                .collect(),
        }
    }
}

/// Chooses the subset of routes and the train for each chosen route
/// that maximise total revenue.
///
/// A pairing is feasible when every assigned train can run its route's
/// settlement count and no two assigned routes share an edge. Leaving a
/// train unassigned is always allowed; the all-unassigned pairing is the
/// zero-value baseline. Ties keep the first pairing enumerated.
pub fn best_assignment(
    trains: &[Train],
    routes: &[Route],
    board: &Board,
    phase: &Phase,
) -> Solution {
    if trains.is_empty() || routes.is_empty() {
        return Solution::unassigned(trains);
    }

    // Trains of the same type are interchangeable; the placement search
    // works with type classes to avoid permuting identical trains.
    let mut class_reps: Vec<&Train> = vec![];
    let class_of: Vec<usize> = trains
        .iter()
        .map(|train| {
            match class_reps.iter().position(|rep| rep.id == train.id) {
                Some(ix) => ix,
                None => {
                    class_reps.push(train);
                    class_reps.len() - 1
                }
            }
        })
        .collect();

    // Revenue per (route, train class); None when the train cannot run
    // the route.
    let revenue: Vec<Vec<Option<usize>>> = routes
        .iter()
        .map(|route| {
            class_reps
                .iter()
                .map(|train| {
                    train
                        .can_run(route.num_cities())
                        .then(|| route_revenue(route, board, train, phase))
                })
                .collect()
        })
        .collect();

    // Edge-disjointness per route pair, for pruning the combinations.
    let disjoint: Vec<Vec<bool>> = routes
        .iter()
        .map(|a| routes.iter().map(|b| !a.shares_edge(b)).collect())
        .collect();

    let k_max = trains.len().min(routes.len());
    info!(
        "Pairing {} trains with {} candidate routes",
        trains.len(),
        routes.len()
    );

    let best = PrunedCombinations::new(routes.len(), k_max, |a, b| {
        disjoint[a][b]
    })
    .enumerate()
    .par_bridge()
    .filter_map(|(seq, combo)| {
        best_placement(&combo, &class_of, &revenue)
            .map(|(value, slots)| (value, seq, slots))
    })
    .reduce_with(|best, next| {
        // Maximise the value; on ties keep the earliest enumerated.
        if next.0 > best.0 || (next.0 == best.0 && next.1 < best.1) {
            next
        } else {
            best
        }
    });

    let mut solution = Solution::unassigned(trains);
    if let Some((value, _seq, slots)) = best {
        if value > 0 {
            solution.value = value;
            for (train_ix, slot) in slots.iter().enumerate() {
                if let Some(route_ix) = slot {
                    let run = &mut solution.runs[train_ix];
                    run.route = Some(routes[*route_ix].clone());
                    run.revenue = revenue[*route_ix][class_of[train_ix]]
                        .unwrap_or(0);
                }
            }
        }
    }
    info!("Best pairing earns {}", solution.value);
    solution
}

/// The revenue a train earns from stopping at every settlement along a
/// route.
fn route_revenue(
    route: &Route,
    board: &Board,
    train: &Train,
    phase: &Phase,
) -> usize {
    route
        .cities()
        .map(|node| match node {
            Node::City { hex, slot } => board
                .settlement_at(hex, slot)
                .map(|settlement| settlement.revenue(&train.id, phase.colour))
                .unwrap_or(0),
            Node::Junction { .. } => 0,
        })
        .sum()
}

/// Finds the highest-value placement of the combination's routes into
/// train slots. Every route in the combination must be placed; smaller
/// subsets are visited as their own combinations.
fn best_placement(
    combo: &[usize],
    class_of: &[usize],
    revenue: &[Vec<Option<usize>>],
) -> Option<(usize, Vec<Option<usize>>)> {
    let mut slots: Vec<Option<usize>> = vec![None; class_of.len()];
    let mut best = None;
    place_from(combo, class_of, revenue, &mut slots, 0, &mut best);
    best
}

fn place_from(
    combo: &[usize],
    class_of: &[usize],
    revenue: &[Vec<Option<usize>>],
    slots: &mut Vec<Option<usize>>,
    value: usize,
    best: &mut Option<(usize, Vec<Option<usize>>)>,
) {
    let route_ix = match combo.first() {
        Some(&route_ix) => route_ix,
        None => {
            if best.as_ref().map(|(top, _)| value > *top).unwrap_or(true) {
                *best = Some((value, slots.clone()));
            }
            return;
        }
    };
    // Trains of the same class are interchangeable, so try each class at
    // most once per route.
    let mut tried: Vec<usize> = vec![];
    for train_ix in 0..class_of.len() {
        if slots[train_ix].is_some() {
            continue;
        }
        let class = class_of[train_ix];
        if tried.contains(&class) {
            continue;
        }
        tried.push(class);
        if let Some(earned) = revenue[route_ix][class] {
            slots[train_ix] = Some(route_ix);
            place_from(
                &combo[1..],
                class_of,
                revenue,
                slots,
                value + earned,
                best,
            );
            slots[train_ix] = None;
        }
    }
}
