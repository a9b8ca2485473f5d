//! End-to-end route-finding scenarios over the fixture game.

mod fixtures;

use fixtures::{hex, lay_basic_track, new_game};
use router18xx::prelude::*;

fn init() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .is_test(true)
    .try_init();
}

#[test]
/// A single 2-train picks the better of the two branches from the home
/// city: both the off-board branch and the city branch are worth 40 at
/// the yellow phase, so the solution earns 40 from two stops.
fn single_train_picks_a_branch() {
    init();
    let mut game = new_game();
    lay_basic_track(&mut game);
    game.place_station(hex("C4"), SettlementSlot::C, "AR").unwrap();
    game.give_train("2", "AR").unwrap();

    let solution = game.solve_for("AR").unwrap();
    assert_eq!(40, solution.value);
    assert_eq!(2, solution.runs[0].cities().len());
}

#[test]
/// Two 2-trains run the two branches at once; the branches share no
/// edge, so both trains are assigned.
fn two_trains_cover_both_branches() {
    init();
    let mut game = new_game();
    lay_basic_track(&mut game);
    game.place_station(hex("C4"), SettlementSlot::C, "AR").unwrap();
    game.give_train("2", "AR").unwrap();
    game.give_train("2", "AR").unwrap();

    let solution = game.solve_for("AR").unwrap();
    assert_eq!(80, solution.value);
    assert!(solution.runs.iter().all(|run| run.route.is_some()));
    let (first, second) = (&solution.runs[0], &solution.runs[1]);
    assert!(first.edges().is_disjoint(&second.edges()));
}

#[test]
/// A diesel has no range cap and earns the off-board modifier: the best
/// route runs from the off-board location through the home city to the
/// second city.
fn diesel_runs_through_the_home() {
    init();
    let mut game = new_game();
    lay_basic_track(&mut game);
    game.place_station(hex("C4"), SettlementSlot::C, "AR").unwrap();
    game.give_train("D", "AR").unwrap();

    let solution = game.solve_for("AR").unwrap();
    // 80 (off-board, diesel modifier) + 20 + 20.
    assert_eq!(120, solution.value);
    assert_eq!(3, solution.runs[0].cities().len());
    // The route passes through the home rather than starting there.
    let route = solution.runs[0].route.as_ref().unwrap();
    let home = Node::city(hex("C4"), SettlementSlot::C);
    assert!(route.contains_node(home));
    assert_ne!(home, route.first());
    assert_ne!(home, route.last());
}

#[test]
/// Off-board revenue follows the phase colour: upgrading the phase
/// raises the same route's earnings.
fn offboard_value_tracks_the_phase() {
    init();
    let mut game = new_game();
    lay_basic_track(&mut game);
    game.place_station(hex("C4"), SettlementSlot::C, "AR").unwrap();
    game.give_train("3", "AR").unwrap();

    // Phase "3" is green: the off-board location pays 30.
    let solution = game.solve_for("AR").unwrap();
    assert_eq!(30 + 20 + 20, solution.value);
}

#[test]
/// A full foreign city blocks through-running: once IR fills the far
/// city, AR's routes must stop there.
fn foreign_station_blocks_through_traffic() {
    init();
    let mut game = new_game();
    lay_basic_track(&mut game);
    game.place_station(hex("C4"), SettlementSlot::C, "AR").unwrap();
    game.place_station(hex("C8"), SettlementSlot::C, "IR").unwrap();
    game.give_train("3", "AR").unwrap();

    let solution = game.solve_for("AR").unwrap();
    // The best 3-stop route still exists: off-board, home, and the
    // blocked city as a terminus.
    assert_eq!(30 + 20 + 20, solution.value);

    // IR itself can run from its own station through its home city.
    game.give_train("3", "IR").unwrap();
    let solution = game.solve_for("IR").unwrap();
    assert!(solution.value > 0);
}

#[test]
/// Solving for a company that has not floated, or holds no trains, is
/// a rule error; an unknown company is not found.
fn solve_error_kinds() {
    init();
    let mut game = new_game();
    lay_basic_track(&mut game);

    assert!(matches!(game.solve_for("AR"), Err(Error::Rule(_))));
    game.place_station(hex("C4"), SettlementSlot::C, "AR").unwrap();
    assert!(matches!(game.solve_for("AR"), Err(Error::Rule(_))));
    assert!(matches!(game.solve_for("XX"), Err(Error::NotFound(_))));
}
