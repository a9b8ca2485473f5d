//! # Overview
//!
//! A crate for working with 18xx maps and searching for the train
//! routes that earn a railway company the most revenue.
//!
//! The following features are implemented:
//!
//! - Defining 18xx tiles as track segments with towns, cities, and
//!   off-board locations.
//! - Loading tile, train, and phase catalogues, board layouts, and bank
//!   manifests from JSON data files.
//! - Placing and upgrading tiles under the full placement rules, and
//!   placing stations for railway companies.
//! - Buying trains, with phase advancement and cascading rust.
//! - Saving and loading games in progress.
//! - Searching the board for the optimal pairing of a company's trains
//!   to edge-disjoint routes.
//!
//! ## Quick example
//!
//! ```no_run
//! use router18xx::prelude::*;
//!
//! fn main() -> r18hex::Result<()> {
//!     let mut game = load_game("data/1889")?;
//!     let solution = game.solve_for("AR")?;
//!     println!("Best revenue: {}", solution.value);
//!     Ok(())
//! }
//! ```

pub use r18catalogue as catalogue;
pub use r18game as game;
pub use r18hex as hex;
pub use r18io as io;
pub use r18map as map;
pub use r18route as route;
pub use r18tile as tile;

pub mod prelude {
    #[doc(inline)]
    pub use r18hex::{Coord, Direction, Error, Hex, Layout, Result};

    #[doc(inline)]
    pub use r18tile::{
        Segment, Settlement, SettlementSlot, Tile, TileColour,
    };

    #[doc(inline)]
    pub use r18catalogue::{Catalogue, Phase, Train};

    #[doc(inline)]
    pub use r18map::Board;

    #[doc(inline)]
    pub use r18route::{
        best_assignment, candidate_routes, max_range, CancelToken, Edge,
        Node, Route, RouteGraph, Solution, TrainRun,
    };

    #[doc(inline)]
    pub use r18game::{Bank, Game, Railway};

    #[doc(inline)]
    pub use r18io::{apply_save, load_game, write_save};
}
