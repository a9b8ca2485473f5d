//! # Overview
//!
//! This crate ties the board, bank, railways, and phase table together
//! into a [Game], and enforces the placement rules: tile placement and
//! upgrades, station placement, train purchases, and phase advancement
//! with cascading rust.
//!
//! [Game::solve_for] is the public entry point to the route solver.

pub mod bank;
pub mod game;
pub mod railway;

#[doc(inline)]
pub use bank::Bank;

#[doc(inline)]
pub use game::Game;

#[doc(inline)]
pub use railway::Railway;

pub use r18hex::error::{Error, Result};
