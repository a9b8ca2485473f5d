//! # Overview
//!
//! This crate manages the state of an 18xx map: the [Board] maps each
//! hex to the tile currently placed there, and resolves segment and
//! settlement lookups for the route solver.

pub mod board;

#[doc(inline)]
pub use board::Board;

pub use r18hex::error::{Error, Result};
