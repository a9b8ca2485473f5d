//! # Overview
//!
//! This crate defines the hexagonal grid on which 18xx maps are built:
//! cube coordinates, the six track directions, and parsing and printing
//! of the `"A1"`-style coordinates used by map and save files.
//!
//! It also provides the pure pixel-geometry functions ([Layout]) that
//! renderers use to place hex corners, edge midpoints, and city dots,
//! and the [error] types shared by the rest of the workspace.

pub mod coord;
pub mod error;
pub mod hex;

#[doc(inline)]
pub use coord::{Coord, Layout};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use hex::{Direction, Hex};
