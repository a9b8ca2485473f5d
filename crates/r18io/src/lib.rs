//! # Overview
//!
//! This crate reads and writes the data files that describe a game:
//!
//! - the tile catalog (`tiles.json`);
//! - the train catalog with its embedded phase table (`trains.json`);
//! - the board layout, including map-specific tiles and the railway
//!   roster (`board.json`);
//! - the bank manifest (`manifest.json`); and
//! - save files.
//!
//! Each format has its own serde DTO types, which convert to and from
//! the core types; malformed input surfaces as
//! [InvalidArgument](r18hex::Error::InvalidArgument) errors.

use std::path::Path;

use r18hex::error::{Error, Result};

pub mod catalog;
pub mod layout;
pub mod save;

#[doc(inline)]
pub use catalog::{parse_manifest, parse_tiles, parse_trains};

#[doc(inline)]
pub use layout::{load_game, parse_layout};

#[doc(inline)]
pub use save::{apply_save, write_save};

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    std::fs::read_to_string(path.as_ref()).map_err(|err| {
        Error::invalid(format!(
            "cannot read {}: {}",
            path.as_ref().display(),
            err
        ))
    })
}

pub(crate) fn bad_json(err: serde_json::Error) -> Error {
    Error::invalid(format!("malformed JSON: {}", err))
}
