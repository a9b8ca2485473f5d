//! Save files: the mutable state of a game in progress.
//!
//! A save records the trains each railway holds, the tiles placed on
//! the board (with their rotations), and the stations in each hex. The
//! phase is not stored: it is derivable from the trains held.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use r18game::Game;
use r18hex::error::Result;
use r18hex::Hex;
use r18tile::Settlement;

use crate::bad_json;

#[derive(Serialize, Deserialize, Debug, Default)]
struct SaveDef {
    #[serde(default)]
    trains: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    board: BTreeMap<String, PlacedDef>,
    #[serde(default)]
    stations: BTreeMap<String, Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug)]
struct PlacedDef {
    tile: String,
    rotation: u8,
}

/// Applies a save to a freshly loaded game.
///
/// Board entries bypass the placement rules (a save may hold tiles from
/// any phase) but still deduct the bank; the phase is restored from the
/// trains held.
pub fn apply_save(game: &mut Game, json: &str) -> Result<()> {
    let save: SaveDef = serde_json::from_str(json).map_err(bad_json)?;
    for (coord, placed) in &save.board {
        let hex: Hex = coord.parse()?;
        game.restore_tile(hex, &placed.tile, placed.rotation as i32)?;
    }
    for (coord, railway_ids) in &save.stations {
        let hex: Hex = coord.parse()?;
        for railway_id in railway_ids {
            game.restore_station(hex, railway_id)?;
        }
    }
    for (railway_id, train_ids) in &save.trains {
        for train_id in train_ids {
            game.restore_train(train_id, railway_id)?;
        }
    }
    game.restore_phase();
    Ok(())
}

/// Serialises the state of a game as a save file.
pub fn write_save(game: &Game) -> Result<String> {
    let mut save = SaveDef::default();
    for railway in game.railways() {
        if railway.trains.is_empty() {
            continue;
        }
        save.trains.insert(
            railway.id.clone(),
            railway.trains.iter().map(|train| train.id.clone()).collect(),
        );
    }
    for (hex, tile) in game.board().iter() {
        if tile.id == "0" {
            continue;
        }
        save.board.insert(
            hex.to_string(),
            PlacedDef {
                tile: tile.id.clone(),
                rotation: tile.rotation(),
            },
        );
        let stations: Vec<String> = tile
            .settlements()
            .filter_map(|(_, settlement)| match settlement {
                Settlement::City { stations, .. } if !stations.is_empty() => {
                    Some(stations.clone())
                }
                _ => None,
            })
            .flatten()
            .collect();
        if !stations.is_empty() {
            save.stations.insert(hex.to_string(), stations);
        }
    }
    serde_json::to_string_pretty(&save).map_err(bad_json)
}
