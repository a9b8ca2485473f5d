//! The board: a mapping from hex coordinates to placed tiles.

use std::collections::BTreeMap;

use r18hex::error::{Error, Result};
use r18hex::Hex;
use r18tile::{Segment, Settlement, SettlementSlot, Tile};

/// A grid of hexes, each holding the tile currently placed there.
///
/// A hex is on the map iff it appears in the mapping; empty map hexes
/// hold the blank sentinel tile. The board owns its tiles: placed tiles
/// are instances cloned from the catalogue, and the station lists inside
/// their cities are the board's mutable state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Board {
    hexes: BTreeMap<Hex, Tile>,
}

impl Board {
    pub fn new() -> Board {
        Board::default()
    }

    /// Creates a board whose hexes are all blank.
    pub fn with_hexes<T>(hexes: T) -> Board
    where
        T: IntoIterator<Item = Hex>,
    {
        Board {
            hexes: hexes
                .into_iter()
                .map(|hex| (hex, Tile::blank()))
                .collect(),
        }
    }

    pub fn is_on_map(&self, hex: Hex) -> bool {
        self.hexes.contains_key(&hex)
    }

    pub fn tile_at(&self, hex: Hex) -> Option<&Tile> {
        self.hexes.get(&hex)
    }

    pub fn tile_at_mut(&mut self, hex: Hex) -> Result<&mut Tile> {
        self.hexes
            .get_mut(&hex)
            .ok_or_else(|| Error::not_found(format!("hex {} is off the map", hex)))
    }

    /// Assigns a tile to a hex that is already on the map.
    pub fn place(&mut self, hex: Hex, tile: Tile) -> Result<()> {
        if !self.is_on_map(hex) {
            return Err(Error::rule(format!("hex {} is not on the map", hex)));
        }
        self.hexes.insert(hex, tile);
        Ok(())
    }

    /// Iterates over every (hex, tile) pair, in hex order.
    pub fn iter(&self) -> impl Iterator<Item = (Hex, &Tile)> {
        self.hexes.iter().map(|(hex, tile)| (*hex, tile))
    }

    /// Returns the segment holding the settlement at the given location.
    pub fn segment_at(
        &self,
        hex: Hex,
        slot: SettlementSlot,
    ) -> Result<&Segment> {
        let tile = self.tile_at(hex).ok_or_else(|| {
            Error::not_found(format!("hex {} is off the map", hex))
        })?;
        tile.segment_at(slot)
    }

    /// Returns the settlement at the given location, failing when the
    /// segment there has none.
    pub fn settlement_at(
        &self,
        hex: Hex,
        slot: SettlementSlot,
    ) -> Result<&Settlement> {
        let segment = self.segment_at(hex, slot)?;
        segment.settlement.as_ref().ok_or_else(|| {
            Error::not_found(format!(
                "no settlement at {} slot {}",
                hex, slot
            ))
        })
    }

    /// Returns whether any exit of `tile`, placed at `hex`, would point
    /// at a hex that is not on the map.
    pub fn exits_leave_map(&self, tile: &Tile, hex: Hex) -> bool {
        tile.exits()
            .iter()
            .any(|&dir| !self.is_on_map(hex.neighbour(dir)))
    }
}
