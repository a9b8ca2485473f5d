//! # Overview
//!
//! This crate defines [trains](Train), [phases](Phase), and the
//! [Catalogue]: the read-only collection of tile, train, and phase
//! definitions for one game.
//!
//! A catalogue is built once (typically from the game's data files) and
//! then passed by reference into the game state and the route solver;
//! nothing in this crate is mutable after construction.
//!
//! Phases are totally ordered by their position in the catalogue, which
//! follows the train catalog's declaration order. Train comparisons go
//! through [Catalogue::train_rank] rather than an `Ord` impl, because a
//! train's strength is a property of the phase table, not of the train
//! itself.

use std::collections::BTreeMap;

use r18tile::{Tile, TileColour};

pub use r18hex::error::{Error, Result};

/// A train card: how far a train travels and whether it is a diesel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Train {
    /// The train type name; also identifies the phase this train opens.
    pub id: String,
    /// The number of settlements the train may count for revenue.
    pub range: Option<usize>,
    /// Diesels have unlimited range.
    pub diesel: bool,
}

impl Train {
    pub fn new<S: Into<String>>(id: S, range: usize) -> Train {
        Train {
            id: id.into(),
            range: Some(range),
            diesel: false,
        }
    }

    pub fn diesel<S: Into<String>>(id: S) -> Train {
        Train {
            id: id.into(),
            range: None,
            diesel: true,
        }
    }

    /// Returns whether this train can operate a route that counts
    /// `cities` settlements.
    pub fn can_run(&self, cities: usize) -> bool {
        if self.diesel {
            return true;
        }
        self.range.map(|range| cities <= range).unwrap_or(false)
    }
}

/// A rule epoch. Each phase corresponds to a train type and begins when
/// the first train of that type is bought.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Phase {
    /// Matches the id of the train that opens this phase.
    pub id: String,
    /// The best tile colour that may be placed during this phase.
    pub colour: TileColour,
    /// The maximum number of trains a railway may hold.
    pub limit: usize,
    /// Trains of this id are removed from play when the phase begins.
    pub rusts: Option<String>,
}

/// The definitions for one game: tiles, trains, and the ordered phase
/// table.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalogue {
    tiles: Vec<Tile>,
    tile_tbl: BTreeMap<String, usize>,
    trains: Vec<Train>,
    train_tbl: BTreeMap<String, usize>,
    phases: Vec<Phase>,
}

impl Catalogue {
    /// Builds a catalogue. Phases must be supplied in declaration order;
    /// there must be at least one, and every train must have a matching
    /// phase.
    pub fn new(
        tiles: Vec<Tile>,
        trains: Vec<Train>,
        phases: Vec<Phase>,
    ) -> Result<Catalogue> {
        if phases.is_empty() {
            return Err(Error::invalid("a game must define at least one phase"));
        }
        for train in &trains {
            if !phases.iter().any(|phase| phase.id == train.id) {
                return Err(Error::invalid(format!(
                    "train {} has no phase entry",
                    train.id
                )));
            }
        }
        let tile_tbl = tiles
            .iter()
            .enumerate()
            .map(|(ix, tile)| (tile.id.clone(), ix))
            .collect();
        let train_tbl = trains
            .iter()
            .enumerate()
            .map(|(ix, train)| (train.id.clone(), ix))
            .collect();
        Ok(Catalogue {
            tiles,
            tile_tbl,
            trains,
            train_tbl,
            phases,
        })
    }

    /// Adds or replaces a tile definition; used for map-specific tiles
    /// supplied by the board layout.
    pub fn add_tile(&mut self, tile: Tile) {
        if let Some(&ix) = self.tile_tbl.get(&tile.id) {
            self.tiles[ix] = tile;
        } else {
            self.tile_tbl.insert(tile.id.clone(), self.tiles.len());
            self.tiles.push(tile);
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        self.tiles.as_slice()
    }

    pub fn trains(&self) -> &[Train] {
        self.trains.as_slice()
    }

    pub fn phases(&self) -> &[Phase] {
        self.phases.as_slice()
    }

    pub fn tile(&self, id: &str) -> Result<&Tile> {
        self.tile_tbl
            .get(id)
            .map(|&ix| &self.tiles[ix])
            .ok_or_else(|| Error::not_found(format!("no tile {:?}", id)))
    }

    pub fn train(&self, id: &str) -> Result<&Train> {
        self.train_tbl
            .get(id)
            .map(|&ix| &self.trains[ix])
            .ok_or_else(|| Error::not_found(format!("no train {:?}", id)))
    }

    pub fn phase(&self, id: &str) -> Result<&Phase> {
        self.phase_ix(id).map(|ix| &self.phases[ix])
    }

    /// Returns the position of a phase in the declaration order.
    pub fn phase_ix(&self, id: &str) -> Result<usize> {
        self.phases
            .iter()
            .position(|phase| phase.id == id)
            .ok_or_else(|| Error::not_found(format!("no phase {:?}", id)))
    }

    pub fn first_phase(&self) -> &Phase {
        &self.phases[0]
    }

    /// Returns the strength of a train: its phase's position in the
    /// declaration order.
    pub fn train_rank(&self, train_id: &str) -> Result<usize> {
        self.phase_ix(train_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalogue, Phase, Train};
    use r18tile::{Tile, TileColour};

    fn phases() -> Vec<Phase> {
        vec![
            Phase {
                id: "2".to_string(),
                colour: TileColour::YELLOW,
                limit: 4,
                rusts: None,
            },
            Phase {
                id: "3".to_string(),
                colour: TileColour::GREEN,
                limit: 4,
                rusts: None,
            },
            Phase {
                id: "4".to_string(),
                colour: TileColour::GREEN,
                limit: 3,
                rusts: Some("2".to_string()),
            },
            Phase {
                id: "D".to_string(),
                colour: TileColour::BROWN,
                limit: 2,
                rusts: Some("3".to_string()),
            },
        ]
    }

    fn trains() -> Vec<Train> {
        vec![
            Train::new("2", 2),
            Train::new("3", 3),
            Train::new("4", 4),
            Train::diesel("D"),
        ]
    }

    #[test]
    /// Check that phases rank by declaration order, not by id ordering:
    /// the diesel phase "D" outranks every numbered phase even though
    /// "D" sorts above "4" lexically.
    fn phase_order_is_declaration_order() {
        let cat = Catalogue::new(vec![], trains(), phases()).unwrap();
        assert_eq!(0, cat.phase_ix("2").unwrap());
        assert_eq!(3, cat.phase_ix("D").unwrap());
        assert!(cat.train_rank("D").unwrap() > cat.train_rank("4").unwrap());
        assert_eq!("2", cat.first_phase().id);
    }

    #[test]
    /// Check train range semantics, including the diesel override.
    fn train_ranges() {
        let two = Train::new("2", 2);
        assert!(two.can_run(1));
        assert!(two.can_run(2));
        assert!(!two.can_run(3));
        let diesel = Train::diesel("D");
        assert!(diesel.can_run(30));
    }

    #[test]
    /// Check that lookups report missing ids and that every train needs
    /// a phase entry.
    fn catalogue_lookups() {
        let cat = Catalogue::new(
            vec![Tile::blank()],
            trains(),
            phases(),
        )
        .unwrap();
        assert!(cat.tile("0").is_ok());
        assert!(cat.tile("99").is_err());
        assert!(cat.train("5").is_err());
        assert!(cat.phase("5").is_err());

        let orphan = vec![Train::new("6", 6)];
        assert!(Catalogue::new(vec![], orphan, phases()).is_err());
        assert!(Catalogue::new(vec![], vec![], vec![]).is_err());
    }
}
