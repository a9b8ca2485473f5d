//! Tile templates and the checks that govern tile upgrades.

use std::collections::{BTreeMap, BTreeSet};

use r18hex::error::{Error, Result};
use r18hex::Direction;

use crate::colour::TileColour;
use crate::segment::Segment;
use crate::settlement::{Settlement, SettlementSlot};

/// A tile: an immutable template of track segments, plus the rotation
/// it was placed with.
///
/// [rotated](Tile::rotated) returns a new tile; templates themselves are
/// never mutated. The only mutable state a placed tile carries is the
/// station lists inside its city settlements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub id: String,
    pub colour: TileColour,
    segments: Vec<Segment>,
    pub label: Option<String>,
    pub upgrades: Vec<String>,
    rotation: u8,
}

impl Tile {
    pub fn new<S: Into<String>>(
        colour: TileColour,
        id: S,
        segments: Vec<Segment>,
    ) -> Tile {
        Tile {
            id: id.into(),
            colour,
            segments,
            label: None,
            upgrades: vec![],
            rotation: 0,
        }
    }

    /// The sentinel tile for an empty map hex.
    pub fn blank() -> Tile {
        Tile::new(TileColour::BLANK, "0", vec![])
            .with_upgrades(["7", "8", "9"])
    }

    pub fn with_label<S: Into<String>>(mut self, label: S) -> Tile {
        self.label = Some(label.into());
        self
    }

    pub fn with_upgrades<T, S>(mut self, upgrades: T) -> Tile
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.upgrades = upgrades.into_iter().map(|id| id.into()).collect();
        self
    }

    pub fn segments(&self) -> &[Segment] {
        self.segments.as_slice()
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Returns this tile rotated clockwise by `turns`; every segment's
    /// tracks and slot rotate uniformly.
    pub fn rotated(&self, turns: i32) -> Tile {
        Tile {
            id: self.id.clone(),
            colour: self.colour,
            segments: self.segments.iter().map(|s| s.rotated(turns)).collect(),
            label: self.label.clone(),
            upgrades: self.upgrades.clone(),
            rotation: (self.rotation as i32 + turns).rem_euclid(6) as u8,
        }
    }

    /// Returns the segment holding the settlement at `slot`.
    pub fn segment_at(&self, slot: SettlementSlot) -> Result<&Segment> {
        self.segments
            .iter()
            .find(|seg| seg.slot == Some(slot))
            .ok_or_else(|| {
                Error::not_found(format!(
                    "tile {} has no segment at slot {}",
                    self.id, slot
                ))
            })
    }

    pub fn segment_at_mut(
        &mut self,
        slot: SettlementSlot,
    ) -> Result<&mut Segment> {
        let id = self.id.clone();
        self.segments
            .iter_mut()
            .find(|seg| seg.slot == Some(slot))
            .ok_or_else(|| {
                Error::not_found(format!(
                    "tile {} has no segment at slot {}",
                    id, slot
                ))
            })
    }

    /// Returns the segments (typically zero or one) whose track set
    /// includes `dir`.
    pub fn segments_with_exit(
        &self,
        dir: Direction,
    ) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(move |seg| seg.has_exit(dir))
    }

    /// Returns every direction in which track leaves this tile.
    pub fn exits(&self) -> BTreeSet<Direction> {
        self.segments
            .iter()
            .flat_map(|seg| seg.tracks.iter().copied())
            .collect()
    }

    /// Returns whether this tile appears in `other`'s upgrade list.
    pub fn is_upgrade_of(&self, other: &Tile) -> bool {
        other.upgrades.iter().any(|id| *id == self.id)
    }

    /// Returns whether every track set of `old` is preserved by this
    /// tile: there must be an injective assignment of `old`'s non-empty
    /// track sets to this tile's non-empty track sets such that each old
    /// set is a subset of its image.
    pub fn preserves_track(&self, old: &Tile) -> bool {
        let old_sets: Vec<&BTreeSet<Direction>> = old
            .segments
            .iter()
            .filter(|seg| !seg.tracks.is_empty())
            .map(|seg| &seg.tracks)
            .collect();
        let new_sets: Vec<&BTreeSet<Direction>> = self
            .segments
            .iter()
            .filter(|seg| !seg.tracks.is_empty())
            .map(|seg| &seg.tracks)
            .collect();
        let mut used = vec![false; new_sets.len()];
        match_track_sets(&old_sets, &new_sets, &mut used)
    }

    /// Returns the slot-to-settlement mapping of this tile.
    pub fn settlements(
        &self,
    ) -> impl Iterator<Item = (SettlementSlot, &Settlement)> {
        self.segments.iter().filter_map(|seg| {
            match (&seg.settlement, seg.slot) {
                (Some(settlement), Some(slot)) => Some((slot, settlement)),
                _ => None,
            }
        })
    }

    /// Returns whether every settlement of `old` is preserved by this
    /// tile: the slot sets must be identical, values must not decrease,
    /// cities must stay cities without losing capacity, and off-board
    /// locations only match off-board locations.
    pub fn preserves_settlements(&self, old: &Tile) -> bool {
        let old_tbl: BTreeMap<_, _> = old.settlements().collect();
        let new_tbl: BTreeMap<_, _> = self.settlements().collect();
        if old_tbl.len() != new_tbl.len()
            || !old_tbl.keys().all(|slot| new_tbl.contains_key(slot))
        {
            return false;
        }
        old_tbl.iter().all(|(slot, &old_stl)| {
            settlement_upgrade_ok(old_stl, new_tbl[slot])
        })
    }

    /// Returns whether a city on this tile holds a station for the given
    /// railway.
    pub fn has_station(&self, railway_id: &str) -> bool {
        self.station_slot(railway_id).is_some()
    }

    /// Returns the slot of the city holding the given railway's station.
    pub fn station_slot(&self, railway_id: &str) -> Option<SettlementSlot> {
        self.settlements().find_map(|(slot, settlement)| {
            match settlement {
                Settlement::City { stations, .. }
                    if stations.iter().any(|id| id == railway_id) =>
                {
                    Some(slot)
                }
                _ => None,
            }
        })
    }

    /// Returns the slots of this tile's cities, in slot order.
    pub fn city_slots(&self) -> Vec<SettlementSlot> {
        self.settlements()
            .filter(|(_, settlement)| settlement.is_city())
            .map(|(slot, _)| slot)
            .collect()
    }
}

/// Backtracking search for an injective, subset-respecting assignment of
/// old track sets to new track sets. The order in which candidates are
/// tried does not affect the result.
fn match_track_sets(
    old_sets: &[&BTreeSet<Direction>],
    new_sets: &[&BTreeSet<Direction>],
    used: &mut Vec<bool>,
) -> bool {
    let old_set = match old_sets.first() {
        Some(set) => set,
        None => return true,
    };
    for (ix, new_set) in new_sets.iter().enumerate() {
        if used[ix] || !old_set.is_subset(new_set) {
            continue;
        }
        used[ix] = true;
        if match_track_sets(&old_sets[1..], new_sets, used) {
            return true;
        }
        used[ix] = false;
    }
    false
}

fn settlement_upgrade_ok(old: &Settlement, new: &Settlement) -> bool {
    use Settlement::*;

    match (old, new) {
        (Offboard { .. }, Offboard { .. }) => true,
        (Offboard { .. }, _) | (_, Offboard { .. }) => false,
        (Town { value: old_value }, Town { value: new_value }) => {
            new_value >= old_value
        }
        (Town { value: old_value }, City { value: new_value, .. }) => {
            new_value >= old_value
        }
        (City { .. }, Town { .. }) => false,
        (
            City {
                value: old_value,
                size: old_size,
                ..
            },
            City {
                value: new_value,
                size: new_size,
                ..
            },
        ) => new_value >= old_value && new_size >= old_size,
    }
}

#[cfg(test)]
mod tests {
    use super::Tile;
    use crate::colour::TileColour;
    use crate::segment::Segment;
    use crate::settlement::{Settlement, SettlementSlot};
    use r18hex::Direction::*;

    /// A gentle curve, as printed on tile 8.
    fn tile_8() -> Tile {
        Tile::new(
            TileColour::YELLOW,
            "8",
            vec![Segment::track([NE, NW])],
        )
        .with_upgrades(["23", "24", "25"])
    }

    /// A straight with a gentle branch, as printed on tile 23.
    fn tile_23() -> Tile {
        Tile::new(
            TileColour::GREEN,
            "23",
            vec![Segment::track([S, N]), Segment::track([S, NW])],
        )
    }

    fn city_tile(id: &str, colour: TileColour, value: usize, size: usize) -> Tile {
        Tile::new(
            colour,
            id,
            vec![Segment::settlement(
                Settlement::city(value, size),
                SettlementSlot::C,
                [N, S],
            )],
        )
    }

    #[test]
    /// Check the rotation laws: a rotation and its inverse cancel, and a
    /// full turn is the identity.
    fn rotation_laws() {
        let tile = tile_23();
        for turns in 0..6 {
            assert_eq!(tile, tile.rotated(turns).rotated(-turns));
        }
        assert_eq!(tile, tile.rotated(6));
        assert_ne!(tile, tile.rotated(1));
    }

    #[test]
    /// Check that segment lookup by slot reports missing slots.
    fn segment_lookup() {
        let tile = city_tile("57", TileColour::YELLOW, 20, 1);
        assert!(tile.segment_at(SettlementSlot::C).is_ok());
        assert!(tile.segment_at(SettlementSlot::R2).is_err());
        assert!(tile_8().segment_at(SettlementSlot::C).is_err());
    }

    #[test]
    /// Check that `preserves_track` holds for every tile over itself.
    fn preserves_track_reflexive() {
        for tile in [tile_8(), tile_23(), city_tile("57", TileColour::YELLOW, 20, 1)] {
            assert!(tile.preserves_track(&tile));
            let rotated = tile.rotated(2);
            assert!(rotated.preserves_track(&rotated));
        }
    }

    #[test]
    /// Placing tile 23 on tile 8 rotated four times is track-preserving:
    /// the rotated curve is covered by 23's branch. In 23's printed
    /// orientation the unrotated curve is not covered.
    fn preserves_track_upgrade() {
        assert!(tile_23().preserves_track(&tile_8().rotated(4)));
        assert!(!tile_23().preserves_track(&tile_8()));
    }

    #[test]
    /// Check that each old track set needs its own image: two copies of
    /// a curve cannot both map onto a single segment.
    fn preserves_track_injective() {
        let two_curves = Tile::new(
            TileColour::YELLOW,
            "X1",
            vec![Segment::track([S, NW]), Segment::track([S, NW])],
        );
        assert!(!tile_23().preserves_track(&two_curves));
    }

    #[test]
    /// Check settlement preservation: values may not decrease, cities
    /// may not shrink or vanish, and slots must match exactly.
    fn preserves_settlements_rules() {
        let small = city_tile("57", TileColour::YELLOW, 20, 1);
        let bigger = city_tile("14", TileColour::GREEN, 30, 2);
        assert!(bigger.preserves_settlements(&small));
        assert!(!small.preserves_settlements(&bigger));

        let town = Tile::new(
            TileColour::YELLOW,
            "3",
            vec![Segment::settlement(
                Settlement::town(10),
                SettlementSlot::C,
                [S, SW],
            )],
        );
        // A town may grow into a city, but a city never shrinks into a
        // town.
        assert!(bigger.preserves_settlements(&town));
        assert!(!town.preserves_settlements(&small));

        let moved = Tile::new(
            TileColour::GREEN,
            "X2",
            vec![Segment::settlement(
                Settlement::city(30, 2),
                SettlementSlot::R1,
                [N, S],
            )],
        );
        assert!(!moved.preserves_settlements(&small));
        assert!(!tile_8().preserves_settlements(&small));
    }

    #[test]
    /// Check station lookups inside city settlements.
    fn station_lookup() {
        let mut tile = city_tile("57", TileColour::YELLOW, 20, 1);
        assert!(!tile.has_station("AR"));
        let seg = tile.segment_at_mut(SettlementSlot::C).unwrap();
        if let Some(Settlement::City { stations, .. }) = &mut seg.settlement {
            stations.push("AR".to_string());
        }
        assert!(tile.has_station("AR"));
        assert_eq!(Some(SettlementSlot::C), tile.station_slot("AR"));
        assert_eq!(None, tile.station_slot("IR"));
    }

    #[test]
    /// Check the blank sentinel: no exits, blank colour, basic upgrades.
    fn blank_tile() {
        let blank = Tile::blank();
        assert_eq!("0", blank.id);
        assert!(blank.exits().is_empty());
        assert_eq!(TileColour::BLANK, blank.colour);
        assert!(tile_8().is_upgrade_of(&blank));
    }
}
