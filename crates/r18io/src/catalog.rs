//! Tile, train, and manifest file parsing.

use std::collections::BTreeMap;

use serde::Deserialize;

use r18game::Bank;
use r18hex::error::Result;
use r18hex::Direction;
use r18tile::{Segment, Settlement, SettlementSlot, Tile, TileColour};

use crate::bad_json;

#[derive(Deserialize, Debug)]
pub(crate) struct TileDef {
    id: String,
    color: Vec<String>,
    #[serde(default)]
    segments: Vec<SegmentDef>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    upgrades: Vec<String>,
}

#[derive(Deserialize, Debug)]
struct SegmentDef {
    #[serde(default)]
    tracks: Vec<String>,
    #[serde(default)]
    settlement: Option<SettlementDef>,
    #[serde(default)]
    location: Option<String>,
}

/// A settlement is either a fixed-value town or city, or an off-board
/// location with a phase-colour value table.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum SettlementDef {
    Fixed {
        value: usize,
        #[serde(default)]
        size: Option<usize>,
    },
    Offboard {
        values: BTreeMap<String, usize>,
        #[serde(default)]
        modifiers: BTreeMap<String, usize>,
    },
}

impl SettlementDef {
    fn build(&self) -> Result<Settlement> {
        match self {
            SettlementDef::Fixed { value, size: None } => {
                Ok(Settlement::Town { value: *value })
            }
            SettlementDef::Fixed {
                value,
                size: Some(size),
            } => Ok(Settlement::city(*value, *size)),
            SettlementDef::Offboard { values, modifiers } => {
                let values = values
                    .iter()
                    .map(|(name, value)| {
                        TileColour::parse_name(name)
                            .map(|colour| (colour, *value))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Settlement::Offboard {
                    values,
                    modifiers: modifiers
                        .iter()
                        .map(|(id, value)| (id.clone(), *value))
                        .collect(),
                })
            }
        }
    }
}

impl TileDef {
    pub(crate) fn build(&self) -> Result<Tile> {
        let mut colour = TileColour::BLANK;
        for name in &self.color {
            colour |= TileColour::parse_name(name)?;
        }
        let segments = self
            .segments
            .iter()
            .map(|seg| seg.build())
            .collect::<Result<Vec<_>>>()?;
        let mut tile = Tile::new(colour, self.id.clone(), segments)
            .with_upgrades(self.upgrades.clone());
        if let Some(label) = &self.label {
            tile = tile.with_label(label.clone());
        }
        Ok(tile)
    }
}

impl SegmentDef {
    fn build(&self) -> Result<Segment> {
        let tracks = self
            .tracks
            .iter()
            .map(|name| name.parse::<Direction>())
            .collect::<Result<Vec<_>>>()?;
        let segment = match (&self.settlement, &self.location) {
            (Some(settlement), Some(location)) => Segment::settlement(
                settlement.build()?,
                location.parse::<SettlementSlot>()?,
                tracks,
            ),
            _ => Segment::track(tracks),
        };
        Ok(segment)
    }
}

/// Parses a tile catalog.
pub fn parse_tiles(json: &str) -> Result<Vec<Tile>> {
    let defs: Vec<TileDef> = serde_json::from_str(json).map_err(bad_json)?;
    defs.iter().map(|def| def.build()).collect()
}

#[derive(Deserialize, Debug)]
struct TrainDef {
    id: String,
    #[serde(default)]
    range: Option<usize>,
    #[serde(default)]
    diesel: bool,
    phase: PhaseDef,
}

#[derive(Deserialize, Debug)]
struct PhaseDef {
    color: String,
    limit: usize,
    #[serde(default)]
    rusts: Option<String>,
}

/// Parses a train catalog; each train record carries its phase entry,
/// and the phase table keeps the declaration order.
pub fn parse_trains(
    json: &str,
) -> Result<(Vec<r18catalogue::Train>, Vec<r18catalogue::Phase>)> {
    let defs: Vec<TrainDef> = serde_json::from_str(json).map_err(bad_json)?;
    let mut trains = vec![];
    let mut phases = vec![];
    for def in &defs {
        trains.push(r18catalogue::Train {
            id: def.id.clone(),
            range: def.range,
            diesel: def.diesel,
        });
        phases.push(r18catalogue::Phase {
            id: def.id.clone(),
            colour: TileColour::parse_name(&def.phase.color)?,
            limit: def.phase.limit,
            rusts: def.phase.rusts.clone(),
        });
    }
    Ok((trains, phases))
}

#[derive(Deserialize, Debug)]
struct ManifestDef {
    tiles: BTreeMap<String, usize>,
    trains: BTreeMap<String, usize>,
}

/// Parses a bank manifest.
pub fn parse_manifest(json: &str) -> Result<Bank> {
    let def: ManifestDef = serde_json::from_str(json).map_err(bad_json)?;
    Ok(Bank::new(def.tiles, def.trains))
}

#[cfg(test)]
mod tests {
    use r18hex::Direction::*;
    use r18tile::{Settlement, SettlementSlot, TileColour};

    #[test]
    /// Parse a small tile catalog covering plain track, a city, and an
    /// off-board location.
    fn parse_tile_catalog() {
        let json = r#"[
            {"id": "8", "color": ["YELLOW"],
             "segments": [{"tracks": ["NE", "NW"]}],
             "upgrades": ["23", "24", "25"]},
            {"id": "57", "color": ["YELLOW"],
             "segments": [{"tracks": ["N", "S"],
                           "settlement": {"value": 20, "size": 1},
                           "location": "C"}]},
            {"id": "T1", "color": ["RED"],
             "label": "T",
             "segments": [{"tracks": ["S"],
                           "settlement": {"values": {"YELLOW": 20, "BROWN": 40},
                                          "modifiers": {"D": 80}},
                           "location": "C"}]}
        ]"#;
        let tiles = super::parse_tiles(json).unwrap();
        assert_eq!(3, tiles.len());

        let curve = &tiles[0];
        assert_eq!(TileColour::YELLOW, curve.colour);
        assert_eq!(1, curve.segments().len());
        assert!(curve.segments()[0].has_exit(NE));
        assert_eq!(vec!["23", "24", "25"], curve.upgrades);

        let city = &tiles[1];
        let segment = city.segment_at(SettlementSlot::C).unwrap();
        assert!(matches!(
            segment.settlement,
            Some(Settlement::City { value: 20, size: 1, .. })
        ));

        let offboard = &tiles[2];
        assert_eq!(Some("T".to_string()), offboard.label);
        let segment = offboard.segment_at(SettlementSlot::C).unwrap();
        let settlement = segment.settlement.as_ref().unwrap();
        assert_eq!(40, settlement.revenue("2", TileColour::GRAY));
        assert_eq!(80, settlement.revenue("D", TileColour::YELLOW));
    }

    #[test]
    /// Parse a train catalog and check the phase table order.
    fn parse_train_catalog() {
        let json = r#"[
            {"id": "2", "range": 2,
             "phase": {"color": "YELLOW", "limit": 4}},
            {"id": "4", "range": 4,
             "phase": {"color": "GREEN", "limit": 3, "rusts": "2"}},
            {"id": "D", "diesel": true,
             "phase": {"color": "BROWN", "limit": 2, "rusts": "4"}}
        ]"#;
        let (trains, phases) = super::parse_trains(json).unwrap();
        assert_eq!(3, trains.len());
        assert_eq!(Some(2), trains[0].range);
        assert!(trains[2].diesel);
        assert_eq!(None, trains[2].range);
        assert_eq!("2", phases[0].id);
        assert_eq!(Some("2".to_string()), phases[1].rusts);
        assert_eq!(TileColour::BROWN, phases[2].colour);
    }

    #[test]
    /// Parse a bank manifest.
    fn parse_bank_manifest() {
        let json = r#"{"tiles": {"8": 4, "57": 2}, "trains": {"2": 5}}"#;
        let bank = super::parse_manifest(json).unwrap();
        assert_eq!(Some(4), bank.tile_count("8"));
        assert_eq!(Some(5), bank.train_count("2"));
        assert_eq!(None, bank.tile_count("9"));
    }

    #[test]
    /// Malformed JSON is an invalid-argument error.
    fn malformed_input() {
        assert!(super::parse_tiles("not json").is_err());
        assert!(super::parse_trains("[{\"id\": 3}]").is_err());
        assert!(super::parse_manifest("{}").is_err());
    }
}
