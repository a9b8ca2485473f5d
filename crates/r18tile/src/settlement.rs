//! Revenue centres: towns, cities, and off-board locations.

use crate::colour::TileColour;
use r18hex::error::{Error, Result};

/// The position of a settlement on its tile: the centre slot (used by
/// Lawson-style tiles) or one of the six ring slots.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SettlementSlot {
    C,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
}

impl SettlementSlot {
    /// Returns this slot rotated clockwise by `turns`; the centre slot
    /// is unaffected by rotation.
    pub fn rotated(self, turns: i32) -> SettlementSlot {
        use SettlementSlot::*;

        const RING: [SettlementSlot; 6] = [R1, R2, R3, R4, R5, R6];
        match self {
            C => C,
            slot => {
                let ix = (slot.index() as i32 - 1 + turns).rem_euclid(6);
                RING[ix as usize]
            }
        }
    }

    /// Returns the slot index: 0 for the centre, 1..=6 for the ring.
    /// This matches the city-point indexing of the hex layout.
    pub fn index(self) -> usize {
        use SettlementSlot::*;

        match self {
            C => 0,
            R1 => 1,
            R2 => 2,
            R3 => 3,
            R4 => 4,
            R5 => 5,
            R6 => 6,
        }
    }
}

impl std::fmt::Display for SettlementSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::str::FromStr for SettlementSlot {
    type Err = Error;

    fn from_str(s: &str) -> Result<SettlementSlot> {
        use SettlementSlot::*;

        match s {
            "C" => Ok(C),
            "R1" => Ok(R1),
            "R2" => Ok(R2),
            "R3" => Ok(R3),
            "R4" => Ok(R4),
            "R5" => Ok(R5),
            "R6" => Ok(R6),
            _ => Err(Error::invalid(format!("unknown slot {:?}", s))),
        }
    }
}

/// A revenue centre on a tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Settlement {
    /// A town: fixed revenue, no stations.
    Town { value: usize },
    /// A city: fixed revenue and a limited number of station spaces,
    /// listing the railways that have placed a station here, in order.
    City {
        value: usize,
        size: usize,
        stations: Vec<String>,
    },
    /// An off-board location whose revenue depends on the current phase
    /// colour, with optional per-train overrides.
    Offboard {
        values: Vec<(TileColour, usize)>,
        modifiers: Vec<(String, usize)>,
    },
}

impl Settlement {
    pub fn town(value: usize) -> Settlement {
        Settlement::Town { value }
    }

    pub fn city(value: usize, size: usize) -> Settlement {
        Settlement::City {
            value,
            size,
            stations: vec![],
        }
    }

    pub fn is_city(&self) -> bool {
        matches!(self, Settlement::City { .. })
    }

    /// Returns the revenue that `train_id` earns here in a phase of the
    /// given colour.
    ///
    /// Towns and cities have a fixed value. For off-board locations a
    /// per-train modifier wins; otherwise the highest colour entry whose
    /// rank does not exceed the phase colour applies.
    pub fn revenue(&self, train_id: &str, phase_colour: TileColour) -> usize {
        match self {
            Settlement::Town { value } => *value,
            Settlement::City { value, .. } => *value,
            Settlement::Offboard { values, modifiers } => {
                if let Some((_, value)) =
                    modifiers.iter().find(|(id, _)| id == train_id)
                {
                    return *value;
                }
                values
                    .iter()
                    .filter(|(colour, _)| colour.rank() <= phase_colour.rank())
                    .max_by_key(|(colour, _)| colour.rank())
                    .map(|(_, value)| *value)
                    .unwrap_or(0)
            }
        }
    }

    /// Returns whether a route operated by `railway_id` may pass through
    /// this settlement. A full city blocks every railway that has no
    /// station in it; other settlements never block.
    pub fn is_blocking_for(&self, railway_id: &str) -> bool {
        match self {
            Settlement::City { size, stations, .. } => {
                stations.len() >= *size
                    && !stations.iter().any(|id| id == railway_id)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Settlement, SettlementSlot};
    use crate::colour::TileColour;

    #[test]
    /// Check that rotation fixes the centre slot and cycles the ring.
    fn slot_rotation() {
        use SettlementSlot::*;

        assert_eq!(C, C.rotated(4));
        assert_eq!(R5, R1.rotated(4));
        assert_eq!(R1, R1.rotated(6));
        assert_eq!(R6, R1.rotated(-1));
        for slot in [C, R1, R2, R3, R4, R5, R6] {
            assert_eq!(slot, slot.rotated(2).rotated(-2));
        }
    }

    #[test]
    /// Check blocking: a full city blocks railways without a station,
    /// but never blocks a railway with one.
    fn city_blocking() {
        let mut city = Settlement::city(30, 1);
        assert!(!city.is_blocking_for("AR"));
        if let Settlement::City { stations, .. } = &mut city {
            stations.push("IR".to_string());
        }
        assert!(city.is_blocking_for("AR"));
        assert!(!city.is_blocking_for("IR"));
    }

    #[test]
    /// Check off-board revenue: the phase colour selects the best
    /// applicable entry, and a train modifier overrides the table.
    fn offboard_revenue() {
        let offboard = Settlement::Offboard {
            values: vec![
                (TileColour::YELLOW, 20),
                (TileColour::BROWN, 40),
            ],
            modifiers: vec![("D".to_string(), 80)],
        };
        assert_eq!(20, offboard.revenue("2", TileColour::YELLOW));
        assert_eq!(20, offboard.revenue("2", TileColour::GREEN));
        assert_eq!(40, offboard.revenue("2", TileColour::BROWN));
        assert_eq!(40, offboard.revenue("2", TileColour::GRAY));
        assert_eq!(80, offboard.revenue("D", TileColour::YELLOW));
    }
}
