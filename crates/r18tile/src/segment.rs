//! Track segments: the connected pieces of a tile's track network.

use std::collections::BTreeSet;

use r18hex::Direction;

use crate::settlement::{Settlement, SettlementSlot};

/// A connected piece of track on a tile: a set of exit directions,
/// optionally anchored at a settlement.
///
/// A segment with tracks and no settlement is a pass-through curve
/// between hex edges; a segment with a settlement describes the spokes
/// that radiate from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub tracks: BTreeSet<Direction>,
    pub settlement: Option<Settlement>,
    pub slot: Option<SettlementSlot>,
}

impl Segment {
    /// A pass-through segment connecting the given hex edges.
    pub fn track<T>(dirs: T) -> Segment
    where
        T: IntoIterator<Item = Direction>,
    {
        Segment {
            tracks: dirs.into_iter().collect(),
            settlement: None,
            slot: None,
        }
    }

    /// A segment anchored at a settlement, with spokes towards `dirs`.
    pub fn settlement<T>(
        settlement: Settlement,
        slot: SettlementSlot,
        dirs: T,
    ) -> Segment
    where
        T: IntoIterator<Item = Direction>,
    {
        Segment {
            tracks: dirs.into_iter().collect(),
            settlement: Some(settlement),
            slot: Some(slot),
        }
    }

    /// Returns whether this segment's track set includes `dir`.
    pub fn has_exit(&self, dir: Direction) -> bool {
        self.tracks.contains(&dir)
    }

    /// Returns this segment rotated clockwise by `turns`: every exit
    /// direction and the slot rotate uniformly.
    pub fn rotated(&self, turns: i32) -> Segment {
        Segment {
            tracks: self.tracks.iter().map(|d| d.rotated(turns)).collect(),
            settlement: self.settlement.clone(),
            slot: self.slot.map(|slot| slot.rotated(turns)),
        }
    }
}
