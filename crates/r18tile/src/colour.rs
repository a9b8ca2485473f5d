//! Tile colours, which double as the phase progression order.

use r18hex::error::{Error, Result};

bitflags::bitflags! {
    /// The colour of a tile. Colours can be combined bitwise for tiles
    /// that count as more than one colour; an empty set is the blank
    /// (unlaid) colour.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct TileColour: u8 {
        const YELLOW = 1;
        const GREEN = 2;
        const BROWN = 4;
        const GRAY = 8;
        const RED = 16;
    }
}

impl TileColour {
    pub const BLANK: TileColour = TileColour::empty();

    /// Returns the position of this colour in the upgrade progression;
    /// blank ranks below yellow, and combined colours rank as their
    /// best colour.
    pub fn rank(self) -> u32 {
        u8::BITS - self.bits().leading_zeros()
    }

    /// Parses a single colour name, as used by the data files.
    pub fn parse_name(name: &str) -> Result<TileColour> {
        match name {
            "BLANK" => Ok(TileColour::BLANK),
            "YELLOW" => Ok(TileColour::YELLOW),
            "GREEN" => Ok(TileColour::GREEN),
            "BROWN" => Ok(TileColour::BROWN),
            "GRAY" => Ok(TileColour::GRAY),
            "RED" => Ok(TileColour::RED),
            _ => Err(Error::invalid(format!("unknown colour {:?}", name))),
        }
    }

    /// Returns the names of the colours in this set, e.g.
    /// `["YELLOW", "GREEN"]`; a blank colour yields `["BLANK"]`.
    pub fn names(self) -> Vec<&'static str> {
        if self.is_empty() {
            return vec!["BLANK"];
        }
        let mut names = vec![];
        if self.contains(TileColour::YELLOW) {
            names.push("YELLOW");
        }
        if self.contains(TileColour::GREEN) {
            names.push("GREEN");
        }
        if self.contains(TileColour::BROWN) {
            names.push("BROWN");
        }
        if self.contains(TileColour::GRAY) {
            names.push("GRAY");
        }
        if self.contains(TileColour::RED) {
            names.push("RED");
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::TileColour;

    #[test]
    /// Check that colours rank in the upgrade progression order.
    fn colour_ranks() {
        assert!(TileColour::BLANK.rank() < TileColour::YELLOW.rank());
        assert!(TileColour::YELLOW.rank() < TileColour::GREEN.rank());
        assert!(TileColour::GREEN.rank() < TileColour::BROWN.rank());
        assert!(TileColour::BROWN.rank() < TileColour::GRAY.rank());
        assert!(TileColour::GRAY.rank() < TileColour::RED.rank());
    }

    #[test]
    /// Check that a combined colour ranks as its best colour.
    fn combined_colour_rank() {
        let both = TileColour::YELLOW | TileColour::BROWN;
        assert_eq!(both.rank(), TileColour::BROWN.rank());
    }

    #[test]
    /// Check that colour names round-trip through parsing.
    fn colour_names() {
        for name in ["BLANK", "YELLOW", "GREEN", "BROWN", "GRAY", "RED"] {
            let colour = TileColour::parse_name(name).unwrap();
            assert_eq!(vec![name], colour.names());
        }
        assert!(TileColour::parse_name("PURPLE").is_err());
    }
}
