//! The bank: the shared inventory of tiles and trains.

use std::collections::BTreeMap;

use r18hex::error::{Error, Result};

/// Tracks how many copies of each tile and train remain available.
///
/// Counts never go below zero: taking the last copy succeeds, taking
/// from an empty entry is a rule violation. Tiles that the manifest does
/// not track (the blank sentinel, preprinted map tiles, and ids with the
/// debug `DBG` prefix) are in unlimited supply.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Bank {
    tiles: BTreeMap<String, usize>,
    trains: BTreeMap<String, usize>,
}

impl Bank {
    pub fn new(
        tiles: BTreeMap<String, usize>,
        trains: BTreeMap<String, usize>,
    ) -> Bank {
        Bank { tiles, trains }
    }

    pub fn tile_count(&self, id: &str) -> Option<usize> {
        self.tiles.get(id).copied()
    }

    pub fn train_count(&self, id: &str) -> Option<usize> {
        self.trains.get(id).copied()
    }

    pub fn tiles(&self) -> &BTreeMap<String, usize> {
        &self.tiles
    }

    pub fn trains(&self) -> &BTreeMap<String, usize> {
        &self.trains
    }

    /// Removes one copy of a tracked tile from the bank.
    pub fn take_tile(&mut self, id: &str) -> Result<()> {
        if id.starts_with("DBG") {
            return Ok(());
        }
        match self.tiles.get_mut(id) {
            Some(0) => Err(Error::rule(format!(
                "there are no more copies of tile {} in the bank",
                id
            ))),
            Some(count) => {
                *count -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Returns one copy of a tracked tile to the bank; replaced tiles
    /// come back when a hex is upgraded.
    pub fn put_tile(&mut self, id: &str) {
        if let Some(count) = self.tiles.get_mut(id) {
            *count += 1;
        }
    }

    /// Removes one copy of a train from the bank.
    pub fn take_train(&mut self, id: &str) -> Result<()> {
        match self.trains.get_mut(id) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Ok(())
            }
            _ => Err(Error::rule(format!(
                "there are no more copies of train {} in the bank",
                id
            ))),
        }
    }

    /// Removes every remaining copy of a rusted train type.
    pub fn rust_trains(&mut self, id: &str) {
        if let Some(count) = self.trains.get_mut(id) {
            *count = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Bank;
    use std::collections::BTreeMap;

    fn bank() -> Bank {
        let tiles: BTreeMap<String, usize> =
            [("9".to_string(), 2)].into_iter().collect();
        let trains: BTreeMap<String, usize> =
            [("2".to_string(), 1)].into_iter().collect();
        Bank::new(tiles, trains)
    }

    #[test]
    /// Check that tile counts never go negative, and that untracked and
    /// debug ids are unlimited.
    fn tile_supply() {
        let mut bank = bank();
        assert!(bank.take_tile("9").is_ok());
        assert!(bank.take_tile("9").is_ok());
        assert!(bank.take_tile("9").is_err());
        assert_eq!(Some(0), bank.tile_count("9"));
        bank.put_tile("9");
        assert!(bank.take_tile("9").is_ok());

        assert!(bank.take_tile("0").is_ok());
        assert!(bank.take_tile("DBG1").is_ok());
        assert_eq!(None, bank.tile_count("0"));
    }

    #[test]
    /// Check train supply and rusting.
    fn train_supply() {
        let mut bank = bank();
        assert!(bank.take_train("2").is_ok());
        assert!(bank.take_train("2").is_err());
        assert!(bank.take_train("3").is_err());

        let mut bank = super::Bank::new(
            BTreeMap::new(),
            [("2".to_string(), 4)].into_iter().collect(),
        );
        bank.rust_trains("2");
        assert_eq!(Some(0), bank.train_count("2"));
    }
}
