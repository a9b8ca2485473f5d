//! The game state and the rules that guard every mutation.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use log::info;

use r18catalogue::{Catalogue, Phase};
use r18hex::error::{Error, Result};
use r18hex::Hex;
use r18map::Board;
use r18route::{
    best_assignment, candidate_routes, max_range, RouteGraph, Solution,
};
use r18tile::{Settlement, SettlementSlot};

use crate::bank::Bank;
use crate::railway::Railway;

/// The full state of a game in progress.
///
/// All mutations go through the rule-checking methods and are
/// transactional: a rejected operation leaves the state untouched.
/// The catalogue is read-only for the life of the game.
#[derive(Clone, Debug)]
pub struct Game {
    catalogue: Catalogue,
    board: Board,
    bank: Bank,
    railways: BTreeMap<String, Railway>,
    phase_ix: usize,
}

impl Game {
    /// Creates a game in its starting phase. This is also how a game is
    /// reset: construct a fresh value from the same catalogue and
    /// layout.
    pub fn new(
        catalogue: Catalogue,
        board: Board,
        railways: Vec<Railway>,
        bank: Bank,
    ) -> Game {
        let railways = railways
            .into_iter()
            .map(|railway| (railway.id.clone(), railway))
            .collect();
        Game {
            catalogue,
            board,
            bank,
            railways,
            phase_ix: 0,
        }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    pub fn phase(&self) -> &Phase {
        &self.catalogue.phases()[self.phase_ix]
    }

    pub fn railway(&self, id: &str) -> Result<&Railway> {
        self.railways
            .get(id)
            .ok_or_else(|| Error::not_found(format!("no railway {:?}", id)))
    }

    pub fn railways(&self) -> impl Iterator<Item = &Railway> {
        self.railways.values()
    }

    /// Places (or upgrades to) a tile from the catalogue.
    ///
    /// The checks, in order: the hex must be on the map, the tile colour
    /// must not outrank the phase, track and settlements must be
    /// preserved, labels must agree, and no track may leave the map.
    /// On success the bank loses a copy of the new tile and regains the
    /// replaced one, and stations carry over slot-for-slot.
    pub fn place_tile(
        &mut self,
        hex: Hex,
        tile_id: &str,
        rotation: i32,
    ) -> Result<()> {
        let old = self.board.tile_at(hex).ok_or_else(|| {
            Error::rule(format!("hex {} is not on the map", hex))
        })?;
        let mut new = self.catalogue.tile(tile_id)?.rotated(rotation);
        if new.colour.rank() > self.phase().colour.rank() {
            return Err(Error::rule(format!(
                "tile {} outranks the current phase colour",
                tile_id
            )));
        }
        if !new.preserves_track(old) {
            return Err(Error::rule(format!(
                "tile {} does not preserve the track of tile {}",
                tile_id, old.id
            )));
        }
        if !new.preserves_settlements(old) {
            return Err(Error::rule(format!(
                "tile {} does not preserve the settlements of tile {}",
                tile_id, old.id
            )));
        }
        if new.label != old.label {
            return Err(Error::rule(format!(
                "tile {} has the wrong label for this hex",
                tile_id
            )));
        }
        if self.board.exits_leave_map(&new, hex) {
            return Err(Error::rule(format!(
                "tile {} would run track off the map at {}",
                tile_id, hex
            )));
        }

        // Stations survive an upgrade: settlement preservation has
        // already guaranteed a matching city with enough capacity.
        let carried: Vec<(SettlementSlot, Vec<String>)> = old
            .settlements()
            .filter_map(|(slot, settlement)| match settlement {
                Settlement::City { stations, .. } if !stations.is_empty() => {
                    Some((slot, stations.clone()))
                }
                _ => None,
            })
            .collect();
        let old_id = old.id.clone();

        self.bank.take_tile(&new.id)?;
        self.bank.put_tile(&old_id);
        for (slot, stations) in carried {
            let segment = new.segment_at_mut(slot)?;
            if let Some(Settlement::City {
                stations: ref mut list,
                ..
            }) = segment.settlement
            {
                *list = stations;
            }
        }
        self.board.place(hex, new)
    }

    /// Places a station for a railway in the city at (hex, slot), and
    /// floats the railway.
    pub fn place_station(
        &mut self,
        hex: Hex,
        slot: SettlementSlot,
        railway_id: &str,
    ) -> Result<()> {
        let segment = self.board.segment_at(hex, slot)?;
        match &segment.settlement {
            Some(Settlement::City { size, stations, .. }) => {
                if stations.len() >= *size {
                    return Err(Error::rule(format!(
                        "the city at {} is full",
                        hex
                    )));
                }
                if stations.iter().any(|id| id == railway_id) {
                    return Err(Error::rule(format!(
                        "{} already has a station at {}",
                        railway_id, hex
                    )));
                }
            }
            _ => {
                return Err(Error::rule(format!(
                    "no city at {} slot {}",
                    hex, slot
                )))
            }
        }
        let railway = self.railway(railway_id)?;
        if railway.stations_remaining == 0 {
            return Err(Error::rule(format!(
                "{} has no stations left to place",
                railway_id
            )));
        }

        let segment = self.board.tile_at_mut(hex)?.segment_at_mut(slot)?;
        if let Some(Settlement::City {
            stations: ref mut list,
            ..
        }) = segment.settlement
        {
            list.push(railway_id.to_string());
        }
        let railway = self.railways.get_mut(railway_id).ok_or_else(|| {
            Error::internal(format!("railway {} vanished", railway_id))
        })?;
        railway.stations_remaining -= 1;
        railway.floated = true;
        Ok(())
    }

    /// Sells a train from the bank to a railway, advancing the phase
    /// when the train belongs to a later phase than the current one.
    pub fn give_train(
        &mut self,
        train_id: &str,
        railway_id: &str,
    ) -> Result<()> {
        let train = self.catalogue.train(train_id)?.clone();
        let railway = self.railway(railway_id)?;
        if railway.trains.len() >= self.phase().limit {
            return Err(Error::rule(format!(
                "{} is at the train limit of {}",
                railway_id,
                self.phase().limit
            )));
        }
        let target_ix = self.catalogue.phase_ix(train_id)?;
        self.bank.take_train(train_id)?;
        if let Some(railway) = self.railways.get_mut(railway_id) {
            railway.trains.push(train);
        }
        if target_ix > self.phase_ix {
            self.advance_to(target_ix);
        }
        Ok(())
    }

    /// Advances the game to a later phase, applying each intermediate
    /// phase's rust along the way.
    pub fn change_phase(&mut self, phase_id: &str) -> Result<()> {
        let target_ix = self.catalogue.phase_ix(phase_id)?;
        if target_ix < self.phase_ix {
            return Err(Error::rule(format!(
                "cannot regress from phase {} to phase {}",
                self.phase().id,
                phase_id
            )));
        }
        self.advance_to(target_ix);
        Ok(())
    }

    /// Walks the ordered phase table from the current phase up to
    /// `target_ix`. Every phase entered rusts its named train type, and
    /// railways left over the new limit keep only their strongest
    /// trains.
    fn advance_to(&mut self, target_ix: usize) {
        for ix in (self.phase_ix + 1)..=target_ix {
            let rust_id = self.catalogue.phases()[ix].rusts.clone();
            if let Some(rust_id) = rust_id {
                info!("Phase {} rusts all {} trains", ix, rust_id);
                self.bank.rust_trains(&rust_id);
                for railway in self.railways.values_mut() {
                    railway.trains.retain(|train| train.id != rust_id);
                }
            }
        }
        self.phase_ix = target_ix;

        let limit = self.catalogue.phases()[target_ix].limit;
        let catalogue = &self.catalogue;
        for railway in self.railways.values_mut() {
            if railway.trains.len() > limit {
                railway.trains.sort_by_key(|train| {
                    Reverse(catalogue.train_rank(&train.id).unwrap_or(0))
                });
                railway.trains.truncate(limit);
            }
        }
    }

    /// Finds the revenue-maximising assignment of routes to the given
    /// railway's trains.
    pub fn solve_for(&self, railway_id: &str) -> Result<Solution> {
        let railway = self.railway(railway_id)?;
        if !railway.floated {
            return Err(Error::rule(format!(
                "railway {} has not floated yet",
                railway_id
            )));
        }
        if railway.trains.is_empty() {
            return Err(Error::rule(format!(
                "railway {} has no trains to run",
                railway_id
            )));
        }
        info!(
            "Finding the best routes for {} with {} trains",
            railway_id,
            railway.trains.len()
        );
        let graph = RouteGraph::for_railway(&self.board, railway_id);
        let routes = candidate_routes(
            &graph,
            &self.board,
            railway_id,
            max_range(&railway.trains),
        );
        Ok(best_assignment(
            &railway.trains,
            &routes,
            &self.board,
            self.phase(),
        ))
    }

    // ------------------------------------------------------------------
    // Save-file restoration. These bypass the placement rules (a save
    // may contain state from any phase) but still keep bank accounting.
    // ------------------------------------------------------------------

    /// Restores a saved board entry.
    pub fn restore_tile(
        &mut self,
        hex: Hex,
        tile_id: &str,
        rotation: i32,
    ) -> Result<()> {
        let tile = self.catalogue.tile(tile_id)?.rotated(rotation);
        self.bank.take_tile(tile_id)?;
        self.board.place(hex, tile)
    }

    /// Restores a saved station: the first city on the hex with spare
    /// capacity, in slot order, receives it.
    pub fn restore_station(
        &mut self,
        hex: Hex,
        railway_id: &str,
    ) -> Result<()> {
        let tile = self.board.tile_at(hex).ok_or_else(|| {
            Error::rule(format!("hex {} is not on the map", hex))
        })?;
        let slot = tile
            .city_slots()
            .into_iter()
            .find(|&slot| match tile.segment_at(slot) {
                Ok(segment) => matches!(
                    &segment.settlement,
                    Some(Settlement::City { size, stations, .. })
                        if stations.len() < *size
                ),
                Err(_) => false,
            })
            .ok_or_else(|| {
                Error::invalid(format!(
                    "no city with spare capacity at {}",
                    hex
                ))
            })?;
        self.place_station(hex, slot, railway_id)
    }

    /// Restores a saved train without phase side effects; call
    /// [Game::restore_phase] once every train is back.
    pub fn restore_train(
        &mut self,
        train_id: &str,
        railway_id: &str,
    ) -> Result<()> {
        let train = self.catalogue.train(train_id)?.clone();
        if !self.railways.contains_key(railway_id) {
            return Err(Error::not_found(format!(
                "no railway {:?}",
                railway_id
            )));
        }
        self.bank.take_train(train_id)?;
        if let Some(railway) = self.railways.get_mut(railway_id) {
            railway.trains.push(train);
        }
        Ok(())
    }

    /// Restores the phase as the latest phase among all held trains;
    /// the phase is derivable from the trains, so saves do not store it.
    pub fn restore_phase(&mut self) {
        let latest = self
            .railways
            .values()
            .flat_map(|railway| railway.trains.iter())
            .filter_map(|train| self.catalogue.phase_ix(&train.id).ok())
            .max()
            .unwrap_or(0);
        self.phase_ix = latest;
    }
}
