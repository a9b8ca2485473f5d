//! Board layout parsing and whole-game loading.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use r18catalogue::Catalogue;
use r18game::{Game, Railway};
use r18hex::error::Result;
use r18hex::Hex;
use r18map::Board;
use r18tile::Tile;

use crate::catalog::TileDef;
use crate::{bad_json, read_file};

/// The default number of stations a railway may place, when the layout
/// does not specify one.
const DEFAULT_STATIONS: usize = 3;

#[derive(Deserialize, Debug)]
struct LayoutDef {
    /// Valid hexes, column by column: each chunk is `[start_row, count]`
    /// and rows within a chunk step by two.
    shape: BTreeMap<String, Vec<(i32, i32)>>,
    #[serde(default)]
    preprinted: BTreeMap<String, String>,
    /// Map-specific tiles (preprinted cities, off-board locations) that
    /// are merged into the catalogue.
    #[serde(default)]
    tiles: Vec<TileDef>,
    railways: Vec<RailwayDef>,
}

#[derive(Deserialize, Debug)]
struct RailwayDef {
    id: String,
    name: String,
    home: String,
    #[serde(default)]
    stations: Option<usize>,
    /// The company colour is only meaningful to renderers.
    #[serde(default)]
    #[allow(dead_code)]
    color: Option<String>,
}

/// The parsed pieces of a board layout: the blank board, the railway
/// roster, and any map-specific tile definitions.
pub struct Layout {
    pub board: Board,
    pub railways: Vec<Railway>,
    pub extra_tiles: Vec<Tile>,
    preprinted: BTreeMap<String, String>,
}

impl Layout {
    /// Places the layout's preprinted tiles; their definitions must
    /// already be in the catalogue.
    pub fn place_preprinted(
        &self,
        board: &mut Board,
        catalogue: &Catalogue,
    ) -> Result<()> {
        for (coord, tile_id) in &self.preprinted {
            let hex: Hex = coord.parse()?;
            board.place(hex, catalogue.tile(tile_id)?.clone())?;
        }
        Ok(())
    }
}

/// Parses a board layout file.
pub fn parse_layout(json: &str) -> Result<Layout> {
    let def: LayoutDef = serde_json::from_str(json).map_err(bad_json)?;
    let mut hexes = vec![];
    for (column, chunks) in &def.shape {
        for &(start, count) in chunks {
            for step in 0..count {
                let coord = format!("{}{}", column, start + 2 * step);
                hexes.push(coord.parse::<Hex>()?);
            }
        }
    }
    let board = Board::with_hexes(hexes);
    let railways = def
        .railways
        .iter()
        .map(|railway| {
            Ok(Railway::new(
                railway.id.clone(),
                railway.name.clone(),
                railway.home.parse::<Hex>()?,
                railway.stations.unwrap_or(DEFAULT_STATIONS),
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    let extra_tiles = def
        .tiles
        .iter()
        .map(|tile| tile.build())
        .collect::<Result<Vec<_>>>()?;
    Ok(Layout {
        board,
        railways,
        extra_tiles,
        preprinted: def.preprinted,
    })
}

/// Loads a complete game from a data directory holding `tiles.json`,
/// `trains.json`, `board.json`, and `manifest.json`.
pub fn load_game<P: AsRef<Path>>(dir: P) -> Result<Game> {
    let dir = dir.as_ref();
    let tiles = crate::parse_tiles(&read_file(dir.join("tiles.json"))?)?;
    let (trains, phases) =
        crate::parse_trains(&read_file(dir.join("trains.json"))?)?;
    let bank = crate::parse_manifest(&read_file(dir.join("manifest.json"))?)?;
    let layout = parse_layout(&read_file(dir.join("board.json"))?)?;

    let mut catalogue = Catalogue::new(tiles, trains, phases)?;
    for tile in &layout.extra_tiles {
        catalogue.add_tile(tile.clone());
    }
    let mut board = layout.board.clone();
    layout.place_preprinted(&mut board, &catalogue)?;
    Ok(Game::new(catalogue, board, layout.railways.clone(), bank))
}
