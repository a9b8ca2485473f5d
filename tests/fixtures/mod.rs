//! A small test game: a single column of hexes with an off-board
//! location at the top, two city hexes, and two railway companies.

use router18xx::prelude::*;

pub const TILES: &str = r#"[
    {"id": "8", "color": ["YELLOW"],
     "segments": [{"tracks": ["NE", "NW"]}],
     "upgrades": ["23"]},
    {"id": "9", "color": ["YELLOW"],
     "segments": [{"tracks": ["N", "S"]}]},
    {"id": "57", "color": ["YELLOW"],
     "segments": [{"tracks": ["N", "S"],
                   "settlement": {"value": 20, "size": 1},
                   "location": "C"}],
     "upgrades": ["14"]},
    {"id": "14", "color": ["GREEN"],
     "segments": [{"tracks": ["N", "S"],
                   "settlement": {"value": 30, "size": 2},
                   "location": "C"}]},
    {"id": "23", "color": ["GREEN"],
     "segments": [{"tracks": ["N", "S"]}, {"tracks": ["S", "NW"]}]}
]"#;

pub const TRAINS: &str = r#"[
    {"id": "2", "range": 2, "phase": {"color": "YELLOW", "limit": 4}},
    {"id": "3", "range": 3, "phase": {"color": "GREEN", "limit": 4}},
    {"id": "4", "range": 4,
     "phase": {"color": "GREEN", "limit": 3, "rusts": "2"}},
    {"id": "D", "diesel": true,
     "phase": {"color": "BROWN", "limit": 2, "rusts": "3"}}
]"#;

pub const BOARD: &str = r#"{
    "shape": {"C": [[2, 5]]},
    "preprinted": {"C2": "OFF", "C4": "BC", "C8": "BC"},
    "tiles": [
        {"id": "BC", "color": ["BLANK"],
         "segments": [{"settlement": {"value": 0, "size": 1},
                       "location": "C"}]},
        {"id": "OFF", "color": ["RED"],
         "segments": [{"tracks": ["S"],
                       "settlement": {"values": {"YELLOW": 20,
                                                 "GREEN": 30,
                                                 "BROWN": 40},
                                      "modifiers": {"D": 80}},
                       "location": "C"}]}
    ],
    "railways": [
        {"id": "AR", "name": "Awa Railroad", "home": "C4",
         "color": "red", "stations": 2},
        {"id": "IR", "name": "Iyo Railway", "home": "C8",
         "color": "blue", "stations": 2}
    ]
}"#;

pub const MANIFEST: &str = r#"{
    "tiles": {"8": 1, "9": 2, "57": 2, "14": 1, "23": 1},
    "trains": {"2": 3, "3": 2, "4": 1, "D": 1}
}"#;

/// Builds the test game without touching the file system.
pub fn new_game() -> Game {
    let tiles = router18xx::io::parse_tiles(TILES).unwrap();
    let (trains, phases) = router18xx::io::parse_trains(TRAINS).unwrap();
    let bank = router18xx::io::parse_manifest(MANIFEST).unwrap();
    let layout = router18xx::io::parse_layout(BOARD).unwrap();

    let mut catalogue = Catalogue::new(tiles, trains, phases).unwrap();
    for tile in &layout.extra_tiles {
        catalogue.add_tile(tile.clone());
    }
    let mut board = layout.board.clone();
    layout.place_preprinted(&mut board, &catalogue).unwrap();
    Game::new(catalogue, board, layout.railways.clone(), bank)
}

pub fn hex(coord: &str) -> Hex {
    coord.parse().unwrap()
}

/// Lays the connecting track for the column: cities on both bases and
/// plain track between them.
pub fn lay_basic_track(game: &mut Game) {
    game.place_tile(hex("C4"), "57", 0).unwrap();
    game.place_tile(hex("C6"), "9", 0).unwrap();
    game.place_tile(hex("C8"), "57", 0).unwrap();
}
