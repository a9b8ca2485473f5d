//! Railway companies.

use r18catalogue::Train;
use r18hex::Hex;

/// A railway company: its identity, its home hex, and the trains and
/// stations it currently holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Railway {
    /// The abbreviated company name, used as its identifier in station
    /// lists and save files.
    pub id: String,
    pub name: String,
    /// The hex holding the company's initial station space.
    pub home: Hex,
    pub trains: Vec<Train>,
    /// Stations not yet placed on the board.
    pub stations_remaining: usize,
    /// A company floats when its first station is placed; only floated
    /// companies can run routes.
    pub floated: bool,
}

impl Railway {
    pub fn new<S, T>(id: S, name: T, home: Hex, stations: usize) -> Railway
    where
        S: Into<String>,
        T: Into<String>,
    {
        Railway {
            id: id.into(),
            name: name.into(),
            home,
            trains: vec![],
            stations_remaining: stations,
            floated: false,
        }
    }
}
