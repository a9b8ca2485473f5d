//! Cube-coordinate hexes and the six track directions.

use crate::error::{Error, Result};

/// A direction in which track may leave a hex; each value names one of
/// the six hex edges.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    N,
    NE,
    SE,
    S,
    SW,
    NW,
}

/// All six directions, in rotation order.
pub const DIRECTIONS: [Direction; 6] = [
    Direction::N,
    Direction::NE,
    Direction::SE,
    Direction::S,
    Direction::SW,
    Direction::NW,
];

impl Direction {
    /// Returns this direction rotated clockwise by `turns` sixths of a
    /// full turn; negative values rotate anti-clockwise.
    pub fn rotated(self, turns: i32) -> Direction {
        let ix = (self as i32 + turns).rem_euclid(6);
        DIRECTIONS[ix as usize]
    }

    /// Returns the direction pointing the opposite way.
    pub fn opposite(self) -> Direction {
        self.rotated(3)
    }

    /// Returns the direction whose unit vector is `delta`.
    pub fn from_unit(delta: Hex) -> Result<Direction> {
        DIRECTIONS
            .iter()
            .copied()
            .find(|dir| dir.unit() == delta)
            .ok_or_else(|| {
                Error::invalid(format!("{:?} is not a unit hex vector", delta))
            })
    }

    /// Returns the unit vector that moves one hex in this direction.
    pub fn unit(self) -> Hex {
        use Direction::*;

        match self {
            N => Hex::new(0, -1),
            NE => Hex::new(1, -1),
            SE => Hex::new(1, 0),
            S => Hex::new(0, 1),
            SW => Hex::new(-1, 1),
            NW => Hex::new(-1, 0),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::str::FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Direction> {
        use Direction::*;

        match s {
            "N" => Ok(N),
            "NE" => Ok(NE),
            "SE" => Ok(SE),
            "S" => Ok(S),
            "SW" => Ok(SW),
            "NW" => Ok(NW),
            _ => Err(Error::invalid(format!("unknown direction {:?}", s))),
        }
    }
}

/// A cell of the hexagonal grid, in cube coordinates.
///
/// The third coordinate is derived (`q + r + s == 0`), so invalid
/// coordinates cannot be constructed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hex {
    q: i32,
    r: i32,
}

impl Hex {
    pub fn new(q: i32, r: i32) -> Hex {
        Hex { q, r }
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Creates a hex from double-height coordinates, where `col` counts
    /// columns from 1 (column "A") and `row` counts rows from 1.
    pub fn from_doubled(col: i32, row: i32) -> Hex {
        let q = col;
        // NOTE: the floor division keeps odd and even rows in a column
        // two apart, as double-height coordinates require.
        let r = (row - col).div_euclid(2) + 1;
        Hex::new(q, r)
    }

    /// Returns the hex adjacent to this one in the given direction.
    pub fn neighbour(&self, dir: Direction) -> Hex {
        *self + dir.unit()
    }

    /// Returns the direction from this hex towards an adjacent hex.
    pub fn direction_towards(&self, other: Hex) -> Result<Direction> {
        Direction::from_unit(other - *self)
    }
}

impl std::ops::Add for Hex {
    type Output = Hex;

    fn add(self, other: Hex) -> Hex {
        Hex::new(self.q + other.q, self.r + other.r)
    }
}

impl std::ops::Sub for Hex {
    type Output = Hex;

    fn sub(self, other: Hex) -> Hex {
        Hex::new(self.q - other.q, self.r - other.r)
    }
}

/// Prints the double-height form, e.g. `"C4"`.
impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut col = self.q;
        let row = 2 * self.r + self.q - 1;
        let mut letters = vec![];
        while col > 0 {
            let digit = (col - 1) % 26;
            letters.push((b'A' + digit as u8) as char);
            col = (col - 1) / 26;
        }
        letters.reverse();
        let col_str: String = letters.into_iter().collect();
        write!(f, "{}{}", col_str, row)
    }
}

/// Parses the double-height form: one or more column letters followed by
/// a row number, e.g. `"C4"` or `"AB12"`.
impl std::str::FromStr for Hex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Hex> {
        let letters: String =
            s.chars().take_while(|c| c.is_ascii_uppercase()).collect();
        let digits = &s[letters.len()..];
        if letters.is_empty()
            || digits.is_empty()
            || !digits.chars().all(|c| c.is_ascii_digit())
        {
            return Err(Error::invalid(format!(
                "{:?} is not a valid hex coordinate",
                s
            )));
        }
        let col = letters
            .chars()
            .fold(0, |acc, c| acc * 26 + (c as i32 - 'A' as i32 + 1));
        let row: i32 = digits
            .parse()
            .map_err(|_| Error::invalid(format!("invalid row in {:?}", s)))?;
        Ok(Hex::from_doubled(col, row))
    }
}
