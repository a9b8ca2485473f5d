//! Pixel-space geometry for rendering hexes.
//!
//! Rendering itself lives outside this workspace; these functions define
//! the contract that renderers rely on: for a fixed hex size, corner,
//! midpoint, and city-dot positions are deterministic functions of the
//! hex coordinate and the slot index.

use crate::hex::Hex;

/// Cartesian coordinates as a struct with named fields.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl std::ops::Add for Coord {
    type Output = Coord;

    fn add(self, other: Coord) -> Coord {
        Coord {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl std::ops::Sub for Coord {
    type Output = Coord;

    fn sub(self, other: Coord) -> Coord {
        Coord {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl From<(f64, f64)> for Coord {
    fn from(tuple: (f64, f64)) -> Self {
        Coord {
            x: tuple.0,
            y: tuple.1,
        }
    }
}

impl Coord {
    /// Returns the point at some fraction between this point (`frac = 0`)
    /// and the `other` point (`frac = 1`).
    pub fn interpolate(&self, other: &Self, frac: f64) -> Self {
        Coord {
            x: self.x + frac * (other.x - self.x),
            y: self.y + frac * (other.y - self.y),
        }
    }

    /// Returns the magnitude (Euclidean norm) of this coordinate.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Maps hex coordinates into pixel space, for flat-topped hexes of a
/// fixed size (the distance from the centre to any corner).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    pub hex_size: f64,
}

impl Layout {
    pub fn new(hex_size: f64) -> Layout {
        Layout { hex_size }
    }

    /// The centre pixel of a hex.
    pub fn centre(&self, hex: Hex) -> Coord {
        let q = hex.q() as f64;
        let r = hex.r() as f64;
        let x = self.hex_size * 1.5 * q;
        let y = self.hex_size * (3.0_f64.sqrt() / 2.0 * q + 3.0_f64.sqrt() * r);
        Coord { x, y }
    }

    /// The six corner pixels of a hex; index 0 is the first corner
    /// clockwise from midnight.
    pub fn corners(&self, hex: Hex) -> [Coord; 6] {
        let centre = self.centre(hex);
        let mut corners = [centre; 6];
        for (i, corner) in corners.iter_mut().enumerate() {
            let angle = std::f64::consts::PI / 3.0 * (i as f64 - 1.0);
            *corner = centre
                + Coord {
                    x: self.hex_size * angle.cos(),
                    y: self.hex_size * angle.sin(),
                };
        }
        corners
    }

    /// The midpoints of the six hex edges; index 0 is the upper edge,
    /// continuing clockwise. These are indexed by [Direction] value.
    ///
    /// [Direction]: crate::hex::Direction
    pub fn midpoints(&self, hex: Hex) -> [Coord; 6] {
        let corners = self.corners(hex);
        let mut mids = corners;
        for i in 0..6 {
            let prev = corners[(i + 5) % 6];
            mids[i] = corners[i].interpolate(&prev, 0.5);
        }
        mids
    }

    /// The centre pixels of the seven settlement slots: index 0 is the
    /// central slot, indices 1..=6 are the ring slots, clockwise from
    /// midnight.
    pub fn city_points(&self, hex: Hex) -> [Coord; 7] {
        let centre = self.centre(hex);
        let mids = self.midpoints(hex);
        let mut points = [centre; 7];
        for i in 0..6 {
            points[i + 1] = mids[i].interpolate(&centre, 0.5);
        }
        points
    }
}
