//! Cube coordinates
//!
//! A cell is addressed by three integers `(q, r, s)` with `q + r + s == 0`.
//! Geometry that passes through continuous space (interpolation, pixel
//! projection) produces a [`FractionalHex`], which must be rounded back to
//! a [`Hex`] before it identifies a cell.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::HexError;

/// Unit steps in cube space, indexed E, NE, NW, W, SW, SE (in q/r terms).
pub const HEX_DIRECTIONS: [Hex; 6] = [
    Hex { q: 1, r: 0, s: -1 },
    Hex { q: 1, r: -1, s: 0 },
    Hex { q: 0, r: -1, s: 1 },
    Hex { q: -1, r: 0, s: 1 },
    Hex { q: -1, r: 1, s: 0 },
    Hex { q: 0, r: 1, s: -1 },
];

/// Cells at distance 2 that share no edge with the centre.
pub const HEX_DIAGONALS: [Hex; 6] = [
    Hex { q: 2, r: -1, s: -1 },
    Hex { q: 1, r: -2, s: 1 },
    Hex { q: -1, r: -1, s: 2 },
    Hex { q: -2, r: 1, s: 1 },
    Hex { q: -1, r: 2, s: -1 },
    Hex { q: 1, r: 1, s: -2 },
];

/// Largest component magnitude a rounded coordinate may have.
///
/// Keeps every component, and sums of a handful of them, well inside `i32`.
pub const MAX_COORDINATE: i32 = 1 << 26;

/// An integral cube coordinate identifying one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

impl Hex {
    pub const ORIGIN: Self = Self { q: 0, r: 0, s: 0 };

    /// Create a cube coordinate, rejecting components that do not sum to zero.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self, HexError> {
        if q as i64 + r as i64 + s as i64 != 0 {
            return Err(HexError::InvalidCoordinate {
                q: q as f64,
                r: r as f64,
                s: s as f64,
            });
        }
        Ok(Self { q, r, s })
    }

    /// Create a coordinate from its axial pair; `s` is derived.
    pub const fn axial(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Canonical map key. `s` is redundant and dropped.
    pub const fn key(&self) -> HexKey {
        HexKey { q: self.q, r: self.r }
    }

    /// Distance from the origin.
    pub fn length(&self) -> i32 {
        (self.q.abs() + self.r.abs() + self.s.abs()) / 2
    }

    pub fn distance(&self, other: Hex) -> i32 {
        (*self - other).length()
    }

    /// Unit step for a direction index; any integer is taken modulo 6.
    pub fn direction(direction: i32) -> Hex {
        HEX_DIRECTIONS[direction.rem_euclid(6) as usize]
    }

    pub fn neighbor(&self, direction: i32) -> Hex {
        *self + Self::direction(direction)
    }

    pub fn diagonal_neighbor(&self, direction: i32) -> Hex {
        *self + HEX_DIAGONALS[direction.rem_euclid(6) as usize]
    }

    /// Rotate 60 degrees counter-clockwise around the origin.
    pub fn rotate_left(&self) -> Hex {
        Hex {
            q: -self.s,
            r: -self.q,
            s: -self.r,
        }
    }

    /// Rotate 60 degrees clockwise around the origin.
    pub fn rotate_right(&self) -> Hex {
        Hex {
            q: -self.r,
            r: -self.s,
            s: -self.q,
        }
    }

    pub fn to_fractional(self) -> FractionalHex {
        FractionalHex {
            q: self.q as f64,
            r: self.r as f64,
            s: self.s as f64,
        }
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(self, other: Hex) -> Hex {
        Hex {
            q: self.q + other.q,
            r: self.r + other.r,
            s: self.s + other.s,
        }
    }
}

impl Sub for Hex {
    type Output = Hex;

    fn sub(self, other: Hex) -> Hex {
        Hex {
            q: self.q - other.q,
            r: self.r - other.r,
            s: self.s - other.s,
        }
    }
}

impl Neg for Hex {
    type Output = Hex;

    fn neg(self) -> Hex {
        Hex {
            q: -self.q,
            r: -self.r,
            s: -self.s,
        }
    }
}

impl Mul<i32> for Hex {
    type Output = Hex;

    fn mul(self, k: i32) -> Hex {
        Hex {
            q: self.q * k,
            r: self.r * k,
            s: self.s * k,
        }
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}

/// Key identifying a cell in a map: the axial `(q, r)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HexKey {
    pub q: i32,
    pub r: i32,
}

impl HexKey {
    pub const fn hex(&self) -> Hex {
        Hex::axial(self.q, self.r)
    }
}

impl From<Hex> for HexKey {
    fn from(hex: Hex) -> Self {
        hex.key()
    }
}

impl fmt::Display for HexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.q, self.r)
    }
}

/// Slack allowed in the component sum of a [`FractionalHex`].
pub const FRACTIONAL_TOLERANCE: f64 = 1e-6;

/// A cube coordinate in continuous space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FractionalHex {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FractionalHex {
    /// Create a fractional coordinate. The components must sum to 0 within
    /// [`FRACTIONAL_TOLERANCE`].
    pub fn new(q: f64, r: f64, s: f64) -> Result<Self, HexError> {
        let sum = q + r + s;
        if sum.is_nan() || sum.abs() > FRACTIONAL_TOLERANCE {
            return Err(HexError::InvalidCoordinate { q, r, s });
        }
        Ok(Self { q, r, s })
    }

    /// Round to the containing cell.
    ///
    /// Each component is rounded on its own; the component with the largest
    /// rounding error is then recomputed from the other two so the result
    /// sums to zero exactly. Fails when a component is not finite or lies
    /// beyond [`MAX_COORDINATE`].
    pub fn round(&self) -> Result<Hex, HexError> {
        let in_range = |c: f64| c.is_finite() && c.abs() <= MAX_COORDINATE as f64;
        if !(in_range(self.q) && in_range(self.r) && in_range(self.s)) {
            return Err(HexError::OutOfRange {
                q: self.q,
                r: self.r,
                s: self.s,
            });
        }
        Ok(self.round_unchecked())
    }

    /// [`round`](Self::round) for inputs already known to be in range.
    pub(crate) fn round_unchecked(&self) -> Hex {
        let mut qi = self.q.round();
        let mut ri = self.r.round();
        let mut si = self.s.round();

        let q_diff = (qi - self.q).abs();
        let r_diff = (ri - self.r).abs();
        let s_diff = (si - self.s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            qi = -ri - si;
        } else if r_diff > s_diff {
            ri = -qi - si;
        } else {
            si = -qi - ri;
        }

        Hex {
            q: qi as i32,
            r: ri as i32,
            s: si as i32,
        }
    }

    /// Component-wise linear interpolation towards `other`.
    pub fn lerp(&self, other: FractionalHex, t: f64) -> FractionalHex {
        FractionalHex {
            q: self.q * (1.0 - t) + other.q * t,
            r: self.r * (1.0 - t) + other.r * t,
            s: self.s * (1.0 - t) + other.s * t,
        }
    }
}

impl From<Hex> for FractionalHex {
    fn from(hex: Hex) -> Self {
        hex.to_fractional()
    }
}
