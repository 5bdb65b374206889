//! Hex <-> pixel projection
//!
//! A [`Layout`] pairs one of the two fixed [`Orientation`] bases with a hex
//! size (centre-to-corner radius in pixels) and a pixel origin.

use glam::DVec2;

use crate::error::HexError;
use crate::hex::{FractionalHex, Hex};

/// Forward (`f`) and inverse (`b`) 2x2 basis matrices for a hex orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub f0: f64,
    pub f1: f64,
    pub f2: f64,
    pub f3: f64,
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub b3: f64,
    /// First corner angle, in multiples of 60 degrees.
    pub start_angle: f64,
}

const SQRT_3: f64 = 1.732_050_807_568_877_2;

pub const POINTY_TOP: Orientation = Orientation {
    f0: SQRT_3,
    f1: SQRT_3 / 2.0,
    f2: 0.0,
    f3: 3.0 / 2.0,
    b0: SQRT_3 / 3.0,
    b1: -1.0 / 3.0,
    b2: 0.0,
    b3: 2.0 / 3.0,
    start_angle: 0.5,
};

pub const FLAT_TOP: Orientation = Orientation {
    f0: 3.0 / 2.0,
    f1: 0.0,
    f2: SQRT_3 / 2.0,
    f3: SQRT_3,
    b0: 2.0 / 3.0,
    b1: 0.0,
    b2: -1.0 / 3.0,
    b3: SQRT_3 / 3.0,
    start_angle: 0.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub orientation: Orientation,
    /// Centre-to-corner radius in pixels. Must be positive.
    pub size: f64,
    pub origin: DVec2,
}

impl Layout {
    pub fn new(orientation: Orientation, size: f64, origin: DVec2) -> Self {
        Self {
            orientation,
            size,
            origin,
        }
    }

    pub fn flat_top(size: f64) -> Self {
        Self::new(FLAT_TOP, size, DVec2::ZERO)
    }

    pub fn pointy_top(size: f64) -> Self {
        Self::new(POINTY_TOP, size, DVec2::ZERO)
    }

    /// Pixel position of a hex centre.
    pub fn hex_to_pixel(&self, hex: Hex) -> DVec2 {
        let m = &self.orientation;
        let q = hex.q as f64;
        let r = hex.r as f64;
        let x = (m.f0 * q + m.f1 * r) * self.size;
        let y = (m.f2 * q + m.f3 * r) * self.size;
        DVec2::new(x + self.origin.x, y + self.origin.y)
    }

    /// Unrounded cube position of a pixel.
    pub fn pixel_to_fractional(&self, point: DVec2) -> FractionalHex {
        let m = &self.orientation;
        let pt = (point - self.origin) / self.size;
        let q = m.b0 * pt.x + m.b1 * pt.y;
        let r = m.b2 * pt.x + m.b3 * pt.y;
        FractionalHex { q, r, s: -q - r }
    }

    /// The cell containing a pixel. Fails for pixels so far out that the
    /// cell is not addressable.
    pub fn pixel_to_hex(&self, point: DVec2) -> Result<Hex, HexError> {
        self.pixel_to_fractional(point).round()
    }

    /// Offset of corner `corner` (0..6) from a hex centre.
    pub fn corner_offset(&self, corner: usize) -> DVec2 {
        let angle =
            2.0 * std::f64::consts::PI * (self.orientation.start_angle + corner as f64) / 6.0;
        DVec2::new(self.size * angle.cos(), self.size * angle.sin())
    }

    /// The six corners of a hex, in pixels.
    pub fn polygon_corners(&self, hex: Hex) -> [DVec2; 6] {
        let center = self.hex_to_pixel(hex);
        std::array::from_fn(|i| center + self.corner_offset(i))
    }

    /// Pixel extent of a `cols` x `rows` block of hexes.
    pub fn map_size_to_pixel(&self, cols: u32, rows: u32) -> DVec2 {
        DVec2::new(
            self.orientation.f0 * self.size * cols as f64,
            self.orientation.f3 * self.size * rows as f64,
        )
    }
}
