//! Pan/zoom transform
//!
//! `screen = world * scale + translation`. World pixels are the space the
//! hex [`Layout`] projects into; screen pixels are surface pixels.

use glam::DVec2;
use hexgrid::{Hex, HexError, Layout};
use hexpaint_config::EditorConfig;
use tracing::debug;

use crate::constants::ZOOM_PRECISION;

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    scale: f64,
    translation: DVec2,
    min_scale: f64,
    max_scale: f64,
    /// Scale change per wheel notch
    step: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl Viewport {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            scale: config.clamp_zoom(1.0),
            translation: DVec2::ZERO,
            min_scale: config.min_zoom,
            max_scale: config.max_zoom,
            step: config.zoom_step,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn translation(&self) -> DVec2 {
        self.translation
    }

    /// Zoom one notch around `cursor`, keeping the world point under it fixed.
    ///
    /// Positive `wheel_delta` zooms in, negative zooms out, zero does nothing.
    /// The scale is clamped to its bounds; returns `false` when the scale
    /// would not change.
    pub fn zoom(&mut self, cursor: DVec2, wheel_delta: f64) -> bool {
        if wheel_delta == 0.0 || !wheel_delta.is_finite() {
            return false;
        }
        let step = self.step * wheel_delta.signum();
        let target = (self.scale + step).clamp(self.min_scale, self.max_scale);
        let new_scale = (target * ZOOM_PRECISION).round() / ZOOM_PRECISION;
        if new_scale == self.scale {
            debug!("Viewport::zoom: scale already at {:.2}, ignoring", self.scale);
            return false;
        }

        // The applied step may be smaller than requested once clamped.
        let applied = new_scale - self.scale;
        self.translation -= (cursor - self.translation) * applied / self.scale;
        self.scale = new_scale;
        debug!(
            "Viewport::zoom: scale={:.2}, translation=({:.1}, {:.1})",
            self.scale, self.translation.x, self.translation.y
        );
        true
    }

    /// Move the view by a screen-space delta (not scaled).
    pub fn pan(&mut self, delta: DVec2) {
        self.translation -= delta;
    }

    pub fn to_world(&self, screen: DVec2) -> DVec2 {
        (screen - self.translation) / self.scale
    }

    pub fn to_screen(&self, world: DVec2) -> DVec2 {
        world * self.scale + self.translation
    }

    /// The cell under a screen position, if it is addressable.
    pub fn screen_to_hex(&self, layout: &Layout, screen: DVec2) -> Result<Hex, HexError> {
        layout.pixel_to_hex(self.to_world(screen))
    }

    /// Screen position of a cell centre.
    pub fn hex_to_screen(&self, layout: &Layout, hex: Hex) -> DVec2 {
        self.to_screen(layout.hex_to_pixel(hex))
    }

    /// Screen-space corners of a cell.
    pub fn hex_corners(&self, layout: &Layout, hex: Hex) -> [DVec2; 6] {
        layout.polygon_corners(hex).map(|corner| self.to_screen(corner))
    }
}
