//! Shared configuration for the hex map painter
//!
//! This crate provides the single source of truth for surface dimensions,
//! grid geometry, zoom limits and history depth shared by the painting
//! engine and the headless runner.

use serde::{Deserialize, Serialize};

/// Default surface width in pixels
pub const DEFAULT_WIDTH: u32 = 800;

/// Default surface height in pixels
pub const DEFAULT_HEIGHT: u32 = 500;

/// Default hex radius in world pixels
pub const DEFAULT_HEX_SIZE: f64 = 100.0;

/// Smallest zoom factor
pub const MIN_ZOOM: f64 = 0.2;

/// Largest zoom factor
pub const MAX_ZOOM: f64 = 2.0;

/// Zoom change per wheel notch
pub const ZOOM_STEP: f64 = 0.1;

/// Largest brush radius a paint command may select
pub const DEFAULT_MAX_BRUSH_RADIUS: u32 = 20;

/// Snapshots kept on each of the undo and redo stacks
pub const HISTORY_CAPACITY: usize = 10;

/// Key that switches the primary button into panning while held
pub const DEFAULT_PAN_KEY: &str = " ";

/// Display configuration for the drawing surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Surface width in logical pixels
    pub width: u32,
    /// Surface height in logical pixels
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl DisplayConfig {
    /// Create a new display config with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Hexagon resting orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridOrientation {
    #[default]
    FlatTop,
    PointyTop,
}

impl GridOrientation {
    /// Parse from a short name ("flat" / "pointy")
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "flat" | "flat_top" | "flat-top" => Some(Self::FlatTop),
            "pointy" | "pointy_top" | "pointy-top" => Some(Self::PointyTop),
            _ => None,
        }
    }
}

/// Editing behaviour shared by a canvas session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Hex radius in world pixels
    pub hex_size: f64,
    pub orientation: GridOrientation,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_step: f64,
    pub history_capacity: usize,
    /// Upper bound for the brush radius
    pub max_brush_radius: u32,
    /// `KeyboardEvent::key` value of the temporary pan key
    pub pan_key: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hex_size: DEFAULT_HEX_SIZE,
            orientation: GridOrientation::default(),
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: ZOOM_STEP,
            history_capacity: HISTORY_CAPACITY,
            max_brush_radius: DEFAULT_MAX_BRUSH_RADIUS,
            pan_key: DEFAULT_PAN_KEY.to_string(),
        }
    }
}

impl EditorConfig {
    /// Defaults overridden by `HEXPAINT_ORIENTATION` and `HEXPAINT_HEX_SIZE`
    ///
    /// Unparseable or non-positive values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(orientation) = lookup("HEXPAINT_ORIENTATION")
            .as_deref()
            .and_then(GridOrientation::parse)
        {
            config.orientation = orientation;
        }
        if let Some(size) = lookup("HEXPAINT_HEX_SIZE")
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|s| s.is_finite() && *s > 0.0)
        {
            config.hex_size = size;
        }
        config
    }

    /// Clamp a zoom factor into the configured bounds
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}
