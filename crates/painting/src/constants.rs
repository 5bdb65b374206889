/// Name given to maps that were never named.
pub const DEFAULT_MAP_NAME: &str = "untitled";

/// Alpha applied to the paint colour of the brush preview.
pub const PREVIEW_ALPHA: f32 = 0.3;

/// Zoom factors are kept at two decimals so repeated steps return exactly.
pub const ZOOM_PRECISION: f64 = 100.0;

/// Overview hex size used once a map outgrows [`OVERVIEW_SHRINK_THRESHOLD`].
pub const OVERVIEW_HEX_SIZE: f64 = 10.0;

/// Overview side, in pixels at the canvas hex size, above which cells shrink.
pub const OVERVIEW_SHRINK_THRESHOLD: f64 = 100.0;

/// Smallest overview surface side in pixels.
pub const OVERVIEW_MIN_SIDE: f64 = 200.0;
