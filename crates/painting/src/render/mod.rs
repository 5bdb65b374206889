//! Frame production
//!
//! [`RenderPipeline`] turns the session state into draw calls on a
//! [`DrawSurface`]:
//! 1. Clear
//! 2. Background grid outlines for visible cells
//! 3. Committed map cells
//! 4. The in-progress stroke (cut out when erasing)
//! 5. Brush preview at the pointer cell
//!
//! Cells whose projected centre falls outside the surface, expanded by one
//! scaled cell size, are skipped before any draw call is issued.
//!
//! [`RenderPipeline::render_overview`] draws the whole map, ignoring the
//! viewport, for a minimap.

mod overview;
mod scheduler;
mod surface;

use glam::DVec2;
use hexgrid::{Hex, Layout, MAX_COORDINATE};
use tracing::trace;

use crate::brush::{BrushEngine, Tool};
use crate::cells::CellMap;
use crate::constants::PREVIEW_ALPHA;
use crate::palette::{with_alpha, DefaultPalette, Palette};
use crate::viewport::Viewport;

pub use overview::{map_extent, MapExtent};
pub use scheduler::FrameScheduler;
pub use surface::{Composite, DrawCall, DrawSurface, RecordingSurface};

/// Everything a frame reads.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub viewport: &'a Viewport,
    pub layout: &'a Layout,
    pub map: &'a CellMap,
    pub engine: &'a BrushEngine,
}

/// Counts from one rendered frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub grid_cells: usize,
    pub map_cells: usize,
    pub stroke_cells: usize,
    pub preview_cells: usize,
    /// Map and stroke cells skipped as off-screen
    pub culled: usize,
}

/// Screen rectangle cells must project into, margin included.
#[derive(Debug, Clone, Copy)]
struct VisibleRect {
    min: DVec2,
    max: DVec2,
}

impl VisibleRect {
    fn new(size: (u32, u32), margin: f64) -> Self {
        Self {
            min: DVec2::splat(-margin),
            max: DVec2::new(size.0 as f64 + margin, size.1 as f64 + margin),
        }
    }

    fn contains(&self, point: DVec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    fn corners(&self) -> [DVec2; 4] {
        [
            self.min,
            DVec2::new(self.max.x, self.min.y),
            self.max,
            DVec2::new(self.min.x, self.max.y),
        ]
    }
}

pub struct RenderPipeline {
    palette: Box<dyn Palette>,
}

impl std::fmt::Debug for RenderPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderPipeline").finish_non_exhaustive()
    }
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new(Box::new(DefaultPalette))
    }
}

impl RenderPipeline {
    pub fn new(palette: Box<dyn Palette>) -> Self {
        Self { palette }
    }

    pub fn render_frame(&self, surface: &mut dyn DrawSurface, frame: FrameInput<'_>) -> FrameStats {
        let FrameInput {
            viewport,
            layout,
            map,
            engine,
        } = frame;
        let mut stats = FrameStats::default();
        let rect = VisibleRect::new(surface.size(), layout.size * viewport.scale());

        surface.clear();

        for hex in visible_grid(&rect, viewport, layout) {
            surface.outline_hex(&viewport.hex_corners(layout, hex));
            stats.grid_cells += 1;
        }

        for cell in map.iter() {
            if !rect.contains(viewport.hex_to_screen(layout, cell.hex)) {
                stats.culled += 1;
                continue;
            }
            let color = self.palette.color(cell.value);
            surface.fill_hex(&viewport.hex_corners(layout, cell.hex), color, Composite::Paint);
            stats.map_cells += 1;
        }

        let composite = if engine.tool() == Tool::Eraser {
            Composite::CutOut
        } else {
            Composite::Paint
        };
        for cell in engine.stroke().iter() {
            if !rect.contains(viewport.hex_to_screen(layout, cell.hex)) {
                stats.culled += 1;
                continue;
            }
            let color = self.palette.color(cell.value);
            surface.fill_hex(&viewport.hex_corners(layout, cell.hex), color, composite);
            stats.stroke_cells += 1;
        }

        let show_preview = engine.tool() != Tool::Grab && !engine.is_panning();
        if let Some(center) = engine.pointer_hex().filter(|_| show_preview) {
            let brush = engine.brush();
            let color = with_alpha(self.palette.color(brush.value()), PREVIEW_ALPHA);
            for cell in brush.cells_at(center) {
                surface.preview_hex(&viewport.hex_corners(layout, cell.hex), color);
                stats.preview_cells += 1;
            }
        }

        trace!("RenderPipeline::render_frame: {:?}", stats);
        stats
    }
}

/// Every cell whose centre projects inside `rect`.
fn visible_grid(rect: &VisibleRect, viewport: &Viewport, layout: &Layout) -> Vec<Hex> {
    let mut q_min = f64::INFINITY;
    let mut q_max = f64::NEG_INFINITY;
    let mut r_min = f64::INFINITY;
    let mut r_max = f64::NEG_INFINITY;
    for corner in rect.corners() {
        let frac = layout.pixel_to_fractional(viewport.to_world(corner));
        q_min = q_min.min(frac.q);
        q_max = q_max.max(frac.q);
        r_min = r_min.min(frac.r);
        r_max = r_max.max(frac.r);
    }

    let bound = |v: f64| v.clamp(-(MAX_COORDINATE as f64), MAX_COORDINATE as f64) as i32;
    let mut cells = Vec::new();
    for q in (bound(q_min.floor()) - 1)..=(bound(q_max.ceil()) + 1) {
        for r in (bound(r_min.floor()) - 1)..=(bound(r_max.ceil()) + 1) {
            let hex = Hex::axial(q, r);
            if rect.contains(viewport.hex_to_screen(layout, hex)) {
                cells.push(hex);
            }
        }
    }
    cells
}
