//! Brush engine for stroke generation
//!
//! This module turns pointer positions into a transient stroke: a
//! [`CellMap`] of edits that is handed to the map history when the gesture
//! ends. The brush footprint is stamped at every cell along the straight
//! hex line between consecutive pointer cells, so fast pointer motion never
//! leaves gaps.

use glam::DVec2;
use hexgrid::{line, range, Hex, Layout};
use hexpaint_config::DEFAULT_MAX_BRUSH_RADIUS;
use tracing::debug;

pub use hexpaint_ipc::Tool;

use crate::cells::CellMap;
use crate::types::{Cell, CellValue};
use crate::viewport::Viewport;

/// Brush footprint: every offset within `radius` of the origin, each
/// carrying the value the brush paints.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    radius: u32,
    value: CellValue,
    offsets: Vec<Hex>,
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(0, CellValue::Ground)
    }
}

impl Brush {
    pub fn new(radius: u32, value: CellValue) -> Self {
        Self {
            radius,
            value,
            offsets: range(Hex::ORIGIN, radius),
        }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn value(&self) -> CellValue {
        self.value
    }

    pub fn offsets(&self) -> &[Hex] {
        &self.offsets
    }

    /// The footprint placed at `center`.
    pub fn cells_at(&self, center: Hex) -> impl Iterator<Item = Cell> + '_ {
        self.offsets
            .iter()
            .map(move |offset| Cell::new(center + *offset, self.value))
    }

    /// Write the footprint at `center` into `target`.
    pub fn stamp(&self, center: Hex, target: &mut CellMap) {
        target.extend(self.cells_at(center));
    }
}

/// Pointer gesture state. Drawing and panning are only entered from idle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    Idle,
    Drawing {
        /// Cell under the pointer when the stroke started
        anchor: Hex,
        /// Last cell a move was processed for
        last: Hex,
    },
    Panning {
        /// Last screen position seen while panning
        last_pos: DVec2,
    },
}

/// Stroke tool state machine
///
/// Holds the selected tool, radius and paint value, the derived brush, and
/// the stroke buffer of the gesture in progress. The radius never exceeds
/// `max_radius`.
#[derive(Debug, Clone)]
pub struct BrushEngine {
    tool: Tool,
    radius: u32,
    max_radius: u32,
    paint: CellValue,
    brush: Brush,
    stroke: CellMap,
    state: GestureState,
    /// Cell under the pointer, for the brush preview
    pointer_hex: Option<Hex>,
}

impl Default for BrushEngine {
    fn default() -> Self {
        Self::new(Tool::Brush, 0, CellValue::Ground)
    }
}

impl BrushEngine {
    pub fn new(tool: Tool, radius: u32, paint: CellValue) -> Self {
        let mut engine = Self {
            tool,
            radius: radius.min(DEFAULT_MAX_BRUSH_RADIUS),
            max_radius: DEFAULT_MAX_BRUSH_RADIUS,
            paint,
            brush: Brush::default(),
            stroke: CellMap::new(),
            state: GestureState::Idle,
            pointer_hex: None,
        };
        engine.rebuild_brush();
        engine
    }

    /// Replace the radius bound, shrinking the current radius if needed.
    pub fn with_max_radius(mut self, max_radius: u32) -> Self {
        self.max_radius = max_radius;
        if self.radius > max_radius {
            self.set_radius(max_radius);
        }
        self
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn max_radius(&self) -> u32 {
        self.max_radius
    }

    pub fn paint(&self) -> CellValue {
        self.paint
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// The uncommitted stroke buffer.
    pub fn stroke(&self) -> &CellMap {
        &self.stroke
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn pointer_hex(&self) -> Option<Hex> {
        self.pointer_hex
    }

    pub fn is_idle(&self) -> bool {
        self.state == GestureState::Idle
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, GestureState::Drawing { .. })
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.state, GestureState::Panning { .. })
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.rebuild_brush();
    }

    /// Set the brush radius, clamped to `max_radius`. Returns the radius
    /// actually applied.
    pub fn set_radius(&mut self, radius: u32) -> u32 {
        self.radius = radius.min(self.max_radius);
        self.rebuild_brush();
        self.radius
    }

    /// Set the value painted by the Brush and Line tools.
    pub fn set_paint(&mut self, paint: CellValue) {
        self.paint = paint;
        self.rebuild_brush();
    }

    fn rebuild_brush(&mut self) {
        let value = if self.tool == Tool::Eraser {
            CellValue::Empty
        } else {
            self.paint
        };
        self.brush = Brush::new(self.radius, value);
        debug!(
            "BrushEngine: brush radius={} value={} ({} cells)",
            self.radius,
            value,
            self.brush.offsets().len()
        );
    }

    /// Begin a paint stroke at a screen position.
    ///
    /// Stamps the brush at the cell under the pointer into a fresh stroke.
    /// Ignored unless idle, or when the pointer is over no addressable cell.
    pub fn start_stroke(&mut self, screen: DVec2, viewport: &Viewport, layout: &Layout) -> bool {
        if !self.is_idle() {
            debug!("BrushEngine::start_stroke: not idle ({:?}), ignoring", self.state);
            return false;
        }

        let anchor = match viewport.screen_to_hex(layout, screen) {
            Ok(hex) => hex,
            Err(err) => {
                debug!("BrushEngine::start_stroke: {}, ignoring", err);
                return false;
            }
        };
        self.stroke.clear();
        self.brush.stamp(anchor, &mut self.stroke);
        self.state = GestureState::Drawing {
            anchor,
            last: anchor,
        };
        self.pointer_hex = Some(anchor);
        debug!(
            "BrushEngine::start_stroke: tool={:?} anchor={} ({} cells)",
            self.tool,
            anchor,
            self.stroke.len()
        );
        true
    }

    /// Track the pointer and extend the stroke if one is in progress.
    ///
    /// Returns `true` when the stroke buffer changed. Moves that stay inside
    /// the last processed cell do nothing, and so do moves over no
    /// addressable cell.
    pub fn continue_stroke(&mut self, screen: DVec2, viewport: &Viewport, layout: &Layout) -> bool {
        let hex = match viewport.screen_to_hex(layout, screen) {
            Ok(hex) => hex,
            Err(err) => {
                debug!("BrushEngine::continue_stroke: {}, ignoring", err);
                self.pointer_hex = None;
                return false;
            }
        };
        self.pointer_hex = Some(hex);

        let GestureState::Drawing { anchor, last } = self.state else {
            return false;
        };
        if hex.key() == last.key() {
            return false;
        }

        if self.tool == Tool::Line {
            // The preview is always the straight segment anchor -> pointer.
            self.stroke.clear();
            for center in line(anchor, hex) {
                self.brush.stamp(center, &mut self.stroke);
            }
        } else {
            for center in line(last, hex) {
                self.brush.stamp(center, &mut self.stroke);
            }
        }

        self.state = GestureState::Drawing { anchor, last: hex };
        true
    }

    /// Finish the stroke and hand back its edits as one batch.
    ///
    /// Returns `None` when no stroke was in progress.
    pub fn end_stroke(&mut self) -> Option<CellMap> {
        if !self.is_drawing() {
            return None;
        }
        self.state = GestureState::Idle;
        let batch = std::mem::take(&mut self.stroke);
        debug!("BrushEngine::end_stroke: {} cells", batch.len());
        Some(batch)
    }

    /// Enter panning at a screen position. Ignored unless idle.
    pub fn begin_pan(&mut self, screen: DVec2) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.state = GestureState::Panning { last_pos: screen };
        true
    }

    /// Pan the viewport by the pointer motion since the last call.
    pub fn pan_to(&mut self, screen: DVec2, viewport: &mut Viewport) -> bool {
        let GestureState::Panning { last_pos } = self.state else {
            return false;
        };
        viewport.pan(last_pos - screen);
        self.state = GestureState::Panning { last_pos: screen };
        true
    }

    pub fn end_pan(&mut self) -> bool {
        if !self.is_panning() {
            return false;
        }
        self.state = GestureState::Idle;
        true
    }

    /// Pointer released or left the surface: finish whatever gesture is
    /// active. A stroke is always committed, never discarded.
    pub fn release(&mut self) -> Option<CellMap> {
        self.end_pan();
        self.end_stroke()
    }

    /// Forget the preview position (pointer left the surface).
    pub fn clear_pointer(&mut self) {
        self.pointer_hex = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Viewport, Layout) {
        (Viewport::default(), Layout::flat_top(10.0))
    }

    fn screen_of(layout: &Layout, hex: Hex) -> DVec2 {
        Viewport::default().hex_to_screen(layout, hex)
    }

    #[test]
    fn test_brush_footprint() {
        let brush = Brush::new(2, CellValue::Wall);
        assert_eq!(brush.offsets().len(), 19);
        let cells: Vec<_> = brush.cells_at(Hex::axial(5, 5)).collect();
        assert!(cells.iter().all(|c| c.value == CellValue::Wall));
        assert!(cells.iter().any(|c| c.hex == Hex::axial(5, 5)));
    }

    #[test]
    fn test_eraser_brush_paints_empty() {
        let mut engine = BrushEngine::new(Tool::Brush, 1, CellValue::Water);
        assert_eq!(engine.brush().value(), CellValue::Water);
        engine.set_tool(Tool::Eraser);
        assert_eq!(engine.brush().value(), CellValue::Empty);
        engine.set_paint(CellValue::Wall);
        assert_eq!(engine.brush().value(), CellValue::Empty);
        engine.set_tool(Tool::Line);
        assert_eq!(engine.brush().value(), CellValue::Wall);
        engine.set_radius(3);
        assert_eq!(engine.brush().offsets().len(), 37);
    }

    #[test]
    fn test_single_stamp() {
        let (viewport, layout) = setup();
        let mut engine = BrushEngine::new(Tool::Brush, 0, CellValue::Wall);
        assert!(engine.start_stroke(DVec2::ZERO, &viewport, &layout));
        assert!(engine.is_drawing());

        let batch = engine.end_stroke().unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.value_at(Hex::ORIGIN), CellValue::Wall);
        assert!(engine.is_idle());
        assert!(engine.stroke().is_empty());
    }

    #[test]
    fn test_brush_accumulates_path() {
        let (viewport, layout) = setup();
        let mut engine = BrushEngine::new(Tool::Brush, 0, CellValue::Ground);
        engine.start_stroke(screen_of(&layout, Hex::ORIGIN), &viewport, &layout);
        engine.continue_stroke(screen_of(&layout, Hex::axial(3, 0)), &viewport, &layout);
        engine.continue_stroke(screen_of(&layout, Hex::axial(3, 2)), &viewport, &layout);

        let batch = engine.end_stroke().unwrap();
        // 4 cells along q, then 2 more along r.
        assert_eq!(batch.len(), 6);
        assert!(batch.contains(Hex::axial(1, 0)));
        assert!(batch.contains(Hex::axial(3, 1)));
    }

    #[test]
    fn test_fast_motion_leaves_no_gaps() {
        let (viewport, layout) = setup();
        let mut engine = BrushEngine::new(Tool::Brush, 0, CellValue::Ground);
        engine.start_stroke(screen_of(&layout, Hex::ORIGIN), &viewport, &layout);
        engine.continue_stroke(screen_of(&layout, Hex::axial(0, 8)), &viewport, &layout);
        let batch = engine.end_stroke().unwrap();
        assert_eq!(batch.len(), 9);
    }

    #[test]
    fn test_move_within_same_cell_is_noop() {
        let (viewport, layout) = setup();
        let mut engine = BrushEngine::default();
        engine.start_stroke(DVec2::ZERO, &viewport, &layout);
        assert!(!engine.continue_stroke(DVec2::new(1.0, 1.0), &viewport, &layout));
        assert_eq!(engine.stroke().len(), 1);
    }

    #[test]
    fn test_line_tool_replaces_preview() {
        let (viewport, layout) = setup();
        let mut engine = BrushEngine::new(Tool::Line, 0, CellValue::Wall);
        engine.start_stroke(screen_of(&layout, Hex::ORIGIN), &viewport, &layout);
        engine.continue_stroke(screen_of(&layout, Hex::axial(0, 3)), &viewport, &layout);
        engine.continue_stroke(screen_of(&layout, Hex::axial(2, 1)), &viewport, &layout);
        engine.continue_stroke(screen_of(&layout, Hex::axial(3, 0)), &viewport, &layout);

        let batch = engine.end_stroke().unwrap();
        let expected: CellMap = line(Hex::ORIGIN, Hex::new(3, 0, -3).unwrap())
            .into_iter()
            .map(|h| Cell::new(h, CellValue::Wall))
            .collect();
        assert_eq!(batch, expected);
    }

    #[test]
    fn test_line_tool_back_to_anchor() {
        let (viewport, layout) = setup();
        let mut engine = BrushEngine::new(Tool::Line, 0, CellValue::Wall);
        engine.start_stroke(screen_of(&layout, Hex::ORIGIN), &viewport, &layout);
        engine.continue_stroke(screen_of(&layout, Hex::axial(4, 0)), &viewport, &layout);
        engine.continue_stroke(screen_of(&layout, Hex::ORIGIN), &viewport, &layout);
        assert_eq!(engine.stroke().len(), 1);
    }

    #[test]
    fn test_eraser_stroke_holds_empty() {
        let (viewport, layout) = setup();
        let mut engine = BrushEngine::new(Tool::Eraser, 1, CellValue::Wall);
        engine.start_stroke(DVec2::ZERO, &viewport, &layout);
        let batch = engine.end_stroke().unwrap();
        assert_eq!(batch.len(), 7);
        assert!(batch.iter().all(|c| c.value.is_empty()));
    }

    #[test]
    fn test_gestures_are_exclusive() {
        let (mut viewport, layout) = setup();
        let mut engine = BrushEngine::default();

        assert!(engine.begin_pan(DVec2::new(100.0, 100.0)));
        assert!(!engine.start_stroke(DVec2::ZERO, &viewport, &layout));
        assert!(engine.pan_to(DVec2::new(110.0, 95.0), &mut viewport));
        assert_eq!(viewport.translation(), DVec2::new(10.0, -5.0));
        assert!(engine.stroke().is_empty());
        assert_eq!(engine.release(), None);
        assert!(engine.is_idle());

        engine.start_stroke(DVec2::ZERO, &viewport, &layout);
        assert!(!engine.begin_pan(DVec2::ZERO));
        assert!(engine.release().is_some());
    }

    #[test]
    fn test_radius_is_clamped() {
        let mut engine = BrushEngine::default();
        assert_eq!(engine.max_radius(), DEFAULT_MAX_BRUSH_RADIUS);
        assert_eq!(engine.set_radius(u32::MAX), DEFAULT_MAX_BRUSH_RADIUS);
        assert_eq!(engine.radius(), DEFAULT_MAX_BRUSH_RADIUS);

        let mut engine = BrushEngine::new(Tool::Brush, 6, CellValue::Wall).with_max_radius(2);
        assert_eq!(engine.radius(), 2);
        assert_eq!(engine.brush().offsets().len(), 19);
        assert_eq!(engine.set_radius(1), 1);
        assert_eq!(engine.set_radius(9), 2);
    }

    #[test]
    fn test_far_pointer_starts_no_stroke() {
        let (viewport, layout) = setup();
        let mut engine = BrushEngine::default();
        let far = DVec2::new(1e12, 0.0);
        assert!(!engine.start_stroke(far, &viewport, &layout));
        assert!(engine.is_idle());
        assert!(engine.stroke().is_empty());
    }

    #[test]
    fn test_far_pointer_does_not_extend_stroke() {
        let (viewport, layout) = setup();
        let mut engine = BrushEngine::default();
        engine.start_stroke(DVec2::ZERO, &viewport, &layout);
        assert!(!engine.continue_stroke(DVec2::new(0.0, -1e12), &viewport, &layout));
        assert_eq!(engine.pointer_hex(), None);

        let batch = engine.end_stroke().unwrap();
        assert_eq!(batch.len(), 1);
        assert!(batch.contains(Hex::ORIGIN));
    }

    #[test]
    fn test_end_without_stroke() {
        let mut engine = BrushEngine::default();
        assert_eq!(engine.end_stroke(), None);
        assert!(!engine.end_pan());
    }

    #[test]
    fn test_hover_tracks_pointer_hex() {
        let (viewport, layout) = setup();
        let mut engine = BrushEngine::default();
        let target = Hex::axial(2, -1);
        assert!(!engine.continue_stroke(screen_of(&layout, target), &viewport, &layout));
        assert_eq!(engine.pointer_hex(), Some(target));
        assert!(engine.stroke().is_empty());
        engine.clear_pointer();
        assert_eq!(engine.pointer_hex(), None);
    }
}
