//! Whole-map overview
//!
//! The overview draws every stored cell into one square, independent of the
//! viewport. Cells keep the canvas hex size while the map is small and drop
//! to [`OVERVIEW_HEX_SIZE`] once it is not.

use glam::DVec2;
use hexgrid::{Layout, Orientation};
use tracing::trace;

use crate::cells::CellMap;
use crate::constants::{OVERVIEW_HEX_SIZE, OVERVIEW_MIN_SIDE, OVERVIEW_SHRINK_THRESHOLD};

use super::{Composite, DrawSurface, RenderPipeline};

/// Square bounding every cell of a map, with two hex sizes of margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapExtent {
    /// Top-left corner in layout pixels. Never positive.
    pub offset: DVec2,
    /// Side of the square in pixels.
    pub side: f64,
    pub hex_size: f64,
}

impl MapExtent {
    /// Measure `map` drawn at `hex_size`.
    ///
    /// The square always contains the layout origin.
    pub fn measure(map: &CellMap, orientation: Orientation, hex_size: f64) -> Self {
        let layout = Layout::new(orientation, hex_size, DVec2::ZERO);
        let margin = 2.0 * hex_size;

        let mut offset = DVec2::ZERO;
        let mut far = DVec2::ZERO;
        for cell in map.iter() {
            let pos = layout.hex_to_pixel(cell.hex);
            offset = offset.min(pos - margin);
            far = far.max(pos + margin);
        }

        let side = if map.is_empty() {
            0.0
        } else {
            (far - offset).max_element()
        };
        Self {
            offset,
            side,
            hex_size,
        }
    }

    /// Side of the surface the overview needs, in whole pixels.
    pub fn canvas_side(&self) -> u32 {
        self.side.max(OVERVIEW_MIN_SIDE).ceil() as u32
    }

    /// Layout that places the extent's top-left corner at the surface origin.
    pub fn layout(&self, orientation: Orientation) -> Layout {
        Layout::new(orientation, self.hex_size, -self.offset)
    }
}

/// Extent of the overview for a map edited with `layout`.
pub fn map_extent(map: &CellMap, layout: &Layout) -> MapExtent {
    let extent = MapExtent::measure(map, layout.orientation, layout.size);
    if extent.side > OVERVIEW_SHRINK_THRESHOLD {
        MapExtent::measure(map, layout.orientation, OVERVIEW_HEX_SIZE)
    } else {
        extent
    }
}

impl RenderPipeline {
    /// Draw every cell of `map` into `surface`, which should be at least
    /// [`MapExtent::canvas_side`] square.
    pub fn render_overview(
        &self,
        surface: &mut dyn DrawSurface,
        map: &CellMap,
        layout: &Layout,
    ) -> MapExtent {
        let extent = map_extent(map, layout);
        let overview = extent.layout(layout.orientation);

        surface.clear();
        for cell in map.iter() {
            let color = self.palette.color(cell.value);
            surface.fill_hex(&overview.polygon_corners(cell.hex), color, Composite::Paint);
        }

        trace!(
            "RenderPipeline::render_overview: {} cells, side {} at size {}",
            map.len(),
            extent.side,
            extent.hex_size
        );
        extent
    }
}

#[cfg(test)]
mod tests {
    use hexgrid::{Hex, FLAT_TOP};

    use super::*;
    use crate::render::{DrawCall, RecordingSurface};
    use crate::types::CellValue;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_empty_map_uses_minimum_side() {
        let extent = map_extent(&CellMap::new(), &Layout::flat_top(100.0));
        assert_eq!(extent.offset, DVec2::ZERO);
        assert_eq!(extent.side, 0.0);
        assert_eq!(extent.hex_size, 100.0);
        assert_eq!(extent.canvas_side(), 200);
    }

    #[test]
    fn test_large_extent_shrinks_cells() {
        let mut map = CellMap::new();
        map.set(Hex::ORIGIN, CellValue::Wall);

        // 400px square at size 100, over the threshold.
        let full = MapExtent::measure(&map, FLAT_TOP, 100.0);
        assert_eq!(full.offset, DVec2::splat(-200.0));
        assert_eq!(full.side, 400.0);

        let extent = map_extent(&map, &Layout::flat_top(100.0));
        assert_eq!(extent.hex_size, OVERVIEW_HEX_SIZE);
        assert_eq!(extent.offset, DVec2::splat(-20.0));
        assert_eq!(extent.side, 40.0);
        assert_eq!(extent.canvas_side(), 200);
    }

    #[test]
    fn test_small_extent_keeps_hex_size() {
        let mut map = CellMap::new();
        map.set(Hex::ORIGIN, CellValue::Ground);
        let extent = map_extent(&map, &Layout::flat_top(20.0));
        assert_eq!(extent.hex_size, 20.0);
        assert_eq!(extent.offset, DVec2::splat(-40.0));
        assert_eq!(extent.side, 80.0);
    }

    #[test]
    fn test_extent_covers_spread_cells() {
        let mut map = CellMap::new();
        map.set(Hex::axial(30, 0), CellValue::Water);
        map.set(Hex::axial(-10, 0), CellValue::Water);
        let extent = map_extent(&map, &Layout::flat_top(100.0));
        assert_eq!(extent.hex_size, OVERVIEW_HEX_SIZE);

        // x spans -150..450 at size 10, plus 20 of margin each side.
        assert!((extent.offset.x - -170.0).abs() < EPS);
        assert!((extent.side - 640.0).abs() < EPS);
        assert_eq!(extent.canvas_side(), 640);
    }

    #[test]
    fn test_render_overview_fills_every_cell() {
        let mut map = CellMap::new();
        map.set(Hex::axial(-3, 1), CellValue::Wall);
        map.set(Hex::axial(5, -2), CellValue::Water);
        map.set(Hex::axial(0, 4), CellValue::Ground);

        let layout = Layout::flat_top(100.0);
        let side = map_extent(&map, &layout).canvas_side() as f64;
        let mut surface = RecordingSurface::new(side as u32, side as u32);
        let extent = RenderPipeline::default().render_overview(&mut surface, &map, &layout);

        assert_eq!(surface.calls()[0], DrawCall::Clear);
        assert_eq!(surface.fills().count(), 3);
        assert_eq!(surface.outline_count(), 0);
        for call in surface.fills() {
            let DrawCall::Fill { corners, .. } = call else {
                unreachable!()
            };
            for corner in corners {
                assert!(corner.x >= 0.0 && corner.x <= side);
                assert!(corner.y >= 0.0 && corner.y <= side);
            }
        }

        // The left-most cell sits two hex sizes from the left edge.
        let left = extent.layout(layout.orientation).hex_to_pixel(Hex::axial(-3, 1));
        assert!((left.x - 2.0 * extent.hex_size).abs() < EPS);
    }
}
