//! Value -> display colour mapping, consumed only by the render pipeline

use crate::types::CellValue;

/// Maps a cell value to an RGBA colour (0.0-1.0 per channel).
pub trait Palette {
    fn color(&self, value: CellValue) -> [f32; 4];
}

/// Ground brown, wall black, water blue; `Empty` is fully transparent.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPalette;

impl Palette for DefaultPalette {
    fn color(&self, value: CellValue) -> [f32; 4] {
        match value {
            CellValue::Empty => [0.0, 0.0, 0.0, 0.0],
            CellValue::Ground => [0.647, 0.165, 0.165, 1.0],
            CellValue::Wall => [0.0, 0.0, 0.0, 1.0],
            CellValue::Water => [0.0, 0.0, 1.0, 1.0],
        }
    }
}

/// `color` with its alpha replaced.
pub fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], alpha.clamp(0.0, 1.0)]
}
