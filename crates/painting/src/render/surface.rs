//! Drawing surface abstraction

use glam::DVec2;

/// How a filled cell combines with what is beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Composite {
    /// Normal paint over
    #[default]
    Paint,
    /// Punch a hole (erase preview)
    CutOut,
}

/// A 2D target that can draw hexagons given their screen-space corners.
pub trait DrawSurface {
    /// Surface size in pixels (width, height)
    fn size(&self) -> (u32, u32);

    /// Wipe the whole surface.
    fn clear(&mut self);

    /// Stroke a cell outline (background grid).
    fn outline_hex(&mut self, corners: &[DVec2; 6]);

    fn fill_hex(&mut self, corners: &[DVec2; 6], color: [f32; 4], composite: Composite);

    /// Draw the translucent brush preview over a cell.
    fn preview_hex(&mut self, corners: &[DVec2; 6], color: [f32; 4]);
}

/// One recorded draw operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Outline {
        corners: [DVec2; 6],
    },
    Fill {
        corners: [DVec2; 6],
        color: [f32; 4],
        composite: Composite,
    },
    Preview {
        corners: [DVec2; 6],
        color: [f32; 4],
    },
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Calls recorded since the last clear.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn fills(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Fill { .. }))
    }

    pub fn outline_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Outline { .. }))
            .count()
    }

    pub fn preview_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Preview { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // The previous frame's calls are gone once the surface is cleared.
    fn clear(&mut self) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear);
    }

    fn outline_hex(&mut self, corners: &[DVec2; 6]) {
        self.calls.push(DrawCall::Outline { corners: *corners });
    }

    fn fill_hex(&mut self, corners: &[DVec2; 6], color: [f32; 4], composite: Composite) {
        self.calls.push(DrawCall::Fill {
            corners: *corners,
            color,
            composite,
        });
    }

    fn preview_hex(&mut self, corners: &[DVec2; 6], color: [f32; 4]) {
        self.calls.push(DrawCall::Preview {
            corners: *corners,
            color,
        });
    }
}
