//! Paint command types for the painting system.

use serde::{Deserialize, Serialize};

/// Active editing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Brush,
    Eraser,
    Line,
    Grab,
}

impl Tool {
    /// Whether the primary button pans instead of painting.
    pub fn pans(self) -> bool {
        matches!(self, Tool::Grab)
    }
}

/// Commands for controlling the brush.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PaintCommand {
    SetTool { tool: Tool },
    /// Brush radius in cells (0 = single cell)
    SetBrushRadius { radius: u32 },
    /// Palette tag painted by the Brush and Line tools
    SetPaint { value: String },
}
