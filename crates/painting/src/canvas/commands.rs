use hexpaint_ipc::{EditorCommand, PaintCommand};
use tracing::debug;

use crate::cells::CellMap;
use crate::constants::DEFAULT_MAP_NAME;
use crate::error::CommandError;
use crate::types::CellValue;

use super::HexCanvas;

impl HexCanvas {
    /// Apply a chrome command (toolbar, option bar, menu).
    ///
    /// Fails for a paint tag outside the palette or a brush radius above the
    /// configured maximum; nothing changes then.
    pub fn apply_command(&mut self, command: EditorCommand) -> Result<(), CommandError> {
        debug!("HexCanvas::apply_command: {:?}", command);
        match command {
            EditorCommand::Paint(paint) => self.apply_paint(paint)?,
            EditorCommand::Undo => {
                self.history.undo();
            }
            EditorCommand::Redo => {
                self.history.redo();
            }
            EditorCommand::NewMap { name } => {
                let name = name.unwrap_or_else(|| DEFAULT_MAP_NAME.to_string());
                self.history.new_map(CellMap::new(), name);
            }
            EditorCommand::Rename { name } => self.history.rename(name),
        }
        self.scheduler.request();
        Ok(())
    }

    fn apply_paint(&mut self, command: PaintCommand) -> Result<(), CommandError> {
        match command {
            PaintCommand::SetTool { tool } => self.engine.set_tool(tool),
            PaintCommand::SetBrushRadius { radius } => {
                let max = self.config.max_brush_radius;
                if radius > max {
                    return Err(CommandError::RadiusTooLarge { radius, max });
                }
                self.engine.set_radius(radius);
            }
            PaintCommand::SetPaint { value } => {
                let value: CellValue = value.parse()?;
                self.engine.set_paint(value);
            }
        }
        Ok(())
    }
}
