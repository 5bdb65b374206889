//! Replay scripts: a JSON array of input events and chrome commands

use std::path::Path;

use hexpaint_ipc::{EditorCommand, InputEvent};
use painting::{FrameStats, HexCanvas, RecordingSurface};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::AppError;

/// One scripted step. Input event and command tags never overlap, so the
/// untagged form is unambiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    Input(InputEvent),
    Command(EditorCommand),
}

pub fn parse_script(json: &str) -> Result<Vec<ScriptStep>, AppError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>, AppError> {
    let json = std::fs::read_to_string(path).map_err(|source| AppError::ReadScript {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&json)
}

/// Totals from one replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub steps: usize,
    /// Steps the canvas ignored or refused
    pub skipped: usize,
    pub frames: usize,
    /// Stats of the most recent frame
    pub last_frame: Option<FrameStats>,
}

/// Feed every step to the canvas, ticking the display clock after each one.
pub fn replay(
    canvas: &mut HexCanvas,
    steps: impl IntoIterator<Item = ScriptStep>,
    surface: &mut RecordingSurface,
) -> ReplaySummary {
    let mut summary = ReplaySummary::default();

    for (index, step) in steps.into_iter().enumerate() {
        summary.steps += 1;
        let handled = match step {
            ScriptStep::Input(event) => canvas.handle_input(event),
            ScriptStep::Command(command) => match canvas.apply_command(command) {
                Ok(()) => true,
                Err(err) => {
                    warn!("Step {}: {}", index, err);
                    false
                }
            },
        };
        if !handled {
            summary.skipped += 1;
        }

        let display = canvas.display();
        surface.resize(display.width, display.height);
        if let Some(stats) = canvas.on_refresh(surface) {
            debug!(
                "Frame {}: {} grid, {} map, {} stroke, {} preview, {} culled",
                summary.frames,
                stats.grid_cells,
                stats.map_cells,
                stats.stroke_cells,
                stats.preview_cells,
                stats.culled
            );
            summary.frames += 1;
            summary.last_frame = Some(stats);
        }
    }

    info!(
        "Replayed {} steps ({} skipped), {} frames",
        summary.steps, summary.skipped, summary.frames
    );
    summary
}
