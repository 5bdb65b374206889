//! Command types for IPC messages.

mod paint;

pub use paint::*;

use serde::{Deserialize, Serialize};

/// Commands issued by the chrome layer (toolbar, option bar, shortcuts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EditorCommand {
    /// Brush, tool and paint selection
    Paint(PaintCommand),
    Undo,
    Redo,
    /// Start over with an empty, untitled map
    NewMap { name: Option<String> },
    Rename { name: String },
}
