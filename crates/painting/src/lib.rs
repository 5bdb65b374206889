//! Hex map painting core
//!
//! This crate turns pointer gestures into edits of a hex cell map:
//! - [`types`] - cell values and cells
//! - [`cells::CellMap`] - the coordinate -> cell collection shared by maps and strokes
//! - [`viewport::Viewport`] - pan/zoom transform between screen and world pixels
//! - [`brush`] - brush footprint and the stroke tool state machine
//! - [`history::MapHistory`] - the edited map with bounded undo/redo
//! - [`persistence`] - `{q, r, s, value}` codec and the store contract
//! - [`render`] - draw-call contract and frame coalescing
//! - [`canvas::HexCanvas`] - one editing session wiring the above to input events

pub mod brush;
pub mod canvas;
pub mod cells;
pub mod constants;
pub mod error;
pub mod history;
pub mod palette;
pub mod persistence;
pub mod render;
pub mod types;
pub mod viewport;

pub use brush::*;
pub use canvas::*;
pub use cells::*;
pub use constants::*;
pub use error::*;
pub use history::*;
pub use palette::*;
pub use persistence::*;
pub use render::*;
pub use types::*;
pub use viewport::*;
