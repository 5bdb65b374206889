//! Wire types for the hex map painter
//!
//! Everything that crosses the boundary between the painting core and its
//! collaborators lives here:
//! - [`input`] - pointer, wheel, keyboard and resize events
//! - [`commands`] - chrome-layer commands (tool, brush, history)
//! - [`map_format`] - the persisted `{q, r, s, value}` record sequence

pub mod commands;
pub mod error;
pub mod input;
pub mod map_format;

pub use commands::*;
pub use error::*;
pub use input::*;
pub use map_format::*;
