//! Hex grid geometry in cube coordinates
//!
//! This crate provides the pure geometry used by the painting engine:
//! - [`hex::Hex`] / [`hex::FractionalHex`] - integral cells and intermediate results
//! - [`layout`] - hex <-> pixel projection for flat-top and pointy-top grids
//! - [`shapes`] - line interpolation, ranges, rings and spirals
//!
//! Nothing here allocates beyond the returned collections or touches I/O.

pub mod error;
pub mod hex;
pub mod layout;
pub mod shapes;

pub use error::*;
pub use hex::*;
pub use layout::*;
pub use shapes::*;
