use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HexError {
    #[error("Invalid cube coordinate ({q}, {r}, {s}): q + r + s must be 0")]
    InvalidCoordinate { q: f64, r: f64, s: f64 },

    #[error("Cube coordinate ({q}, {r}, {s}) is outside the addressable grid")]
    OutOfRange { q: f64, r: f64, s: f64 },
}
