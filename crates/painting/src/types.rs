use std::fmt;
use std::str::FromStr;

use hexgrid::Hex;
use serde::{Deserialize, Serialize};

use crate::error::UnknownValue;

/// What a cell holds
///
/// A closed palette plus the `Empty` sentinel. Painting `Empty` erases:
/// committed maps never store it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    Ground,
    Wall,
    Water,
}

impl CellValue {
    /// Values a user can paint with.
    pub const PALETTE: [CellValue; 3] = [CellValue::Ground, CellValue::Wall, CellValue::Water];

    pub fn is_empty(self) -> bool {
        self == CellValue::Empty
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CellValue::Empty => "Empty",
            CellValue::Ground => "Ground",
            CellValue::Wall => "Wall",
            CellValue::Water => "Water",
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CellValue {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Empty" => Ok(CellValue::Empty),
            "Ground" => Ok(CellValue::Ground),
            "Wall" => Ok(CellValue::Wall),
            "Water" => Ok(CellValue::Water),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

/// A coordinate and the value painted there
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub hex: Hex,
    pub value: CellValue,
}

impl Cell {
    pub fn new(hex: Hex, value: CellValue) -> Self {
        Self { hex, value }
    }

    /// An erase marker for `hex`.
    pub fn empty(hex: Hex) -> Self {
        Self {
            hex,
            value: CellValue::Empty,
        }
    }
}
