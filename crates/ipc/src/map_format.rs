//! Persisted map format: an ordered JSON array of `{q, r, s, value}` records.
//!
//! Only the shape of each record is checked here. Coordinate validity,
//! duplicates and palette tags are the painting crate's concern.

use serde::{Deserialize, Serialize};

use crate::error::IpcError;

/// One stored cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    pub q: i32,
    pub r: i32,
    pub s: i32,
    /// Palette tag; absent for cells that carry no paint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Lenient mirror of [`CellRecord`] so missing and fractional numbers can be
/// reported per record instead of as a bare serde error.
#[derive(Deserialize)]
struct RawCellRecord {
    q: Option<f64>,
    r: Option<f64>,
    s: Option<f64>,
    #[serde(default)]
    value: Option<String>,
}

fn integral(index: usize, field: &'static str, value: Option<f64>) -> Result<i32, IpcError> {
    let value = value.ok_or(IpcError::MissingField { index, field })?;
    if !value.is_finite()
        || value.fract() != 0.0
        || value < i32::MIN as f64
        || value > i32::MAX as f64
    {
        return Err(IpcError::NonIntegral {
            index,
            field,
            value,
        });
    }
    Ok(value as i32)
}

/// Parse a persisted map. An empty array yields no records.
pub fn parse_records(json: &str) -> Result<Vec<CellRecord>, IpcError> {
    let raw: Vec<RawCellRecord> = serde_json::from_str(json)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            Ok(CellRecord {
                q: integral(index, "q", record.q)?,
                r: integral(index, "r", record.r)?,
                s: integral(index, "s", record.s)?,
                value: record.value,
            })
        })
        .collect()
}

/// Serialize records as a compact JSON array.
pub fn records_to_json(records: &[CellRecord]) -> Result<String, IpcError> {
    Ok(serde_json::to_string(records)?)
}
