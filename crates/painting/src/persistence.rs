//! Map persistence: the record codec and the store contract
//!
//! A stored map is an ordered array of `{q, r, s, value}` records (see
//! [`hexpaint_ipc::CellRecord`]). Encoding walks the map in canonical key
//! order, so equal maps always encode to identical bytes.

use std::collections::{BTreeMap, HashSet};

use hexgrid::Hex;
use hexpaint_ipc::{parse_records, records_to_json, CellRecord};
use tracing::debug;

use crate::cells::CellMap;
use crate::error::PersistenceError;
use crate::types::{Cell, CellValue};

/// Named map storage.
pub trait Persistence {
    /// Fetch a stored map and the name it was stored under.
    fn load(&self, name: &str) -> Result<(CellMap, String), PersistenceError>;

    fn save(&mut self, name: &str, cells: &CellMap) -> Result<(), PersistenceError>;
}

/// Records for every non-empty cell, in canonical key order.
pub fn encode_map(cells: &CellMap) -> Vec<CellRecord> {
    cells
        .iter()
        .filter(|cell| !cell.value.is_empty())
        .map(|cell| CellRecord {
            q: cell.hex.q,
            r: cell.hex.r,
            s: cell.hex.s,
            value: Some(cell.value.as_str().to_string()),
        })
        .collect()
}

/// Build a map from records.
///
/// Rejects coordinates that do not sum to zero, duplicate coordinates and
/// unknown palette tags. Records without a value, or valued `Empty`, are
/// skipped after validation.
pub fn decode_map(records: &[CellRecord]) -> Result<CellMap, PersistenceError> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut cells = CellMap::new();

    for (index, record) in records.iter().enumerate() {
        let hex = Hex::new(record.q, record.r, record.s)
            .map_err(|source| PersistenceError::InvalidCoordinate { index, source })?;
        let key = hex.key();
        if !seen.insert(key) {
            return Err(PersistenceError::DuplicateCoordinate { index, key });
        }

        let Some(tag) = record.value.as_deref() else {
            continue;
        };
        let value: CellValue = tag.parse().map_err(|_| PersistenceError::UnknownValue {
            index,
            value: tag.to_string(),
        })?;
        if !value.is_empty() {
            cells.insert(Cell::new(hex, value));
        }
    }

    Ok(cells)
}

pub fn map_to_json(cells: &CellMap) -> Result<String, PersistenceError> {
    Ok(records_to_json(&encode_map(cells))?)
}

pub fn map_from_json(json: &str) -> Result<CellMap, PersistenceError> {
    let records = parse_records(json)?;
    decode_map(&records)
}

/// In-process store keeping each map as its encoded JSON.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    maps: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw JSON under `name` without validating it.
    pub fn insert_raw(&mut self, name: impl Into<String>, json: impl Into<String>) {
        self.maps.insert(name.into(), json.into());
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.maps.keys().map(String::as_str)
    }

    pub fn raw(&self, name: &str) -> Option<&str> {
        self.maps.get(name).map(String::as_str)
    }
}

impl Persistence for MemoryStore {
    fn load(&self, name: &str) -> Result<(CellMap, String), PersistenceError> {
        let json = self
            .maps
            .get(name)
            .ok_or_else(|| PersistenceError::NotFound(name.to_string()))?;
        let cells = map_from_json(json)?;
        debug!("MemoryStore: loaded {:?} ({} cells)", name, cells.len());
        Ok((cells, name.to_string()))
    }

    fn save(&mut self, name: &str, cells: &CellMap) -> Result<(), PersistenceError> {
        let json = map_to_json(cells)?;
        self.maps.insert(name.to_string(), json);
        Ok(())
    }
}
