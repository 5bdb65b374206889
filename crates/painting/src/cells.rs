//! Cell collection keyed by axial coordinate
//!
//! The committed map and an in-progress stroke have the same shape, so both
//! are a [`CellMap`]. A stroke may hold `Empty` cells (erase markers); the
//! committed map never does, which [`CellMap::merge`] enforces.

use std::collections::btree_map::{self, BTreeMap};

use hexgrid::{Hex, HexKey};

use crate::types::{Cell, CellValue};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellMap {
    cells: BTreeMap<HexKey, Cell>,
}

impl CellMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Store a cell, replacing whatever was at its key.
    pub fn insert(&mut self, cell: Cell) -> Option<Cell> {
        self.cells.insert(cell.hex.key(), cell)
    }

    pub fn set(&mut self, hex: Hex, value: CellValue) -> Option<Cell> {
        self.insert(Cell::new(hex, value))
    }

    pub fn get(&self, hex: Hex) -> Option<&Cell> {
        self.cells.get(&hex.key())
    }

    /// The value at `hex`, `Empty` if nothing is stored.
    pub fn value_at(&self, hex: Hex) -> CellValue {
        self.get(hex).map(|c| c.value).unwrap_or_default()
    }

    pub fn contains(&self, hex: Hex) -> bool {
        self.cells.contains_key(&hex.key())
    }

    pub fn remove(&mut self, hex: Hex) -> Option<Cell> {
        self.cells.remove(&hex.key())
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Cells in canonical `(q, r)` order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = HexKey> + '_ {
        self.cells.keys().copied()
    }

    /// Merge edits into this collection, last write wins per key.
    ///
    /// An `Empty` edit deletes the key instead of storing it.
    pub fn merge(&mut self, edits: impl IntoIterator<Item = Cell>) {
        for cell in edits {
            if cell.value.is_empty() {
                self.cells.remove(&cell.hex.key());
            } else {
                self.cells.insert(cell.hex.key(), cell);
            }
        }
    }

    /// Drop every `Empty` entry.
    pub fn without_empty(mut self) -> Self {
        self.cells.retain(|_, cell| !cell.value.is_empty());
        self
    }
}

impl FromIterator<Cell> for CellMap {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut map = CellMap::new();
        map.extend(iter);
        map
    }
}

impl Extend<Cell> for CellMap {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        for cell in iter {
            self.insert(cell);
        }
    }
}

impl IntoIterator for CellMap {
    type Item = Cell;
    type IntoIter = btree_map::IntoValues<HexKey, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_values()
    }
}

impl<'a> IntoIterator for &'a CellMap {
    type Item = &'a Cell;
    type IntoIter = btree_map::Values<'a, HexKey, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.values()
    }
}
