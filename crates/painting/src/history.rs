//! The edited map and its bounded undo/redo history
//!
//! Every mutation goes through [`MapHistory::dispatch`] (or its pure form
//! [`MapHistory::reduce`]) with a [`HistoryCommand`]. Snapshots are whole
//! independent copies of the map; with a capacity of ten they stay small.

use std::collections::VecDeque;

use hexpaint_config::HISTORY_CAPACITY;
use tracing::{debug, info, warn};

use crate::cells::CellMap;
use crate::constants::DEFAULT_MAP_NAME;
use crate::error::PersistenceError;
use crate::persistence::Persistence;
use crate::types::Cell;

/// One mutation of the history state.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryCommand {
    /// Merge a committed stroke into the map
    Apply(CellMap),
    Undo,
    Redo,
    /// Replace the map and forget all history
    New { cells: CellMap, name: String },
    /// Change the map name only
    Rename(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapHistory {
    map: CellMap,
    name: String,
    undo_stack: VecDeque<CellMap>,
    redo_stack: VecDeque<CellMap>,
    capacity: usize,
}

impl Default for MapHistory {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

impl MapHistory {
    /// An empty, unnamed map keeping at most `capacity` snapshots per stack.
    pub fn new(capacity: usize) -> Self {
        Self {
            map: CellMap::new(),
            name: DEFAULT_MAP_NAME.to_string(),
            undo_stack: VecDeque::with_capacity(capacity),
            redo_stack: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn map(&self) -> &CellMap {
        &self.map
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Run one command against this state.
    ///
    /// Returns `true` if the map, its history or its name changed.
    pub fn dispatch(&mut self, command: HistoryCommand) -> bool {
        match command {
            HistoryCommand::Apply(batch) => {
                self.apply(batch);
                true
            }
            HistoryCommand::Undo => self.undo(),
            HistoryCommand::Redo => self.redo(),
            HistoryCommand::New { cells, name } => {
                self.new_map(cells, name);
                true
            }
            HistoryCommand::Rename(name) => {
                self.rename(name);
                true
            }
        }
    }

    /// Pure form of [`dispatch`](Self::dispatch): consume the state, return the next one.
    pub fn reduce(mut self, command: HistoryCommand) -> Self {
        self.dispatch(command);
        self
    }

    /// Commit a batch of edits as one undoable step.
    ///
    /// The pre-apply snapshot is taken before the merge. Later entries win
    /// on key collisions and `Empty` deletes. An empty batch still records a
    /// step.
    pub fn apply(&mut self, batch: impl IntoIterator<Item = Cell>) {
        push_bounded(&mut self.undo_stack, self.map.clone(), self.capacity);
        self.redo_stack.clear();
        self.map.merge(batch);
        debug!(
            "MapHistory::apply: {} cells, undo depth {}",
            self.map.len(),
            self.undo_stack.len()
        );
    }

    /// Restore the snapshot taken before the most recent step.
    ///
    /// Returns `false` (and does nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo_stack.pop_back() else {
            debug!("MapHistory::undo: no entries available");
            return false;
        };
        let current = std::mem::replace(&mut self.map, previous);
        push_bounded(&mut self.redo_stack, current, self.capacity);
        debug!(
            "MapHistory::undo: {} cells, undo={} redo={}",
            self.map.len(),
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop_back() else {
            debug!("MapHistory::redo: no entries available");
            return false;
        };
        let current = std::mem::replace(&mut self.map, next);
        push_bounded(&mut self.undo_stack, current, self.capacity);
        debug!(
            "MapHistory::redo: {} cells, undo={} redo={}",
            self.map.len(),
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    /// Replace the map, clear both stacks and set the name.
    ///
    /// `Empty` cells in `cells` are dropped.
    pub fn new_map(&mut self, cells: CellMap, name: impl Into<String>) {
        self.map = cells.without_empty();
        self.name = name.into();
        self.undo_stack.clear();
        self.redo_stack.clear();
        info!("New map {:?} ({} cells)", self.name, self.map.len());
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Load a stored map in place of the current one.
    ///
    /// On failure nothing here changes and the error is returned.
    pub fn load(&mut self, store: &dyn Persistence, name: &str) -> Result<(), PersistenceError> {
        match store.load(name) {
            Ok((cells, name)) => {
                self.new_map(cells, name);
                Ok(())
            }
            Err(err) => {
                warn!("Failed to load map {:?}: {}", name, err);
                Err(err)
            }
        }
    }

    /// Store the current map under the current name.
    pub fn save(&self, store: &mut dyn Persistence) -> Result<(), PersistenceError> {
        store.save(&self.name, &self.map)?;
        info!("Saved map {:?} ({} cells)", self.name, self.map.len());
        Ok(())
    }
}

/// Push onto the back, dropping from the front past `capacity`.
fn push_bounded(stack: &mut VecDeque<CellMap>, snapshot: CellMap, capacity: usize) {
    if capacity == 0 {
        return;
    }
    stack.push_back(snapshot);
    while stack.len() > capacity {
        stack.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use hexgrid::Hex;

    use super::*;
    use crate::persistence::MemoryStore;
    use crate::types::CellValue;

    fn batch(cells: &[(i32, i32, CellValue)]) -> Vec<Cell> {
        cells
            .iter()
            .map(|&(q, r, value)| Cell::new(Hex::axial(q, r), value))
            .collect()
    }

    #[test]
    fn test_apply_then_undo_redo() {
        let mut history = MapHistory::default();
        history.apply(batch(&[(0, 0, CellValue::Wall)]));
        let before = history.map().clone();

        history.apply(batch(&[(1, 0, CellValue::Water), (0, 0, CellValue::Empty)]));
        let after = history.map().clone();
        assert_eq!(after.len(), 1);

        assert!(history.undo());
        assert_eq!(history.map(), &before);
        assert!(history.can_redo());

        assert!(history.redo());
        assert_eq!(history.map(), &after);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_single_wall_stamp() {
        let mut history = MapHistory::default();
        history.apply(batch(&[(0, 0, CellValue::Wall)]));
        assert_eq!(history.map().len(), 1);
        assert_eq!(history.map().value_at(Hex::ORIGIN), CellValue::Wall);
    }

    #[test]
    fn test_undo_redo_empty_are_noops() {
        let mut history = MapHistory::default();
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(history.map().is_empty());
        assert_eq!(history.undo_len(), 0);
    }

    #[test]
    fn test_apply_clears_redo() {
        let mut history = MapHistory::default();
        history.apply(batch(&[(0, 0, CellValue::Ground)]));
        history.undo();
        assert_eq!(history.redo_len(), 1);
        history.apply(batch(&[(2, 2, CellValue::Ground)]));
        assert_eq!(history.redo_len(), 0);
        assert!(!history.redo());
    }

    #[test]
    fn test_undo_depth_is_bounded() {
        let mut history = MapHistory::default();
        for i in 0..15 {
            history.apply(batch(&[(i, 0, CellValue::Ground)]));
        }
        assert_eq!(history.undo_len(), HISTORY_CAPACITY);

        let changed = (0..15).filter(|_| history.undo()).count();
        assert_eq!(changed, 10);
        // The oldest reachable state holds the first five applies.
        assert_eq!(history.map().len(), 5);
        assert_eq!(history.redo_len(), 10);
    }

    #[test]
    fn test_empty_only_batch_on_empty_map() {
        let mut history = MapHistory::default();
        history.apply(batch(&[(0, 0, CellValue::Empty), (4, -2, CellValue::Empty)]));
        assert!(history.map().is_empty());
        assert_eq!(history.undo_len(), 1);
    }

    #[test]
    fn test_new_map_resets_history() {
        let mut history = MapHistory::default();
        history.apply(batch(&[(0, 0, CellValue::Ground)]));
        history.apply(batch(&[(1, 0, CellValue::Ground)]));
        history.undo();

        let cells: CellMap = batch(&[(5, 5, CellValue::Water), (6, 5, CellValue::Empty)])
            .into_iter()
            .collect();
        history.new_map(cells, "island");
        assert_eq!(history.name(), "island");
        assert_eq!(history.map().len(), 1);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_rename_keeps_map_and_stacks() {
        let mut history = MapHistory::default();
        history.apply(batch(&[(0, 0, CellValue::Ground)]));
        history.rename("cave");
        assert_eq!(history.name(), "cave");
        assert_eq!(history.undo_len(), 1);
        assert_eq!(history.map().len(), 1);
    }

    #[test]
    fn test_reduce_matches_dispatch() {
        let commands = vec![
            HistoryCommand::Apply(batch(&[(0, 0, CellValue::Wall)]).into_iter().collect()),
            HistoryCommand::Apply(batch(&[(0, 1, CellValue::Water)]).into_iter().collect()),
            HistoryCommand::Undo,
            HistoryCommand::Rename("reduced".to_string()),
            HistoryCommand::Redo,
        ];

        let reduced = commands
            .iter()
            .cloned()
            .fold(MapHistory::default(), MapHistory::reduce);

        let mut dispatched = MapHistory::default();
        for command in commands {
            dispatched.dispatch(command);
        }

        assert_eq!(reduced, dispatched);
        assert_eq!(reduced.name(), "reduced");
        assert_eq!(reduced.map().len(), 2);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let mut history = MapHistory::default();
        history.rename("saved");
        history.apply(batch(&[(1, -1, CellValue::Wall), (2, -1, CellValue::Ground)]));
        history.save(&mut store).unwrap();

        let mut loaded = MapHistory::default();
        loaded.apply(batch(&[(9, 9, CellValue::Water)]));
        loaded.load(&store, "saved").unwrap();
        assert_eq!(loaded.name(), "saved");
        assert_eq!(loaded.map(), history.map());
        assert!(!loaded.can_undo());
    }

    #[test]
    fn test_failed_load_leaves_state_untouched() {
        let mut store = MemoryStore::new();
        store.insert_raw("broken", r#"[{"q":1,"r":1,"s":1,"value":"Wall"}]"#);

        let mut history = MapHistory::default();
        history.apply(batch(&[(0, 0, CellValue::Ground)]));
        let before = history.clone();

        assert!(history.load(&store, "broken").is_err());
        assert!(matches!(
            history.load(&store, "missing"),
            Err(PersistenceError::NotFound(_))
        ));
        assert_eq!(history, before);
    }
}
