//! Property tests for map history and the persisted map format.

use std::collections::HashSet;

use hexgrid::Hex;
use painting::{map_from_json, map_to_json, Cell, CellMap, CellValue, MapHistory};
use proptest::prelude::*;

fn value_strategy() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Empty),
        Just(CellValue::Ground),
        Just(CellValue::Wall),
        Just(CellValue::Water),
    ]
}

fn cell_strategy() -> impl Strategy<Value = Cell> {
    (-20i32..20, -20i32..20, value_strategy())
        .prop_map(|(q, r, value)| Cell::new(Hex::axial(q, r), value))
}

fn batch_strategy() -> impl Strategy<Value = Vec<Cell>> {
    prop::collection::vec(cell_strategy(), 0..40)
}

/// A batch with no repeated coordinate.
fn distinct_batch_strategy() -> impl Strategy<Value = Vec<Cell>> {
    batch_strategy().prop_map(|cells| {
        let mut seen = HashSet::new();
        cells
            .into_iter()
            .filter(|cell| seen.insert(cell.hex.key()))
            .collect()
    })
}

proptest! {
    #[test]
    fn applying_twice_equals_applying_once(
        prior in batch_strategy(),
        batch in distinct_batch_strategy(),
    ) {
        let mut once = MapHistory::default();
        once.apply(prior.clone());
        once.apply(batch.clone());

        let mut twice = once.clone();
        twice.apply(batch);
        prop_assert_eq!(once.map(), twice.map());
    }

    #[test]
    fn empty_only_batch_leaves_empty_map(
        hexes in prop::collection::vec((-20i32..20, -20i32..20), 0..30),
    ) {
        let mut history = MapHistory::default();
        history.apply(hexes.into_iter().map(|(q, r)| Cell::empty(Hex::axial(q, r))));
        prop_assert!(history.map().is_empty());
    }

    #[test]
    fn map_never_stores_empty(batches in prop::collection::vec(batch_strategy(), 1..8)) {
        let mut history = MapHistory::default();
        for batch in batches {
            history.apply(batch);
            prop_assert!(history.map().iter().all(|cell| !cell.value.is_empty()));
        }
    }

    #[test]
    fn undo_and_redo_are_exact(prior in batch_strategy(), batch in batch_strategy()) {
        let mut history = MapHistory::default();
        history.apply(prior);
        let before = history.map().clone();

        history.apply(batch);
        let after = history.map().clone();

        prop_assert!(history.undo());
        prop_assert_eq!(history.map(), &before);
        prop_assert!(history.redo());
        prop_assert_eq!(history.map(), &after);
    }

    #[test]
    fn undo_depth_is_capped(applies in 0usize..30) {
        let mut history = MapHistory::default();
        for i in 0..applies {
            history.apply([Cell::new(Hex::axial(i as i32, 0), CellValue::Wall)]);
        }
        let changed = (0..applies).filter(|_| history.undo()).count();
        prop_assert_eq!(changed, applies.min(10));
    }

    #[test]
    fn persisted_map_round_trips(batch in batch_strategy()) {
        let map: CellMap = batch.into_iter().collect::<CellMap>().without_empty();
        let json = map_to_json(&map).unwrap();
        prop_assert_eq!(map_from_json(&json).unwrap(), map);
    }
}
