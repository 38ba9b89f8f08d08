//! Property tests: row/column alignment, numbering and undo/redo laws hold
//! for arbitrary edit sequences.

use checklist_core::ChecklistStore;
use checklist_model::{CellUpdate, Checklist, Column, NewColumn};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Edit {
    AddColumn,
    RemoveColumn(usize),
    SetColumns { keep: Vec<bool>, add: usize },
    AddRow,
    AddRows(usize),
    RemoveRow(usize),
    RemoveRows(Vec<usize>),
    DuplicateRow(usize),
    Reorder(usize, usize),
    UpdateCell(usize, usize, String),
    AddSubField(usize, usize),
    RemoveSubField(usize, usize, usize),
    Undo,
    Redo,
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        Just(Edit::AddColumn),
        (0..12usize).prop_map(Edit::RemoveColumn),
        (proptest::collection::vec(any::<bool>(), 0..12), 0..3usize)
            .prop_map(|(keep, add)| Edit::SetColumns { keep, add }),
        Just(Edit::AddRow),
        (0..4usize).prop_map(Edit::AddRows),
        (0..8usize).prop_map(Edit::RemoveRow),
        proptest::collection::vec(0..8usize, 0..4).prop_map(Edit::RemoveRows),
        (0..8usize).prop_map(Edit::DuplicateRow),
        (0..8usize, 0..8usize).prop_map(|(from, to)| Edit::Reorder(from, to)),
        (0..8usize, 0..12usize, "[a-z]{0,6}").prop_map(|(r, c, v)| Edit::UpdateCell(r, c, v)),
        (0..8usize, 0..12usize).prop_map(|(r, c)| Edit::AddSubField(r, c)),
        (0..8usize, 0..12usize, 0..3usize).prop_map(|(r, c, i)| Edit::RemoveSubField(r, c, i)),
        Just(Edit::Undo),
        Just(Edit::Redo),
    ]
}

/// Apply an edit, picking targets by index; out-of-range indices still go
/// through the store so rejections are exercised too.
fn apply(store: &mut ChecklistStore, edit: &Edit) {
    let doc = store.snapshot();
    let row_id = |index: usize| {
        doc.rows
            .get(index)
            .map(|row| row.id.clone())
            .unwrap_or_else(|| "missing-row".into())
    };
    let column_id = |index: usize| {
        doc.columns
            .get(index)
            .map(|column| column.id.clone())
            .unwrap_or_else(|| "missing-column".into())
    };
    match edit {
        Edit::AddColumn => {
            store.add_column(NewColumn::new("Extra", 10.0));
        }
        Edit::RemoveColumn(index) => {
            store.remove_column(&column_id(*index));
        }
        Edit::SetColumns { keep, add } => {
            let mut columns: Vec<Column> = doc
                .columns
                .iter()
                .zip(keep.iter().chain(std::iter::repeat(&true)))
                .filter(|(_, keep)| **keep)
                .map(|(column, _)| column.clone())
                .collect();
            for index in 0..*add {
                columns.push(Column::new(format!("New {index}"), 10.0));
            }
            store.set_columns(columns);
        }
        Edit::AddRow => {
            store.add_row();
        }
        Edit::AddRows(count) => {
            store.add_rows(*count);
        }
        Edit::RemoveRow(index) => {
            store.remove_row(&row_id(*index));
        }
        Edit::RemoveRows(indices) => {
            let ids: Vec<_> = indices.iter().map(|index| row_id(*index)).collect();
            store.remove_rows(&ids);
        }
        Edit::DuplicateRow(index) => {
            store.duplicate_row(&row_id(*index));
        }
        Edit::Reorder(from, to) => {
            store.reorder_rows(*from, *to);
        }
        Edit::UpdateCell(row, column, value) => {
            store.update_cell(
                &row_id(*row),
                &column_id(*column),
                CellUpdate::value(value.clone()),
            );
        }
        Edit::AddSubField(row, column) => {
            store.add_sub_field(&row_id(*row), &column_id(*column), "note");
        }
        Edit::RemoveSubField(row, column, index) => {
            store.remove_sub_field(&row_id(*row), &column_id(*column), *index);
        }
        Edit::Undo => {
            store.undo();
        }
        Edit::Redo => {
            store.redo();
        }
    }
}

fn assert_aligned(doc: &Checklist) {
    assert!(
        (1..=10).contains(&doc.columns.len()),
        "column count {}",
        doc.columns.len()
    );
    for (index, row) in doc.rows.iter().enumerate() {
        assert_eq!(row.row_number, index + 1);
        assert!(row.cells.matches(&doc.columns));
    }
    assert!(doc.check_invariants().is_ok());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn every_reachable_document_is_aligned(edits in proptest::collection::vec(edit_strategy(), 1..40)) {
        let mut store = ChecklistStore::default();
        for edit in &edits {
            apply(&mut store, edit);
            assert_aligned(store.checklist());
            prop_assert!(store.history_len() <= store.config().history_capacity);
        }
    }

    #[test]
    fn undo_then_redo_is_identity(edits in proptest::collection::vec(edit_strategy(), 1..30)) {
        let mut store = ChecklistStore::default();
        for edit in &edits {
            apply(&mut store, edit);
        }
        let before = store.snapshot();
        if store.undo() {
            prop_assert!(store.redo());
        }
        prop_assert_eq!(&*store.snapshot(), &*before);
    }

    #[test]
    fn set_columns_is_idempotent(
        edits in proptest::collection::vec(edit_strategy(), 0..20),
        keep in proptest::collection::vec(any::<bool>(), 0..12),
    ) {
        let mut store = ChecklistStore::default();
        for edit in &edits {
            apply(&mut store, edit);
        }
        let set = Edit::SetColumns { keep, add: 1 };
        apply(&mut store, &set);
        let columns = store.checklist().columns.clone();
        let once = store.checklist().rows.clone();
        store.set_columns(columns);
        prop_assert_eq!(&store.checklist().rows, &once);
    }
}
