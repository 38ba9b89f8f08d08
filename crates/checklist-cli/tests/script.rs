//! Edit scripts applied to a store session.

use checklist_cli::script::{ScriptError, StepOutcome, apply_script, parse_script};
use checklist_core::{ChecklistStore, EditError};
use checklist_persistence::save_checklist;

fn run(store: &mut ChecklistStore, script: &str) -> Vec<StepOutcome> {
    let commands = parse_script(script).unwrap();
    apply_script(store, commands)
        .steps
        .into_iter()
        .map(|step| step.outcome)
        .collect()
}

#[test]
fn script_builds_a_checklist() {
    let mut store = ChecklistStore::default();
    let outcomes = run(
        &mut store,
        r#"[
            {"op": "set_title", "title": "Engine start"},
            {"op": "update_column", "column": 1, "update": {"label": "Item"}},
            {"op": "update_column", "column": 2, "update": {"label": "Status", "width": 20}},
            {"op": "remove_column", "column": "Column 3"},
            {"op": "add_rows", "count": 3},
            {"op": "update_cell", "row": 1, "column": "Item", "update": {"value": "Battery on"}},
            {"op": "add_sub_field", "row": 1, "column": "Item", "text": "check voltage"},
            {"op": "update_cell", "row": 2, "column": "Item", "update": {"value": "Beacon"}},
            {"op": "duplicate_row", "row": 1},
            {"op": "reorder_rows", "from": 3, "to": 0}
        ]"#,
    );

    assert!(outcomes.iter().all(StepOutcome::is_applied), "{outcomes:?}");
    let checklist = store.checklist();
    assert_eq!(checklist.title, "Engine start");
    let labels: Vec<_> = checklist.columns.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, ["Item", "Status"]);
    assert_eq!(checklist.columns[1].width, 20.0);
    assert_eq!(checklist.rows.len(), 4);

    let item = checklist.columns[0].id.clone();
    let values: Vec<_> = checklist
        .rows
        .iter()
        .map(|row| row.cell(&item).map(|cell| cell.value.clone()).unwrap_or_default())
        .collect();
    assert_eq!(values, ["Battery on", "Battery on", "Beacon", ""]);
    assert_eq!(
        checklist.rows[0].cell(&item).map(|cell| cell.sub_fields.clone()),
        Some(vec!["check voltage".to_string()])
    );
    assert!(checklist.check_invariants().is_ok());
}

#[test]
fn failures_are_reported_and_do_not_stop_the_script() {
    let mut store = ChecklistStore::default();
    let outcomes = run(
        &mut store,
        r#"[
            {"op": "undo"},
            {"op": "add_row"},
            {"op": "remove_row", "row": 7},
            {"op": "remove_row", "row": "no-such-id"},
            {"op": "remove_sub_field", "row": 1, "column": 1, "index": 0},
            {"op": "add_rows", "count": 0},
            {"op": "add_row"}
        ]"#,
    );

    assert_eq!(outcomes[0], StepOutcome::Skipped(ScriptError::NothingToUndo));
    assert!(outcomes[1].is_applied());
    assert!(matches!(
        outcomes[2],
        StepOutcome::Skipped(ScriptError::UnknownRow(_))
    ));
    assert!(matches!(
        outcomes[3],
        StepOutcome::Rejected(EditError::RowNotFound(_))
    ));
    assert!(matches!(
        outcomes[4],
        StepOutcome::Rejected(EditError::SubFieldOutOfRange { .. })
    ));
    assert_eq!(outcomes[5], StepOutcome::Rejected(EditError::EmptyBatch));
    assert!(outcomes[6].is_applied());
    assert_eq!(store.total_rows(), 2);
}

#[test]
fn undo_and_redo_steps_through_history() {
    let mut store = ChecklistStore::default();
    let outcomes = run(
        &mut store,
        r#"[
            {"op": "add_rows", "count": 5},
            {"op": "undo"},
            {"op": "redo"},
            {"op": "redo"}
        ]"#,
    );

    assert!(outcomes[..3].iter().all(StepOutcome::is_applied));
    assert_eq!(outcomes[3], StepOutcome::Skipped(ScriptError::NothingToRedo));
    assert_eq!(store.total_rows(), 5);
}

#[test]
fn set_columns_keeps_cells_of_kept_columns() {
    let mut store = ChecklistStore::default();
    run(
        &mut store,
        r#"[
            {"op": "add_row"},
            {"op": "update_cell", "row": 1, "column": 3, "update": {"value": "kept"}}
        ]"#,
    );
    let outcomes = run(
        &mut store,
        r#"[
            {"op": "set_columns", "columns": [
                {"keep": "Column 3"},
                {"label": "Notes", "width": 30}
            ]},
            {"op": "set_columns", "columns": [{"keep": "Missing"}]}
        ]"#,
    );

    assert!(outcomes[0].is_applied());
    assert!(matches!(
        outcomes[1],
        StepOutcome::Skipped(ScriptError::UnknownColumn(_))
    ));
    let checklist = store.checklist();
    assert_eq!(checklist.columns.len(), 2);
    assert_eq!(checklist.columns[1].label, "Notes");
    let kept = checklist.columns[0].id.clone();
    assert_eq!(
        checklist.rows[0].cell(&kept).map(|cell| cell.value.as_str()),
        Some("kept")
    );
}

#[test]
fn load_replaces_document_undoably() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("other.json");
    let other = checklist_model::Checklist::empty("Other", 4);
    save_checklist(&other, &path).unwrap();

    let mut store = ChecklistStore::default();
    let script = serde_json::json!([
        {"op": "set_title", "title": "Mine"},
        {"op": "load", "path": path},
        {"op": "load", "path": dir.path().join("missing.json")},
    ])
    .to_string();
    let outcomes = run(&mut store, &script);

    assert!(outcomes[0].is_applied());
    assert!(outcomes[1].is_applied());
    assert!(matches!(
        outcomes[2],
        StepOutcome::Skipped(ScriptError::Load(_))
    ));
    assert_eq!(store.checklist().title, "Other");
    assert_eq!(store.total_columns(), 4);
    assert!(store.undo());
    assert_eq!(store.checklist().title, "Mine");
}
