use std::collections::HashSet;

use checklist_model::{Checklist, Row, RowId};

use super::{EditResult, derive};
use crate::error::EditError;

/// Append one blank row.
pub fn add_row(doc: &Checklist) -> EditResult {
    add_rows(doc, 1)
}

/// Append `count` blank rows in one step, numbered after the existing ones.
pub fn add_rows(doc: &Checklist, count: usize) -> EditResult {
    if count == 0 {
        return Err(EditError::EmptyBatch);
    }
    Ok(derive(doc, |next| {
        let start = next.rows.len();
        next.rows.reserve(count);
        for offset in 1..=count {
            let row = Row::empty(&next.columns, start + offset);
            next.rows.push(row);
        }
    }))
}

pub fn remove_row(doc: &Checklist, row_id: &RowId) -> EditResult {
    let index = doc
        .row_index(row_id)
        .ok_or_else(|| EditError::RowNotFound(row_id.clone()))?;
    Ok(derive(doc, |next| {
        next.rows.remove(index);
        next.renumber_rows();
    }))
}

/// Remove every row whose id is listed. Unknown ids are ignored as long as at
/// least one row matches.
pub fn remove_rows(doc: &Checklist, row_ids: &[RowId]) -> EditResult {
    let targets: HashSet<&RowId> = row_ids.iter().collect();
    if !doc.rows.iter().any(|row| targets.contains(&row.id)) {
        return Err(EditError::NoMatchingRows {
            count: row_ids.len(),
        });
    }
    Ok(derive(doc, |next| {
        next.rows.retain(|row| !targets.contains(&row.id));
        next.renumber_rows();
    }))
}

/// Append a deep copy of a row with fresh row and cell identifiers.
///
/// The copy always goes to the end of the table, not next to its source.
pub fn duplicate_row(doc: &Checklist, row_id: &RowId) -> EditResult {
    let source = doc
        .row(row_id)
        .ok_or_else(|| EditError::RowNotFound(row_id.clone()))?;
    let copy = source.duplicate(doc.rows.len() + 1);
    Ok(derive(doc, |next| next.rows.push(copy)))
}

/// Move the row at `from` to position `to` (splice semantics) and renumber.
pub fn reorder_rows(doc: &Checklist, from: usize, to: usize) -> EditResult {
    let len = doc.rows.len();
    for index in [from, to] {
        if index >= len {
            return Err(EditError::RowIndexOutOfRange { index, len });
        }
    }
    Ok(derive(doc, |next| {
        let row = next.rows.remove(from);
        next.rows.insert(to, row);
        next.renumber_rows();
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_ids(doc: &Checklist) -> Vec<RowId> {
        doc.rows.iter().map(|row| row.id.clone()).collect()
    }

    fn numbers(doc: &Checklist) -> Vec<usize> {
        doc.rows.iter().map(|row| row.row_number).collect()
    }

    #[test]
    fn add_rows_numbers_sequentially() {
        let doc = add_row(&Checklist::default()).expect("row");
        let next = add_rows(&doc, 3).expect("rows");
        assert_eq!(numbers(&next), vec![1, 2, 3, 4]);
        assert!(next.check_invariants().is_ok());
    }

    #[test]
    fn add_zero_rows_is_rejected() {
        assert_eq!(
            add_rows(&Checklist::default(), 0),
            Err(EditError::EmptyBatch)
        );
    }

    #[test]
    fn remove_row_renumbers() {
        let doc = add_rows(&Checklist::default(), 3).expect("rows");
        let ids = row_ids(&doc);
        let next = remove_row(&doc, &ids[0]).expect("remove");
        assert_eq!(row_ids(&next), vec![ids[1].clone(), ids[2].clone()]);
        assert_eq!(numbers(&next), vec![1, 2]);
    }

    #[test]
    fn remove_rows_ignores_unknown_ids_when_some_match() {
        let doc = add_rows(&Checklist::default(), 4).expect("rows");
        let ids = row_ids(&doc);
        let next = remove_rows(&doc, &[ids[1].clone(), RowId::new("ghost"), ids[3].clone()])
            .expect("remove");
        assert_eq!(row_ids(&next), vec![ids[0].clone(), ids[2].clone()]);
        assert_eq!(numbers(&next), vec![1, 2]);
    }

    #[test]
    fn remove_rows_without_match_is_rejected() {
        let doc = add_rows(&Checklist::default(), 1).expect("rows");
        assert_eq!(
            remove_rows(&doc, &[RowId::new("ghost")]),
            Err(EditError::NoMatchingRows { count: 1 })
        );
    }

    #[test]
    fn reorder_out_of_range_is_rejected() {
        let doc = add_rows(&Checklist::default(), 2).expect("rows");
        assert_eq!(
            reorder_rows(&doc, 0, 2),
            Err(EditError::RowIndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            reorder_rows(&doc, 5, 0),
            Err(EditError::RowIndexOutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn reorder_moves_towards_front() {
        let doc = add_rows(&Checklist::default(), 3).expect("rows");
        let ids = row_ids(&doc);
        let next = reorder_rows(&doc, 2, 0).expect("reorder");
        assert_eq!(
            row_ids(&next),
            vec![ids[2].clone(), ids[0].clone(), ids[1].clone()]
        );
        assert_eq!(numbers(&next), vec![1, 2, 3]);
    }

    #[test]
    fn duplicate_unknown_row_is_rejected() {
        let doc = Checklist::default();
        let ghost = RowId::new("ghost");
        assert_eq!(
            duplicate_row(&doc, &ghost),
            Err(EditError::RowNotFound(ghost))
        );
    }
}
