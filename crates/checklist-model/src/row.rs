use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::cell::Cell;
use crate::column::Column;
use crate::ids::{ColumnId, RowId};

/// One record of the checklist, holding one cell per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub id: RowId,
    pub cells: RowCells,
    /// 1-based display position. Derived from the row's index; mutations
    /// renumber rather than set it directly.
    pub row_number: usize,
}

impl Row {
    /// A row of blank cells, one per column.
    pub fn empty(columns: &[Column], row_number: usize) -> Self {
        Self {
            id: RowId::generate(),
            cells: RowCells::blank(columns),
            row_number,
        }
    }

    /// Deep copy with a new row id and new cell ids.
    pub fn duplicate(&self, row_number: usize) -> Self {
        Self {
            id: RowId::generate(),
            cells: RowCells(
                self.cells
                    .iter()
                    .map(|(column_id, cell)| (column_id.clone(), cell.duplicate()))
                    .collect(),
            ),
            row_number,
        }
    }

    pub fn cell(&self, column_id: &ColumnId) -> Option<&Cell> {
        self.cells.get(column_id)
    }

    pub fn cell_mut(&mut self, column_id: &ColumnId) -> Option<&mut Cell> {
        self.cells.get_mut(column_id)
    }
}

/// Ordered `(column id, cell)` pairs of a row.
///
/// Kept in the same order as the checklist's columns. Serialized as a JSON
/// object keyed by column id, in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowCells(Vec<(ColumnId, Cell)>);

impl RowCells {
    pub fn blank(columns: &[Column]) -> Self {
        Self(
            columns
                .iter()
                .map(|column| (column.id.clone(), Cell::empty()))
                .collect(),
        )
    }

    /// Re-derive the cells for `columns`: existing cells are kept by column
    /// id, missing ones are created blank, cells of unknown columns dropped.
    pub fn aligned_to(&self, columns: &[Column]) -> Self {
        Self(
            columns
                .iter()
                .map(|column| {
                    let cell = self.get(&column.id).cloned().unwrap_or_else(Cell::empty);
                    (column.id.clone(), cell)
                })
                .collect(),
        )
    }

    /// True when the cell keys equal the column ids, in the same order.
    pub fn matches(&self, columns: &[Column]) -> bool {
        self.0.len() == columns.len()
            && self
                .0
                .iter()
                .zip(columns)
                .all(|((column_id, _), column)| *column_id == column.id)
    }

    pub fn get(&self, column_id: &ColumnId) -> Option<&Cell> {
        self.0
            .iter()
            .find(|(id, _)| id == column_id)
            .map(|(_, cell)| cell)
    }

    pub fn get_mut(&mut self, column_id: &ColumnId) -> Option<&mut Cell> {
        self.0
            .iter_mut()
            .find(|(id, _)| id == column_id)
            .map(|(_, cell)| cell)
    }

    pub fn contains(&self, column_id: &ColumnId) -> bool {
        self.0.iter().any(|(id, _)| id == column_id)
    }

    pub fn push(&mut self, column_id: ColumnId, cell: Cell) {
        self.0.push((column_id, cell));
    }

    pub fn remove(&mut self, column_id: &ColumnId) -> Option<Cell> {
        let index = self.0.iter().position(|(id, _)| id == column_id)?;
        Some(self.0.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ColumnId, &Cell)> {
        self.0.iter().map(|(id, cell)| (id, cell))
    }

    pub fn column_ids(&self) -> impl Iterator<Item = &ColumnId> {
        self.0.iter().map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(ColumnId, Cell)> for RowCells {
    fn from_iter<I: IntoIterator<Item = (ColumnId, Cell)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for RowCells {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (column_id, cell) in &self.0 {
            map.serialize_entry(column_id, cell)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RowCells {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RowCellsVisitor;

        impl<'de> Visitor<'de> for RowCellsVisitor {
            type Value = RowCells;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of column id to cell")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut cells = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((column_id, cell)) = access.next_entry::<ColumnId, Cell>()? {
                    if cells.iter().any(|(id, _): &(ColumnId, Cell)| *id == column_id) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate cell for column {column_id}"
                        )));
                    }
                    cells.push((column_id, cell));
                }
                Ok(RowCells(cells))
            }
        }

        deserializer.deserialize_map(RowCellsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column> {
        vec![Column::new("Task", 50.0), Column::new("Owner", 50.0)]
    }

    #[test]
    fn blank_cells_follow_column_order() {
        let columns = columns();
        let cells = RowCells::blank(&columns);
        assert!(cells.matches(&columns));
        let ids: Vec<&ColumnId> = cells.column_ids().collect();
        assert_eq!(ids, vec![&columns[0].id, &columns[1].id]);
    }

    #[test]
    fn aligned_to_reuses_and_synthesizes() {
        let columns = columns();
        let mut row = Row::empty(&columns, 1);
        row.cell_mut(&columns[0].id).expect("cell").value = "kept".to_string();

        let extra = Column::new("Due", 20.0);
        let next = vec![extra.clone(), columns[0].clone()];
        let aligned = row.cells.aligned_to(&next);

        assert!(aligned.matches(&next));
        assert_eq!(aligned.get(&columns[0].id).expect("kept").value, "kept");
        assert!(aligned.get(&extra.id).expect("new").is_blank());
        assert!(!aligned.contains(&columns[1].id));
    }

    #[test]
    fn serializes_as_object_in_column_order() {
        let cells: RowCells = vec![
            (ColumnId::new("z"), Cell::empty()),
            (ColumnId::new("a"), Cell::empty()),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&cells).expect("serialize");
        assert!(json.starts_with(r#"{"z":"#));
        let back: RowCells = serde_json::from_str(&json).expect("deserialize");
        let order: Vec<_> = back.column_ids().map(ColumnId::as_str).collect();
        assert_eq!(order, ["z", "a"]);
    }

    #[test]
    fn duplicate_row_gets_fresh_ids() {
        let columns = columns();
        let row = Row::empty(&columns, 1);
        let copy = row.duplicate(2);
        assert_ne!(copy.id, row.id);
        assert_eq!(copy.row_number, 2);
        for ((_, original), (_, duplicated)) in row.cells.iter().zip(copy.cells.iter()) {
            assert_ne!(original.id, duplicated.id);
        }
    }
}
