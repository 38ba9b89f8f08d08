//! Linear undo/redo history over whole-document snapshots.

use std::sync::Arc;

use checklist_model::Checklist;

/// Default number of snapshots kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Bounded list of checklist snapshots with a cursor on the current one.
///
/// Snapshots are shared (`Arc`), so recording a document that is also held
/// by the store or a caller costs no copy. Whenever `entries` is non-empty
/// the cursor addresses one of them.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Arc<Checklist>>,
    cursor: Option<usize>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// An empty history keeping at most `capacity` snapshots (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            capacity: capacity.max(1),
        }
    }

    /// Record `doc` as the newest entry.
    ///
    /// Anything after the cursor (undone edits) is discarded first. When the
    /// list grows past capacity the oldest entry is dropped.
    pub fn record(&mut self, doc: Arc<Checklist>) {
        let keep = self.cursor.map_or(0, |cursor| cursor + 1);
        self.entries.truncate(keep);
        self.entries.push(doc);
        if self.entries.len() > self.capacity {
            let overflow = self.entries.len() - self.capacity;
            self.entries.drain(..overflow);
        }
        self.cursor = Some(self.entries.len() - 1);
        self.debug_check();
    }

    /// Step back one entry and return it, or `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<Arc<Checklist>> {
        let cursor = self.cursor.filter(|&cursor| cursor > 0)? - 1;
        self.cursor = Some(cursor);
        self.debug_check();
        Some(Arc::clone(&self.entries[cursor]))
    }

    /// Step forward one entry and return it, or `None` at the newest entry.
    pub fn redo(&mut self) -> Option<Arc<Checklist>> {
        let cursor = self.cursor.filter(|&cursor| cursor + 1 < self.entries.len())? + 1;
        self.cursor = Some(cursor);
        self.debug_check();
        Some(Arc::clone(&self.entries[cursor]))
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor
            .is_some_and(|cursor| cursor + 1 < self.entries.len())
    }

    /// Drop every entry; the cursor becomes unset.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    /// The entry under the cursor.
    pub fn current(&self) -> Option<&Arc<Checklist>> {
        self.cursor.map(|cursor| &self.entries[cursor])
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn debug_check(&self) {
        debug_assert!(self.entries.len() <= self.capacity);
        debug_assert_eq!(
            self.cursor.is_some(),
            !self.entries.is_empty(),
            "cursor set iff history has entries"
        );
        debug_assert!(
            self.cursor.is_none_or(|cursor| cursor < self.entries.len()),
            "history cursor out of range"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> Arc<Checklist> {
        Arc::new(Checklist::empty(title, 3))
    }

    fn titles(history: &History) -> Vec<String> {
        history
            .entries
            .iter()
            .map(|entry| entry.title.clone())
            .collect()
    }

    #[test]
    fn empty_history_cannot_move() {
        let mut history = History::default();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn single_entry_is_not_undoable() {
        let mut history = History::default();
        history.record(titled("a"));
        assert_eq!(history.cursor(), Some(0));
        assert!(!history.can_undo());
        assert!(history.undo().is_none());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn undo_redo_walk_the_list() {
        let mut history = History::default();
        for title in ["a", "b", "c"] {
            history.record(titled(title));
        }
        assert_eq!(history.undo().map(|doc| doc.title.clone()).as_deref(), Some("b"));
        assert_eq!(history.undo().map(|doc| doc.title.clone()).as_deref(), Some("a"));
        assert!(history.undo().is_none());
        assert!(history.can_redo());
        assert_eq!(history.redo().map(|doc| doc.title.clone()).as_deref(), Some("b"));
        assert_eq!(history.current().map(|doc| doc.title.as_str()), Some("b"));
    }

    #[test]
    fn recording_after_undo_discards_future() {
        let mut history = History::default();
        for title in ["a", "b", "c"] {
            history.record(titled(title));
        }
        history.undo();
        history.undo();
        history.record(titled("d"));
        assert_eq!(titles(&history), vec!["a", "d"]);
        assert!(!history.can_redo());
        assert!(history.redo().is_none());
    }

    #[test]
    fn capacity_drops_oldest_and_keeps_cursor_on_newest() {
        let mut history = History::new(3);
        for title in ["a", "b", "c", "d", "e"] {
            history.record(titled(title));
        }
        assert_eq!(titles(&history), vec!["c", "d", "e"]);
        assert_eq!(history.cursor(), Some(2));
        assert_eq!(history.current().map(|doc| doc.title.as_str()), Some("e"));
    }

    #[test]
    fn reset_unsets_cursor() {
        let mut history = History::default();
        history.record(titled("a"));
        history.record(titled("b"));
        history.reset();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
        assert!(history.current().is_none());
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut history = History::new(0);
        history.record(titled("a"));
        history.record(titled("b"));
        assert_eq!(history.capacity(), 1);
        assert_eq!(titles(&history), vec!["b"]);
    }
}
