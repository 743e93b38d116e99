use std::collections::BTreeSet;

use crate::{Record, RecordId};

/// Set of selected record ids.
///
/// Ids may outlive the records they point at; the list clears the selection
/// whenever the committed search changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    ids: BTreeSet<RecordId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or removes `id`. Returns whether the set changed.
    pub fn toggle(&mut self, id: RecordId, selected: bool) -> bool {
        if selected {
            self.ids.insert(id)
        } else {
            self.ids.remove(&id)
        }
    }

    /// Replaces the selection with the ids of `records`.
    pub fn select_all(&mut self, records: &[Record]) {
        self.ids = records.iter().map(|record| record.id.clone()).collect();
    }

    /// Returns whether anything was selected.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.ids.is_empty();
        self.ids.clear();
        had_any
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &RecordId> {
        self.ids.iter()
    }

    /// True when there is at least one record and every one is selected.
    pub fn covers(&self, records: &[Record]) -> bool {
        !records.is_empty() && records.iter().all(|record| self.contains(&record.id))
    }

    /// Selected records in list order.
    pub fn pick<'a>(&'a self, records: &'a [Record]) -> impl Iterator<Item = &'a Record> + 'a {
        records.iter().filter(move |record| self.contains(&record.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(ids: &[&str]) -> Vec<Record> {
        ids.iter()
            .map(|id| Record::new(*id, format!("https://talent.example/{id}")))
            .collect()
    }

    #[test]
    fn toggle_reports_changes() {
        let mut selection = Selection::new();
        assert!(selection.toggle(RecordId::from("a"), true));
        assert!(!selection.toggle(RecordId::from("a"), true));
        assert!(selection.toggle(RecordId::from("a"), false));
        assert!(!selection.toggle(RecordId::from("a"), false));
        assert!(selection.is_empty());
    }

    #[test]
    fn pick_follows_list_order_not_selection_order() {
        let list = records(&["c", "a", "b"]);
        let mut selection = Selection::new();
        selection.toggle(RecordId::from("b"), true);
        selection.toggle(RecordId::from("c"), true);

        let picked: Vec<_> = selection.pick(&list).map(|r| r.id.as_str()).collect();
        assert_eq!(picked, vec!["c", "b"]);
    }

    #[test]
    fn covers_requires_every_loaded_record() {
        let list = records(&["a", "b"]);
        let mut selection = Selection::new();
        assert!(!selection.covers(&list));
        selection.toggle(RecordId::from("a"), true);
        assert!(!selection.covers(&list));
        selection.select_all(&list);
        assert!(selection.covers(&list));
        assert!(!selection.covers(&[]));
    }
}
