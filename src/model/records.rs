//! Records Model
//!
//! The fetched table data plus everything keyed to it: cursor,
//! selection marks, and per-row edit drafts. Drafts are the explicit
//! edit buffer — the update action reads them, never the rendered text.

use std::collections::{BTreeSet, HashMap};

use crate::api::{PageEnvelope, Record};
use crate::logic::errors::ErrorType;

/// Connection state to the records backend
#[derive(Clone, Debug, PartialEq)]
pub enum ConnectionState {
    /// Last request succeeded
    Connected,
    /// Last request failed (with error type and user-friendly message).
    /// Nothing retries automatically; `r` refetches manually.
    Disconnected {
        error_type: ErrorType,
        message: String,
    },
}

/// Pending edit for one row, keyed by record id
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowDraft {
    pub name: String,
    pub email: String,
}

impl RowDraft {
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RecordsModel {
    /// Rows of the current page, in server order
    pub rows: Vec<Record>,

    /// Total record count across all pages (from the envelope)
    pub total: u64,

    /// Whether an initial page has been loaded
    pub loaded: bool,

    /// Cursor position within `rows`
    pub cursor: Option<usize>,

    /// Ids marked for batch deletion
    pub selected: BTreeSet<i64>,

    /// Per-row edit drafts (id -> pending name/email)
    pub drafts: HashMap<i64, RowDraft>,

    /// Connection state from the most recent fetch
    pub connection: ConnectionState,

    /// Wall-clock time of the last successful fetch (HH:MM:SS)
    pub last_refreshed: Option<String>,
}

impl RecordsModel {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
            loaded: false,
            cursor: None,
            selected: BTreeSet::new(),
            drafts: HashMap::new(),
            connection: ConnectionState::Connected,
            last_refreshed: None,
        }
    }

    /// Replace the table contents with a freshly fetched page.
    ///
    /// The cursor is clamped into the new row range, and selection marks
    /// are pruned to rows that are still visible — only rows on screen
    /// can be marked, so marks on rows that scrolled out of the page or
    /// were deleted must not linger invisibly.
    pub fn apply_page(&mut self, envelope: PageEnvelope) {
        self.rows = envelope.data;
        self.total = envelope.total;
        self.loaded = true;

        let visible: BTreeSet<i64> = self.rows.iter().map(|r| r.id).collect();
        self.selected.retain(|id| visible.contains(id));

        self.cursor = if self.rows.is_empty() {
            None
        } else {
            Some(
                self.cursor
                    .unwrap_or(0)
                    .min(self.rows.len() - 1),
            )
        };
    }

    /// Move the cursor by `delta` rows, saturating at the ends.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            self.cursor = None;
            return;
        }
        let last = self.rows.len() - 1;
        let current = self.cursor.unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, last as isize) as usize;
        self.cursor = Some(next);
    }

    pub fn cursor_first(&mut self) {
        self.cursor = if self.rows.is_empty() { None } else { Some(0) };
    }

    pub fn cursor_last(&mut self) {
        self.cursor = self.rows.len().checked_sub(1);
    }

    /// Toggle the selection mark on the row under the cursor.
    pub fn toggle_selected(&mut self) {
        if let Some(record) = self.cursor.and_then(|idx| self.rows.get(idx)) {
            let id = record.id;
            if !self.selected.remove(&id) {
                self.selected.insert(id);
            }
        }
    }

    /// Select every visible row, or clear the selection when every
    /// visible row is already selected.
    pub fn toggle_select_all(&mut self) {
        let all_selected = !self.rows.is_empty()
            && self.rows.iter().all(|r| self.selected.contains(&r.id));

        if all_selected {
            self.selected.clear();
        } else {
            for record in &self.rows {
                self.selected.insert(record.id);
            }
        }
    }

    /// Ids currently marked for batch deletion, in ascending order.
    pub fn selected_ids(&self) -> Vec<i64> {
        self.selected.iter().copied().collect()
    }

    /// Ensure a draft exists for this record, seeded from its current
    /// values.
    pub fn begin_draft(&mut self, record: &Record) {
        self.drafts
            .entry(record.id)
            .or_insert_with(|| RowDraft::from_record(record));
    }

    pub fn draft_mut(&mut self, id: i64) -> Option<&mut RowDraft> {
        self.drafts.get_mut(&id)
    }

    pub fn drop_draft(&mut self, id: i64) {
        self.drafts.remove(&id);
    }
}

impl Default for RecordsModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64) -> Record {
        Record {
            id,
            name: format!("user-{}", id),
            email: format!("user-{}@example.com", id),
        }
    }

    fn envelope(ids: &[i64], total: u64) -> PageEnvelope {
        PageEnvelope {
            data: ids.iter().map(|&id| record(id)).collect(),
            page: 1,
            per_page: 10,
            total,
        }
    }

    #[test]
    fn apply_page_replaces_rows_and_clamps_cursor() {
        let mut model = RecordsModel::new();
        model.apply_page(envelope(&[1, 2, 3, 4], 4));
        model.cursor = Some(3);

        model.apply_page(envelope(&[1, 2], 2));
        assert_eq!(model.rows.len(), 2);
        assert_eq!(model.cursor, Some(1));

        model.apply_page(envelope(&[], 0));
        assert_eq!(model.cursor, None);
    }

    #[test]
    fn apply_page_prunes_selection_to_visible_rows() {
        let mut model = RecordsModel::new();
        model.apply_page(envelope(&[1, 2, 3], 3));
        model.selected.insert(1);
        model.selected.insert(3);

        // Row 3 deleted server-side
        model.apply_page(envelope(&[1, 2], 2));
        assert_eq!(model.selected_ids(), vec![1]);
    }

    #[test]
    fn cursor_movement_saturates() {
        let mut model = RecordsModel::new();
        model.apply_page(envelope(&[1, 2, 3], 3));

        model.move_cursor(-5);
        assert_eq!(model.cursor, Some(0));
        model.move_cursor(10);
        assert_eq!(model.cursor, Some(2));
    }

    #[test]
    fn toggle_select_all_flips_between_all_and_none() {
        let mut model = RecordsModel::new();
        model.apply_page(envelope(&[1, 2, 3], 3));

        model.toggle_select_all();
        assert_eq!(model.selected_ids(), vec![1, 2, 3]);

        model.toggle_select_all();
        assert!(model.selected_ids().is_empty());

        // Partial selection selects the rest instead of clearing
        model.selected.insert(2);
        model.toggle_select_all();
        assert_eq!(model.selected_ids(), vec![1, 2, 3]);
    }

    #[test]
    fn drafts_seed_from_record_and_drop_cleanly() {
        let mut model = RecordsModel::new();
        let rec = record(7);
        model.apply_page(envelope(&[7], 1));

        model.begin_draft(&rec);
        assert_eq!(model.drafts[&7].name, "user-7");

        model.draft_mut(7).unwrap().name = "edited".to_string();
        // Re-beginning an edit must not clobber the pending draft
        model.begin_draft(&rec);
        assert_eq!(model.drafts[&7].name, "edited");

        model.drop_draft(7);
        assert!(model.drafts.is_empty());
    }
}
