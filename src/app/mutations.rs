//! Mutation submit paths.
//!
//! Every path follows the same order: local validation first (nothing
//! hits the network on a validation failure), then the in-flight guard,
//! then the channel send. Responses are handled in handlers::api.

use crate::api::Record;
use crate::logic::validate;
use crate::model::{ActionKey, Field, Mode};
use crate::services::api::ApiRequest;
use crate::App;

impl App {
    /// Submit the add form. Keeps the form open; it closes on success
    /// so a rejected submission can be corrected in place.
    pub fn submit_add(&mut self) {
        let Some((name, email)) =
            validate::record_fields(&self.model.ui.add_name, &self.model.ui.add_email)
        else {
            self.model.ui.show_error("Name and email are required");
            return;
        };

        if !self.model.ops.begin(ActionKey::Add) {
            self.model.ui.show_toast("Add already in progress");
            return;
        }

        let _ = self.api_tx.send(ApiRequest::AddRecord { name, email });
    }

    /// Start inline editing of the row under the cursor.
    pub fn begin_row_edit(&mut self, field: Field) {
        let Some(record) = self.model.selected_record().cloned() else {
            self.model.ui.show_toast("No record selected");
            return;
        };

        self.model.records.begin_draft(&record);
        self.model.ui.mode = Mode::EditRow {
            id: record.id,
            field,
        };
    }

    /// Abandon the inline edit and its draft.
    pub fn cancel_row_edit(&mut self, id: i64) {
        self.model.records.drop_draft(id);
        self.model.ui.mode = Mode::Normal;
    }

    /// Commit the inline edit: validate the draft and post the update.
    /// The draft stays until the server confirms, so a failed update
    /// can be re-edited instead of silently losing the input.
    pub fn commit_row_edit(&mut self, id: i64) {
        self.model.ui.mode = Mode::Normal;

        let Some(draft) = self.model.records.drafts.get(&id) else {
            return;
        };

        let Some((name, email)) = validate::record_fields(&draft.name, &draft.email) else {
            self.model.ui.show_error("Name and email are required");
            return;
        };

        if !self.model.ops.begin(ActionKey::Update(id)) {
            self.model
                .ui
                .show_toast("Update already in progress for this record");
            return;
        }

        let _ = self.api_tx.send(ApiRequest::UpdateRecord {
            record: Record { id, name, email },
        });
    }

    /// Open the delete confirmation for the row under the cursor.
    pub fn request_delete(&mut self) {
        let Some(record) = self.model.selected_record() else {
            self.model.ui.show_toast("No record selected");
            return;
        };
        let id = record.id;

        if self.model.ops.is_in_flight(&ActionKey::Delete(id)) {
            self.model.ui.show_toast("Delete already in progress");
            return;
        }

        self.model.ui.mode = Mode::ConfirmDelete { id };
    }

    /// User confirmed the single-record delete.
    pub fn confirm_delete(&mut self, id: i64) {
        self.model.ui.mode = Mode::Normal;

        if !self.model.ops.begin(ActionKey::Delete(id)) {
            self.model.ui.show_toast("Delete already in progress");
            return;
        }

        let _ = self.api_tx.send(ApiRequest::DeleteRecord { id });
    }

    /// Open the batch delete confirmation for the marked rows.
    /// An empty selection is a local no-op with a notice.
    pub fn request_batch_delete(&mut self) {
        let ids = self.model.records.selected_ids();
        if ids.is_empty() {
            self.model.ui.show_toast("No rows marked for deletion");
            return;
        }

        if self.model.ops.is_in_flight(&ActionKey::BatchDelete) {
            self.model.ui.show_toast("Batch delete already in progress");
            return;
        }

        self.model.ui.mode = Mode::ConfirmBatchDelete { ids };
    }

    /// User confirmed the batch delete.
    pub fn confirm_batch_delete(&mut self, ids: Vec<i64>) {
        self.model.ui.mode = Mode::Normal;

        if !self.model.ops.begin(ActionKey::BatchDelete) {
            self.model.ui.show_toast("Batch delete already in progress");
            return;
        }

        let _ = self.api_tx.send(ApiRequest::BatchDelete { ids });
    }

    /// Submit the import prompt. The prompt stays open; it closes on
    /// success so a bad path can be corrected in place.
    pub fn submit_import(&mut self) {
        let path = match validate::import_path(&self.model.ui.import_path) {
            Ok(path) => path,
            Err(message) => {
                self.model.ui.show_error(message);
                return;
            }
        };

        if !self.model.ops.begin(ActionKey::Import) {
            self.model.ui.show_toast("Import already in progress");
            return;
        }

        let _ = self.api_tx.send(ApiRequest::ImportCsv { path });
    }

    /// Hand the export URL to the OS browser. The browser owns the
    /// download; there is no response to handle here.
    pub fn export_in_browser(&mut self) {
        let url = self.client.export_url(&self.model.view.list_query());

        match open::that(&url) {
            Ok(()) => self.model.ui.show_toast("Export opened in browser"),
            Err(e) => self
                .model
                .ui
                .show_error(format!("could not open browser: {}", e)),
        }
    }
}
