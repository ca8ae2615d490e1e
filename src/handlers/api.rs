//! API Response Handler
//!
//! Applies responses from the background API service to the model.
//! Fetch responses are checked against the latest issued sequence
//! number first — a stale page must never render over a newer one.

use log::debug;

use crate::logic::{errors, paging};
use crate::model::{ActionKey, ConnectionState, Mode};
use crate::services::api::{ApiResponse, Priority};
use crate::App;

pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::PageResult { seq, envelope } => {
            if !app.model.ops.is_current_fetch(seq) {
                debug!(
                    "discarding stale page response (seq {}, latest {})",
                    seq,
                    app.model.ops.latest_fetch_seq()
                );
                return;
            }
            app.model.ops.fetching = false;

            match envelope {
                Ok(envelope) => {
                    app.model.records.connection = ConnectionState::Connected;

                    // A delete can empty the last page; step back into
                    // range and refetch instead of showing a blank table.
                    let clamped = paging::clamp_page(
                        app.model.view.page,
                        envelope.total,
                        app.model.view.per_page,
                    );
                    if clamped != app.model.view.page && envelope.data.is_empty() {
                        debug!(
                            "page {} out of range for total {}, clamping to {}",
                            app.model.view.page, envelope.total, clamped
                        );
                        app.model.view.page = clamped;
                        app.save_view_prefs();
                        app.request_refresh(Priority::High);
                        return;
                    }

                    app.model.records.apply_page(envelope);
                    app.model.records.last_refreshed =
                        Some(chrono::Local::now().format("%H:%M:%S").to_string());
                }
                Err(error) => {
                    let message = errors::format_error_message(&error);
                    app.model.records.connection = ConnectionState::Disconnected {
                        error_type: errors::classify_error(&error),
                        message: message.clone(),
                    };
                    app.model
                        .ui
                        .show_error(format!("request failed: {}", message));
                }
            }
        }

        ApiResponse::AddResult { ack } => {
            app.model.ops.finish(&ActionKey::Add);

            match ack {
                Ok(ack) if ack.is_success() => {
                    app.model.ui.add_name.clear();
                    app.model.ui.add_email.clear();
                    if matches!(app.model.ui.mode, Mode::AddForm { .. }) {
                        app.model.ui.mode = Mode::Normal;
                    }
                    app.model.ui.show_toast("Record added");
                    app.request_refresh(Priority::Medium);
                }
                Ok(ack) => {
                    app.model.ui.show_error(ack.message_or("add rejected"));
                }
                Err(error) => {
                    app.model.ui.show_error(format!(
                        "request failed: {}",
                        errors::format_error_message(&error)
                    ));
                }
            }
        }

        ApiResponse::UpdateResult { id, ack } => {
            app.model.ops.finish(&ActionKey::Update(id));

            match ack {
                Ok(ack) if ack.is_success() => {
                    // Draft confirmed; the refetch brings the canonical row
                    app.model.records.drop_draft(id);
                    app.model.ui.show_toast(format!("Record #{} updated", id));
                    app.request_refresh(Priority::Medium);
                }
                Ok(ack) => {
                    // Draft kept so the edit can be corrected and retried
                    app.model.ui.show_error(ack.message_or("update rejected"));
                }
                Err(error) => {
                    app.model.ui.show_error(format!(
                        "request failed: {}",
                        errors::format_error_message(&error)
                    ));
                }
            }
        }

        ApiResponse::DeleteResult { id, ack } => {
            app.model.ops.finish(&ActionKey::Delete(id));

            match ack {
                Ok(ack) if ack.is_success() => {
                    app.model.records.selected.remove(&id);
                    app.model.records.drop_draft(id);
                    app.model.ui.show_toast(format!("Record #{} deleted", id));
                    app.request_refresh(Priority::Medium);
                }
                Ok(ack) => {
                    app.model.ui.show_error(ack.message_or("delete rejected"));
                }
                Err(error) => {
                    app.model.ui.show_error(format!(
                        "request failed: {}",
                        errors::format_error_message(&error)
                    ));
                }
            }
        }

        ApiResponse::BatchDeleteResult { ids, ack } => {
            app.model.ops.finish(&ActionKey::BatchDelete);

            match ack {
                Ok(ack) if ack.success => {
                    app.model.records.selected.clear();
                    for id in &ids {
                        app.model.records.drop_draft(*id);
                    }
                    app.model
                        .ui
                        .show_toast(format!("Deleted {} records", ids.len()));
                    // Refetch in place: pagination and filter context survive
                    app.request_refresh(Priority::Medium);
                }
                Ok(ack) => {
                    let message = ack
                        .message
                        .unwrap_or_else(|| "batch delete failed".to_string());
                    app.model.ui.show_error(message);
                }
                Err(error) => {
                    app.model.ui.show_error(format!(
                        "request failed: {}",
                        errors::format_error_message(&error)
                    ));
                }
            }
        }

        ApiResponse::ImportResult { ack } => {
            app.model.ops.finish(&ActionKey::Import);

            match ack {
                Ok(ack) if ack.is_success() => {
                    app.model.ui.import_path.clear();
                    if app.model.ui.mode == Mode::ImportPrompt {
                        app.model.ui.mode = Mode::Normal;
                    }
                    app.model
                        .ui
                        .show_toast(ack.message_or("Import complete"));
                    app.request_refresh(Priority::Medium);
                }
                Ok(ack) => {
                    // Server message verbatim (bad header, not a CSV, ...)
                    app.model.ui.show_error(ack.message_or("import rejected"));
                }
                Err(error) => {
                    app.model.ui.show_error(format!(
                        "request failed: {}",
                        errors::format_error_message(&error)
                    ));
                }
            }
        }
    }
}
