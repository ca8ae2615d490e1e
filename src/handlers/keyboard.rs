//! Keyboard Input Handler
//!
//! Routes every keystroke by the current input mode: confirmation
//! prompts first, then text-entry modes, then the normal-mode action
//! keys.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{Field, FilterColumn, Mode};
use crate::services::api::Priority;
use crate::App;

pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Confirmation prompts swallow everything except their answers
    match app.model.ui.mode.clone() {
        Mode::ConfirmDelete { id } => {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    app.confirm_delete(id);
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    // Declined: no network call
                    app.model.ui.mode = Mode::Normal;
                }
                _ => {}
            }
            return Ok(());
        }

        Mode::ConfirmBatchDelete { ids } => {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    app.confirm_batch_delete(ids);
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    app.model.ui.mode = Mode::Normal;
                    app.model.ui.show_toast("Batch delete cancelled");
                }
                _ => {}
            }
            return Ok(());
        }

        Mode::EditRow { id, field } => {
            handle_edit_row_key(app, key, id, field);
            return Ok(());
        }

        Mode::AddForm { focus } => {
            handle_add_form_key(app, key, focus);
            return Ok(());
        }

        Mode::FilterBar { col } => {
            handle_filter_bar_key(app, key, col);
            return Ok(());
        }

        Mode::ImportPrompt => {
            handle_import_prompt_key(app, key);
            return Ok(());
        }

        Mode::Normal => {}
    }

    // Normal mode
    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
        }

        KeyCode::Char('r') => {
            app.request_refresh(Priority::High);
        }

        // Row cursor
        KeyCode::Up | KeyCode::Char('k') => app.model.records.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.model.records.move_cursor(1),
        KeyCode::Home => app.model.records.cursor_first(),
        KeyCode::End => app.model.records.cursor_last(),

        // Pagination (silently blocked at the bounds)
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => app.page_prev(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => app.page_next(),
        KeyCode::Char('p') => app.cycle_per_page(),

        // Selection
        KeyCode::Char(' ') => app.model.records.toggle_selected(),
        KeyCode::Char('a') => app.model.records.toggle_select_all(),

        // Mutations
        KeyCode::Char('n') => {
            app.model.ui.mode = Mode::AddForm { focus: Field::Name };
        }
        KeyCode::Char('e') | KeyCode::Enter => app.begin_row_edit(Field::Name),
        KeyCode::Char('d') => app.request_delete(),
        KeyCode::Char('D') => app.request_batch_delete(),

        // Filters
        KeyCode::Char('f') | KeyCode::Char('/') => {
            app.model.ui.mode = Mode::FilterBar {
                col: FilterColumn::Id,
            };
        }
        KeyCode::Char('c') => app.clear_filters(),

        // Sort
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('S') => app.toggle_sort_order(),

        // Import / export
        KeyCode::Char('i') => {
            app.model.ui.mode = Mode::ImportPrompt;
        }
        KeyCode::Char('x') => app.export_in_browser(),

        _ => {}
    }

    Ok(())
}

fn handle_edit_row_key(app: &mut App, key: KeyEvent, id: i64, field: Field) {
    match key.code {
        KeyCode::Esc => app.cancel_row_edit(id),
        KeyCode::Enter => app.commit_row_edit(id),
        KeyCode::Tab => {
            app.model.ui.mode = Mode::EditRow {
                id,
                field: field.other(),
            };
        }
        KeyCode::Backspace => {
            if let Some(draft) = app.model.records.draft_mut(id) {
                match field {
                    Field::Name => draft.name.pop(),
                    Field::Email => draft.email.pop(),
                };
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(draft) = app.model.records.draft_mut(id) {
                match field {
                    Field::Name => draft.name.push(c),
                    Field::Email => draft.email.push(c),
                }
            }
        }
        _ => {}
    }
}

fn handle_add_form_key(app: &mut App, key: KeyEvent, focus: Field) {
    match key.code {
        // Inputs are kept on close so the form can be reopened as-is
        KeyCode::Esc => app.model.ui.mode = Mode::Normal,
        KeyCode::Enter => app.submit_add(),
        KeyCode::Tab => {
            app.model.ui.mode = Mode::AddForm {
                focus: focus.other(),
            };
        }
        KeyCode::Backspace => {
            match focus {
                Field::Name => app.model.ui.add_name.pop(),
                Field::Email => app.model.ui.add_email.pop(),
            };
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            match focus {
                Field::Name => app.model.ui.add_name.push(c),
                Field::Email => app.model.ui.add_email.push(c),
            };
        }
        _ => {}
    }
}

fn handle_filter_bar_key(app: &mut App, key: KeyEvent, col: FilterColumn) {
    match key.code {
        // Closing the bar applies any pending (debounced) refetch now
        KeyCode::Esc | KeyCode::Enter => {
            app.model.ui.mode = Mode::Normal;
            app.flush_filter_refetch();
        }
        KeyCode::Tab => {
            app.model.ui.mode = Mode::FilterBar { col: col.next() };
        }
        KeyCode::Backspace => {
            let mut value = app.model.view.filters.column(col).to_string();
            if value.pop().is_some() {
                app.model.view.set_filter(col, value);
                app.schedule_filter_refetch();
            }
        }
        // Ctrl-U clears the active column
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if !app.model.view.filters.column(col).is_empty() {
                app.model.view.set_filter(col, String::new());
                app.schedule_filter_refetch();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut value = app.model.view.filters.column(col).to_string();
            value.push(c);
            app.model.view.set_filter(col, value);
            app.schedule_filter_refetch();
        }
        _ => {}
    }
}

fn handle_import_prompt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Path is kept on close so the prompt can be reopened as-is
        KeyCode::Esc => app.model.ui.mode = Mode::Normal,
        KeyCode::Enter => app.submit_import(),
        KeyCode::Backspace => {
            app.model.ui.import_path.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.ui.import_path.push(c);
        }
        _ => {}
    }
}
