use crate::model::Mode;
use crate::App;
use ratatui::Frame;

use super::{dialogs, filter_bar, forms, layout, legend, status_bar, table, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let model = &app.model;

    // The filter bar stays visible while any filter is set so it is
    // obvious the listing is narrowed.
    let filter_visible =
        matches!(model.ui.mode, Mode::FilterBar { .. }) || !model.view.filters.is_empty();
    let form_visible = matches!(model.ui.mode, Mode::AddForm { .. } | Mode::ImportPrompt);

    let layout_info = layout::calculate_layout(size, filter_visible, form_visible);

    if let Some(filter_area) = layout_info.filter_area {
        filter_bar::render_filter_bar(f, filter_area, model);
    }

    table::render_table(f, layout_info.table_area, model);

    if let Some(form_area) = layout_info.form_area {
        match model.ui.mode {
            Mode::AddForm { focus } => forms::render_add_form(f, form_area, model, focus),
            Mode::ImportPrompt => forms::render_import_prompt(f, form_area, model),
            _ => {}
        }
    }

    status_bar::render_status_bar(f, layout_info.status_area, model);
    legend::render_legend(f, layout_info.legend_area, model);

    // Modal overlays render above everything else
    match &model.ui.mode {
        Mode::ConfirmDelete { id } => {
            if let Some(record) = model.records.rows.iter().find(|r| r.id == *id) {
                dialogs::render_delete_confirmation(f, record);
            }
        }
        Mode::ConfirmBatchDelete { ids } => {
            dialogs::render_batch_delete_confirmation(f, ids.len());
        }
        _ => {}
    }

    if let Some((message, _)) = &model.ui.toast {
        toast::render_toast(f, size, message);
    }
}
