//! The records table.
//!
//! One row per fetched record: selection mark, read-only id, and the
//! name/email cells. Cells with a pending draft render the draft text
//! in a distinct style; the cell being edited gets a block cursor.
//! The table is rebuilt from the model every frame, so a render can
//! never show rows from a previous page.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::logic::ui::ellipsize;
use crate::model::{Field, Mode, Model, SortColumn};

const SELECT_WIDTH: u16 = 3;
const ID_WIDTH: u16 = 8;

pub fn render_table(f: &mut Frame, area: Rect, model: &Model) {
    let title = format!(
        " Records — page {}/{} ({} total) ",
        model.view.page,
        model.view.total_pages(model.records.total),
        model.records.total
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan));

    if !model.records.loaded {
        let placeholder = Paragraph::new("Loading…")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(placeholder, area);
        return;
    }

    if model.records.rows.is_empty() {
        let hint = if model.view.filters.is_empty() {
            "No records — press 'n' to add one, 'i' to import a CSV"
        } else {
            "No records match the current filters — press 'c' to clear them"
        };
        let placeholder = Paragraph::new(hint)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(placeholder, area);
        return;
    }

    // Column budget for ellipsis truncation: what remains after the
    // mark and id columns is split between name and email.
    let inner_width = area.width.saturating_sub(2);
    let text_width = inner_width
        .saturating_sub(SELECT_WIDTH + ID_WIDTH + 3) // column spacing
        .max(2);
    let name_width = (text_width / 2) as usize;
    let email_width = (text_width - text_width / 2) as usize;

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from(header_label(model, SortColumn::Id, "ID")),
        Cell::from(header_label(model, SortColumn::Name, "Name")),
        Cell::from(header_label(model, SortColumn::Email, "Email")),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let editing = match model.ui.mode {
        Mode::EditRow { id, field } => Some((id, field)),
        _ => None,
    };

    let rows: Vec<Row> = model
        .records
        .rows
        .iter()
        .map(|record| {
            let mark = if model.records.selected.contains(&record.id) {
                "●"
            } else {
                " "
            };

            let draft = model.records.drafts.get(&record.id);
            let draft_style = Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC);

            let name_cell = match draft {
                Some(draft) => {
                    let mut text = ellipsize(&draft.name, name_width);
                    if editing == Some((record.id, Field::Name)) {
                        text.push('█');
                    }
                    Cell::from(text).style(draft_style)
                }
                None => Cell::from(ellipsize(&record.name, name_width)),
            };

            let email_cell = match draft {
                Some(draft) => {
                    let mut text = ellipsize(&draft.email, email_width);
                    if editing == Some((record.id, Field::Email)) {
                        text.push('█');
                    }
                    Cell::from(text).style(draft_style)
                }
                None => Cell::from(ellipsize(&record.email, email_width)),
            };

            Row::new(vec![
                Cell::from(mark).style(Style::default().fg(Color::Green)),
                Cell::from(record.id.to_string()),
                name_cell,
                email_cell,
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(SELECT_WIDTH),
        Constraint::Length(ID_WIDTH),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    state.select(model.records.cursor);

    f.render_stateful_widget(table, area, &mut state);
}

/// Header text with the sort arrow on the active column.
fn header_label(model: &Model, column: SortColumn, label: &str) -> Line<'static> {
    if model.view.sort_by == column {
        Line::from(format!("{} {}", label, model.view.order.arrow()))
    } else {
        Line::from(label.to_string())
    }
}
