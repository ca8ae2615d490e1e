//! Filter bar.
//!
//! Three inputs, one per filterable column. The active column (while
//! the bar has focus) gets a cyan border and a block cursor; columns
//! with a pattern stay visible after the bar is closed.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{FilterColumn, Mode, Model};

pub fn render_filter_bar(f: &mut Frame, area: Rect, model: &Model) {
    let active = match model.ui.mode {
        Mode::FilterBar { col } => Some(col),
        _ => None,
    };

    let areas = Layout::horizontal([
        Constraint::Length(14),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .split(area);

    let columns = [FilterColumn::Id, FilterColumn::Name, FilterColumn::Email];
    for (column, column_area) in columns.into_iter().zip(areas.iter()) {
        render_filter_input(f, *column_area, model, column, active == Some(column));
    }
}

fn render_filter_input(
    f: &mut Frame,
    area: Rect,
    model: &Model,
    column: FilterColumn,
    is_active: bool,
) {
    let value = model.view.filters.column(column);

    let title = if is_active {
        format!(" filter: {} — Tab next · Enter apply ", column.label())
    } else {
        format!(" filter: {} ", column.label())
    };

    let border_color = if is_active {
        Color::Cyan
    } else if !value.trim().is_empty() {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let mut text = value.to_string();
    if is_active {
        text.push('█');
    }

    let input = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color)),
    );

    f.render_widget(input, area);
}
