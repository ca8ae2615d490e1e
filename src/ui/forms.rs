//! Bottom-anchored input forms: the add-record form and the CSV
//! import prompt.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{Field, Model};

pub fn render_add_form(f: &mut Frame, area: Rect, model: &Model, focus: Field) {
    let areas = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    render_field(
        f,
        areas[0],
        " new name — Tab switch · Enter save · Esc close ",
        &model.ui.add_name,
        focus == Field::Name,
    );
    render_field(
        f,
        areas[1],
        " new email ",
        &model.ui.add_email,
        focus == Field::Email,
    );
}

pub fn render_import_prompt(f: &mut Frame, area: Rect, model: &Model) {
    render_field(
        f,
        area,
        " CSV path — Enter upload · Esc close ",
        &model.ui.import_path,
        true,
    );
}

fn render_field(f: &mut Frame, area: Rect, title: &str, value: &str, is_active: bool) {
    let border_color = if is_active { Color::Cyan } else { Color::DarkGray };

    let mut text = value.to_string();
    if is_active {
        text.push('█');
    }

    let input = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(Style::default().fg(border_color)),
    );

    f.render_widget(input, area);
}
