use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::api::Record;

/// Render the single-record delete confirmation dialog
pub fn render_delete_confirmation(f: &mut Frame, record: &Record) {
    let prompt_text = format!(
        "Delete record #{}?\n\n\
        Name:  {}\n\
        Email: {}\n\n\
        Continue? (y/n)",
        record.id, record.name, record.email
    );

    render_prompt(f, " Confirm Delete ", &prompt_text, 11);
}

/// Render the batch delete confirmation dialog
pub fn render_batch_delete_confirmation(f: &mut Frame, count: usize) {
    let prompt_text = format!(
        "Delete {} marked record(s)?\n\n\
        This action cannot be undone.\n\n\
        Continue? (y/n)",
        count
    );

    render_prompt(f, " Confirm Batch Delete ", &prompt_text, 9);
}

fn render_prompt(f: &mut Frame, title: &str, text: &str, height: u16) {
    // Center the prompt
    let area = f.area();
    let prompt_width = 50;
    let prompt_area = Rect {
        x: (area.width.saturating_sub(prompt_width)) / 2,
        y: (area.height.saturating_sub(height)) / 2,
        width: prompt_width.min(area.width),
        height: height.min(area.height),
    };

    let prompt = Paragraph::new(text.to_string())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}
