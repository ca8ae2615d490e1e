//! Hotkey legend (bottom line).

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::model::{Mode, Model};

pub fn render_legend(f: &mut Frame, area: Rect, model: &Model) {
    let text = match model.ui.mode {
        Mode::Normal => {
            "q quit · r refresh · ↑↓ row · ←→ page · p page-size · space mark · a mark-all · \
             n add · e edit · d delete · D delete-marked · f filter · c clear-filters · \
             s/S sort · i import · x export"
        }
        Mode::EditRow { .. } => "Tab switch field · Enter save · Esc cancel",
        Mode::AddForm { .. } => "Tab switch field · Enter submit · Esc close",
        Mode::FilterBar { .. } => "Tab next column · Ctrl-U clear column · Enter/Esc apply & close",
        Mode::ImportPrompt => "Enter upload · Esc close",
        Mode::ConfirmDelete { .. } | Mode::ConfirmBatchDelete { .. } => "y confirm · n cancel",
    };

    let legend = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(legend, area);
}
