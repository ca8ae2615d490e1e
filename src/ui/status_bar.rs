//! Bottom status line.
//!
//! Connection indicator, page position, shown row range, page size,
//! sort, marked-row count, and the last successful refresh time.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::logic::paging;
use crate::model::{ConnectionState, Model};

pub fn render_status_bar(f: &mut Frame, area: Rect, model: &Model) {
    let mut spans: Vec<Span> = Vec::new();

    match &model.records.connection {
        ConnectionState::Connected => {
            spans.push(Span::styled("● ", Style::default().fg(Color::Green)));
        }
        ConnectionState::Disconnected { message, .. } => {
            spans.push(Span::styled("✗ ", Style::default().fg(Color::Red)));
            spans.push(Span::styled(
                format!("{} ", message),
                Style::default().fg(Color::Red),
            ));
        }
    }

    spans.push(Span::raw(format!(
        "page {}/{}",
        model.view.page,
        model.view.total_pages(model.records.total)
    )));

    match paging::shown_range(model.records.total, model.view.page, model.view.per_page) {
        Some((first, last)) => {
            spans.push(Span::raw(format!(
                " · rows {}-{} of {}",
                first, last, model.records.total
            )));
        }
        None => {
            spans.push(Span::raw(" · no rows"));
        }
    }

    spans.push(Span::raw(format!(" · {}/page", model.view.per_page)));

    spans.push(Span::raw(format!(
        " · sort {} {}",
        model.view.sort_by.as_param(),
        model.view.order.arrow()
    )));

    if !model.records.selected.is_empty() {
        spans.push(Span::styled(
            format!(" · {} marked", model.records.selected.len()),
            Style::default().fg(Color::Green),
        ));
    }

    if model.ops.fetching {
        spans.push(Span::styled(
            " · refreshing…",
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(at) = &model.records.last_refreshed {
        spans.push(Span::styled(
            format!(" · refreshed {}", at),
            Style::default().fg(Color::DarkGray),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
