//! Screen layout calculation.

use ratatui::layout::{Constraint, Layout, Rect};

pub struct LayoutInfo {
    /// Filter input row (only when the bar is open or filters are set)
    pub filter_area: Option<Rect>,

    /// The records table
    pub table_area: Rect,

    /// Add form / import prompt (only in those modes)
    pub form_area: Option<Rect>,

    pub status_area: Rect,
    pub legend_area: Rect,
}

pub fn calculate_layout(size: Rect, filter_visible: bool, form_visible: bool) -> LayoutInfo {
    let mut constraints = Vec::new();

    if filter_visible {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(5));
    if form_visible {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(1)); // status
    constraints.push(Constraint::Length(1)); // legend

    let areas = Layout::vertical(constraints).split(size);

    let mut idx = 0;
    let filter_area = if filter_visible {
        idx += 1;
        Some(areas[0])
    } else {
        None
    };

    let table_area = areas[idx];
    idx += 1;

    let form_area = if form_visible {
        let area = areas[idx];
        idx += 1;
        Some(area)
    } else {
        None
    };

    let status_area = areas[idx];
    let legend_area = areas[idx + 1];

    LayoutInfo {
        filter_area,
        table_area,
        form_area,
        status_area,
        legend_area,
    }
}
