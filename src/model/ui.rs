//! UI Model
//!
//! Input mode, form buffers, and the toast notification. The mode enum
//! is the single source of truth for where keystrokes go.

use std::time::Instant;

use super::view::FilterColumn;
use crate::logic;

/// Which editable record field a text input targets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
}

impl Field {
    pub fn other(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Name,
        }
    }
}

/// Input mode — where keystrokes are routed
#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    /// Table navigation and action keys
    Normal,

    /// Inline edit of one row's draft
    EditRow { id: i64, field: Field },

    /// New-record form
    AddForm { focus: Field },

    /// Filter bar input
    FilterBar { col: FilterColumn },

    /// CSV path prompt
    ImportPrompt,

    /// Single-record delete confirmation
    ConfirmDelete { id: i64 },

    /// Batch delete confirmation
    ConfirmBatchDelete { ids: Vec<i64> },
}

#[derive(Clone, Debug)]
pub struct UiModel {
    pub mode: Mode,

    /// New-record form buffers
    pub add_name: String,
    pub add_email: String,

    /// CSV path buffer for the import prompt
    pub import_path: String,

    /// Toast notification (message, shown-at)
    pub toast: Option<(String, Instant)>,

    /// Set when a filter edit is waiting out the debounce delay
    pub pending_filter_refetch: Option<Instant>,

    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            mode: Mode::Normal,
            add_name: String::new(),
            add_email: String::new(),
            import_path: String::new(),
            toast: None,
            pending_filter_refetch: None,
            should_quit: false,
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some((message.into(), Instant::now()));
    }

    /// Error toast; the renderer switches theme on the prefix.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.toast = Some((format!("Error: {}", message.into()), Instant::now()));
    }

    pub fn dismiss_expired_toast(&mut self) {
        if let Some((_, shown_at)) = &self.toast {
            if logic::ui::should_dismiss_toast(shown_at.elapsed().as_millis()) {
                self.toast = None;
            }
        }
    }

}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_toast_gets_the_error_prefix() {
        let mut ui = UiModel::new();
        ui.show_error("boom");
        assert_eq!(ui.toast.as_ref().unwrap().0, "Error: boom");
    }

    #[test]
    fn fresh_toast_is_not_dismissed() {
        let mut ui = UiModel::new();
        ui.show_toast("saved");
        ui.dismiss_expired_toast();
        assert!(ui.toast.is_some());
    }

    #[test]
    fn expired_toast_is_dismissed() {
        let mut ui = UiModel::new();
        // Backdate the toast past the dismissal deadline
        ui.toast = Some((
            "old".to_string(),
            Instant::now() - std::time::Duration::from_secs(5),
        ));
        ui.dismiss_expired_toast();
        assert!(ui.toast.is_none());
    }
}
