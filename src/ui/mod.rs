// UI module - all TUI rendering using Ratatui
//
// Architecture:
// - layout: calculates the screen layout (filter bar, table, forms, bars)
// - render: main orchestration function that coordinates all rendering
// - table: the records table (selection marks, id, name, email)
// - filter_bar: per-column filter inputs
// - forms: add-record form and CSV import prompt
// - dialogs: confirmation dialogs (delete, batch delete)
// - status_bar: bottom status line (page, range, sort, connection)
// - legend: hotkey legend
// - toast: toast notifications (brief pop-up messages)

pub mod dialogs;
pub mod filter_bar;
pub mod forms;
pub mod layout;
pub mod legend;
pub mod render;
pub mod status_bar;
pub mod table;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
