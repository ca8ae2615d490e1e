//! Pure Application Model
//!
//! The model is the single owner of all client-side state, organized
//! into focused sub-models:
//!
//! - **RecordsModel**: the fetched table data (rows, total, cursor,
//!   selection, per-row edit drafts, connection state)
//! - **ViewModel**: the listing parameters (pagination, filters, sort)
//! - **UiModel**: input mode, form buffers, toast, quit flag
//! - **OpsModel**: in-flight mutation guards and fetch sequencing
//!
//! Key principles:
//! - Clone + Debug: state can be snapshotted and compared in tests
//! - No services: all I/O lives in the app/services layers
//! - Pure accessors: helper methods are side-effect free

pub mod ops;
pub mod records;
pub mod ui;
pub mod view;

pub use ops::{ActionKey, OpsModel};
pub use records::{ConnectionState, RecordsModel, RowDraft};
pub use ui::{Field, Mode, UiModel};
pub use view::{FilterColumn, FilterState, SortColumn, SortOrder, ViewModel, PER_PAGE_PRESETS};

use crate::api::Record;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Fetched table data and selection/edit state
    pub records: RecordsModel,

    /// Listing parameters (pagination, filters, sort)
    pub view: ViewModel,

    /// Input mode, forms, toast
    pub ui: UiModel,

    /// In-flight tracking and fetch sequencing
    pub ops: OpsModel,
}

impl Model {
    /// Create the initial model with a restored (page, per_page) pair.
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            records: RecordsModel::new(),
            view: ViewModel::new(page, per_page),
            ui: UiModel::new(),
            ops: OpsModel::new(),
        }
    }

    /// Record under the table cursor (if any)
    pub fn selected_record(&self) -> Option<&Record> {
        self.records
            .cursor
            .and_then(|idx| self.records.rows.get(idx))
    }
}
