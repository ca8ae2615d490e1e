//! View Model
//!
//! The listing parameters: pagination, per-column filters, and sort.
//! Transitions encode the invariants — page moves are blocked at the
//! bounds, and anything that changes the result set shape (page size,
//! filters) resets the page to 1.

use crate::api::ListQuery;
use crate::logic::paging;

/// Page size presets cycled from the keyboard
pub const PER_PAGE_PRESETS: [u64; 4] = [10, 25, 50, 100];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Name,
    Email,
}

impl SortColumn {
    pub fn as_param(self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::Name => "name",
            SortColumn::Email => "email",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SortColumn::Id => SortColumn::Name,
            SortColumn::Name => SortColumn::Email,
            SortColumn::Email => SortColumn::Id,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Asc => "▲",
            SortOrder::Desc => "▼",
        }
    }
}

/// Identifies one filterable column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterColumn {
    Id,
    Name,
    Email,
}

impl FilterColumn {
    pub fn next(self) -> Self {
        match self {
            FilterColumn::Id => FilterColumn::Name,
            FilterColumn::Name => FilterColumn::Email,
            FilterColumn::Email => FilterColumn::Id,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterColumn::Id => "id",
            FilterColumn::Name => "name",
            FilterColumn::Email => "email",
        }
    }
}

/// Per-column substring patterns, matched case-insensitively by the
/// server. In memory only; never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.id.trim().is_empty()
            && self.name.trim().is_empty()
            && self.email.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.id.clear();
        self.name.clear();
        self.email.clear();
    }

    pub fn column(&self, col: FilterColumn) -> &str {
        match col {
            FilterColumn::Id => &self.id,
            FilterColumn::Name => &self.name,
            FilterColumn::Email => &self.email,
        }
    }

    pub fn column_mut(&mut self, col: FilterColumn) -> &mut String {
        match col {
            FilterColumn::Id => &mut self.id,
            FilterColumn::Name => &mut self.name,
            FilterColumn::Email => &mut self.email,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ViewModel {
    /// Current page, 1-based; never below 1
    pub page: u64,

    /// Page size; one of the presets unless restored from storage
    pub per_page: u64,

    /// Per-column filter patterns
    pub filters: FilterState,

    pub sort_by: SortColumn,
    pub order: SortOrder,
}

impl ViewModel {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
            filters: FilterState::default(),
            sort_by: SortColumn::Id,
            order: SortOrder::Asc,
        }
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        paging::total_pages(total, self.per_page)
    }

    /// Advance a page; false (and no state change) at the last page.
    pub fn next_page(&mut self, total: u64) -> bool {
        if !paging::can_next(self.page, total, self.per_page) {
            return false;
        }
        self.page += 1;
        true
    }

    /// Step back a page; false (and no state change) at page 1.
    pub fn prev_page(&mut self) -> bool {
        if !paging::can_prev(self.page) {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// Switch to the next page-size preset. Resets the page to 1 so the
    /// new slicing starts from the top.
    pub fn cycle_per_page(&mut self) -> u64 {
        let idx = PER_PAGE_PRESETS
            .iter()
            .position(|&p| p == self.per_page)
            .map(|i| (i + 1) % PER_PAGE_PRESETS.len())
            .unwrap_or(0);
        self.per_page = PER_PAGE_PRESETS[idx];
        self.page = 1;
        self.per_page
    }

    /// Set one filter column. Resets the page to 1: the old offset is
    /// meaningless against a different result set.
    pub fn set_filter(&mut self, col: FilterColumn, value: String) {
        *self.filters.column_mut(col) = value;
        self.page = 1;
    }

    pub fn cycle_sort(&mut self) -> SortColumn {
        self.sort_by = self.sort_by.next();
        self.sort_by
    }

    pub fn toggle_order(&mut self) -> SortOrder {
        self.order = self.order.toggled();
        self.order
    }

    /// Snapshot of the listing parameters for one request.
    pub fn list_query(&self) -> ListQuery {
        ListQuery {
            filter_id: self.filters.id.clone(),
            filter_name: self.filters.name.clone(),
            filter_email: self.filters.email.clone(),
            sort_by: self.sort_by.as_param(),
            order: self.order.as_param(),
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_moves_are_blocked_at_bounds() {
        let mut view = ViewModel::new(1, 10);

        // 42 records -> 5 pages
        assert!(!view.prev_page());
        assert_eq!(view.page, 1);

        assert!(view.next_page(42));
        assert_eq!(view.page, 2);

        view.page = 5;
        assert!(!view.next_page(42));
        assert_eq!(view.page, 5);
    }

    #[test]
    fn next_page_is_blocked_on_empty_data_set() {
        let mut view = ViewModel::new(1, 10);
        assert!(!view.next_page(0));
        assert_eq!(view.page, 1);
    }

    #[test]
    fn per_page_cycle_resets_page() {
        let mut view = ViewModel::new(4, 10);
        assert_eq!(view.cycle_per_page(), 25);
        assert_eq!(view.page, 1);
        assert_eq!(view.cycle_per_page(), 50);
        assert_eq!(view.cycle_per_page(), 100);
        assert_eq!(view.cycle_per_page(), 10);
    }

    #[test]
    fn per_page_cycle_recovers_from_non_preset_value() {
        // e.g. a value hand-edited into the store
        let mut view = ViewModel::new(1, 17);
        assert_eq!(view.cycle_per_page(), PER_PAGE_PRESETS[0]);
    }

    #[test]
    fn filter_edit_resets_page() {
        let mut view = ViewModel::new(3, 10);
        view.set_filter(FilterColumn::Name, "ann".to_string());
        assert_eq!(view.page, 1);
        assert_eq!(view.filters.name, "ann");
    }

    #[test]
    fn restored_values_are_sanitized() {
        let view = ViewModel::new(0, 0);
        assert_eq!(view.page, 1);
        assert_eq!(view.per_page, 1);
    }

    #[test]
    fn list_query_snapshots_current_parameters() {
        let mut view = ViewModel::new(2, 25);
        view.set_filter(FilterColumn::Email, "@example.com".to_string());
        view.cycle_sort(); // id -> name
        view.toggle_order(); // asc -> desc

        let query = view.list_query();
        assert_eq!(query.page, 1); // set_filter reset it
        assert_eq!(query.per_page, 25);
        assert_eq!(query.filter_email, "@example.com");
        assert_eq!(query.sort_by, "name");
        assert_eq!(query.order, "desc");
    }

    #[test]
    fn filter_state_empty_ignores_whitespace() {
        let mut filters = FilterState::default();
        assert!(filters.is_empty());
        filters.id = "  ".to_string();
        assert!(filters.is_empty());
        filters.name = "x".to_string();
        assert!(!filters.is_empty());
        filters.clear();
        assert!(filters.is_empty());
    }
}
