//! Listing refreshes and view transitions.
//!
//! Everything that changes which page is on screen funnels through
//! `request_refresh`, which allocates a fresh fetch sequence number so
//! earlier in-flight responses become stale.

use log::warn;
use std::time::Instant;

use crate::services::api::{ApiRequest, Priority};
use crate::App;

impl App {
    /// Issue a listing fetch for the current view parameters.
    pub fn request_refresh(&mut self, priority: Priority) {
        let seq = self.model.ops.next_fetch_seq();
        self.model.ops.fetching = true;

        let query = self.model.view.list_query();
        let _ = self.api_tx.send(ApiRequest::FetchPage {
            query,
            seq,
            priority,
        });
    }

    /// Persist the pagination pair. Failures are logged, not surfaced:
    /// losing a preference must not interrupt the session.
    pub fn save_view_prefs(&self) {
        if let Err(e) = self.store.save_page(self.model.view.page) {
            warn!("failed to persist current page: {}", e);
        }
        if let Err(e) = self.store.save_per_page(self.model.view.per_page) {
            warn!("failed to persist page size: {}", e);
        }
    }

    /// Next page; blocked silently at the last page (no fetch issued).
    pub fn page_next(&mut self) {
        if self.model.view.next_page(self.model.records.total) {
            self.save_view_prefs();
            self.request_refresh(Priority::High);
        }
    }

    /// Previous page; blocked silently at page 1 (no fetch issued).
    pub fn page_prev(&mut self) {
        if self.model.view.prev_page() {
            self.save_view_prefs();
            self.request_refresh(Priority::High);
        }
    }

    pub fn cycle_per_page(&mut self) {
        let per_page = self.model.view.cycle_per_page();
        self.save_view_prefs();
        self.request_refresh(Priority::High);
        self.model.ui.show_toast(format!("Page size: {}", per_page));
    }

    pub fn cycle_sort(&mut self) {
        self.model.view.cycle_sort();
        self.request_refresh(Priority::High);
    }

    pub fn toggle_sort_order(&mut self) {
        self.model.view.toggle_order();
        self.request_refresh(Priority::High);
    }

    /// Mark a filter edit; the actual refetch runs once the debounce
    /// delay elapses without further keystrokes. The page reset already
    /// happened in the view model.
    pub fn schedule_filter_refetch(&mut self) {
        self.save_view_prefs();
        self.model.ui.pending_filter_refetch = Some(Instant::now());
    }

    /// Called from the main loop once the debounce delay has elapsed.
    pub fn apply_pending_filter_refetch(&mut self) {
        self.model.ui.pending_filter_refetch = None;
        self.request_refresh(Priority::Low);
    }

    /// Apply a pending filter refetch immediately (filter bar closed).
    pub fn flush_filter_refetch(&mut self) {
        if self.model.ui.pending_filter_refetch.take().is_some() {
            self.request_refresh(Priority::High);
        }
    }

    /// Clear all filters and refetch from page 1.
    pub fn clear_filters(&mut self) {
        if self.model.view.filters.is_empty() {
            return;
        }
        self.model.view.filters.clear();
        self.model.view.reset_page();
        self.model.ui.pending_filter_refetch = None;
        self.save_view_prefs();
        self.request_refresh(Priority::High);
        self.model.ui.show_toast("Filters cleared");
    }
}
