//! Persisted view preferences.
//!
//! The current page and page size survive restarts as two stringified
//! integer entries in a small SQLite key-value table under the platform
//! data directory. Anything missing or unreadable falls back to the
//! defaults.

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::PathBuf;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 10;

const KEY_CURRENT_PAGE: &str = "current_page";
const KEY_ITEMS_PER_PAGE: &str = "items_per_page";

pub struct ViewStore {
    conn: Connection,
}

impl ViewStore {
    pub fn new() -> Result<Self> {
        let data_dir = Self::get_data_dir();
        std::fs::create_dir_all(&data_dir)?;

        let db_path = data_dir.join("view.db");
        let conn = Connection::open(db_path)?;

        let store = ViewStore { conn };
        store.init_schema()?;

        Ok(store)
    }

    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = ViewStore { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn get_data_dir() -> PathBuf {
        if let Some(data_dir) = dirs::data_dir() {
            data_dir.join("admintui")
        } else {
            // Fallback when no data dir is available
            std::env::temp_dir().join("admintui")
        }
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS view_state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM view_state WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO view_state (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Parse a stored entry as a positive integer; junk counts as absent.
    fn get_positive(&self, key: &str) -> Result<Option<u64>> {
        Ok(self
            .get(key)?
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|&v| v >= 1))
    }

    pub fn save_page(&self, page: u64) -> Result<()> {
        self.set(KEY_CURRENT_PAGE, &page.to_string())
    }

    pub fn save_per_page(&self, per_page: u64) -> Result<()> {
        self.set(KEY_ITEMS_PER_PAGE, &per_page.to_string())
    }

    /// Load the persisted (page, per_page) pair, applying defaults for
    /// anything absent or invalid.
    pub fn load_view(&self) -> Result<(u64, u64)> {
        let page = self.get_positive(KEY_CURRENT_PAGE)?.unwrap_or(DEFAULT_PAGE);
        let per_page = self
            .get_positive(KEY_ITEMS_PER_PAGE)?
            .unwrap_or(DEFAULT_PER_PAGE);
        Ok((page, per_page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_falls_back_to_defaults() {
        let store = ViewStore::new_in_memory().unwrap();
        assert_eq!(store.load_view().unwrap(), (DEFAULT_PAGE, DEFAULT_PER_PAGE));
    }

    #[test]
    fn saved_view_round_trips() {
        let store = ViewStore::new_in_memory().unwrap();
        store.save_page(3).unwrap();
        store.save_per_page(25).unwrap();
        assert_eq!(store.load_view().unwrap(), (3, 25));
    }

    #[test]
    fn save_overwrites_previous_value() {
        let store = ViewStore::new_in_memory().unwrap();
        store.save_page(3).unwrap();
        store.save_page(7).unwrap();
        assert_eq!(store.load_view().unwrap().0, 7);
    }

    #[test]
    fn corrupt_entries_fall_back_to_defaults() {
        let store = ViewStore::new_in_memory().unwrap();
        store.set(KEY_CURRENT_PAGE, "not-a-number").unwrap();
        store.set(KEY_ITEMS_PER_PAGE, "0").unwrap();
        assert_eq!(store.load_view().unwrap(), (DEFAULT_PAGE, DEFAULT_PER_PAGE));
    }
}
