use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub base_url: String,
    /// Delay before a filter edit triggers a refetch, in milliseconds.
    #[serde(default = "default_filter_debounce_ms")]
    pub filter_debounce_ms: u64,
}

fn default_filter_debounce_ms() -> u64 {
    300
}

impl Config {
    /// Config for when only a base URL was given on the command line.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            filter_debounce_ms: default_filter_debounce_ms(),
        }
    }
}
