use serde::{Deserialize, Serialize};

/// CSV export of the published spaces sheet
pub const DEFAULT_SHEET_CSV_URL: &str =
    "https://docs.google.com/spreadsheets/d/1zjWeHcaYDrJ4Bgtf2R0J4nqqODoyT8Cup950scDTFA8/export?format=csv";

/// Settings for fetching the spaces sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL of the CSV export
    pub csv_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Append a `_t=<millis>` parameter so caches never serve a stale sheet
    pub cache_bust: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            csv_url: DEFAULT_SHEET_CSV_URL.to_string(),
            timeout_secs: 30,
            cache_bust: true,
        }
    }
}
