//! Application constants for trip_sync
//!
//! Sheet layout, tag marker tables and default values used across the crate.

// =============================================================================
// Sheet Layout
// =============================================================================

/// Environment variable holding the published sheet URL
pub const SOURCE_URL_ENV: &str = "CSV_URL";

/// Leading lines of the published sheet that carry banners and headers
pub const DEFAULT_SKIP_LINES: usize = 3;

/// Column names in sheet order
pub const COLUMN_NAMES: &[&str] = &[
    "title",
    "warnings",
    "artists",
    "choreographer",
    "difficulties",
    "bpm",
    "length",
    "date",
    "link",
    "notes",
];

/// Number of columns every data row is expected to carry
pub const EXPECTED_COLUMNS: usize = COLUMN_NAMES.len();

/// Attachment links must point at the Discord CDN
pub const DEFAULT_LINK_PATTERN: &str = r"^https://cdn\.discordapp\.com/attachments/\d+/\d+/.+";

// =============================================================================
// Tag Rule Tables
// =============================================================================

/// Content warning markers, checked in this order
pub mod warning_markers {
    pub const EXPLICIT: &str = "[E]";
    pub const CHALLENGING: &str = "[C]";
    pub const CONTENT_STRIKE: &str = "[X]";
}

/// Difficulty keywords, matched as lower-case substrings
pub mod difficulty_keywords {
    pub const BEGINNER: &[&str] = &["easy", "ez", "beginner"];
    pub const REGULAR: &[&str] = &["regular", "reg"];
    pub const EXPERT: &[&str] = &["expert", "exp"];
    pub const CARDIO: &[&str] = &["cardio"];
}

/// Separators between artist names
pub const ARTIST_SEPARATORS: &[char] = &[',', '&'];
