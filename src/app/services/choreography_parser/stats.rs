//! Parsing statistics and result structures for the choreography sheet

use serde::{Deserialize, Serialize};

use crate::app::models::{Choreography, Rejection};

/// Parsing result with kept entries, rejected rows and statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Valid entries in sheet order
    pub records: Vec<Choreography>,

    /// Rows that violated at least one rule, in sheet order
    pub rejections: Vec<Rejection>,

    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Data rows encountered after the skipped banner lines
    pub total_rows: usize,

    /// Rows that became valid entries
    pub records_parsed: usize,

    /// Rows dropped by validation
    pub rows_rejected: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }
}
