//! Parser and validator for the published choreography sheet
//!
//! The sheet is plain CSV with three banner lines on top and ten positional
//! columns per row. Parsing is split into small components:
//! - [`parser`] - banner skipping, CSV reading and orchestration
//! - [`record_parser`] - raw row to typed draft
//! - [`field_parsers`] - per-cell parsing rules and id derivation
//! - [`validation`] - rule checks and rejection building
//! - [`stats`] - result and statistics types
//!
//! ## Usage
//!
//! ```rust
//! use trip_sync::app::services::choreography_parser::ChoreographyParser;
//! use trip_sync::Config;
//!
//! # fn example(sheet: &str) -> trip_sync::Result<()> {
//! let parser = ChoreographyParser::new(&Config::default())?;
//! let result = parser.parse(sheet);
//!
//! println!("Kept {} of {} rows",
//!          result.stats.records_parsed,
//!          result.stats.total_rows);
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;
pub mod validation;

#[cfg(test)]
pub mod tests;

pub use parser::ChoreographyParser;
pub use record_parser::ChoreographyDraft;
pub use stats::{ParseResult, ParseStats};
pub use validation::Validator;
