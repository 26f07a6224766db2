//! Core choreography sheet parser
//!
//! Drops the banner lines, reads the remaining text as headerless CSV and
//! runs each row through transformation and validation.

use tracing::{debug, info, warn};

use super::record_parser::transform_record;
use super::stats::{ParseResult, ParseStats};
use super::validation::Validator;
use crate::Result;
use crate::app::models::{RawChoreography, Rejection, ValidationField, ValidationMessage};
use crate::config::Config;

/// Parser for the published choreography sheet
///
/// Parsing never fails as a whole: rows that cannot be read or violate a
/// rule end up in [`ParseResult::rejections`].
#[derive(Debug, Clone)]
pub struct ChoreographyParser {
    skip_lines: usize,
    validator: Validator,
}

impl ChoreographyParser {
    /// Create a parser from the parsing half of the configuration
    pub fn new(config: &Config) -> Result<Self> {
        config.validate_parsing()?;

        Ok(Self {
            skip_lines: config.skip_lines,
            validator: Validator::new(config.link_regex()?, config.expected_columns),
        })
    }

    /// Parse sheet text into valid entries and rejections, preserving row order
    pub fn parse(&self, content: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut records = Vec::new();
        let mut rejections = Vec::new();

        let (skipped, data) = split_leading_lines(content, self.skip_lines);
        let line_offset = skipped as u64;
        debug!("Skipped {} banner lines", skipped);

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data.as_bytes());

        for result in csv_reader.records() {
            stats.total_rows += 1;

            let outcome = match result {
                Ok(row) => {
                    let line = row.position().map_or(0, |p| p.line()) + line_offset;
                    let raw = RawChoreography::from_fields(line, row.iter());
                    self.validator.check(transform_record(&raw))
                }
                Err(e) => Err(Rejection {
                    line: e.position().map_or(0, |p| p.line()) + line_offset,
                    title: String::new(),
                    messages: vec![ValidationMessage::new(
                        ValidationField::Columns,
                        format!("Unreadable row: {}", e),
                    )],
                }),
            };

            match outcome {
                Ok(choreography) => {
                    records.push(choreography);
                    stats.records_parsed += 1;
                }
                Err(rejection) => {
                    warn!("{}", rejection);
                    rejections.push(rejection);
                    stats.rows_rejected += 1;
                }
            }
        }

        info!(
            "Parsed {} choreographies from {} rows ({} rejected)",
            stats.records_parsed, stats.total_rows, stats.rows_rejected
        );

        ParseResult {
            records,
            rejections,
            stats,
        }
    }
}

/// Split off up to `count` leading lines, returning how many were removed
/// and the remaining text
pub fn split_leading_lines(content: &str, count: usize) -> (usize, &str) {
    let mut rest = content;
    let mut skipped = 0;

    while skipped < count && !rest.is_empty() {
        rest = match rest.find('\n') {
            Some(index) => &rest[index + 1..],
            None => "",
        };
        skipped += 1;
    }

    (skipped, rest)
}
