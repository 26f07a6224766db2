//! Test utilities for choreography parser testing
//!
//! Sheet builders and row helpers shared by the test modules.

use crate::app::models::RawChoreography;
use crate::config::Config;

use super::ChoreographyParser;

mod parser_tests;

pub const VALID_LINK: &str = "https://cdn.discordapp.com/attachments/1/2/song.mp3";

/// Banner lines as they appear on top of the published sheet
pub const BANNER: &str = "\
Audio Trip Sync - custom choreographies
\"Markers: [E] explicit, [C] challenging, [X] content strike\"
Title,Warnings,Artists,Choreographer,Difficulties,BPM,Length,Date,Link,Notes
";

/// The reference row: every field well-formed
pub fn counting_stars_row() -> String {
    format!(
        "Counting Stars,[E],OneRepublic,Jane,Exp,120,3:45,2023-01-02,{},",
        VALID_LINK
    )
}

/// Build a sheet from the banner and the given data rows
pub fn sheet(rows: &[&str]) -> String {
    let mut content = BANNER.to_string();
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    content
}

/// A raw row with every field well-formed
pub fn raw_counting_stars() -> RawChoreography {
    RawChoreography {
        line: 4,
        column_count: 10,
        title: "Counting Stars".to_string(),
        warnings: "[E]".to_string(),
        artists: "OneRepublic".to_string(),
        choreographer: "Jane".to_string(),
        difficulties: "Exp".to_string(),
        bpm: "120".to_string(),
        length: "3:45".to_string(),
        date: "2023-01-02".to_string(),
        link: VALID_LINK.to_string(),
        notes: String::new(),
    }
}

pub fn default_parser() -> ChoreographyParser {
    ChoreographyParser::new(&Config::default()).unwrap()
}
