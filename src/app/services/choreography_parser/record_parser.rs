//! Individual row transformation for the choreography sheet
//!
//! Turns a [`RawChoreography`] into a [`ChoreographyDraft`]: every field typed,
//! numeric failures kept as `None` so the validator can report all of them.

use tracing::debug;

use super::field_parsers::{
    generate_id, parse_artists, parse_bpm, parse_date, parse_difficulties, parse_length,
    parse_notes, parse_warnings,
};
use crate::app::models::{Choreography, Difficulty, RawChoreography, Warning};

/// A transformed but not yet validated row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoreographyDraft {
    pub line: u64,
    pub column_count: usize,
    pub id: String,
    pub title: String,
    pub warnings: Vec<Warning>,
    pub artists: Vec<String>,
    pub choreographer: String,
    pub difficulties: Vec<Difficulty>,
    pub bpm: Option<i64>,
    pub length: Option<i64>,
    pub date: Option<chrono::NaiveDate>,
    pub link: String,
    pub notes: Option<String>,
}

impl ChoreographyDraft {
    /// Convert into a [`Choreography`] when both numeric fields parsed
    ///
    /// The validator checks the remaining invariants; this only refuses to
    /// invent numbers.
    pub fn into_choreography(self) -> Option<Choreography> {
        Some(Choreography {
            id: self.id,
            title: self.title,
            warnings: self.warnings,
            artists: self.artists,
            choreographer: self.choreographer,
            difficulties: self.difficulties,
            bpm: self.bpm?,
            length: self.length?,
            date: self.date,
            link: self.link,
            notes: self.notes,
        })
    }
}

/// Transform one raw row
pub fn transform_record(raw: &RawChoreography) -> ChoreographyDraft {
    let title = raw.title.trim().to_string();
    let artists = parse_artists(&raw.artists);
    let choreographer = raw.choreographer.trim().to_string();
    let id = generate_id(&title, &artists, &choreographer);

    let date = parse_date(&raw.date);
    if date.is_none() && !raw.date.trim().is_empty() {
        debug!(
            "Line {}: unrecognised date '{}' for \"{}\"",
            raw.line, raw.date, title
        );
    }

    ChoreographyDraft {
        line: raw.line,
        column_count: raw.column_count,
        id,
        title,
        warnings: parse_warnings(&raw.warnings),
        artists,
        choreographer,
        difficulties: parse_difficulties(&raw.difficulties),
        bpm: parse_bpm(&raw.bpm),
        length: parse_length(&raw.length),
        date,
        link: raw.link.trim().to_string(),
        notes: parse_notes(&raw.notes),
    }
}
