//! Field parsing utilities for choreography rows
//!
//! Each function turns one raw sheet cell into its typed value. Numeric
//! parsers return `None` on malformed input; the validator turns that into a
//! diagnostic.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::app::models::{Difficulty, Warning};
use crate::constants::{ARTIST_SEPARATORS, difficulty_keywords, warning_markers};

/// Ordered marker → tag table for content warnings
const WARNING_RULES: &[(&str, Warning)] = &[
    (warning_markers::EXPLICIT, Warning::Explicit),
    (warning_markers::CHALLENGING, Warning::Challenging),
    (warning_markers::CONTENT_STRIKE, Warning::ContentStrike),
];

/// Ordered keyword set → tag table for difficulties
const DIFFICULTY_RULES: &[(&[&str], Difficulty)] = &[
    (difficulty_keywords::BEGINNER, Difficulty::Beginner),
    (difficulty_keywords::REGULAR, Difficulty::Regular),
    (difficulty_keywords::EXPERT, Difficulty::Expert),
    (difficulty_keywords::CARDIO, Difficulty::Cardio),
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// `%Y` accepts one to four digits, so `1/2/23` would otherwise match
/// `%Y/%m/%d` as year 1. Anything before this year is a misparse.
const MIN_YEAR: i32 = 1000;

/// Detect content warning markers, in table order
pub fn parse_warnings(input: &str) -> Vec<Warning> {
    WARNING_RULES
        .iter()
        .filter(|(marker, _)| input.contains(*marker))
        .map(|(_, warning)| *warning)
        .collect()
}

/// Split the artist cell on `,` and `&`, trimming and lower-casing each name
///
/// An empty cell produces a single empty name.
pub fn parse_artists(input: &str) -> Vec<String> {
    input
        .split(ARTIST_SEPARATORS)
        .map(|artist| artist.trim().to_lowercase())
        .collect()
}

/// Infer difficulty tags from keywords, defaulting to regular
pub fn parse_difficulties(input: &str) -> Vec<Difficulty> {
    let lower = input.to_lowercase();

    let mut difficulties: Vec<Difficulty> = DIFFICULTY_RULES
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(*keyword)))
        .map(|(_, difficulty)| *difficulty)
        .collect();

    if difficulties.is_empty() {
        difficulties.push(Difficulty::Regular);
    }

    difficulties
}

/// Parse the leading integer of a cell
///
/// Surrounding whitespace is ignored, an optional sign is honoured and
/// anything after the first run of digits is discarded, so `"128 bpm"`
/// reads as 128. Returns `None` when no digit follows. Values beyond the
/// `i64` range saturate.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude = rest[..digits_end]
        .bytes()
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });
    Some(if negative { -magnitude } else { magnitude })
}

pub fn parse_bpm(input: &str) -> Option<i64> {
    parse_leading_int(input)
}

/// Convert `minutes:seconds` into total seconds
///
/// Components after the second are ignored; a missing or non-numeric
/// component yields `None`.
pub fn parse_length(input: &str) -> Option<i64> {
    let mut parts = input.split(':');
    let minutes = parse_leading_int(parts.next()?)?;
    let seconds = parse_leading_int(parts.next()?)?;

    Some(minutes.saturating_mul(60).saturating_add(seconds))
}

/// Parse a calendar date from free text
///
/// Accepts ISO dates and date-times, `YYYY/MM/DD`, US-style `M/D/YYYY` and
/// `M/D/YY`, and dates with spelled-out (full or abbreviated) month names.
/// Two-digit years map 00-68 to the 2000s and 69-99 to the 1900s.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| {
            NaiveDate::parse_from_str(trimmed, format)
                .ok()
                .filter(|date| date.year() >= MIN_YEAR)
        })
        .or_else(|| {
            DATETIME_FORMATS.iter().find_map(|format| {
                NaiveDateTime::parse_from_str(trimmed, format)
                    .ok()
                    .map(|dt| dt.date())
                    .filter(|date| date.year() >= MIN_YEAR)
            })
        })
}

/// Trimmed notes, or `None` when nothing is left
pub fn parse_notes(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Derive the display key from title, artists and choreographer
pub fn generate_id(title: &str, artists: &[String], choreographer: &str) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(artists.len() + 2);
    parts.push(title);
    parts.extend(artists.iter().map(String::as_str));
    parts.push(choreographer);

    parts.join("-").to_lowercase()
}
