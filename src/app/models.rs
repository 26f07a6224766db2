//! Data models for choreography ingestion
//!
//! This module contains the row as read from the sheet ([`RawChoreography`]),
//! the validated entry handed to consumers ([`Choreography`]), its tag enums,
//! and the structured diagnostics produced for rejected rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Tags
// =============================================================================

/// Content advisory attached to a choreography
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Warning {
    Explicit,
    Challenging,
    ContentStrike,
}

impl Warning {
    pub fn as_str(&self) -> &'static str {
        match self {
            Warning::Explicit => "explicit",
            Warning::Challenging => "challenging",
            Warning::ContentStrike => "content_strike",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Skill level a choreography was mapped for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Regular,
    Expert,
    Cardio,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Regular => "regular",
            Difficulty::Expert => "expert",
            Difficulty::Cardio => "cardio",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Rows and Entries
// =============================================================================

/// One data row of the sheet, mapped positionally and otherwise untouched
///
/// Missing trailing columns read as empty strings; `column_count` keeps the
/// number of columns the row really had.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawChoreography {
    /// 1-based line number in the source text
    pub line: u64,
    pub column_count: usize,
    pub title: String,
    pub warnings: String,
    pub artists: String,
    pub choreographer: String,
    pub difficulties: String,
    pub bpm: String,
    pub length: String,
    pub date: String,
    pub link: String,
    pub notes: String,
}

impl RawChoreography {
    /// Map fields positionally onto the sheet columns
    pub fn from_fields<'a, I>(line: u64, fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut raw = RawChoreography {
            line,
            ..Default::default()
        };

        for (index, value) in fields.into_iter().enumerate() {
            raw.column_count += 1;
            let slot = match index {
                0 => &mut raw.title,
                1 => &mut raw.warnings,
                2 => &mut raw.artists,
                3 => &mut raw.choreographer,
                4 => &mut raw.difficulties,
                5 => &mut raw.bpm,
                6 => &mut raw.length,
                7 => &mut raw.date,
                8 => &mut raw.link,
                9 => &mut raw.notes,
                _ => continue,
            };
            *slot = value.to_string();
        }

        raw
    }
}

/// A validated choreography entry ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choreography {
    /// Derived from title, artists and choreographer; a display key, not unique
    pub id: String,
    pub title: String,
    pub warnings: Vec<Warning>,
    pub artists: Vec<String>,
    pub choreographer: String,
    pub difficulties: Vec<Difficulty>,
    pub bpm: i64,
    /// Song length in seconds
    pub length: i64,
    /// Upload date; `None` when the sheet text was not a recognisable date
    pub date: Option<NaiveDate>,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// =============================================================================
// Diagnostics
// =============================================================================

/// Field a validation rule is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationField {
    Title,
    Artists,
    Choreographer,
    Difficulties,
    Bpm,
    Length,
    Link,
    /// The row did not have the expected number of columns
    Columns,
}

impl ValidationField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationField::Title => "title",
            ValidationField::Artists => "artists",
            ValidationField::Choreographer => "choreographer",
            ValidationField::Difficulties => "difficulties",
            ValidationField::Bpm => "bpm",
            ValidationField::Length => "length",
            ValidationField::Link => "link",
            ValidationField::Columns => "columns",
        }
    }
}

impl fmt::Display for ValidationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One violated validation rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMessage {
    pub field: ValidationField,
    pub message: String,
}

impl ValidationMessage {
    pub fn new(field: ValidationField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A row dropped from the output, with every rule it violated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// 1-based line number in the source text
    pub line: u64,
    pub title: String,
    pub messages: Vec<ValidationMessage>,
}

impl Rejection {
    /// Fields named by the violated rules, in rule order
    pub fn fields(&self) -> Vec<ValidationField> {
        self.messages.iter().map(|m| m.field).collect()
    }

    pub fn has_field(&self, field: ValidationField) -> bool {
        self.messages.iter().any(|m| m.field == field)
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Choreography \"{}\" (line {}) is invalid: ",
            self.title, self.line
        )?;
        for (index, message) in self.messages.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_from_exact_fields() {
        let fields = [
            "Title", "[E]", "Artist", "Jane", "Exp", "120", "3:45", "2023-01-02", "link", "",
        ];
        let raw = RawChoreography::from_fields(4, fields);
        assert_eq!(raw.line, 4);
        assert_eq!(raw.column_count, 10);
        assert_eq!(raw.title, "Title");
        assert_eq!(raw.link, "link");
        assert_eq!(raw.notes, "");
    }

    #[test]
    fn test_raw_from_short_row() {
        let raw = RawChoreography::from_fields(5, ["Title", "", "Artist"]);
        assert_eq!(raw.column_count, 3);
        assert_eq!(raw.artists, "Artist");
        assert!(raw.choreographer.is_empty());
        assert!(raw.notes.is_empty());
    }

    #[test]
    fn test_raw_from_long_row_keeps_count() {
        let fields = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l"];
        let raw = RawChoreography::from_fields(6, fields);
        assert_eq!(raw.column_count, 12);
        assert_eq!(raw.notes, "j");
    }

    #[test]
    fn test_tag_serialization() {
        let json = serde_json::to_string(&vec![Warning::ContentStrike, Warning::Explicit]).unwrap();
        assert_eq!(json, r#"["content_strike","explicit"]"#);

        let json = serde_json::to_string(&Difficulty::Cardio).unwrap();
        assert_eq!(json, r#""cardio""#);
    }

    #[test]
    fn test_rejection_display() {
        let rejection = Rejection {
            line: 7,
            title: "Song".to_string(),
            messages: vec![
                ValidationMessage::new(ValidationField::Bpm, "BPM is required"),
                ValidationMessage::new(ValidationField::Link, "Link is invalid"),
            ],
        };

        assert_eq!(
            rejection.to_string(),
            "Choreography \"Song\" (line 7) is invalid: bpm: BPM is required; link: Link is invalid"
        );
        assert_eq!(
            rejection.fields(),
            vec![ValidationField::Bpm, ValidationField::Link]
        );
        assert!(rejection.has_field(ValidationField::Link));
        assert!(!rejection.has_field(ValidationField::Title));
    }
}
