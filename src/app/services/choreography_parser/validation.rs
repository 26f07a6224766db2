//! Validation rules for transformed choreography rows
//!
//! Every rule is checked; a row is kept only when none is violated.

use regex::Regex;

use super::record_parser::ChoreographyDraft;
use crate::app::models::{Choreography, Rejection, ValidationField, ValidationMessage};

/// Rule set applied to each draft
#[derive(Debug, Clone)]
pub struct Validator {
    link_pattern: Regex,
    expected_columns: usize,
}

impl Validator {
    pub fn new(link_pattern: Regex, expected_columns: usize) -> Self {
        Self {
            link_pattern,
            expected_columns,
        }
    }

    /// Collect every violated rule, in rule order
    pub fn validate(&self, draft: &ChoreographyDraft) -> Vec<ValidationMessage> {
        let mut messages = Vec::new();

        if draft.column_count != self.expected_columns {
            messages.push(ValidationMessage::new(
                ValidationField::Columns,
                format!(
                    "Expected {} columns, found {}",
                    self.expected_columns, draft.column_count
                ),
            ));
        }
        if draft.title.is_empty() {
            messages.push(ValidationMessage::new(
                ValidationField::Title,
                "Title is required",
            ));
        }
        if draft.artists.is_empty() {
            messages.push(ValidationMessage::new(
                ValidationField::Artists,
                "At least one artist is required",
            ));
        }
        if draft.choreographer.is_empty() {
            messages.push(ValidationMessage::new(
                ValidationField::Choreographer,
                "Choreographer is required",
            ));
        }
        if draft.difficulties.is_empty() {
            messages.push(ValidationMessage::new(
                ValidationField::Difficulties,
                "At least one difficulty is required",
            ));
        }
        if draft.bpm.is_none() {
            messages.push(ValidationMessage::new(ValidationField::Bpm, "BPM is required"));
        }
        if draft.length.is_none() {
            messages.push(ValidationMessage::new(
                ValidationField::Length,
                "Length is required",
            ));
        }
        if !self.link_pattern.is_match(&draft.link) {
            messages.push(ValidationMessage::new(
                ValidationField::Link,
                "Link is invalid",
            ));
        }

        messages
    }

    /// Validate a draft and either promote it or turn it into a rejection
    pub fn check(&self, draft: ChoreographyDraft) -> Result<Choreography, Rejection> {
        let messages = self.validate(&draft);
        let line = draft.line;
        let title = draft.title.clone();

        if messages.is_empty() {
            if let Some(choreography) = draft.into_choreography() {
                return Ok(choreography);
            }
        }

        Err(Rejection {
            line,
            title,
            messages,
        })
    }
}
