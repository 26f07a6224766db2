//! Text rendering of choreographies for the listing command
//!
//! Plain strings only; colouring is applied by the command layer.

use chrono::{Datelike, NaiveDate};

use crate::app::models::Choreography;

/// `<Artists> - <Title> [mm:ss]`, each word capitalised
pub fn format_heading(choreography: &Choreography) -> String {
    capitalize_words(&format!(
        "{} - {} [{}]",
        choreography.artists.join(", "),
        choreography.title,
        format_length(choreography.length)
    ))
}

/// `By <choreographer>, <date> - <bpm> BPM`
pub fn format_details(choreography: &Choreography) -> String {
    let date = choreography
        .date
        .map(format_long_date)
        .unwrap_or_else(|| "unknown date".to_string());

    format!(
        "By {}, {} - {} BPM",
        choreography.choreographer, date, choreography.bpm
    )
}

/// Difficulty and warning tags, e.g. `expert, cardio | explicit`
pub fn format_tags(choreography: &Choreography) -> String {
    let difficulties: Vec<&str> = choreography.difficulties.iter().map(|d| d.as_str()).collect();
    let mut tags = difficulties.join(", ");

    if !choreography.warnings.is_empty() {
        let warnings: Vec<&str> = choreography.warnings.iter().map(|w| w.as_str()).collect();
        tags.push_str(" | ");
        tags.push_str(&warnings.join(", "));
    }

    tags
}

/// Seconds as zero-padded `mm:ss`
pub fn format_length(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let total = seconds.unsigned_abs();
    format!("{}{:02}:{:02}", sign, total / 60, total % 60)
}

/// Dates like `2nd January 2023`
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}{} {}",
        date.day(),
        ordinal_suffix(date.day()),
        date.format("%B %Y")
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Upper-case the first letter of every whitespace-separated word
pub fn capitalize_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            result.push(c);
        } else if at_word_start {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            result.push(c);
        }
    }

    result
}
