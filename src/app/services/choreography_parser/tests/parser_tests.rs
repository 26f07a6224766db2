//! Tests for the main sheet parser

use super::*;
use crate::app::models::{Difficulty, ValidationField, Warning};
use crate::app::services::choreography_parser::parser::split_leading_lines;
use crate::config::Config;

#[test]
fn test_split_leading_lines() {
    let (skipped, rest) = split_leading_lines("a\nb\nc\nd\ne", 3);
    assert_eq!(skipped, 3);
    assert_eq!(rest, "d\ne");
}

#[test]
fn test_split_leading_lines_crlf() {
    let (skipped, rest) = split_leading_lines("a\r\nb\r\nc\r\nrow1\r\n", 3);
    assert_eq!(skipped, 3);
    assert_eq!(rest, "row1\r\n");
}

#[test]
fn test_split_leading_lines_short_input() {
    assert_eq!(split_leading_lines("only\none", 3), (2, ""));
    assert_eq!(split_leading_lines("", 3), (0, ""));
    assert_eq!(split_leading_lines("x\ny", 0), (0, "x\ny"));
}

#[test]
fn test_parse_reference_row() {
    let content = sheet(&[&counting_stars_row()]);
    let result = default_parser().parse(&content);

    assert_eq!(result.stats.total_rows, 1);
    assert_eq!(result.stats.records_parsed, 1);
    assert!(result.rejections.is_empty());

    let record = &result.records[0];
    assert_eq!(record.id, "counting stars-onerepublic-jane");
    assert_eq!(record.title, "Counting Stars");
    assert_eq!(record.warnings, vec![Warning::Explicit]);
    assert_eq!(record.artists, vec!["onerepublic"]);
    assert_eq!(record.choreographer, "Jane");
    assert_eq!(record.difficulties, vec![Difficulty::Expert]);
    assert_eq!(record.bpm, 120);
    assert_eq!(record.length, 225);
    assert_eq!(record.date, chrono::NaiveDate::from_ymd_opt(2023, 1, 2));
    assert_eq!(record.link, VALID_LINK);
    assert_eq!(record.notes, None);
}

#[test]
fn test_banner_lines_are_never_parsed() {
    // The header line would otherwise fail validation and show up as a rejection
    let content = sheet(&[]);
    let result = default_parser().parse(&content);

    assert_eq!(result.stats.total_rows, 0);
    assert!(result.records.is_empty());
    assert!(result.rejections.is_empty());
}

#[test]
fn test_invalid_rows_are_dropped_in_order() {
    let bad_link = "Bad Link,,Someone,Jane,Reg,100,2:00,2023-02-01,not-a-link,".to_string();
    let bad_bpm = format!(
        "Bad Bpm,,Someone,Jane,Reg,abc,2:00,2023-02-01,{},",
        VALID_LINK
    );
    let second_good = format!(
        "Toxic,[C],Britney Spears,Max,Easy & Cardio,143,3:19,2023-03-04,{},first map",
        VALID_LINK
    );

    let content = sheet(&[&counting_stars_row(), &bad_link, &bad_bpm, &second_good]);
    let result = default_parser().parse(&content);

    assert_eq!(result.stats.total_rows, 4);
    assert_eq!(result.stats.records_parsed, 2);
    assert_eq!(result.stats.rows_rejected, 2);

    let titles: Vec<&str> = result.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Counting Stars", "Toxic"]);

    assert_eq!(result.rejections[0].title, "Bad Link");
    assert_eq!(result.rejections[0].line, 5);
    assert_eq!(result.rejections[0].fields(), vec![ValidationField::Link]);
    assert_eq!(result.rejections[1].title, "Bad Bpm");
    assert_eq!(result.rejections[1].line, 6);
    assert_eq!(result.rejections[1].fields(), vec![ValidationField::Bpm]);

    let toxic = &result.records[1];
    assert_eq!(toxic.warnings, vec![Warning::Challenging]);
    assert_eq!(toxic.difficulties, vec![Difficulty::Beginner, Difficulty::Cardio]);
    assert_eq!(toxic.notes.as_deref(), Some("first map"));
}

#[test]
fn test_difficulty_default() {
    let row = format!(
        "Song,,Artist,Jane,unknown,100,2:00,2023-02-01,{},",
        VALID_LINK
    );
    let result = default_parser().parse(&sheet(&[&row]));
    assert_eq!(result.records[0].difficulties, vec![Difficulty::Regular]);
}

#[test]
fn test_short_row_is_rejected_with_columns() {
    let row = format!("Short,,Artist,Jane,Exp,120,3:45,2023-01-02,{}", VALID_LINK);
    let result = default_parser().parse(&sheet(&[&row]));

    assert!(result.records.is_empty());
    assert_eq!(result.rejections.len(), 1);
    assert_eq!(result.rejections[0].fields(), vec![ValidationField::Columns]);
}

#[test]
fn test_long_row_is_rejected_with_columns() {
    let row = format!("{},extra", counting_stars_row());
    let result = default_parser().parse(&sheet(&[&row]));

    assert!(result.records.is_empty());
    assert!(result.rejections[0].has_field(ValidationField::Columns));
}

#[test]
fn test_quoted_fields() {
    let row = format!(
        "\"Hello, World\",\"[E] [X]\",\"Simon & Garfunkel, Someone\",Jane,\"Reg, Exp\",120,3:45,2023-01-02,{},\"line one\nline two\"",
        VALID_LINK
    );
    let result = default_parser().parse(&sheet(&[&row, &counting_stars_row()]));

    assert_eq!(result.stats.total_rows, 2);
    let record = &result.records[0];
    assert_eq!(record.title, "Hello, World");
    assert_eq!(record.warnings, vec![Warning::Explicit, Warning::ContentStrike]);
    assert_eq!(record.artists, vec!["simon", "garfunkel", "someone"]);
    assert_eq!(record.difficulties, vec![Difficulty::Regular, Difficulty::Expert]);
    assert_eq!(record.notes.as_deref(), Some("line one\nline two"));
    assert_eq!(result.records[1].title, "Counting Stars");
}

#[test]
fn test_blank_lines_are_skipped() {
    let content = sheet(&[&counting_stars_row(), "", &counting_stars_row()]);
    let result = default_parser().parse(&content);

    assert_eq!(result.stats.total_rows, 2);
    assert_eq!(result.records.len(), 2);
}

#[test]
fn test_empty_padding_rows_are_rejected() {
    let content = sheet(&[&counting_stars_row(), ",,,,,,,,,"]);
    let result = default_parser().parse(&content);

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.rejections.len(), 1);
    assert!(result.rejections[0].has_field(ValidationField::Title));
}

#[test]
fn test_crlf_sheet() {
    let content = sheet(&[&counting_stars_row()]).replace('\n', "\r\n");
    let result = default_parser().parse(&content);

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].notes, None);
}

#[test]
fn test_parse_is_idempotent() {
    let content = sheet(&[
        &counting_stars_row(),
        "Broken,,,,,,,,,",
        &counting_stars_row(),
    ]);
    let parser = default_parser();

    assert_eq!(parser.parse(&content), parser.parse(&content));
}

#[test]
fn test_custom_skip_lines() {
    let config = Config::default().with_skip_lines(1);
    let parser = ChoreographyParser::new(&config).unwrap();

    let content = format!("Title,Warnings,...\n{}\n", counting_stars_row());
    let result = parser.parse(&content);

    assert_eq!(result.records.len(), 1);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = Config::default().with_link_pattern("[");
    assert!(ChoreographyParser::new(&config).is_err());
}

#[test]
fn test_success_rate() {
    let content = sheet(&[&counting_stars_row(), "Broken,,,,,,,,,"]);
    let result = default_parser().parse(&content);

    assert!((result.stats.success_rate() - 50.0).abs() < f64::EPSILON);
}
