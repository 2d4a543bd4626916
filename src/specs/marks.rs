//! Scraping *spec* for the test marks.
//!
//! Marks live in small `border`ed tables, one per course, each nested inside a
//! row of an outer table. Nothing in the inner table names the course: the
//! code sits in a sibling cell of the owning row, painted `#E6E6FA`. Inside the
//! inner table the same paint marks the score cells, which look like
//! `<strong>FT-I/5.00</strong><br>4.50` or put the score in the next cell.
//!
//! Titles are not on this page section at all; they come from the attendance
//! records through `matcher`.

use scraper::ElementRef;

use crate::config::consts::MARKS_CELL_BGCOLOR;
use crate::core::Document;
use crate::core::html::{attr_eq, cells, enclosing, next_cell, strong_text, text_after_br, text_of};
use crate::core::sanitize::{first_number, reduce_label};
use crate::data::{AttendanceRecord, MarksRecord, TestScore};
use crate::error::SkipReason;
use crate::matcher::match_course;
use crate::report::{Issue, Parsed, Section};
use crate::specs::attendance::is_header_text;

selector!(TD = "td");

pub fn parse(doc: &Document, attendance: &[AttendanceRecord]) -> Parsed<MarksRecord> {
    let mut out = Parsed::default();
    parse_into(doc, attendance, &mut out);
    out
}

/// Same as `parse`, appending into `out` so records survive an aborted pass.
pub fn parse_into(doc: &Document, attendance: &[AttendanceRecord], out: &mut Parsed<MarksRecord>) {
    for (ix, inner) in doc.tables_having("border").enumerate() {
        match parse_inner_table(inner, attendance) {
            Ok(Some(rec)) => out.push(rec),
            Ok(None) => logd!("marks: table {ix} has no scores"),
            Err(reason) => out.issue(Issue::TableSkipped {
                section: Section::Marks,
                index: ix,
                reason: reason.to_string(),
            }),
        }
    }

    logd!("marks: {} records", out.records.len());
}

/// One nested table → one record, `None` when no score survived.
fn parse_inner_table(
    inner: ElementRef<'_>,
    attendance: &[AttendanceRecord],
) -> Result<Option<MarksRecord>, SkipReason> {
    let course_code = owning_code(inner)?;

    let tests: Vec<TestScore> = inner
        .select(&TD)
        .filter(|td| attr_eq(*td, "bgcolor", MARKS_CELL_BGCOLOR))
        .filter_map(read_score_cell)
        .collect();

    if tests.is_empty() {
        return Ok(None);
    }

    let (course_title, category) = match_course(&course_code, attendance);
    Ok(Some(MarksRecord { course_code, course_title, category, tests }))
}

/// Code from the painted cell of the row that holds `inner`.
fn owning_code(inner: ElementRef<'_>) -> Result<String, SkipReason> {
    let row = enclosing(inner, "tr").ok_or(SkipReason::Detached)?;
    let cell = cells(row)
        .into_iter()
        .find(|td| attr_eq(*td, "bgcolor", MARKS_CELL_BGCOLOR))
        .ok_or(SkipReason::NoCodeCell)?;

    let code = text_of(cell);
    if code.is_empty() {
        return Err(SkipReason::NoCodeCell);
    }
    if is_header_text(&code) {
        return Err(SkipReason::HeaderCode(code));
    }
    Ok(code)
}

/// Label + score from one painted cell; `None` unless the score holds a number.
fn read_score_cell(td: ElementRef<'_>) -> Option<TestScore> {
    let label = strong_text(td).unwrap_or_else(|| text_of(td));
    let score_text = match text_after_br(td) {
        Some(after) => after,
        None => next_cell(td).map(text_of).unwrap_or_default(),
    };

    let score = first_number(&score_text)?;
    if label.is_empty() {
        return None;
    }
    Some(TestScore { label: s!(reduce_label(&label)), score: s!(score) })
}
