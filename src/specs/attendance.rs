//! Scraping *spec* for the attendance table.
//!
//! The table is the one painted `bgcolor="#FAFAD2"` on the attendance page.
//! Its first row is the header; after that every row is either a course or a
//! header continuation (photo, registration number, name, roll number).
//!
//! Two layouts exist and are told apart per row by cell count:
//! - **Full** (9+ cells): code, title, category, faculty, slot, room,
//!   hours conducted, hours absent, percentage.
//! - **Frozen** (7–8 cells): the same first six, then the percentage alone,
//!   wrapped in `<strong>` inside the last cell once the semester is frozen.
//!
//! A missing table is not an error: the section is simply empty.

use scraper::ElementRef;

use crate::config::consts::{
    ATTENDANCE_BGCOLOR, FROZEN_ATTENDANCE_CELLS, FULL_ATTENDANCE_CELLS, HEADER_MARKERS,
};
use crate::core::Document;
use crate::core::html::{cells, own_rows, strong_text, text_of};
use crate::data::AttendanceRecord;
use crate::report::{Issue, Parsed, Section};

/// One course row, by layout. Each variant holds exactly what it can supply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttendanceRow {
    Full {
        head: [String; 6],
        hours_conducted: String,
        hours_absent: String,
        percent: String,
    },
    Frozen {
        head: [String; 6],
        percent: String,
    },
}

impl AttendanceRow {
    /// Pick the layout from the cell count. `None` for rows with no known shape.
    pub fn classify(tds: &[ElementRef<'_>]) -> Option<Self> {
        let texts: Vec<String> = tds.iter().map(|td| text_of(*td)).collect();
        let head = || -> [String; 6] { std::array::from_fn(|i| texts[i].clone()) };

        if texts.len() >= FULL_ATTENDANCE_CELLS {
            Some(AttendanceRow::Full {
                head: head(),
                hours_conducted: texts[6].clone(),
                hours_absent: texts[7].clone(),
                percent: texts[8].clone(),
            })
        } else if texts.len() >= FROZEN_ATTENDANCE_CELLS {
            let last = tds[tds.len() - 1];
            let percent = strong_text(last).unwrap_or_else(|| texts[texts.len() - 1].clone());
            Some(AttendanceRow::Frozen { head: head(), percent })
        } else {
            None
        }
    }

    pub fn percent(&self) -> &str {
        match self {
            AttendanceRow::Full { percent, .. } | AttendanceRow::Frozen { percent, .. } => percent,
        }
    }
}

impl From<AttendanceRow> for AttendanceRecord {
    fn from(row: AttendanceRow) -> Self {
        let (head, hours_conducted, hours_absent, attendance_percent) = match row {
            AttendanceRow::Full { head, hours_conducted, hours_absent, percent } => {
                (head, hours_conducted, hours_absent, percent)
            }
            AttendanceRow::Frozen { head, percent } => (head, s!(), s!(), percent),
        };
        let [course_code, course_title, category, faculty, slot, room] = head;
        AttendanceRecord {
            course_code,
            course_title,
            category,
            faculty,
            slot,
            room,
            hours_conducted,
            hours_absent,
            attendance_percent,
        }
    }
}

pub fn is_header_text(text: &str) -> bool {
    HEADER_MARKERS.iter().any(|m| text.contains(m))
}

pub fn parse(doc: &Document) -> Parsed<AttendanceRecord> {
    let mut out = Parsed::default();
    parse_into(doc, &mut out);
    out
}

/// Same as `parse`, appending into `out` so a caller that aborts midway
/// still holds every record produced so far.
pub fn parse_into(doc: &Document, out: &mut Parsed<AttendanceRecord>) {
    let Some(table) = doc.table_with_attr("bgcolor", ATTENDANCE_BGCOLOR) else {
        out.issue(Issue::TableMissing { section: Section::Attendance });
        return;
    };

    for (ix, row) in own_rows(table).into_iter().enumerate().skip(1) {
        let tds = cells(row);
        if tds.len() < 2 {
            continue;
        }
        if is_header_text(&text_of(tds[0])) {
            continue;
        }

        let Some(parsed) = AttendanceRow::classify(&tds) else {
            out.issue(Issue::RowShape { section: Section::Attendance, row: ix, cells: tds.len() });
            continue;
        };

        if parsed.percent().is_empty() {
            out.issue(Issue::FieldParse {
                section: Section::Attendance,
                row: ix,
                field: "attendance_percent",
                value: s!(),
            });
            continue;
        }

        out.push(parsed.into());
    }

    logd!("attendance: {} records", out.records.len());
}
