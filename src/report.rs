// src/report.rs
//
// Non-fatal diagnostics. Each section parser hands back its records together
// with whatever it had to skip; the engine merges the issue lists.

use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Attendance,
    Marks,
    Timetable,
    Profile,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Section::Attendance => "attendance",
            Section::Marks => "marks",
            Section::Timetable => "timetable",
            Section::Profile => "profile",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// Expected table is not in the document.
    TableMissing { section: Section },
    /// Row cell count matches no known layout.
    RowShape { section: Section, row: usize, cells: usize },
    /// Field kept its default because the text did not parse.
    FieldParse { section: Section, row: usize, field: &'static str, value: String },
    /// A nested table was dropped as a whole.
    TableSkipped { section: Section, index: usize, reason: String },
    /// The section stopped early; records gathered before the failure are kept.
    SectionFailed { section: Section, message: String },
}

impl Issue {
    pub fn section(&self) -> Section {
        match self {
            Issue::TableMissing { section }
            | Issue::RowShape { section, .. }
            | Issue::FieldParse { section, .. }
            | Issue::TableSkipped { section, .. }
            | Issue::SectionFailed { section, .. } => *section,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::TableMissing { section } => write!(f, "{section}: table not found"),
            Issue::RowShape { section, row, cells } => {
                write!(f, "{section}: row {row} skipped ({cells} cells)")
            }
            Issue::FieldParse { section, row, field, value } => {
                write!(f, "{section}: row {row} field '{field}' unparsable: {value:?}")
            }
            Issue::TableSkipped { section, index, reason } => {
                write!(f, "{section}: table {index} skipped: {reason}")
            }
            Issue::SectionFailed { section, message } => {
                write!(f, "{section}: section failed: {message}")
            }
        }
    }
}

/// Records plus the issues hit while producing them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parsed<T> {
    pub records: Vec<T>,
    pub issues: Vec<Issue>,
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self { records: Vec::new(), issues: Vec::new() }
    }
}

impl<T> Parsed<T> {
    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    pub fn issue(&mut self, issue: Issue) {
        logd!("{issue}");
        self.issues.push(issue);
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Split into records, appending issues onto the caller's list.
    pub fn drain_into(self, issues: &mut Vec<Issue>) -> Vec<T> {
        issues.extend(self.issues);
        self.records
    }
}
