// src/data.rs
//
// Record types produced by the section parsers. All flat, all owned strings, built once
// per parse pass and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::config::consts::DEFAULT_NAME;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub course_code: String,
    pub course_title: String,
    pub category: String,
    pub faculty: String,
    pub slot: String,
    pub room: String,
    /// Empty for frozen-layout rows.
    pub hours_conducted: String,
    /// Empty for frozen-layout rows.
    pub hours_absent: String,
    pub attendance_percent: String,
}

impl AttendanceRecord {
    /// Frozen rows carry only the final percentage.
    pub fn is_frozen(&self) -> bool {
        self.hours_conducted.is_empty() && self.hours_absent.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestScore {
    pub label: String,
    pub score: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarksRecord {
    pub course_code: String,
    pub course_title: String,
    pub category: String,
    pub tests: Vec<TestScore>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub course_code: String,
    pub course_title: String,
    pub credits: u32,
    pub reg_type: String,
    pub category: String,
    pub course_type: String,
    pub faculty: String,
    pub slot: String,
    pub room: String,
    pub academic_year: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub regno: String,
    pub name: String,
    pub program: String,
    pub department: String,
    pub specialization: String,
    pub semester: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            regno: s!(),
            name: s!(DEFAULT_NAME),
            program: s!(),
            department: s!(),
            specialization: s!(),
            semester: s!(),
        }
    }
}

/// Top-level aggregate handed to the serializer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub profile: Profile,
    pub attendance: Vec<AttendanceRecord>,
    pub marks: Vec<MarksRecord>,
    pub courses: Vec<CourseRecord>,
    pub total_credits: u32,
}
