// src/config/consts.rs

// Attendance page markers
pub const ATTENDANCE_BGCOLOR: &str = "#FAFAD2";
pub const MARKS_CELL_BGCOLOR: &str = "#E6E6FA";

// First-cell text that marks a header continuation row rather than a course
pub const HEADER_MARKERS: &[&str] = &["Photo-ID", "Registration", "Name", "Roll"];

// Timetable page marker
pub const TIMETABLE_CLASS: &str = "course_tbl";

// Cell counts per layout
pub const FULL_ATTENDANCE_CELLS: usize = 9;
pub const FROZEN_ATTENDANCE_CELLS: usize = 7;
pub const TIMETABLE_CELLS: usize = 11;

// Matcher fallback
pub const FALLBACK_TITLE: &str = "Unnamed Course";
pub const FALLBACK_CATEGORY: &str = "Theory";

// Course-code words that qualify a code without identifying it
pub const CODE_QUALIFIERS: &[&str] = &["Regular", "Practical", "Theory", "Lab", "Tutorial"];

// Profile
pub const DEFAULT_NAME: &str = "Student";
pub const LABEL_REGNO: &str = "Registration Number:";
pub const LABEL_NAME: &str = "Name:";
pub const LABEL_PROGRAM: &str = "Program:";
pub const LABEL_DEPARTMENT: &str = "Department:";
pub const LABEL_SPECIALIZATION: &str = "Specialization:";
pub const LABEL_SEMESTER: &str = "Semester:";

// Summary
pub const ATTENDANCE_THRESHOLD: f64 = 0.75;
pub const TEST_ORDER: &[&str] = &[
    "FT-I", "FT-II", "FT-III", "FT-IV", "LLT-I", "LLT-II", "FJ-I", "FJ-II",
];

// Logging
pub const DEFAULT_LOG_FILE: &str = ".store/academia_scrape.log";
