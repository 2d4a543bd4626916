// src/config/options.rs
use std::path::PathBuf;

use crate::log::{Level, Target};

/// Everything one CLI run needs. Built by `cli::parse_args`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub input: InputOptions,
    pub output: OutputOptions,
    pub log: LogOptions,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct InputOptions {
    /// Attendance-and-profile page snapshot.
    pub attendance: PathBuf,
    /// Course-registration (timetable) page snapshot.
    pub timetable: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct OutputOptions {
    /// `None` writes to stdout.
    pub path: Option<PathBuf>,
    pub pretty: bool,
    pub summary: bool,
    pub issues: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogOptions {
    pub target: Target,
    pub level: Level,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self { target: Target::Stderr, level: Level::Info }
    }
}

impl Options {
    pub fn new(attendance: impl Into<PathBuf>, timetable: impl Into<PathBuf>) -> Self {
        Self {
            input: InputOptions {
                attendance: attendance.into(),
                timetable: timetable.into(),
            },
            output: OutputOptions::default(),
            log: LogOptions::default(),
        }
    }
}
