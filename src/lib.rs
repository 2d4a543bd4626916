// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod engine;
pub mod error;
pub mod file;
pub mod matcher;
pub mod report;
pub mod specs;
pub mod summary;

pub use crate::core::Document;
pub use data::{AttendanceRecord, CourseRecord, MarksRecord, Profile, ScrapeResult, TestScore};
pub use engine::{extract, Extraction};
pub use error::{Error, Result};
