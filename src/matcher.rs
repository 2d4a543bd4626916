// src/matcher.rs
//! Resolves a marks-table course code to the title and category of an
//! attendance record.
//!
//! The two tables are rendered independently and share nothing but loosely
//! formatted code text, so matching walks a cascade from strict to loose and
//! stops at the first hit. The order matters: a code can be a substring of an
//! unrelated code, so a looser strategy must never run while a stricter one
//! could still succeed.

use crate::config::consts::{FALLBACK_CATEGORY, FALLBACK_TITLE};
use crate::core::sanitize::{canonical_code, normalize_code};
use crate::data::AttendanceRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Raw code strings are identical.
    Exact,
    /// Identical after qualifier words and whitespace are stripped.
    Normalized,
    /// One normalized code contains the other.
    Substring,
    /// Both contain the same `21CSC101J`-shaped token.
    Pattern,
}

/// Attendance record `target` resolves to, and how.
pub fn find_course<'a>(
    target: &str,
    attendance: &'a [AttendanceRecord],
) -> Option<(Strategy, &'a AttendanceRecord)> {
    if target.is_empty() {
        return None;
    }

    if let Some(rec) = attendance.iter().find(|a| a.course_code == target) {
        return Some((Strategy::Exact, rec));
    }

    let clean_target = normalize_code(target);
    let cleaned: Vec<String> = attendance.iter().map(|a| normalize_code(&a.course_code)).collect();

    if let Some(i) = cleaned.iter().position(|c| *c == clean_target) {
        return Some((Strategy::Normalized, &attendance[i]));
    }

    if let Some(i) = cleaned
        .iter()
        .position(|c| c.contains(clean_target.as_str()) || clean_target.contains(c.as_str()))
    {
        return Some((Strategy::Substring, &attendance[i]));
    }

    let token = canonical_code(target)?;
    attendance
        .iter()
        .find(|a| canonical_code(&a.course_code) == Some(token))
        .map(|rec| (Strategy::Pattern, rec))
}

/// `(title, category)` for `target`, or the fallback pair when nothing matches.
/// Both halves always come from the same source.
pub fn match_course(target: &str, attendance: &[AttendanceRecord]) -> (String, String) {
    match find_course(target, attendance) {
        Some((strategy, rec)) => {
            logd!("matcher: '{target}' -> '{}' via {strategy:?}", rec.course_code);
            (rec.course_title.clone(), rec.category.clone())
        }
        None => {
            logd!("matcher: '{target}' unresolved");
            (s!(FALLBACK_TITLE), s!(FALLBACK_CATEGORY))
        }
    }
}
