// src/engine/engine.rs
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::core::Document;
use crate::data::ScrapeResult;
use crate::engine::types::Extraction;
use crate::error::{Error, Result};
use crate::report::{Issue, Parsed, Section};
use crate::specs::{attendance, marks, profile, timetable};

/// Run every section parser over the two page snapshots and merge the results.
///
/// Only blank input is fatal. Everything else degrades: a missing table is
/// an empty section, a bad row is skipped, and a section that blows up keeps
/// whatever it had produced without stopping the sections after it.
pub fn extract(attendance_html: &str, timetable_html: &str) -> Result<Extraction> {
    if attendance_html.trim().is_empty() {
        return Err(Error::EmptyInput("attendance"));
    }
    if timetable_html.trim().is_empty() {
        return Err(Error::EmptyInput("timetable"));
    }

    let att_doc = Document::parse(attendance_html);
    let tt_doc = Document::parse(timetable_html);
    let mut issues = Vec::new();

    let mut att = Parsed::default();
    guarded(Section::Attendance, &mut att, |out| attendance::parse_into(&att_doc, out));
    let attendance = att.drain_into(&mut issues);

    let mut mk = Parsed::default();
    guarded(Section::Marks, &mut mk, |out| marks::parse_into(&att_doc, &attendance, out));
    let marks = mk.drain_into(&mut issues);

    let tt = guarded_value(Section::Timetable, &mut issues, || timetable::parse(&tt_doc));
    let total_credits = tt.total_credits;
    let courses = tt.courses.drain_into(&mut issues);

    let profile = guarded_value(Section::Profile, &mut issues, || {
        profile::extract_with_fallback(attendance_html, timetable_html)
    });

    for issue in &issues {
        logw!("{issue}");
    }
    logf!(
        "extracted {} attendance, {} marks, {} courses ({} credits), {} issues",
        attendance.len(),
        marks.len(),
        courses.len(),
        total_credits,
        issues.len()
    );

    Ok(Extraction {
        result: ScrapeResult { profile, attendance, marks, courses, total_credits },
        issues,
    })
}

/// Run one section; a panic inside it becomes a `SectionFailed` issue and
/// the records already pushed into `out` are kept.
fn guarded<T>(section: Section, out: &mut Parsed<T>, f: impl FnOnce(&mut Parsed<T>)) {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| f(&mut *out)));
    if let Err(payload) = outcome {
        let message = panic_message(payload.as_ref());
        loge!("{section} section aborted after {} records: {message}", out.records.len());
        out.issue(Issue::SectionFailed { section, message });
    }
}

/// Same isolation for sections that build their whole value in one call;
/// a failure leaves the section at its default.
fn guarded_value<T: Default>(section: Section, issues: &mut Vec<Issue>, f: impl FnOnce() -> T) -> T {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            loge!("{section} section aborted: {message}");
            issues.push(Issue::SectionFailed { section, message });
            T::default()
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s!(*s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        s!("unknown panic")
    }
}
