//! Scraping *spec* for the student profile.
//!
//! The profile block has no stable container, only `Label:` cells followed by
//! a `<strong>` value somewhere after a few tags. It is read from the raw HTML
//! text instead of the DOM so that odd nesting around the block doesn't matter.

use crate::config::consts::{
    DEFAULT_NAME, LABEL_DEPARTMENT, LABEL_NAME, LABEL_PROGRAM, LABEL_REGNO, LABEL_SEMESTER,
    LABEL_SPECIALIZATION,
};
use crate::core::html::strip_tags;
use crate::data::Profile;

// Label, then only tags/whitespace, then the first <strong> value.
regex!(RE_FIELD = r"(?is)(Registration Number:|Name:|Program:|Department:|Specialization:|Semester:)\s*(?:<[^>]*>\s*)*?<strong[^>]*>(.*?)</strong>");

/// Profile from one page. Missing fields stay empty, except `name`.
pub fn extract(html: &str) -> Profile {
    finish(scan(html))
}

/// Profile from `primary`, filling each missing field from `fallback`.
pub fn extract_with_fallback(primary: &str, fallback: &str) -> Profile {
    let mut p = scan(primary);
    if has_gaps(&p) {
        let other = scan(fallback);
        fill(&mut p.regno, other.regno);
        fill(&mut p.name, other.name);
        fill(&mut p.program, other.program);
        fill(&mut p.department, other.department);
        fill(&mut p.specialization, other.specialization);
        fill(&mut p.semester, other.semester);
    }
    finish(p)
}

/// Raw scan; every field empty when not found, `name` included.
fn scan(html: &str) -> Profile {
    let mut p = Profile { name: s!(), ..Profile::default() };

    for caps in RE_FIELD.captures_iter(html) {
        let label = caps[1].to_ascii_lowercase();
        let value = strip_tags(&caps[2]);
        let slot = match label.as_str() {
            l if l == LABEL_REGNO.to_ascii_lowercase() => &mut p.regno,
            l if l == LABEL_NAME.to_ascii_lowercase() => &mut p.name,
            l if l == LABEL_PROGRAM.to_ascii_lowercase() => &mut p.program,
            l if l == LABEL_DEPARTMENT.to_ascii_lowercase() => &mut p.department,
            l if l == LABEL_SPECIALIZATION.to_ascii_lowercase() => &mut p.specialization,
            l if l == LABEL_SEMESTER.to_ascii_lowercase() => &mut p.semester,
            _ => continue,
        };
        // first occurrence wins
        fill(slot, value);
    }
    p
}

fn has_gaps(p: &Profile) -> bool {
    [&p.regno, &p.name, &p.program, &p.department, &p.specialization, &p.semester]
        .iter()
        .any(|f| f.is_empty())
}

fn fill(slot: &mut String, value: String) {
    if slot.is_empty() {
        *slot = value;
    }
}

fn finish(mut p: Profile) -> Profile {
    if p.name.is_empty() {
        p.name = s!(DEFAULT_NAME);
    }
    p
}
