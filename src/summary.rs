// src/summary.rs
//
// Derived figures on top of a finished ScrapeResult: how many classes can
// still be missed (or must be attended) per course, and per-course mark
// totals. Pure functions; nothing here feeds back into the records.

use std::cmp::Ordering;

use serde::Serialize;

use crate::config::consts::{ATTENDANCE_THRESHOLD, TEST_ORDER};
use crate::data::{AttendanceRecord, MarksRecord, ScrapeResult, TestScore};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub attendance: Vec<CourseStanding>,
    pub marks: Vec<CourseMarks>,
    /// Hours-weighted when any record carries hours, otherwise the mean of
    /// the percentages that parse. `None` with no attendance at all.
    pub overall_attendance: Option<f64>,
    pub cumulative: MarksTotal,
}

/// Every test of every course added up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MarksTotal {
    pub score: f64,
    pub max: f64,
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CourseStanding {
    pub course_code: String,
    pub course_title: String,
    pub percent: Option<f64>,
    /// `None` for frozen rows and rows whose hours don't parse.
    pub standing: Option<Standing>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Standing {
    /// At or above the threshold; this many more absences keep it there.
    Safe { can_miss: u32 },
    /// Below the threshold; this many consecutive attended classes reach it.
    Short { must_attend: u32 },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CourseMarks {
    pub course_code: String,
    pub course_title: String,
    pub tests: Vec<TestSummary>,
    pub total_score: f64,
    pub total_max: f64,
    pub average_percent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TestSummary {
    pub name: String,
    pub score: f64,
    pub max: Option<f64>,
    pub percent: f64,
}

pub fn summarize(result: &ScrapeResult) -> Summary {
    let attendance: Vec<CourseStanding> = result.attendance.iter().map(course_standing).collect();

    let percents: Vec<f64> = attendance.iter().filter_map(|c| c.percent).collect();
    let overall_attendance = overall_by_hours(&result.attendance).or_else(|| {
        if percents.is_empty() {
            None
        } else {
            Some(round2(percents.iter().sum::<f64>() / percents.len() as f64))
        }
    });

    Summary {
        attendance,
        marks: result.marks.iter().map(course_marks).collect(),
        overall_attendance,
        cumulative: cumulative_marks(&result.marks),
    }
}

/// Σpresent / Σconducted over all records, or `None` when no record has
/// hours held (frozen semester).
pub fn overall_by_hours(records: &[AttendanceRecord]) -> Option<f64> {
    let hours: Vec<(u32, u32)> = records
        .iter()
        .filter_map(|r| Some((parse_u32(&r.hours_conducted)?, parse_u32(&r.hours_absent).unwrap_or(0))))
        .collect();
    if !hours.iter().any(|(conducted, _)| *conducted > 0) {
        return None;
    }

    let (conducted, present) = hours.iter().fold((0u64, 0u64), |(c, p), (conducted, absent)| {
        (c + u64::from(*conducted), p + u64::from(conducted.saturating_sub(*absent)))
    });
    Some(round2(present as f64 / conducted as f64 * 100.0))
}

/// Score and max summed over all courses. Tests without a `/max` add to the
/// score only; whole-number totals, percent to two places.
pub fn cumulative_marks(marks: &[MarksRecord]) -> MarksTotal {
    let (score, max) = marks
        .iter()
        .flat_map(|m| m.tests.iter())
        .fold((0.0, 0.0), |(score, max), t| {
            let (_, test_max) = split_label(&t.label);
            (score + parse_f64(&t.score).unwrap_or(0.0), max + test_max.unwrap_or(0.0))
        });
    let percent = if max > 0.0 { round2(score / max * 100.0) } else { 0.0 };
    MarksTotal { score: score.round(), max: max.round(), percent }
}

pub fn course_standing(rec: &AttendanceRecord) -> CourseStanding {
    let percent = parse_f64(&rec.attendance_percent);
    let standing = if rec.is_frozen() {
        None
    } else {
        match (percent, parse_u32(&rec.hours_conducted), parse_u32(&rec.hours_absent)) {
            (Some(p), Some(conducted), Some(absent)) => Some(standing(p, conducted, absent)),
            _ => None,
        }
    };
    CourseStanding {
        course_code: rec.course_code.clone(),
        course_title: rec.course_title.clone(),
        percent,
        standing,
    }
}

/// Standing against the attendance threshold. No classes held means nothing
/// to miss and nothing to make up.
pub fn standing(percent: f64, conducted: u32, absent: u32) -> Standing {
    let threshold_pct = ATTENDANCE_THRESHOLD * 100.0;
    if conducted == 0 {
        return if percent < threshold_pct {
            Standing::Short { must_attend: 0 }
        } else {
            Standing::Safe { can_miss: 0 }
        };
    }

    let conducted = f64::from(conducted);
    let present = (conducted - f64::from(absent)).max(0.0);

    if percent >= threshold_pct {
        let safe = (present / ATTENDANCE_THRESHOLD - conducted).floor().max(0.0);
        Standing::Safe { can_miss: safe as u32 }
    } else {
        let deficit = ATTENDANCE_THRESHOLD * conducted - present;
        let needed = if deficit <= 0.0 { 0.0 } else { (deficit / (1.0 - ATTENDANCE_THRESHOLD)).ceil() };
        Standing::Short { must_attend: needed as u32 }
    }
}

pub fn course_marks(rec: &MarksRecord) -> CourseMarks {
    let tests: Vec<TestSummary> = ordered_tests(&rec.tests).into_iter().map(test_summary).collect();
    let total_score: f64 = tests.iter().map(|t| t.score).sum();
    let total_max: f64 = tests.iter().filter_map(|t| t.max).sum();
    let average_percent = if total_max > 0.0 { round2(total_score / total_max * 100.0) } else { 0.0 };

    CourseMarks {
        course_code: rec.course_code.clone(),
        course_title: rec.course_title.clone(),
        tests,
        total_score: round2(total_score),
        total_max: round2(total_max),
        average_percent,
    }
}

/// `FT-I/5` → (`FT-I`, 5.0). Labels without a `/max` part have no maximum.
pub fn split_label(label: &str) -> (&str, Option<f64>) {
    match label.split_once('/') {
        Some((name, max)) => (name.trim(), parse_f64(max).filter(|m| *m > 0.0)),
        None => (label.trim(), None),
    }
}

fn test_summary(t: &TestScore) -> TestSummary {
    let (name, max) = split_label(&t.label);
    let score = parse_f64(&t.score).unwrap_or(0.0);
    let percent = max.map_or(0.0, |m| round2(score / m * 100.0));
    TestSummary { name: s!(name), score, max, percent }
}

/// Known test names in their fixed order, then everything else by name.
pub fn ordered_tests(tests: &[TestScore]) -> Vec<&TestScore> {
    let rank = |t: &TestScore| {
        let (name, _) = split_label(&t.label);
        TEST_ORDER.iter().position(|k| *k == name)
    };
    let mut out: Vec<&TestScore> = tests.iter().collect();
    out.sort_by(|a, b| match (rank(a), rank(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => split_label(&a.label).0.cmp(split_label(&b.label).0),
    });
    out
}

fn parse_f64(s: &str) -> Option<f64> {
    s.trim().trim_end_matches('%').trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_u32(s: &str) -> Option<u32> {
    s.trim().parse().ok()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(label: &str, score: &str) -> TestScore {
        TestScore { label: s!(label), score: s!(score) }
    }

    #[test]
    fn safe_misses_above_threshold() {
        // 36 of 40 attended: 36 / 0.75 = 48 → 8 more classes may be missed.
        assert_eq!(standing(90.0, 40, 4), Standing::Safe { can_miss: 8 });
        assert_eq!(standing(75.0, 4, 1), Standing::Safe { can_miss: 0 });
    }

    #[test]
    fn required_classes_below_threshold() {
        // 20 of 40: deficit 10, each attended class recovers 0.25.
        assert_eq!(standing(50.0, 40, 20), Standing::Short { must_attend: 40 });
        assert_eq!(standing(70.0, 10, 3), Standing::Short { must_attend: 2 });
    }

    #[test]
    fn no_classes_held() {
        assert_eq!(standing(0.0, 0, 0), Standing::Short { must_attend: 0 });
        assert_eq!(standing(100.0, 0, 0), Standing::Safe { can_miss: 0 });
    }

    #[test]
    fn frozen_record_has_no_standing() {
        let rec = AttendanceRecord {
            course_code: s!("C1"),
            attendance_percent: s!("82.5"),
            ..Default::default()
        };
        let cs = course_standing(&rec);
        assert_eq!(cs.percent, Some(82.5));
        assert_eq!(cs.standing, None);
    }

    #[test]
    fn tests_sorted_by_known_order_then_name() {
        let tests = vec![ts("Quiz/5", "4"), ts("FT-II/10", "8"), ts("Assign/5", "5"), ts("FT-I/5", "4")];
        let names: Vec<&str> = ordered_tests(&tests).iter().map(|t| split_label(&t.label).0).collect();
        assert_eq!(names, vec!["FT-I", "FT-II", "Assign", "Quiz"]);
    }

    #[test]
    fn course_totals() {
        let rec = MarksRecord {
            course_code: s!("C1"),
            course_title: s!("T"),
            category: s!("Theory"),
            tests: vec![ts("FT-I/5", "4.5"), ts("FT-II/15", "12"), ts("Viva", "3")],
        };
        let m = course_marks(&rec);
        assert_eq!(m.total_score, 19.5);
        assert_eq!(m.total_max, 20.0);
        assert_eq!(m.average_percent, 97.5);
        assert_eq!(m.tests[0].percent, 90.0);
        assert_eq!(m.tests[2].max, None);
        assert_eq!(m.tests[2].percent, 0.0);
    }

    #[test]
    fn overall_weights_by_hours_when_held() {
        let mk = |conducted: &str, absent: &str, p: &str| AttendanceRecord {
            hours_conducted: s!(conducted),
            hours_absent: s!(absent),
            attendance_percent: s!(p),
            ..Default::default()
        };
        let result = ScrapeResult {
            attendance: vec![mk("40", "4", "90"), mk("10", "5", "50")],
            ..Default::default()
        };
        // 41 present of 50, not the 70 a plain mean gives
        assert_eq!(summarize(&result).overall_attendance, Some(82.0));
    }

    #[test]
    fn cumulative_marks_span_all_courses() {
        let course = |tests: Vec<TestScore>| MarksRecord {
            course_code: s!("C"),
            course_title: s!("T"),
            category: s!("Theory"),
            tests,
        };
        let marks = vec![
            course(vec![ts("FT-I/5", "4.5"), ts("FT-II/10", "8")]),
            course(vec![ts("LLT-I/15", "12"), ts("Viva", "2")]),
        ];
        let total = cumulative_marks(&marks);
        assert_eq!(total, MarksTotal { score: 27.0, max: 30.0, percent: 88.33 });
        assert_eq!(cumulative_marks(&[]), MarksTotal::default());
    }

    #[test]
    fn overall_average_skips_unparsable() {
        let mk = |p: &str| AttendanceRecord { attendance_percent: s!(p), ..Default::default() };
        let result = ScrapeResult {
            attendance: vec![mk("80"), mk("90"), mk("n/a")],
            ..Default::default()
        };
        assert_eq!(summarize(&result).overall_attendance, Some(85.0));
        assert_eq!(summarize(&ScrapeResult::default()).overall_attendance, None);
    }
}
