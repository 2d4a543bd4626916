//! Scraping *spec* for the course-registration table on the timetable page.
//!
//! `table.course_tbl`, header row first, then one row per registered course:
//!
//! | 0  | 1    | 2     | 3       | 4        | 5        | 6           | 7       | 8    | 9    | 10            |
//! |----|------|-------|---------|----------|----------|-------------|---------|------|------|---------------|
//! | S# | Code | Title | Credits | Reg type | Category | Course type | Faculty | Slot | Room | Academic year |

use crate::config::consts::{TIMETABLE_CELLS, TIMETABLE_CLASS};
use crate::core::Document;
use crate::core::html::{cells, own_rows, text_of};
use crate::data::CourseRecord;
use crate::report::{Issue, Parsed, Section};

/// Courses plus the credit total over the rows that parsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timetable {
    pub courses: Parsed<CourseRecord>,
    pub total_credits: u32,
}

pub fn parse(doc: &Document) -> Timetable {
    let mut courses = Parsed::default();
    let mut total_credits = 0u32;

    let Some(table) = doc.table_with_class(TIMETABLE_CLASS) else {
        courses.issue(Issue::TableMissing { section: Section::Timetable });
        return Timetable { courses, total_credits };
    };

    for (ix, row) in own_rows(table).into_iter().enumerate().skip(1) {
        let cols: Vec<String> = cells(row).into_iter().map(text_of).collect();
        if cols.len() < TIMETABLE_CELLS {
            logd!("timetable: row {ix} has {} cells, skipped", cols.len());
            continue;
        }

        let credits = match parse_credits(&cols[3]) {
            Some(c) => c,
            None => {
                courses.issue(Issue::FieldParse {
                    section: Section::Timetable,
                    row: ix,
                    field: "credits",
                    value: cols[3].clone(),
                });
                0
            }
        };
        total_credits = total_credits.saturating_add(credits);

        let [_, course_code, course_title, _, reg_type, category, course_type, faculty, slot, room, academic_year]: [String; 11] =
            std::array::from_fn(|i| cols[i].clone());

        courses.push(CourseRecord {
            course_code,
            course_title,
            credits,
            reg_type,
            category,
            course_type,
            faculty,
            slot,
            room,
            academic_year,
        });
    }

    logd!("timetable: {} courses, {} credits", courses.records.len(), total_credits);
    Timetable { courses, total_credits }
}

fn parse_credits(s: &str) -> Option<u32> {
    s.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(sn: u32, code: &str, credits: &str) -> String {
        format!(
            "<tr><td>{sn}</td><td>{code}</td><td>Title {code}</td><td>{credits}</td><td>Regular</td>\
             <td>Professional Core</td><td>Theory</td><td>Dr. X</td><td>A</td><td>TP 401</td><td>AY2024-25</td></tr>"
        )
    }

    fn page(rows: &str) -> Document {
        Document::parse(&format!(
            "<table class=\"course_tbl\"><tr><td>S.No</td><td>Course Code</td></tr>{rows}</table>"
        ))
    }

    #[test]
    fn maps_cells_one_through_ten() {
        let tt = parse(&page(&row(1, "21CSC101J", "4")));
        assert_eq!(tt.total_credits, 4);
        let c = &tt.courses.records[0];
        assert_eq!(c.course_code, "21CSC101J");
        assert_eq!(c.course_title, "Title 21CSC101J");
        assert_eq!(c.credits, 4);
        assert_eq!(c.reg_type, "Regular");
        assert_eq!(c.category, "Professional Core");
        assert_eq!(c.course_type, "Theory");
        assert_eq!(c.faculty, "Dr. X");
        assert_eq!(c.slot, "A");
        assert_eq!(c.room, "TP 401");
        assert_eq!(c.academic_year, "AY2024-25");
    }

    #[test]
    fn bad_credit_counts_zero_and_keeps_going() {
        let rows = format!("{}{}{}", row(1, "A", "3"), row(2, "B", "n/a"), row(3, "C", "2"));
        let tt = parse(&page(&rows));
        assert_eq!(tt.courses.records.len(), 3);
        assert_eq!(tt.courses.records[1].credits, 0);
        assert_eq!(tt.total_credits, 5);
        assert_eq!(tt.courses.issues.len(), 1);
    }

    #[test]
    fn short_rows_skipped() {
        let rows = format!("<tr><td>1</td><td>X</td><td>3</td></tr>{}", row(2, "B", "3"));
        let tt = parse(&page(&rows));
        assert_eq!(tt.courses.records.len(), 1);
        assert_eq!(tt.total_credits, 3);
    }

    #[test]
    fn missing_table_is_empty() {
        let tt = parse(&Document::parse("<table class=\"other\"></table>"));
        assert!(tt.courses.records.is_empty());
        assert_eq!(tt.total_credits, 0);
    }
}
