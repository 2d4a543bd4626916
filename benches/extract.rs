// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use academia_scrape::{
    core::Document,
    extract,
    log::{self, Level, Target},
    matcher,
    specs::attendance,
};

const COURSES: usize = 40;

fn attendance_page() -> String {
    let mut rows = String::new();
    let mut marks = String::new();
    for i in 0..COURSES {
        rows.push_str(&format!(
            r##"<tr><td bgcolor="#E6E6FA">21CSC{i:03}J<br>Regular</td><td>Course {i}</td><td>Theory</td>
                <td>Dr. F{i}</td><td>A</td><td>TP {i}</td><td>40</td><td>{}</td><td><strong>{:.2}</strong></td></tr>"##,
            i % 11,
            100.0 * (40 - i % 11) as f64 / 40.0
        ));
        marks.push_str(&format!(
            r##"<tr><td bgcolor="#E6E6FA">21CSC{i:03}J</td><td>Theory</td><td><table border="1"><tr>
                <td bgcolor="#E6E6FA"><strong>FT-I/5.00</strong><br>{}.50</td>
                <td bgcolor="#E6E6FA"><strong>FT-II/10.00</strong><br>{}</td></tr></table></td></tr>"##,
            i % 5,
            i % 10
        ));
    }
    format!(
        r##"<html><body>
        <table><tr><td>Registration Number:</td><td><strong>RA0000000000001</strong></td></tr>
        <tr><td>Name:</td><td><strong>Bench Student</strong></td></tr></table>
        <table bgcolor="#FAFAD2"><tr><td>Course Code</td></tr>{rows}</table>
        <table><tr><td>Course Code</td></tr>{marks}</table>
        </body></html>"##
    )
}

fn timetable_page() -> String {
    let mut rows = String::new();
    for i in 0..COURSES {
        rows.push_str(&format!(
            "<tr><td>{i}</td><td>21CSC{i:03}J</td><td>Course {i}</td><td>{}</td><td>Regular</td>\
             <td>Core</td><td>Theory</td><td>Dr. F{i}</td><td>A</td><td>TP {i}</td><td>AY2024-25</td></tr>",
            i % 5
        ));
    }
    format!("<html><body><table class=\"course_tbl\"><tr><td>S.No</td></tr>{rows}</table></body></html>")
}

fn bench_extract(c: &mut Criterion) {
    log::init(Target::Off, Level::Error);
    let att = attendance_page();
    let tt = timetable_page();

    c.bench_function("extract_full", |b| {
        b.iter(|| {
            let ex = extract(black_box(&att), black_box(&tt)).ok();
            black_box(ex.map(|e| e.result.marks.len()))
        })
    });

    let doc = Document::parse(&att);
    c.bench_function("attendance_only", |b| {
        b.iter(|| black_box(attendance::parse(black_box(&doc)).records.len()))
    });

    let records = attendance::parse(&doc).records;
    c.bench_function("match_pattern_fallthrough", |b| {
        b.iter(|| black_box(matcher::match_course(black_box("XX 21CSC039J extra"), &records)))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
