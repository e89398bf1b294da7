use std::fs;

use student_roster::{
    render_report, save_report, GradeBand, GradeDistribution, Student, StudentList, Target,
};
use tempfile::tempdir;

fn sample() -> StudentList {
    let mut list = StudentList::new();
    for (name, age, gpa) in [("Anna", 20, 3.2), ("Bao", 21, 3.9), ("Chi", 19, 2.5), ("Dan", 22, 1.0)] {
        list.insert(Student::new(name, age, gpa), &Target::Tail)
            .unwrap();
    }
    list
}

#[test]
fn report_rows_follow_fixed_widths() {
    let text = render_report(&sample());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "=".repeat(56));
    assert_eq!(
        lines[1],
        format!("| No. | {:<50} | Age   | GPA     |", "Name")
    );
    assert_eq!(lines[3], format!("| 1   | {:<50} | 20    | 3.20    |", "Anna"));
    assert_eq!(lines[4], format!("| 2   | {:<50} | 21    | 3.90    |", "Bao"));
    assert_eq!(lines[7], "=".repeat(44));
    assert_eq!(lines[8], "");
    assert_eq!(lines[9], "                   GPA DISTRIBUTION");
}

#[test]
fn every_table_row_matches_header_width() {
    let mut list = sample();
    list.insert(Student::new("A".repeat(49), 30, 10.0), &Target::Tail)
        .unwrap();
    list.insert(Student::new("B".repeat(60), 31, 0.0), &Target::Tail)
        .unwrap();

    let text = render_report(&list);
    let lines: Vec<&str> = text.lines().collect();
    let header_width = lines[1].len();
    for row in &lines[3..3 + list.count()] {
        assert_eq!(row.len(), header_width, "row `{row}` breaks the table");
    }
    assert!(lines[3 + 4].contains(&"A".repeat(49)));
    assert!(lines[3 + 5].contains(&"B".repeat(50)));
    assert!(!lines[3 + 5].contains(&"B".repeat(51)));
}

#[test]
fn distribution_counts_each_band() {
    let list = sample();
    let distribution = GradeDistribution::from_list(&list);
    assert_eq!(
        distribution,
        GradeDistribution {
            excellent: 1,
            good: 1,
            average: 1,
            weak: 1,
        }
    );

    let text = render_report(&list);
    for band in GradeBand::ALL {
        assert!(text.contains(&format!("| {:<54} | {:<5} |", band.label(), 1)));
    }
}

#[test]
fn save_overwrites_existing_file_and_creates_parents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("students.txt");

    let written = save_report(&sample(), &path).unwrap();
    assert_eq!(written, path);
    assert!(fs::read_to_string(&path).unwrap().contains("Anna"));

    let mut smaller = StudentList::new();
    smaller
        .insert(Student::new("Solo", 30, 9.5), &Target::Head)
        .unwrap();
    save_report(&smaller, &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Solo"));
    assert!(!contents.contains("Anna"));
    assert_eq!(contents, render_report(&smaller));
}

#[test]
fn save_into_a_file_path_that_is_a_directory_fails_with_context() {
    let dir = tempdir().unwrap();
    let err = save_report(&sample(), dir.path()).unwrap_err();
    assert!(err.to_string().contains("failed to write report"));
}
