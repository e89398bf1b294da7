use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Row, Table};

use crate::models::Student;
use crate::roster::StudentList;

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

/// Cells for one roster row: ordinal, name, age, GPA to two decimals.
pub(crate) fn student_cells(row: usize, student: &Student) -> [String; 4] {
    [
        row.to_string(),
        student.name.clone(),
        student.age.to_string(),
        format!("{:.2}", student.gpa),
    ]
}

/// Build the roster table widget with a bold header row.
pub(crate) fn roster_table(list: &StudentList) -> Table<'static> {
    let header = Row::new(["No.", "Name", "Age", "GPA"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row<'static>> = list
        .iter()
        .enumerate()
        .map(|(idx, student)| Row::new(student_cells(idx + 1, student)))
        .collect();

    Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Min(20),
            Constraint::Length(6),
            Constraint::Length(8),
        ],
    )
    .header(header)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_format_gpa_to_two_decimals() {
        let cells = student_cells(3, &Student::new("Chi", 19, 2.5));
        assert_eq!(cells, ["3", "Chi", "19", "2.50"]);
    }

    #[test]
    fn surface_error_prefers_root_cause() {
        let err = anyhow::anyhow!("disk full").context("failed to write report");
        assert_eq!(surface_error(&err), "disk full");
    }
}
