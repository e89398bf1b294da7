//! Plain-text export of the roster: a fixed-width table followed by a GPA
//! distribution. The layout is meant to be printed or diffed, so column widths
//! never adapt to the data.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::roster::StudentList;

const WIDE_RULE: &str = "========================================================";
const TABLE_END_RULE: &str = "============================================";
/// Width of the name column. Longer names are cut so the table keeps its shape.
const NAME_COLUMN_WIDTH: usize = 50;

/// GPA buckets used by the distribution section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeBand {
    Excellent,
    Good,
    Average,
    Weak,
}

impl GradeBand {
    pub const ALL: [GradeBand; 4] = [
        GradeBand::Excellent,
        GradeBand::Good,
        GradeBand::Average,
        GradeBand::Weak,
    ];

    /// Bands are checked top-down, so anything from 3.5 upward counts as
    /// excellent even on the 10-point scale.
    pub fn from_gpa(gpa: f64) -> Self {
        if gpa >= 3.5 {
            GradeBand::Excellent
        } else if gpa >= 3.0 {
            GradeBand::Good
        } else if gpa >= 2.0 {
            GradeBand::Average
        } else {
            GradeBand::Weak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GradeBand::Excellent => "Excellent (3.5 - 4.0)",
            GradeBand::Good => "Good (3.0 - 3.49)",
            GradeBand::Average => "Average (2.0 - 2.99)",
            GradeBand::Weak => "Weak (< 2.0)",
        }
    }
}

/// Head count per [`GradeBand`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradeDistribution {
    pub excellent: usize,
    pub good: usize,
    pub average: usize,
    pub weak: usize,
}

impl GradeDistribution {
    pub fn from_list(list: &StudentList) -> Self {
        let mut distribution = Self::default();
        for student in list {
            *distribution.slot_mut(GradeBand::from_gpa(student.gpa)) += 1;
        }
        distribution
    }

    pub fn count(&self, band: GradeBand) -> usize {
        match band {
            GradeBand::Excellent => self.excellent,
            GradeBand::Good => self.good,
            GradeBand::Average => self.average,
            GradeBand::Weak => self.weak,
        }
    }

    fn slot_mut(&mut self, band: GradeBand) -> &mut usize {
        match band {
            GradeBand::Excellent => &mut self.excellent,
            GradeBand::Good => &mut self.good,
            GradeBand::Average => &mut self.average,
            GradeBand::Weak => &mut self.weak,
        }
    }
}

/// Render the full report text for `list`.
pub fn render_report(list: &StudentList) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, list);
    out
}

fn write_report(out: &mut String, list: &StudentList) -> std::fmt::Result {
    writeln!(out, "{WIDE_RULE}")?;
    writeln!(
        out,
        "| {:<3} | {:<width$} | {:<5} | {:<7} |",
        "No.",
        "Name",
        "Age",
        "GPA",
        width = NAME_COLUMN_WIDTH
    )?;
    writeln!(out, "{WIDE_RULE}")?;
    for (row, student) in list.iter().enumerate() {
        writeln!(
            out,
            "| {:<3} | {:<width$.width$} | {:<5} | {:<7.2} |",
            row + 1,
            student.name,
            student.age,
            student.gpa,
            width = NAME_COLUMN_WIDTH
        )?;
    }
    writeln!(out, "{TABLE_END_RULE}")?;
    writeln!(out)?;
    writeln!(out, "                   GPA DISTRIBUTION")?;
    writeln!(out, "{WIDE_RULE}")?;
    let distribution = GradeDistribution::from_list(list);
    for band in GradeBand::ALL {
        writeln!(out, "| {:<54} | {:<5} |", band.label(), distribution.count(band))?;
    }
    writeln!(out, "{WIDE_RULE}")
}

/// Write the report to `path`, replacing whatever was there. Missing parent
/// directories are created. Returns the path that was written.
pub fn save_report(list: &StudentList, path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    fs::write(path, render_report(list))
        .with_context(|| format!("failed to write report to {}", path.display()))?;

    info!(
        "event=report_saved status=ok path={} rows={}",
        path.display(),
        list.count()
    );
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_fall_into_upper_band() {
        assert_eq!(GradeBand::from_gpa(3.5), GradeBand::Excellent);
        assert_eq!(GradeBand::from_gpa(9.75), GradeBand::Excellent);
        assert_eq!(GradeBand::from_gpa(3.49), GradeBand::Good);
        assert_eq!(GradeBand::from_gpa(3.0), GradeBand::Good);
        assert_eq!(GradeBand::from_gpa(2.0), GradeBand::Average);
        assert_eq!(GradeBand::from_gpa(1.99), GradeBand::Weak);
        assert_eq!(GradeBand::from_gpa(0.0), GradeBand::Weak);
    }

    #[test]
    fn empty_list_still_renders_headers_and_zero_counts() {
        let text = render_report(&StudentList::new());
        assert!(text.starts_with(WIDE_RULE));
        assert!(text.contains("GPA DISTRIBUTION"));
        assert!(text.contains(&format!("| {:<54} | {:<5} |", "Weak (< 2.0)", 0)));
        assert_eq!(text.lines().count(), 12);
    }
}
