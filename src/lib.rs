//! Core library surface for the student roster TUI.
//!
//! The roster itself lives in [`roster`]; the report writer, configuration,
//! logging setup and terminal front-end build on it. The binary only wires
//! these together.
pub mod config;
pub mod logging;
pub mod models;
pub mod report;
pub mod roster;
pub mod ui;

pub use config::AppConfig;
pub use logging::init_logging;

/// Record and addressing types shared by every layer.
pub use models::{SortKey, SortOrder, Student, Target};

pub use report::{render_report, save_report, GradeBand, GradeDistribution};
pub use roster::{Iter, ListError, StudentList};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
