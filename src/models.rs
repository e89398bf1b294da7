//! Domain models passed between the roster core, the report writer, and the
//! TUI. These stay plain value types: the list copies them in and hands copies
//! back out, so no layer ever aliases another layer's record.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
/// One student's record. Field content is validated by the forms before it
/// reaches the list; the list only cares about structure.
pub struct Student {
    /// Full name. Relational operations ("before Anna", "after Bao") match on
    /// this field exactly, case included.
    pub name: String,
    /// Age in whole years.
    pub age: u32,
    /// Grade point average on the 10-point scale, always within `[0, 10]`.
    pub gpa: f64,
}

impl Student {
    pub fn new(name: impl Into<String>, age: u32, gpa: f64) -> Self {
        Self {
            name: name.into(),
            age,
            gpa,
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {:.2})", self.name, self.age, self.gpa)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// How an insert, delete, or edit picks its spot in the list.
pub enum Target {
    Head,
    Tail,
    /// Relative to the first record whose name equals the given text.
    BeforeName(String),
    AfterName(String),
    /// 1-based ordinal over the current sequence.
    AtPosition(usize),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Head => write!(f, "head of list"),
            Target::Tail => write!(f, "tail of list"),
            Target::BeforeName(name) => write!(f, "before {name}"),
            Target::AfterName(name) => write!(f, "after {name}"),
            Target::AtPosition(n) => write!(f, "position {n}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Gpa,
    Age,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Gpa => "GPA",
            SortKey::Age => "age",
        }
    }
}

impl SortOrder {
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}
