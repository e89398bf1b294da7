//! The ordered student collection split across logical submodules.

mod error;
mod list;
mod sort;

pub use error::ListError;
pub use list::{Iter, StudentList};
