use thiserror::Error;

/// Every way a list operation can refuse a request. A failed call never
/// touches the links, so the caller can report the message and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("Student with name {0} not found!")]
    NotFound(String),
    #[error("No student before {0}!")]
    NoPredecessor(String),
    #[error("No student after {0}!")]
    NoSuccessor(String),
    #[error("Invalid position! Positions start at 1.")]
    InvalidPosition,
    #[error("Position {0} is out of range!")]
    PositionOutOfRange(usize),
    #[error("List is empty!")]
    EmptyList,
    #[error("Failed to allocate memory for a new student.")]
    AllocationFailed,
}
