//! Error types for todo list operations.

use thiserror::Error;

/// Errors returned by fallible todo list operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoListError {
    /// The value offered to the list does not have the todo shape.
    ///
    /// Carries a description of what was wrong with the offered value.
    #[error("not a todo: {0}")]
    NotATodo(String),

    /// An explicit index fell outside the valid `[0, len)` range.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
}
