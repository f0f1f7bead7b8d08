//! Error types for the kanban model

use docapps_common::{ErrorSeverity, Severity};
use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in kanban operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KanbanError {
    /// An operation named a list position the board does not have
    #[error("list index {index} out of range for board with {len} lists")]
    ListIndexOutOfRange { index: usize, len: usize },

    /// An operation named an item position the list does not have
    #[error("item index {index} out of range for list {list} with {len} items")]
    ItemIndexOutOfRange {
        list: usize,
        index: usize,
        len: usize,
    },

    /// Markdown text matched a bullet but not its grammar
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl KanbanError {
    /// Create a parse error for a 1-based line number
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

impl Severity for KanbanError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // A stale drag target; the board is untouched
            KanbanError::ListIndexOutOfRange { .. } => ErrorSeverity::Warning,
            KanbanError::ItemIndexOutOfRange { .. } => ErrorSeverity::Warning,

            KanbanError::Parse { .. } => ErrorSeverity::Error,
        }
    }
}
