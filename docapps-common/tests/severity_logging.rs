//! Integration tests for severity-driven error logging

use docapps_common::{log_error, ErrorSeverity, Severity};
use std::fmt;

#[derive(Debug)]
enum DragError {
    OffBoard,
    Corrupt,
}

impl fmt::Display for DragError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragError::OffBoard => write!(f, "dropped outside the board"),
            DragError::Corrupt => write!(f, "board state is corrupt"),
        }
    }
}

impl Severity for DragError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            DragError::OffBoard => ErrorSeverity::Warning,
            DragError::Corrupt => ErrorSeverity::Critical,
        }
    }
}

#[test_log::test]
fn test_log_error_accepts_every_severity() {
    log_error("kanban", &DragError::OffBoard);
    log_error("kanban", &DragError::Corrupt);

    let boxed: Box<DragError> = Box::new(DragError::Corrupt);
    assert_eq!(boxed.severity(), ErrorSeverity::Critical);
    log_error("kanban", &boxed);
}
