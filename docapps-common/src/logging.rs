//! Logging utilities
//!
//! This module provides utilities for formatting values and errors in
//! `tracing` events.

use crate::error::{ErrorSeverity, Severity};
use serde::Serialize;
use std::fmt::{Debug, Display};

/// Wrapper for pretty-printing types in logs as YAML
///
/// ```ignore
/// use docapps_common::Pretty;
/// use tracing::debug;
///
/// debug!("applying operation: {}", Pretty(&operation));
/// ```
///
/// Outputs YAML with a leading newline. Debug is used as a fallback if YAML
/// serialization fails.
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> Display for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_yaml_ng::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}

impl<T: Serialize + Debug> Debug for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// Emit `err` at the tracing level its severity maps to.
///
/// Warnings go to `warn!`, everything else to `error!`. `app` names the
/// embeddable app the error came from.
pub fn log_error<E>(app: &str, err: &E)
where
    E: Severity + Display + ?Sized,
{
    match err.severity() {
        ErrorSeverity::Warning => tracing::warn!(app, "{err}"),
        ErrorSeverity::Error => tracing::error!(app, "{err}"),
        ErrorSeverity::Critical => tracing::error!(app, critical = true, "{err}"),
    }
}
