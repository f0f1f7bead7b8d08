//! # DocApps Common
//!
//! Foundational types shared by every embeddable app crate in this workspace.
//!
//! ## Modules
//!
//! - [`error`] - Severity classification implemented by every crate's error enum
//! - [`logging`] - Helpers for formatting values and errors in `tracing` output
//!
//! Nothing in here performs I/O. Installing a `tracing` subscriber is the
//! host's job; these helpers only emit events.

pub mod error;
pub mod logging;

pub use error::{ErrorSeverity, Severity};
pub use logging::{log_error, Pretty};
