//! Error severity classification
//!
//! Each app crate defines its own `thiserror` enum. They all implement
//! [`Severity`] so the host boundary can decide how loudly to report a
//! failure without knowing the concrete error type.

/// Severity levels for error classification
///
/// # Severity Levels
///
/// - **Warning**: The input was rejected but nothing changed. A bad move on
///   the Reversi board or a drag that lands outside the board.
/// - **Error**: The operation failed and the app keeps working with its
///   previous state.
/// - **Critical**: The app cannot produce a usable state at all.
///
/// # Examples
///
/// ```rust
/// use docapps_common::ErrorSeverity;
///
/// // Warning: an occupied square was clicked
/// let occupied = ErrorSeverity::Warning;
///
/// // Critical: the settings document could not be parsed
/// let bad_settings = ErrorSeverity::Critical;
/// assert_ne!(occupied, bad_settings);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Input rejected, state unchanged
    Warning,

    /// Operation failed but the app can continue
    Error,

    /// The app cannot continue with the current input
    Critical,
}

/// Trait for error types that have severity levels
///
/// # Example
///
/// ```rust
/// use docapps_common::{ErrorSeverity, Severity};
///
/// #[derive(Debug)]
/// enum MoveError {
///     Occupied,
///     CorruptState,
/// }
///
/// impl Severity for MoveError {
///     fn severity(&self) -> ErrorSeverity {
///         match self {
///             MoveError::Occupied => ErrorSeverity::Warning,
///             MoveError::CorruptState => ErrorSeverity::Critical,
///         }
///     }
/// }
///
/// assert_eq!(MoveError::Occupied.severity(), ErrorSeverity::Warning);
/// ```
pub trait Severity {
    /// Get the severity level of this error
    fn severity(&self) -> ErrorSeverity;
}

impl<T: Severity + ?Sized> Severity for &T {
    fn severity(&self) -> ErrorSeverity {
        (**self).severity()
    }
}

// Apps whose actions cannot fail use `Infallible` as their error type.
impl Severity for std::convert::Infallible {
    fn severity(&self) -> ErrorSeverity {
        match *self {}
    }
}

impl<T: Severity + ?Sized> Severity for Box<T> {
    fn severity(&self) -> ErrorSeverity {
        (**self).severity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Fixed(ErrorSeverity);

    impl Severity for Fixed {
        fn severity(&self) -> ErrorSeverity {
            self.0
        }
    }

    #[test]
    fn test_severity_ordering() {
        assert!(ErrorSeverity::Warning < ErrorSeverity::Error);
        assert!(ErrorSeverity::Error < ErrorSeverity::Critical);
    }

    #[test]
    fn test_severity_through_references() {
        let err = Fixed(ErrorSeverity::Critical);
        assert_eq!((&err).severity(), ErrorSeverity::Critical);

        let boxed: Box<dyn Severity> = Box::new(Fixed(ErrorSeverity::Warning));
        assert_eq!(boxed.severity(), ErrorSeverity::Warning);
    }
}
