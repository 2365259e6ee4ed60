//! Result extension trait for logging errors with context.
//!
//! This module provides a `ResultExt` trait that adds a `log` method
//! to `Result` types for automatic error logging with context.

use std::fmt::Display;
use tracing::error;

/// Extension trait for logging errors with context.
///
/// This trait adds a `log` method to `Result` types that logs
/// errors with the provided context message and source location.
pub trait ResultExt<T, E> {
    /// Log the error with context if this is an `Err` variant.
    ///
    /// Returns the original `Result` unchanged.
    ///
    /// ```ignore
    /// use user_gateway::result_ext::ResultExt;
    ///
    /// let listener = TcpListener::bind(addr).await.log("Failed to bind")?;
    /// ```
    fn log<S: ToString>(self, context: S) -> Result<T, E>;
}

impl<T, E: Display> ResultExt<T, E> for Result<T, E> {
    #[track_caller]
    fn log<S: ToString>(self, context: S) -> Result<T, E> {
        if let Err(ref e) = self {
            let caller_location = std::panic::Location::caller();
            error!(
                target: "user_gateway",
                error = %e,
                file = %format!("{}:{}", caller_location.file(), caller_location.line()),
                context = %context.to_string(),
                "Operation failed"
            );
        }
        self
    }
}
