// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for rivulet pipelines.
//!
//! Every failure that can terminate a subscription is a [`RivuletError`]. The
//! variants follow where the failure came from:
//!
//! - [`RivuletError::SourceError`]: a producer itself failed (malformed input, I/O, ...)
//! - [`RivuletError::UserError`]: a user-supplied function passed to an operator failed
//! - [`RivuletError::StreamProcessingError`]: an operator could not continue
//!
//! Cancellation is not an error and has no variant here.
//!
//! # Examples
//!
//! ```
//! use rivulet_core::{RivuletError, Result};
//!
//! fn parse_port(raw: &str) -> Result<u16> {
//!     raw.parse::<u16>().map_err(RivuletError::user_error)
//! }
//!
//! assert!(parse_port("8080").is_ok());
//! assert!(parse_port("eighty").unwrap_err().is_user_error());
//! ```

/// Root error type for all rivulet operations.
#[derive(Debug, thiserror::Error)]
pub enum RivuletError {
    /// An operator could not continue processing.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// The underlying producer failed.
    #[error("Source error: {context}")]
    SourceError {
        /// Description of the source failure
        context: String,
    },

    /// Custom error from user code
    ///
    /// This wraps errors produced by user-provided functions, such as the
    /// mapper given to `try_map`.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RivuletError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Create a source error with the given context
    pub fn source_error(context: impl Into<String>) -> Self {
        Self::SourceError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Returns `true` if the error came from a user-supplied function.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::UserError(_))
    }

    /// Returns `true` if the error came from the producer itself.
    #[must_use]
    pub const fn is_source_error(&self) -> bool {
        matches!(self, Self::SourceError { .. })
    }
}

/// Specialized Result type for rivulet operations
pub type Result<T> = std::result::Result<T, RivuletError>;

/// Extension trait for converting errors into `RivuletError`
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`.
pub trait IntoRivuletError {
    /// Convert this error into a `RivuletError` with additional context
    fn into_rivulet_error(self, context: &str) -> RivuletError;

    /// Convert this error into a `RivuletError` without additional context
    fn into_rivulet(self) -> RivuletError
    where
        Self: Sized,
    {
        self.into_rivulet_error("")
    }
}

impl<E: std::error::Error + Send + Sync + 'static> IntoRivuletError for E {
    fn into_rivulet_error(self, context: &str) -> RivuletError {
        if context.is_empty() {
            RivuletError::user_error(self)
        } else {
            RivuletError::stream_error(format!("{context}: {self}"))
        }
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(RivuletError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(RivuletError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<RivuletError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| attach_context(e.into(), context.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| attach_context(e.into(), f()))
    }
}

fn attach_context(error: RivuletError, context: String) -> RivuletError {
    match error {
        RivuletError::UserError(inner) => {
            RivuletError::stream_error(format!("{context}: {inner}"))
        }
        other => other,
    }
}

impl Clone for RivuletError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            Self::SourceError { context } => Self::SourceError {
                context: context.clone(),
            },
            // The boxed error can't be cloned, keep its message
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
        }
    }
}
