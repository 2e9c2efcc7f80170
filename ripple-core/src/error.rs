// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types carried by the `error` notification.
//!
//! A stream has exactly one error channel: a terminal `error` notification carrying a
//! [`RippleError`]. Operators other than `catch_error` forward it unchanged.
//!
//! # Examples
//!
//! ```
//! use ripple_core::{RippleError, Result};
//!
//! fn lookup() -> Result<()> {
//!     Err(RippleError::stream_error("search backend unavailable"))
//! }
//!
//! assert!(lookup().is_err());
//! ```

use std::sync::Arc;

/// Root error type for all ripple notifications.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RippleError {
    /// Stream processing encountered an error
    ///
    /// This is a general error for producers and operators that don't fit
    /// other specific categories.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by application producers and callbacks. The error is
    /// shared so that a notification can be cloned, e.g. by a `Subject` broadcasting
    /// it to several subscribers.
    #[error("User error: {0}")]
    UserError(#[source] Arc<dyn std::error::Error + Send + Sync>),

    /// A `catch_error` handler panicked instead of returning a replacement stream.
    #[error("Error handler panicked: {message}")]
    HandlerPanicked {
        /// The panic payload, if it was a string
        message: String,
    },

    /// Timeout occurred
    #[error("Timeout error: {context}")]
    TimeoutError {
        /// Context about the timeout (e.g. duration)
        context: String,
    },
}

impl RippleError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Create a timeout error with the given context
    pub fn timeout_error(context: impl Into<String>) -> Self {
        Self::TimeoutError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Arc::new(error))
    }

    /// Build a `HandlerPanicked` error from a panic payload.
    pub fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self::HandlerPanicked { message }
    }

    /// User errors and stream processing errors are considered permanent.
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        matches!(
            self,
            Self::StreamProcessingError { .. } | Self::UserError(_)
        )
    }
}

/// Specialized Result type for ripple operations
pub type Result<T> = std::result::Result<T, RippleError>;

/// Extension trait for converting errors into `RippleError`
///
/// Implemented for all types that implement `std::error::Error + Send + Sync + 'static`.
pub trait IntoRippleError {
    /// Convert this error into a `RippleError` with additional context
    fn into_ripple_error(self, context: &str) -> RippleError;

    /// Convert this error into a `RippleError` without additional context
    fn into_ripple(self) -> RippleError
    where
        Self: Sized,
    {
        self.into_ripple_error("")
    }
}

impl<E: std::error::Error + Send + Sync + 'static> IntoRippleError for E {
    fn into_ripple_error(self, context: &str) -> RippleError {
        if context.is_empty() {
            RippleError::user_error(self)
        } else {
            RippleError::stream_error(format!("{context}: {self}"))
        }
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(RippleError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<RippleError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let context = context.into();
            match e.into() {
                RippleError::UserError(inner) => RippleError::StreamProcessingError {
                    context: format!("{context}: {inner}"),
                },
                other => other,
            }
        })
    }
}
