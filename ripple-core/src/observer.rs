// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The consumer record handed to [`Stream::subscribe`](crate::Stream::subscribe).
//!
//! A consumer may implement any subset of the three notifications. An absent slot
//! silently discards that notification.

use crate::error::RippleError;
use core::fmt;

pub(crate) type NextFn<T> = Box<dyn FnMut(T) + Send>;
pub(crate) type ErrorFn = Box<dyn FnOnce(RippleError) + Send>;
pub(crate) type CompleteFn = Box<dyn FnOnce() + Send>;

/// Up to three optional callbacks receiving `next`, `error` and `complete`.
///
/// # Example
///
/// ```
/// use ripple_core::Observer;
///
/// let observer = Observer::<i32>::new()
///     .on_next(|value| println!("got {value}"))
///     .on_complete(|| println!("done"));
/// assert!(observer.has_next());
/// assert!(!observer.has_error());
/// ```
pub struct Observer<T> {
    pub(crate) next: Option<NextFn<T>>,
    pub(crate) error: Option<ErrorFn>,
    pub(crate) complete: Option<CompleteFn>,
}

impl<T> Observer<T> {
    /// An observer that discards every notification.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: None,
            error: None,
            complete: None,
        }
    }

    /// Sets the `next` callback.
    #[must_use]
    pub fn on_next<F>(mut self, f: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        self.next = Some(Box::new(f));
        self
    }

    /// Sets the `error` callback.
    #[must_use]
    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: FnOnce(RippleError) + Send + 'static,
    {
        self.error = Some(Box::new(f));
        self
    }

    /// Sets the `complete` callback.
    #[must_use]
    pub fn on_complete<F>(mut self, f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.complete = Some(Box::new(f));
        self
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn has_complete(&self) -> bool {
        self.complete.is_some()
    }
}

impl<T> Default for Observer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> From<F> for Observer<T>
where
    F: FnMut(T) + Send + 'static,
{
    fn from(next: F) -> Self {
        Observer::new().on_next(next)
    }
}

impl<T> fmt::Debug for Observer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("next", &self.has_next())
            .field("error", &self.has_error())
            .field("complete", &self.has_complete())
            .finish()
    }
}
