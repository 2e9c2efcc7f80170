// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Records every notification a subscription receives.

use parking_lot::Mutex;
use ripple_core::{Observer, RippleError};
use std::sync::Arc;

/// One recorded notification.
///
/// Errors compare equal when their messages do, since [`RippleError`] itself has no
/// equality.
#[derive(Debug, Clone)]
pub enum Notification<T> {
    Next(T),
    Error(RippleError),
    Complete,
}

impl<T: PartialEq> PartialEq for Notification<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Next(a), Self::Next(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => a.to_string() == b.to_string(),
            (Self::Complete, Self::Complete) => true,
            _ => false,
        }
    }
}

/// Shared log of notifications, filled by the observers it hands out.
///
/// ```rust
/// use ripple_core::Stream;
/// use ripple_test_utils::{Notification, Recorder};
///
/// let recorder = Recorder::<i32>::new();
/// Stream::new(|s| {
///     s.next(1);
///     s.complete();
/// })
/// .subscribe(recorder.observer());
///
/// assert_eq!(recorder.values(), vec![1]);
/// assert_eq!(
///     recorder.notifications(),
///     vec![Notification::Next(1), Notification::Complete]
/// );
/// ```
#[derive(Debug)]
pub struct Recorder<T> {
    log: Arc<Mutex<Vec<Notification<T>>>>,
}

impl<T: Clone + Send + 'static> Recorder<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// An observer appending to this recorder.
    #[must_use]
    pub fn observer(&self) -> Observer<T> {
        let on_next = Arc::clone(&self.log);
        let on_error = Arc::clone(&self.log);
        let on_complete = Arc::clone(&self.log);
        Observer::new()
            .on_next(move |value: T| on_next.lock().push(Notification::Next(value)))
            .on_error(move |err| on_error.lock().push(Notification::Error(err)))
            .on_complete(move || on_complete.lock().push(Notification::Complete))
    }

    #[must_use]
    pub fn notifications(&self) -> Vec<Notification<T>> {
        self.log.lock().clone()
    }

    /// The recorded values, in arrival order.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.log
            .lock()
            .iter()
            .filter_map(|n| match n {
                Notification::Next(value) => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    /// The first recorded error, if any.
    #[must_use]
    pub fn error(&self) -> Option<RippleError> {
        self.log.lock().iter().find_map(|n| match n {
            Notification::Error(err) => Some(err.clone()),
            _ => None,
        })
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.log
            .lock()
            .iter()
            .any(|n| matches!(n, Notification::Complete))
    }

    /// Whether an `error` or `complete` was recorded.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.is_completed() || self.error().is_some()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        self.log.lock().clear();
    }
}

impl<T: Clone + Send + 'static> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            log: Arc::clone(&self.log),
        }
    }
}
