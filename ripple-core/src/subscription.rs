// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;
use std::sync::Arc;

pub(crate) trait Unsubscribable: Send + Sync {
    fn unsubscribe(&self);
    fn is_closed(&self) -> bool;
}

/// Cancellation handle returned by [`Stream::subscribe`](crate::Stream::subscribe).
///
/// `unsubscribe` terminates the subscriber created by that one `subscribe` call and,
/// through its teardowns, every upstream subscription, inner stream and timer the
/// chain created for it. It is idempotent and safe to call after the stream has
/// already terminated on its own. Dropping the handle does not unsubscribe.
#[derive(Clone)]
pub struct Subscription {
    inner: Option<Arc<dyn Unsubscribable>>,
}

impl Subscription {
    pub(crate) fn new(inner: Arc<dyn Unsubscribable>) -> Self {
        Self { inner: Some(inner) }
    }

    /// A handle that is already closed; unsubscribing it does nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self { inner: None }
    }

    pub fn unsubscribe(&self) {
        if let Some(inner) = &self.inner {
            inner.unsubscribe();
        }
    }

    /// `true` once the underlying subscriber has terminated by any cause.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.as_ref().map_or(true, |inner| inner.is_closed())
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("closed", &self.is_closed())
            .finish()
    }
}
