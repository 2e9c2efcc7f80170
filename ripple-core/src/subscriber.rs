// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-subscription wrapper enforcing the termination guard.
//!
//! A [`Subscriber`] is either *active* or *terminated*. `next` keeps it active;
//! `error`, `complete` and `unsubscribe` terminate it. Once terminated, no observer
//! callback runs again and the flag never reverts. `error` and `complete` invoke the
//! observer's matching callback before terminating; `unsubscribe` terminates silently.
//! In every case the registered teardowns run exactly once, in registration order.
//!
//! No internal lock is held while a user callback runs, so callbacks are free to
//! unsubscribe, complete, or push into other subscribers of the same chain.
//!
//! Values are delivered one at a time. A `next` that arrives while another `next` is
//! being delivered, from inside the callback or from another thread, is queued and
//! delivered in arrival order once the running callback returns. Queued values are
//! discarded when the subscriber terminates.

use crate::error::RippleError;
use crate::observer::Observer;
use crate::subscription::{Subscription, Unsubscribable};
use crate::teardown::Teardown;
use core::fmt;
use core::mem;
use core::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

static NEXT_SUBSCRIBER_ID: AtomicU64 = AtomicU64::new(1);

/// Shared handle to one subscription's consumer.
///
/// Cloning the handle does not create a new subscription; all clones observe and
/// drive the same termination state.
pub struct Subscriber<T> {
    inner: Arc<SubscriberInner<T>>,
}

struct SubscriberInner<T> {
    id: u64,
    closed: AtomicBool,
    observer: Mutex<Observer<T>>,
    delivery: Mutex<Delivery<T>>,
    teardowns: Mutex<Vec<Teardown>>,
}

struct Delivery<T> {
    delivering: bool,
    queue: VecDeque<T>,
}

impl<T: Send + 'static> Subscriber<T> {
    #[must_use]
    pub fn new(observer: impl Into<Observer<T>>) -> Self {
        Self {
            inner: Arc::new(SubscriberInner {
                id: NEXT_SUBSCRIBER_ID.fetch_add(1, Ordering::Relaxed),
                closed: AtomicBool::new(false),
                observer: Mutex::new(observer.into()),
                delivery: Mutex::new(Delivery {
                    delivering: false,
                    queue: VecDeque::new(),
                }),
                teardowns: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Replaces the observer of a subscriber that has not terminated yet.
    pub(crate) fn install(&self, observer: Observer<T>) {
        let mut slot = self.inner.observer.lock();
        if !self.is_closed() {
            *slot = observer;
        }
    }

    /// Delivers a value. A no-op once the subscriber has terminated.
    ///
    /// If a delivery is already in progress the value is queued behind it.
    pub fn next(&self, value: T) {
        if self.is_closed() {
            return;
        }
        {
            let mut delivery = self.inner.delivery.lock();
            if delivery.delivering {
                trace!("subscriber {} queueing value behind a running delivery", self.inner.id);
                delivery.queue.push_back(value);
                return;
            }
            delivery.delivering = true;
        }

        let mut value = value;
        loop {
            self.inner.deliver(value);

            let mut delivery = self.inner.delivery.lock();
            if self.is_closed() {
                delivery.delivering = false;
                let discarded = mem::take(&mut delivery.queue);
                drop(delivery);
                drop(discarded);
                return;
            }
            match delivery.queue.pop_front() {
                Some(queued) => value = queued,
                None => {
                    delivery.delivering = false;
                    return;
                }
            }
        }
    }

    /// Delivers the terminal error notification, then runs the teardowns.
    pub fn error(&self, err: RippleError) {
        if self.inner.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        trace!("subscriber {} errored: {}", self.inner.id, err);
        let observer = self.inner.release_observer();
        if let Some(on_error) = observer.error {
            on_error(err);
        }
        self.inner.run_teardowns();
    }

    /// Delivers the terminal completion notification, then runs the teardowns.
    pub fn complete(&self) {
        if self.inner.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        trace!("subscriber {} completed", self.inner.id);
        let observer = self.inner.release_observer();
        if let Some(on_complete) = observer.complete {
            on_complete();
        }
        self.inner.run_teardowns();
    }

    /// Terminates without notifying the observer. Idempotent.
    pub fn unsubscribe(&self) {
        self.inner.unsubscribe();
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    /// Registers cleanup to run at termination.
    ///
    /// If the subscriber has already terminated the teardown runs immediately.
    pub fn add_teardown(&self, teardown: impl Into<Teardown>) {
        let teardown = teardown.into();
        if teardown.is_empty() {
            return;
        }
        {
            let mut teardowns = self.inner.teardowns.lock();
            if !self.is_closed() {
                teardowns.push(teardown);
                return;
            }
        }
        teardown.run();
    }

    /// A cancellation handle for this subscriber.
    #[must_use]
    pub fn subscription(&self) -> Subscription {
        Subscription::new(self.inner.clone())
    }
}

impl<T> SubscriberInner<T> {
    fn deliver(&self, value: T) {
        let next = self.observer.lock().next.take();
        let Some(mut next) = next else {
            return;
        };
        next(value);

        let mut observer = self.observer.lock();
        if !self.closed.load(Ordering::Acquire) && observer.next.is_none() {
            observer.next = Some(next);
        }
    }

    fn release_observer(&self) -> Observer<T> {
        let discarded = mem::take(&mut self.delivery.lock().queue);
        drop(discarded);
        mem::take(&mut *self.observer.lock())
    }

    fn run_teardowns(&self) {
        let teardowns = mem::take(&mut *self.teardowns.lock());
        if !teardowns.is_empty() {
            trace!("subscriber {} running {} teardown(s)", self.id, teardowns.len());
        }
        for teardown in teardowns {
            teardown.run();
        }
    }
}

impl<T: Send + 'static> Unsubscribable for SubscriberInner<T> {
    fn unsubscribe(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        trace!("subscriber {} unsubscribed", self.id);
        drop(self.release_observer());
        self.run_teardowns();
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

impl<T> Clone for Subscriber<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Subscriber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber")
            .field("id", &self.inner.id)
            .field("closed", &self.inner.closed.load(Ordering::Acquire))
            .finish()
    }
}
