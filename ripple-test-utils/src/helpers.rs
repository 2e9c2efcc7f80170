// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test sources with observable side effects.

use parking_lot::Mutex;
use ripple_core::{RippleError, Stream, Subscriber, Teardown};
use ripple_runtime::{Scheduler, TimerHandle, VirtualTimeScheduler};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// One step of a [`scheduled`] source, relative to the moment of subscription.
#[derive(Debug, Clone)]
pub enum Event<T> {
    Next(u64, T),
    Error(u64, String),
    Complete(u64),
}

impl<T> Event<T> {
    fn at(&self) -> Duration {
        let millis = match self {
            Self::Next(at, _) | Self::Error(at, _) | Self::Complete(at) => *at,
        };
        Duration::from_millis(millis)
    }
}

/// A source that replays `events` on `scheduler`, each at its offset in milliseconds.
///
/// Unsubscribing cancels every event that has not fired yet.
pub fn scheduled<T>(scheduler: &VirtualTimeScheduler, events: Vec<Event<T>>) -> Stream<T>
where
    T: Clone + Send + Sync + 'static,
{
    let scheduler = scheduler.clone();
    let events: Arc<[Event<T>]> = events.into();
    Stream::new(move |subscriber: Subscriber<T>| {
        let handles: Vec<TimerHandle> = events
            .iter()
            .map(|event| {
                let target = subscriber.clone();
                let event = event.clone();
                scheduler.schedule_after(
                    event.at(),
                    Box::new(move || match event {
                        Event::Next(_, value) => target.next(value),
                        Event::Error(_, message) => {
                            target.error(RippleError::stream_error(message));
                        }
                        Event::Complete(_) => target.complete(),
                    }),
                )
            })
            .collect();
        Teardown::new(move || {
            for handle in handles {
                handle.cancel();
            }
        })
    })
}

/// Emits `values`, then errors with a stream error carrying `message`.
pub fn values_then_error<T>(values: Vec<T>, message: &str) -> Stream<T>
where
    T: Clone + Send + Sync + 'static,
{
    let message = message.to_string();
    Stream::new(move |subscriber: Subscriber<T>| {
        for value in &values {
            subscriber.next(value.clone());
        }
        subscriber.error(RippleError::stream_error(message.clone()));
    })
}

/// Counts subscriptions to, and teardowns of, the streams it wraps.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionTracker {
    subscribed: Arc<AtomicUsize>,
    torn_down: Arc<AtomicUsize>,
}

impl SubscriptionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `stream`, counting each subscription and each teardown.
    pub fn wrap<T: Send + 'static>(&self, stream: Stream<T>) -> Stream<T> {
        let subscribed = Arc::clone(&self.subscribed);
        let torn_down = Arc::clone(&self.torn_down);
        Stream::new(move |subscriber: Subscriber<T>| {
            subscribed.fetch_add(1, Ordering::SeqCst);
            let torn_down = Arc::clone(&torn_down);
            subscriber.add_teardown(Teardown::new(move || {
                torn_down.fetch_add(1, Ordering::SeqCst);
            }));
            stream.subscribe_subscriber(subscriber);
        })
    }

    #[must_use]
    pub fn subscribed(&self) -> usize {
        self.subscribed.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn torn_down(&self) -> usize {
        self.torn_down.load(Ordering::SeqCst)
    }

    /// Subscriptions that have not been torn down.
    #[must_use]
    pub fn active(&self) -> usize {
        self.subscribed() - self.torn_down()
    }
}

/// A shared, appendable log, handy for checking the order of side effects.
#[derive(Debug)]
pub struct EventLog<T> {
    entries: Arc<Mutex<Vec<T>>>,
}

impl<T: Clone> EventLog<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push(&self, entry: T) {
        self.entries.lock().push(entry);
    }

    #[must_use]
    pub fn entries(&self) -> Vec<T> {
        self.entries.lock().clone()
    }
}

impl<T> Clone for EventLog<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}
