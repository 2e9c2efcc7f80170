// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The push-based stream primitive and its composition contract.
//!
//! A [`Stream`] wraps a *producer*: a function that receives a [`Subscriber`] and pushes
//! notifications into it, optionally returning a [`Teardown`]. The stream itself holds no
//! state between subscriptions; every [`subscribe`](Stream::subscribe) runs the producer
//! anew, yielding an independent execution.
//!
//! # Example
//!
//! ```
//! use ripple_core::Stream;
//! use std::sync::{Arc, Mutex};
//!
//! let numbers = Stream::new(|subscriber| {
//!     subscriber.next(1);
//!     subscriber.next(2);
//!     subscriber.complete();
//! });
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//! numbers.subscribe(move |v: i32| sink.lock().unwrap().push(v));
//!
//! // Synchronous emissions are delivered before `subscribe` returns.
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
//! ```

use crate::observer::Observer;
use crate::subscriber::Subscriber;
use crate::subscription::Subscription;
use crate::teardown::Teardown;
use core::fmt;
use std::sync::Arc;

type Producer<T> = dyn Fn(Subscriber<T>) -> Teardown + Send + Sync;

/// Immutable handle around a producer function.
pub struct Stream<T> {
    producer: Arc<Producer<T>>,
}

impl<T: Send + 'static> Stream<T> {
    /// Creates a stream from a producer.
    ///
    /// The producer may return `()`, a [`Teardown`], or a [`Subscription`] to cancel
    /// when the subscriber terminates.
    pub fn new<F, R>(producer: F) -> Self
    where
        F: Fn(Subscriber<T>) -> R + Send + Sync + 'static,
        R: Into<Teardown>,
    {
        Self {
            producer: Arc::new(move |subscriber: Subscriber<T>| -> Teardown {
                producer(subscriber).into()
            }),
        }
    }

    /// Subscribes a consumer and returns its cancellation handle.
    ///
    /// Values the producer emits synchronously reach the consumer before this returns.
    pub fn subscribe(&self, observer: impl Into<Observer<T>>) -> Subscription {
        self.subscribe_subscriber(Subscriber::new(observer))
    }

    /// Drives an existing subscriber with a fresh execution of the producer.
    ///
    /// The producer's teardown is registered on `subscriber`; if the subscriber
    /// terminated while the producer was running, the teardown runs right away.
    pub fn subscribe_subscriber(&self, subscriber: Subscriber<T>) -> Subscription {
        let subscription = subscriber.subscription();
        if subscriber.is_closed() {
            return subscription;
        }
        trace!("subscribing {:?}", subscriber);
        let teardown = (self.producer)(subscriber.clone());
        subscriber.add_teardown(teardown);
        subscription
    }

    /// Subscribes `observer` on behalf of an operator's `downstream` subscriber.
    ///
    /// The new upstream subscription is linked to `downstream` *before* the producer
    /// runs, so terminating `downstream` cancels it even while a synchronous producer
    /// is still emitting. This is how cancellation reaches an endless synchronous
    /// source through a chain of operators.
    pub fn subscribe_upstream<D>(
        &self,
        downstream: &Subscriber<D>,
        observer: impl Into<Observer<T>>,
    ) -> Subscription
    where
        D: Send + 'static,
    {
        let upstream = Subscriber::new(observer);
        downstream.add_teardown(upstream.subscription());
        self.subscribe_subscriber(upstream)
    }

    /// Subscribes an observer built with access to its own subscription.
    ///
    /// Lets an operator cancel its upstream from inside a notification that arrives
    /// before `subscribe` has returned. The handle is released together with the
    /// observer when the subscription terminates.
    pub fn subscribe_with<F>(&self, build: F) -> Subscription
    where
        F: FnOnce(Subscription) -> Observer<T>,
    {
        let subscriber = Subscriber::new(Observer::new());
        subscriber.install(build(subscriber.subscription()));
        self.subscribe_subscriber(subscriber)
    }

    /// Applies one operator.
    pub fn pipe<U, O>(self, operator: O) -> Stream<U>
    where
        U: Send + 'static,
        O: Operator<T, U>,
    {
        operator.apply(self)
    }

    /// Folds a runtime list of same-typed operators left to right.
    ///
    /// An empty list returns the stream unchanged.
    pub fn pipe_all<I>(self, operators: I) -> Stream<T>
    where
        I: IntoIterator<Item = BoxedOperator<T, T>>,
    {
        operators
            .into_iter()
            .fold(self, |stream, operator| operator(stream))
    }
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self {
            producer: Arc::clone(&self.producer),
        }
    }
}

impl<T> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream").finish_non_exhaustive()
    }
}

/// A transform from one stream to another, possibly of a different element type.
///
/// Every `FnOnce(Stream<T>) -> Stream<U>` is an operator.
pub trait Operator<T, U> {
    fn apply(self, source: Stream<T>) -> Stream<U>;
}

impl<T, U, F> Operator<T, U> for F
where
    F: FnOnce(Stream<T>) -> Stream<U>,
{
    fn apply(self, source: Stream<T>) -> Stream<U> {
        self(source)
    }
}

/// Type-erased operator, for composing a list chosen at runtime.
pub type BoxedOperator<T, U> = Box<dyn FnOnce(Stream<T>) -> Stream<U> + Send>;

/// Boxes an operator so it can be stored next to others of the same shape.
pub fn boxed<T, U, O>(operator: O) -> BoxedOperator<T, U>
where
    O: FnOnce(Stream<T>) -> Stream<U> + Send + 'static,
{
    Box::new(operator)
}

/// Composes operators left to right: `pipe!(s, a, b)` is `b(a(s))`.
///
/// `pipe!(s)` is `s` unchanged.
///
/// ```
/// use ripple_core::{pipe, Stream};
///
/// let source = Stream::new(|s| {
///     s.next(1);
///     s.complete();
/// });
/// let same: Stream<i32> = pipe!(source);
/// let again = pipe!(same, |s: Stream<i32>| s);
/// # let _ = again;
/// ```
#[macro_export]
macro_rules! pipe {
    ($source:expr $(,)?) => {
        $source
    };
    ($source:expr, $($operator:expr),+ $(,)?) => {{
        let stream = $source;
        $(let stream = stream.pipe($operator);)+
        stream
    }};
}
