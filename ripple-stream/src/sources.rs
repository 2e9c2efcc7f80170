// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Creation functions for streams that need no timer.
//!
//! The synchronous sources deliver everything before `subscribe` returns and stop
//! early once their subscriber is closed, e.g. by a downstream [`take`](crate::take).

use ripple_core::{RippleError, Stream, Subscriber};
use std::sync::Arc;

/// Emits each of `values` in order, then completes. Every subscription sees a fresh
/// copy of the values.
pub fn of<T, I>(values: I) -> Stream<T>
where
    T: Clone + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
{
    let values: Arc<[T]> = values.into_iter().collect();
    Stream::new(move |subscriber: Subscriber<T>| {
        for value in values.iter() {
            if subscriber.is_closed() {
                return;
            }
            subscriber.next(value.clone());
        }
        subscriber.complete();
    })
}

/// Emits the items of a fresh clone of `iterable` on every subscription, then
/// completes.
///
/// Unlike [`of`], the items are produced lazily, so an endless iterator is fine as
/// long as something downstream closes the subscription.
pub fn from_iter<I>(iterable: I) -> Stream<I::Item>
where
    I: IntoIterator + Clone + Send + Sync + 'static,
    I::Item: Send + 'static,
{
    Stream::new(move |subscriber: Subscriber<I::Item>| {
        for value in iterable.clone() {
            if subscriber.is_closed() {
                return;
            }
            subscriber.next(value);
        }
        subscriber.complete();
    })
}

/// Completes immediately without emitting.
pub fn empty<T: Send + 'static>() -> Stream<T> {
    Stream::new(|subscriber: Subscriber<T>| subscriber.complete())
}

/// Never emits and never terminates.
pub fn never<T: Send + 'static>() -> Stream<T> {
    Stream::new(|_subscriber: Subscriber<T>| {})
}

/// Errors immediately with a clone of `err`.
pub fn throw_error<T: Send + 'static>(err: RippleError) -> Stream<T> {
    Stream::new(move |subscriber: Subscriber<T>| subscriber.error(err.clone()))
}
