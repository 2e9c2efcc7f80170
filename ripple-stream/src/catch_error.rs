// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::{warn, Observer, RippleError, Stream, Subscriber};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Replaces a failed source with the stream returned by `handler`.
///
/// Values and completion pass through. On the first upstream error, `handler` receives
/// the error and the original source stream and returns a replacement, which is
/// subscribed with the **same downstream subscriber**: further notifications come from
/// the replacement, and an error from it reaches downstream. Returning the source
/// stream itself retries it once; a producer with side effects will run them again.
///
/// A handler returning `Err`, or panicking, turns into a downstream `error`.
///
/// # Example
///
/// ```
/// use ripple_core::{RippleError, Stream};
/// use ripple_stream::{catch_error, of};
/// use std::sync::{Arc, Mutex};
///
/// let flaky = Stream::new(|subscriber| {
///     subscriber.next(1);
///     subscriber.error(RippleError::stream_error("Oops!"));
/// });
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// flaky
///     .pipe(catch_error(|_err, _caught| Ok(of([0]))))
///     .subscribe(move |v: i32| sink.lock().unwrap().push(v));
///
/// assert_eq!(*seen.lock().unwrap(), vec![1, 0]);
/// ```
pub fn catch_error<T, F>(handler: F) -> impl FnOnce(Stream<T>) -> Stream<T> + Send + Sync
where
    T: Send + 'static,
    F: Fn(RippleError, Stream<T>) -> Result<Stream<T>, RippleError> + Send + Sync + 'static,
{
    move |source: Stream<T>| {
        let handler = Arc::new(handler);
        Stream::new(move |downstream: Subscriber<T>| {
            let on_next = downstream.clone();
            let on_complete = downstream.clone();
            let handler = Arc::clone(&handler);
            let caught = source.clone();
            let target = downstream.clone();
            source.subscribe_upstream(
                &downstream,
                Observer::new()
                    .on_next(move |value: T| on_next.next(value))
                    .on_error(move |err| recover(&*handler, err, caught, target))
                    .on_complete(move || on_complete.complete()),
            );
        })
    }
}

fn recover<T, F>(handler: &F, err: RippleError, caught: Stream<T>, downstream: Subscriber<T>)
where
    T: Send + 'static,
    F: Fn(RippleError, Stream<T>) -> Result<Stream<T>, RippleError>,
{
    match panic::catch_unwind(AssertUnwindSafe(|| handler(err, caught))) {
        Ok(Ok(replacement)) => {
            replacement.subscribe_subscriber(downstream);
        }
        Ok(Err(failure)) => {
            warn!("catch_error: handler failed: {}", failure);
            downstream.error(failure);
        }
        Err(payload) => {
            let failure = RippleError::from_panic(&*payload);
            warn!("catch_error: handler panicked: {}", failure);
            downstream.error(failure);
        }
    }
}
