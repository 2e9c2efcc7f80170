// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Unordered merging of several streams.
//!
//! Every input is subscribed independently when the merged stream is subscribed, and
//! each value is forwarded as soon as it arrives, with no fairness beyond arrival
//! order. The merged stream:
//!
//! - completes once **all** inputs have completed (immediately when there are none);
//! - errors as soon as any input errors, after which nothing more is forwarded and
//!   every other input is unsubscribed;
//! - unsubscribes every input that is still active when it is cancelled.

use ripple_core::{Observer, Stream, Subscriber, Teardown};
use std::iter;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Merges `streams` into one stream.
///
/// # Example
///
/// ```
/// use ripple_stream::{merge, of};
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// merge([of([1, 2]), of([10])]).subscribe(move |v: i32| sink.lock().unwrap().push(v));
///
/// assert_eq!(*seen.lock().unwrap(), vec![1, 2, 10]);
/// ```
pub fn merge<T, I>(streams: I) -> Stream<T>
where
    T: Send + 'static,
    I: IntoIterator<Item = Stream<T>>,
{
    let sources: Vec<Stream<T>> = streams.into_iter().collect();
    Stream::new(move |downstream: Subscriber<T>| {
        if sources.is_empty() {
            downstream.complete();
            return Teardown::empty();
        }

        let outstanding = Arc::new(AtomicUsize::new(sources.len()));
        for source in &sources {
            if downstream.is_closed() {
                break;
            }
            let on_next = downstream.clone();
            let on_error = downstream.clone();
            let on_complete = downstream.clone();
            let outstanding = Arc::clone(&outstanding);
            let observer = Observer::new()
                .on_next(move |value: T| on_next.next(value))
                .on_error(move |err| on_error.error(err))
                .on_complete(move || {
                    if outstanding.fetch_sub(1, Ordering::AcqRel) == 1 {
                        on_complete.complete();
                    }
                });
            source.subscribe_upstream(&downstream, observer);
        }
        Teardown::empty()
    })
}

/// Operator form of [`merge`]: merges the piped stream with `others`.
pub fn merge_with<T, I>(others: I) -> impl FnOnce(Stream<T>) -> Stream<T> + Send + Sync
where
    T: Send + 'static,
    I: IntoIterator<Item = Stream<T>>,
{
    let others: Vec<Stream<T>> = others.into_iter().collect();
    move |source: Stream<T>| merge(iter::once(source).chain(others))
}
