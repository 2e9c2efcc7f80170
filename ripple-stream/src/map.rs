// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::util::relay;
use ripple_core::{Stream, Subscriber};
use std::sync::Arc;

/// Forwards `transform(value)` for every value; errors and completion pass through.
///
/// # Example
///
/// ```
/// use ripple_stream::{map, of};
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// of([1, 2, 3])
///     .pipe(map(|n: i32| n * 2))
///     .subscribe(move |n: i32| sink.lock().unwrap().push(n));
///
/// assert_eq!(*seen.lock().unwrap(), vec![2, 4, 6]);
/// ```
pub fn map<T, U, F>(transform: F) -> impl FnOnce(Stream<T>) -> Stream<U> + Send + Sync
where
    T: Send + 'static,
    U: Send + 'static,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    move |source: Stream<T>| {
        let transform = Arc::new(transform);
        Stream::new(move |downstream: Subscriber<U>| {
            let transform = Arc::clone(&transform);
            let target = downstream.clone();
            let observer = relay(&downstream, move |value: T| {
                target.next(transform(value));
            });
            source.subscribe_upstream(&downstream, observer);
        })
    }
}
