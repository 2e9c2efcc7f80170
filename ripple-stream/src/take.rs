// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::util::relay;
use ripple_core::{Stream, Subscriber, Teardown};

/// Forwards the first `count` values, then completes and unsubscribes upstream.
///
/// Completion follows the `count`-th value immediately, without waiting for another
/// upstream emission. `take(0)` completes on subscription without subscribing
/// upstream at all. A shorter source forwards all of its values and its own
/// completion.
///
/// # Example
///
/// ```
/// use ripple_stream::{of, take};
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// of([1, 2, 3, 4, 5])
///     .pipe(take(3))
///     .subscribe(move |v: i32| sink.lock().unwrap().push(v));
///
/// assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
/// ```
pub fn take<T>(count: usize) -> impl FnOnce(Stream<T>) -> Stream<T> + Send + Sync
where
    T: Send + 'static,
{
    move |source: Stream<T>| {
        Stream::new(move |downstream: Subscriber<T>| {
            if count == 0 {
                downstream.complete();
                return Teardown::empty();
            }
            source.subscribe_with(|upstream| {
                downstream.add_teardown(upstream.clone());
                let target = downstream.clone();
                let mut taken = 0usize;
                relay(&downstream, move |value: T| {
                    taken += 1;
                    target.next(value);
                    if taken == count {
                        target.complete();
                        upstream.unsubscribe();
                    }
                })
            });
            Teardown::empty()
        })
    }
}
