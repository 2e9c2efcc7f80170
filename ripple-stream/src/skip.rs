// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::util::relay;
use ripple_core::{Stream, Subscriber};

/// Drops the first `count` values and forwards everything after them.
pub fn skip<T>(count: usize) -> impl FnOnce(Stream<T>) -> Stream<T> + Send + Sync
where
    T: Send + 'static,
{
    move |source: Stream<T>| {
        Stream::new(move |downstream: Subscriber<T>| {
            let target = downstream.clone();
            let mut skipped = 0usize;
            let observer = relay(&downstream, move |value: T| {
                if skipped < count {
                    skipped += 1;
                } else {
                    target.next(value);
                }
            });
            source.subscribe_upstream(&downstream, observer);
        })
    }
}
