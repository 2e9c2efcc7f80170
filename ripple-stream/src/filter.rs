// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::util::relay;
use ripple_core::{Stream, Subscriber};
use std::sync::Arc;

/// Forwards only the values for which `predicate` returns `true`.
pub fn filter<T, P>(predicate: P) -> impl FnOnce(Stream<T>) -> Stream<T> + Send + Sync
where
    T: Send + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    move |source: Stream<T>| {
        let predicate = Arc::new(predicate);
        Stream::new(move |downstream: Subscriber<T>| {
            let predicate = Arc::clone(&predicate);
            let target = downstream.clone();
            let observer = relay(&downstream, move |value: T| {
                if predicate(&value) {
                    target.next(value);
                }
            });
            source.subscribe_upstream(&downstream, observer);
        })
    }
}
