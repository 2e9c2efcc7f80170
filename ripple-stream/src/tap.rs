// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Side-effect operator for debugging pipelines.
//!
//! [`tap`] calls a function with a reference to each value and forwards the value
//! unchanged. Insert it anywhere in a pipeline to observe intermediate values:
//!
//! ```
//! use ripple_core::pipe;
//! use ripple_stream::{filter, map, of, tap};
//!
//! let processed = pipe!(
//!     of([5, 12, 42]),
//!     tap(|v: &i32| println!("before filter: {v}")),
//!     filter(|v: &i32| *v > 10),
//!     map(|v: i32| v * 2),
//! );
//! processed.subscribe(|v: i32| println!("final: {v}"));
//! ```

use crate::util::relay;
use ripple_core::{Stream, Subscriber};
use std::sync::Arc;

/// Invokes `effect` for every value without altering the stream.
pub fn tap<T, F>(effect: F) -> impl FnOnce(Stream<T>) -> Stream<T> + Send + Sync
where
    T: Send + 'static,
    F: Fn(&T) + Send + Sync + 'static,
{
    move |source: Stream<T>| {
        let effect = Arc::new(effect);
        Stream::new(move |downstream: Subscriber<T>| {
            let effect = Arc::clone(&effect);
            let target = downstream.clone();
            let observer = relay(&downstream, move |value: T| {
                effect(&value);
                target.next(value);
            });
            source.subscribe_upstream(&downstream, observer);
        })
    }
}
