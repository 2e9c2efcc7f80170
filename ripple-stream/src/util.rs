// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::{Observer, Subscriber};

/// Observer that forwards `error` and `complete` to `downstream` unchanged and hands
/// each value to `on_next`.
pub(crate) fn relay<T, U, F>(downstream: &Subscriber<U>, on_next: F) -> Observer<T>
where
    T: Send + 'static,
    U: Send + 'static,
    F: FnMut(T) + Send + 'static,
{
    let on_error = downstream.clone();
    let on_complete = downstream.clone();
    Observer::new()
        .on_next(on_next)
        .on_error(move |err| on_error.error(err))
        .on_complete(move || on_complete.complete())
}
