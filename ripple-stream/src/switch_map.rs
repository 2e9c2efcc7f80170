// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Projects each value to an inner stream, following only the most recent one.
//!
//! # Behavior
//!
//! - On each outer value the active inner subscription, if any, is unsubscribed
//!   *before* the new inner stream is subscribed, so nothing from a superseded inner
//!   stream reaches downstream afterwards.
//! - Inner values are forwarded as they arrive. An inner error is forwarded and ends
//!   the whole operator.
//! - Inner completion alone never completes the output while the outer stream can
//!   still produce values. The output completes when the outer stream has completed
//!   and no inner stream is active, whichever of the two happens last.
//! - An outer error is forwarded immediately and the active inner stream is dropped.
//! - Cancelling the output unsubscribes both the outer and the active inner stream.

use parking_lot::Mutex;
use ripple_core::{debug, Observer, Stream, Subscriber, Subscription, Teardown};
use std::sync::Arc;

#[derive(Default)]
struct SwitchState {
    active_inner: Option<Subscription>,
    // Bumped for every outer value; tags which inner stream is current.
    generation: u64,
    outer_completed: bool,
}

impl SwitchState {
    fn take_inner(state: &Mutex<SwitchState>) {
        let inner = state.lock().active_inner.take();
        if let Some(inner) = inner {
            inner.unsubscribe();
        }
    }
}

/// Maps each value to a stream and mirrors only the latest of them.
///
/// # Example
///
/// ```
/// use ripple_core::Stream;
/// use ripple_stream::{of, switch_map};
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// of(["a", "b"])
///     .pipe(switch_map(|query: &'static str| of([format!("{query}1"), format!("{query}2")])))
///     .subscribe(move |v: String| sink.lock().unwrap().push(v));
///
/// // Synchronous inner streams run to completion before the next outer value.
/// assert_eq!(*seen.lock().unwrap(), vec!["a1", "a2", "b1", "b2"]);
/// ```
pub fn switch_map<T, U, F>(project: F) -> impl FnOnce(Stream<T>) -> Stream<U> + Send + Sync
where
    T: Send + 'static,
    U: Send + 'static,
    F: Fn(T) -> Stream<U> + Send + Sync + 'static,
{
    move |source: Stream<T>| {
        let project = Arc::new(project);
        Stream::new(move |downstream: Subscriber<U>| {
            let state = Arc::new(Mutex::new(SwitchState::default()));
            {
                let state = Arc::clone(&state);
                downstream.add_teardown(Teardown::new(move || SwitchState::take_inner(&state)));
            }

            let on_next = {
                let state = Arc::clone(&state);
                let downstream = downstream.clone();
                let project = Arc::clone(&project);
                move |value: T| {
                    if downstream.is_closed() {
                        return;
                    }
                    let (previous, generation) = {
                        let mut guard = state.lock();
                        guard.generation += 1;
                        (guard.active_inner.take(), guard.generation)
                    };
                    if let Some(previous) = previous {
                        debug!("switch_map: superseding inner stream for generation {}", generation);
                        previous.unsubscribe();
                    }

                    let inner = Subscriber::new(inner_observer(
                        &downstream,
                        Arc::clone(&state),
                        generation,
                    ));
                    {
                        let mut guard = state.lock();
                        if guard.generation == generation {
                            guard.active_inner = Some(inner.subscription());
                        }
                    }
                    project(value).subscribe_subscriber(inner);
                }
            };

            let on_error = {
                let state = Arc::clone(&state);
                let downstream = downstream.clone();
                move |err| {
                    SwitchState::take_inner(&state);
                    downstream.error(err);
                }
            };

            let on_complete = {
                let state = Arc::clone(&state);
                let downstream = downstream.clone();
                move || {
                    let idle = {
                        let mut guard = state.lock();
                        guard.outer_completed = true;
                        guard.active_inner.is_none()
                    };
                    if idle {
                        downstream.complete();
                    }
                }
            };

            source.subscribe_upstream(
                &downstream,
                Observer::new()
                    .on_next(on_next)
                    .on_error(on_error)
                    .on_complete(on_complete),
            );
            Teardown::empty()
        })
    }
}

fn inner_observer<U: Send + 'static>(
    downstream: &Subscriber<U>,
    state: Arc<Mutex<SwitchState>>,
    generation: u64,
) -> Observer<U> {
    let on_next = downstream.clone();
    let on_error = downstream.clone();
    let on_complete = downstream.clone();
    Observer::new()
        .on_next(move |value: U| on_next.next(value))
        .on_error(move |err| on_error.error(err))
        .on_complete(move || {
            let finished = {
                let mut guard = state.lock();
                if guard.generation != generation {
                    false
                } else {
                    guard.active_inner = None;
                    guard.outer_completed
                }
            };
            if finished {
                on_complete.complete();
            }
        })
}
