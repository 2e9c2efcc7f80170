// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use ripple_core::{debug, trace, Observer, Stream, Subscriber, Teardown};
use ripple_runtime::{Scheduler, SchedulerRef, TimerHandle};
use std::sync::Arc;
use std::time::Duration;

struct DebounceState<T> {
    pending: Option<T>,
    timer: Option<TimerHandle>,
    // Bumped per value; a fired timer only emits if it still matches.
    generation: u64,
}

impl<T> DebounceState<T> {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

/// Emits a value only after `duration` has passed without another value arriving.
///
/// This implements **trailing debounce** semantics:
/// - When a value arrives, it becomes the pending value and the timer is restarted
/// - When the timer fires, the pending value (if still there) is emitted
/// - When the source completes, the pending value is flushed right before `complete`
/// - An error is forwarded immediately and the pending value is discarded
///
/// Cancelling the output cancels the pending timer and unsubscribes the source.
///
/// # Example
///
/// ```
/// use ripple_core::Subject;
/// use ripple_runtime::VirtualTimeScheduler;
/// use ripple_stream_time::debounce_time;
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// let scheduler = VirtualTimeScheduler::new();
/// let input = Subject::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// input
///     .as_stream()
///     .pipe(debounce_time(Duration::from_millis(50), scheduler.clone()))
///     .subscribe(move |v: &'static str| sink.lock().unwrap().push(v));
///
/// input.next("x").unwrap();
/// scheduler.advance_by(Duration::from_millis(10));
/// input.next("y").unwrap();
/// scheduler.advance_by(Duration::from_millis(100));
///
/// assert_eq!(*seen.lock().unwrap(), vec!["y"]);
/// ```
pub fn debounce_time<T, S>(
    duration: Duration,
    scheduler: S,
) -> impl FnOnce(Stream<T>) -> Stream<T> + Send + Sync
where
    T: Send + 'static,
    S: Scheduler + 'static,
{
    debounce_time_with(duration, Arc::new(scheduler))
}

/// [`debounce_time`] with an already shared scheduler.
pub fn debounce_time_with<T>(
    duration: Duration,
    scheduler: SchedulerRef,
) -> impl FnOnce(Stream<T>) -> Stream<T> + Send + Sync
where
    T: Send + 'static,
{
    move |source: Stream<T>| {
        Stream::new(move |downstream: Subscriber<T>| {
            let state = Arc::new(Mutex::new(DebounceState {
                pending: None,
                timer: None,
                generation: 0,
            }));
            {
                let state = Arc::clone(&state);
                downstream.add_teardown(Teardown::new(move || {
                    let mut guard = state.lock();
                    guard.cancel_timer();
                    guard.pending = None;
                }));
            }

            let on_next = {
                let state = Arc::clone(&state);
                let downstream = downstream.clone();
                let scheduler = Arc::clone(&scheduler);
                move |value: T| {
                    let mut guard = state.lock();
                    guard.cancel_timer();
                    guard.generation += 1;
                    guard.pending = Some(value);

                    let fire = {
                        let state = Arc::clone(&state);
                        let downstream = downstream.clone();
                        let generation = guard.generation;
                        move || {
                            let value = {
                                let mut guard = state.lock();
                                if guard.generation != generation {
                                    trace!("debounce_time: ignoring superseded timer");
                                    return;
                                }
                                guard.timer = None;
                                guard.pending.take()
                            };
                            if let Some(value) = value {
                                downstream.next(value);
                            }
                        }
                    };
                    guard.timer = Some(scheduler.schedule_after(duration, Box::new(fire)));
                }
            };

            let on_error = {
                let state = Arc::clone(&state);
                let downstream = downstream.clone();
                move |err| {
                    {
                        let mut guard = state.lock();
                        guard.cancel_timer();
                        guard.pending = None;
                    }
                    downstream.error(err);
                }
            };

            let on_complete = {
                let state = Arc::clone(&state);
                let downstream = downstream.clone();
                move || {
                    let pending = {
                        let mut guard = state.lock();
                        guard.cancel_timer();
                        guard.pending.take()
                    };
                    if let Some(value) = pending {
                        debug!("debounce_time: flushing pending value on completion");
                        downstream.next(value);
                    }
                    downstream.complete();
                }
            };

            source.subscribe_upstream(
                &downstream,
                Observer::new()
                    .on_next(on_next)
                    .on_error(on_error)
                    .on_complete(on_complete),
            );
        })
    }
}

/// [`debounce_time`] on the current Tokio runtime.
#[cfg(feature = "runtime-tokio")]
pub fn debounce_time_default<T>(
    duration: Duration,
) -> impl FnOnce(Stream<T>) -> Stream<T> + Send + Sync
where
    T: Send + 'static,
{
    debounce_time(duration, ripple_runtime::TokioScheduler::new())
}
