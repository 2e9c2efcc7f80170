// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sources driven by a [`Scheduler`].
//!
//! Each subscription owns its own timer. Unsubscribing cancels whichever timer is
//! pending, so nothing fires for a closed subscriber.

use parking_lot::Mutex;
use ripple_core::{Stream, Subscriber, Teardown};
use ripple_runtime::{Scheduler, SchedulerRef, TimerHandle};
use std::sync::Arc;
use std::time::Duration;

type TimerSlot = Arc<Mutex<Option<TimerHandle>>>;

/// Emits `0, 1, 2, ...`, one value every `period`. Never completes.
///
/// # Example
///
/// ```
/// use ripple_runtime::VirtualTimeScheduler;
/// use ripple_stream_time::interval;
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// let scheduler = VirtualTimeScheduler::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// let ticks = interval(Duration::from_millis(10), scheduler.clone())
///     .subscribe(move |n: u64| sink.lock().unwrap().push(n));
///
/// scheduler.advance_by(Duration::from_millis(35));
/// ticks.unsubscribe();
/// scheduler.advance_by(Duration::from_millis(100));
///
/// assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
/// ```
pub fn interval<S>(period: Duration, scheduler: S) -> Stream<u64>
where
    S: Scheduler + 'static,
{
    let scheduler: SchedulerRef = Arc::new(scheduler);
    Stream::new(move |subscriber: Subscriber<u64>| {
        let slot: TimerSlot = Arc::new(Mutex::new(None));
        schedule_tick(Arc::clone(&scheduler), period, subscriber, Arc::clone(&slot), 0);
        Teardown::new(move || cancel_slot(&slot))
    })
}

/// Emits `0` once after `delay`, then completes.
pub fn timer<S>(delay: Duration, scheduler: S) -> Stream<u64>
where
    S: Scheduler + 'static,
{
    let scheduler: SchedulerRef = Arc::new(scheduler);
    Stream::new(move |subscriber: Subscriber<u64>| {
        let handle = scheduler.schedule_after(
            delay,
            Box::new(move || {
                subscriber.next(0);
                subscriber.complete();
            }),
        );
        Teardown::new(move || handle.cancel())
    })
}

fn schedule_tick(
    scheduler: SchedulerRef,
    period: Duration,
    subscriber: Subscriber<u64>,
    slot: TimerSlot,
    count: u64,
) {
    if subscriber.is_closed() {
        return;
    }
    let next_scheduler = Arc::clone(&scheduler);
    let next_slot = Arc::clone(&slot);
    let handle = scheduler.schedule_after(
        period,
        Box::new(move || {
            subscriber.next(count);
            schedule_tick(next_scheduler, period, subscriber, next_slot, count.wrapping_add(1));
        }),
    );
    *slot.lock() = Some(handle);
}

fn cancel_slot(slot: &TimerSlot) {
    let handle = slot.lock().take();
    if let Some(handle) = handle {
        handle.cancel();
    }
}
