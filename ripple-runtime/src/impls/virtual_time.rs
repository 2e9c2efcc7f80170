// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A manually advanced clock.
//!
//! Nothing fires until the test moves time forward with
//! [`advance_by`](VirtualTimeScheduler::advance_by) or
//! [`advance_to`](VirtualTimeScheduler::advance_to). Due timers fire in deadline order,
//! ties in the order they were scheduled, and the clock reads each timer's deadline
//! while its callback runs. Callbacks run without the clock locked, so a callback may
//! schedule or cancel further timers; any that come due within the same advance fire
//! before it returns.
//!
//! ```
//! use ripple_runtime::{Scheduler, VirtualTimeScheduler};
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let scheduler = VirtualTimeScheduler::new();
//! let fired = Arc::new(AtomicBool::new(false));
//! let flag = fired.clone();
//! scheduler.schedule_after(
//!     Duration::from_millis(50),
//!     Box::new(move || flag.store(true, Ordering::SeqCst)),
//! );
//!
//! scheduler.advance_by(Duration::from_millis(49));
//! assert!(!fired.load(Ordering::SeqCst));
//! scheduler.advance_by(Duration::from_millis(1));
//! assert!(fired.load(Ordering::SeqCst));
//! ```

use crate::timer::{Scheduler, TimerHandle, TimerTask};
use core::fmt;
use core::time::Duration;
use parking_lot::Mutex;
use ripple_core::trace;
use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

type TimerKey = (Duration, u64);

#[derive(Default)]
struct VirtualClock {
    now: Duration,
    sequence: u64,
    queue: BTreeMap<TimerKey, TimerTask>,
}

/// Deterministic scheduler for tests.
#[derive(Clone, Default)]
pub struct VirtualTimeScheduler {
    clock: Arc<Mutex<VirtualClock>>,
}

impl VirtualTimeScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `delta`, firing every timer that comes due.
    pub fn advance_by(&self, delta: Duration) {
        let target = self.clock.lock().now + delta;
        self.advance_to(target);
    }

    /// Moves the clock to `target`, firing every timer due at or before it.
    ///
    /// A target in the past fires nothing and leaves the clock where it is.
    pub fn advance_to(&self, target: Duration) {
        loop {
            let task = {
                let mut clock = self.clock.lock();
                match clock.queue.first_key_value() {
                    Some((&(deadline, _), _)) if deadline <= target => {
                        clock.now = clock.now.max(deadline);
                        clock.queue.pop_first().map(|(_, task)| task)
                    }
                    _ => None,
                }
            };
            match task {
                Some(task) => {
                    trace!("virtual timer fired at {:?}", self.now());
                    task();
                }
                None => break,
            }
        }
        let mut clock = self.clock.lock();
        clock.now = clock.now.max(target);
    }

    /// Fires every timer pending right now, advancing to the latest of their deadlines.
    ///
    /// Timers those callbacks schedule fire too if they come due by then.
    pub fn flush(&self) {
        let last = self
            .clock
            .lock()
            .queue
            .last_key_value()
            .map(|(&(deadline, _), _)| deadline);
        if let Some(last) = last {
            self.advance_to(last);
        }
    }

    /// Number of timers scheduled and not yet fired or cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.clock.lock().queue.len()
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.clock
            .lock()
            .queue
            .first_key_value()
            .map(|(&(deadline, _), _)| deadline)
    }
}

impl Scheduler for VirtualTimeScheduler {
    fn schedule_after(&self, delay: Duration, task: TimerTask) -> TimerHandle {
        let mut clock = self.clock.lock();
        let key = (clock.now + delay, clock.sequence);
        clock.sequence += 1;

        let weak: Weak<Mutex<VirtualClock>> = Arc::downgrade(&self.clock);
        let handle = TimerHandle::new(move || {
            if let Some(clock) = weak.upgrade() {
                // Dropped outside the lock: the task may own subscribers.
                let removed = clock.lock().queue.remove(&key);
                drop(removed);
            }
        });
        clock.queue.insert(key, handle.guard(task));
        trace!("virtual timer scheduled for {:?}", key.0);
        handle
    }

    fn now(&self) -> Duration {
        self.clock.lock().now
    }
}

impl fmt::Debug for VirtualTimeScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.clock.lock();
        f.debug_struct("VirtualTimeScheduler")
            .field("now", &clock.now)
            .field("pending", &clock.queue.len())
            .finish()
    }
}
