// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::{self, Debug};
use core::sync::atomic::{AtomicBool, Ordering};
use core::time::Duration;
use parking_lot::Mutex;
use ripple_core::trace;
use std::sync::Arc;

/// Callback run when a timer fires.
pub type TimerTask = Box<dyn FnOnce() + Send>;

/// Shared scheduler handle, as stored by operators.
pub type SchedulerRef = Arc<dyn Scheduler>;

/// Runs callbacks after a delay.
pub trait Scheduler: Send + Sync + Debug {
    /// Schedules `task` to run once after `delay`.
    fn schedule_after(&self, delay: Duration, task: TimerTask) -> TimerHandle;

    /// Cancels a scheduled task. A cancelled task never runs.
    fn cancel(&self, handle: &TimerHandle) {
        handle.cancel();
    }

    /// Time elapsed since the scheduler's origin.
    fn now(&self) -> Duration;
}

/// Cancellation handle for one scheduled task.
///
/// Clones share the same timer. `cancel` is idempotent.
#[derive(Clone)]
pub struct TimerHandle {
    inner: Arc<TimerState>,
}

struct TimerState {
    cancelled: AtomicBool,
    on_cancel: Mutex<Option<Box<dyn FnOnce() + Send>>>,
}

impl TimerHandle {
    /// A live handle. `on_cancel` releases the scheduler's resources for the task.
    pub fn new<F>(on_cancel: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            inner: Arc::new(TimerState {
                cancelled: AtomicBool::new(false),
                on_cancel: Mutex::new(Some(Box::new(on_cancel))),
            }),
        }
    }

    /// A handle for a timer that was never scheduled; it reports itself cancelled.
    #[must_use]
    pub fn inert() -> Self {
        Self {
            inner: Arc::new(TimerState {
                cancelled: AtomicBool::new(true),
                on_cancel: Mutex::new(None),
            }),
        }
    }

    pub fn cancel(&self) {
        if self.inner.cancelled.swap(true, Ordering::AcqRel) {
            return;
        }
        let on_cancel = self.inner.on_cancel.lock().take();
        if let Some(on_cancel) = on_cancel {
            trace!("timer cancelled before firing");
            on_cancel();
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Wraps `task` so that it does nothing once this handle is cancelled.
    pub(crate) fn guard(&self, task: TimerTask) -> TimerTask {
        let state = Arc::clone(&self.inner);
        Box::new(move || {
            if state.cancelled.load(Ordering::Acquire) {
                return;
            }
            // A fired timer has nothing left to release.
            state.on_cancel.lock().take();
            task();
        })
    }
}

impl Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
