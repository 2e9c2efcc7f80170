// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::timer::{Scheduler, TimerHandle, TimerTask};
use core::time::Duration;
use parking_lot::Mutex;
use ripple_core::{trace, warn};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tokio::time::Instant;

/// Scheduler backed by the Tokio runtime the caller is running on.
///
/// Each timer is a spawned task that sleeps for the delay and then runs the callback,
/// so the callback executes on a runtime worker. Cancelling aborts the task.
/// `now` reads Tokio's clock, which honours a paused test runtime.
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    origin: Instant,
}

impl TokioScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for TokioScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_after(&self, delay: Duration, task: TimerTask) -> TimerHandle {
        let Ok(runtime) = Handle::try_current() else {
            warn!("TokioScheduler used outside of a Tokio runtime; timer dropped");
            return TimerHandle::inert();
        };

        let abort: Arc<Mutex<Option<AbortHandle>>> = Arc::new(Mutex::new(None));
        let handle = TimerHandle::new({
            let abort = Arc::clone(&abort);
            move || {
                if let Some(abort) = abort.lock().take() {
                    abort.abort();
                }
            }
        });

        let task = handle.guard(task);
        let join = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        *abort.lock() = Some(join.abort_handle());
        trace!("tokio timer scheduled in {:?}", delay);
        handle
    }

    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
