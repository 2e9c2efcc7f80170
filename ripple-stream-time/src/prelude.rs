// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based operators and sources: `use ripple_stream_time::prelude::*;`

pub use crate::{debounce_time, debounce_time_with, interval, timer};

#[cfg(feature = "runtime-tokio")]
pub use crate::debounce_time_default;

pub use ripple_runtime::{Scheduler, SchedulerRef, TimerHandle, VirtualTimeScheduler};

#[cfg(feature = "runtime-tokio")]
pub use ripple_runtime::TokioScheduler;
