// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timer collaborator for ripple's time-based producers and operators.
//!
//! The core never sleeps; it asks a [`Scheduler`] to run a callback after a delay and
//! keeps the returned [`TimerHandle`] to cancel it. Two schedulers ship here:
//!
//! - [`VirtualTimeScheduler`]: a manually advanced clock for deterministic tests.
//! - `TokioScheduler` (feature `runtime-tokio`): spawns a sleeping task on the current
//!   Tokio runtime.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod impls;
pub mod timer;

pub use impls::virtual_time::VirtualTimeScheduler;
#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::TokioScheduler;
pub use timer::{Scheduler, SchedulerRef, TimerHandle, TimerTask};
