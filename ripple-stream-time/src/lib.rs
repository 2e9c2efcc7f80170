// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based operators and sources for ripple streams.
//!
//! Nothing in here sleeps. Every timed action goes through a
//! [`Scheduler`](ripple_runtime::Scheduler), and every pending timer is cancelled when
//! the subscription that owns it terminates.
//!
//! # Overview
//!
//! - **[`debounce_time`]** - emit the latest value after a quiet period
//! - **[`interval`]** - emit `0, 1, 2, ...` every period
//! - **[`timer`]** - emit `0` once after a delay, then complete
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - adds [`debounce_time_default`], scheduling on the
//!   current Tokio runtime
//!
//! Tests drive the same operators deterministically with
//! [`VirtualTimeScheduler`](ripple_runtime::VirtualTimeScheduler).

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
mod debounce;
mod sources;

pub mod prelude;

pub use debounce::{debounce_time, debounce_time_with};
pub use sources::{interval, timer};

#[cfg(feature = "runtime-tokio")]
pub use debounce::debounce_time_default;
