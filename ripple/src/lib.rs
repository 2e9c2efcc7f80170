// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Ripple
//!
//! A push-based reactive stream library: sources push values to subscribers through
//! composable operators, and every subscription can be cancelled at any point.
//!
//! ## Overview
//!
//! - [`Stream`]: a lazy producer; each `subscribe` starts an independent execution.
//! - [`Subscription`]: the cancellation handle. Unsubscribing cancels every upstream
//!   subscription and pending timer the chain created.
//! - Operators: factories such as `map`, `filter`, `take`, `skip`, `merge`,
//!   `switch_map`, `catch_error` and `debounce_time`, composed with
//!   [`Stream::pipe`] or the [`pipe!`] macro.
//! - [`Subject`]: a hot source to push into imperatively.
//! - [`IntoAsyncStreamExt`]: consume a stream as a `futures::Stream`.
//!
//! ## Quick Start
//!
//! ```rust
//! use ripple_rx::prelude::*;
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//!
//! let scheduler = VirtualTimeScheduler::new();
//! let keystrokes = Subject::<&'static str>::new();
//! let queries = Arc::new(Mutex::new(Vec::new()));
//! let sink = queries.clone();
//!
//! pipe!(
//!     keystrokes.as_stream(),
//!     debounce_time(Duration::from_millis(300), scheduler.clone()),
//!     map(|query: &'static str| query.to_uppercase()),
//! )
//! .subscribe(move |query: String| sink.lock().unwrap().push(query));
//!
//! keystrokes.next("r").unwrap();
//! keystrokes.next("ru").unwrap();
//! keystrokes.next("rust").unwrap();
//! scheduler.advance_by(Duration::from_millis(300));
//!
//! assert_eq!(*queries.lock().unwrap(), vec!["RUST"]);
//! ```
//!
//! ## Features
//!
//! - `runtime-tokio` (default): `TokioScheduler` and `debounce_time_default`
//! - `tracing`: log through `tracing` instead of stderr

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod async_stream;

pub use async_stream::{AsyncStream, IntoAsyncStreamExt};

pub use ripple_core::{
    pipe, Observer, Operator, RippleError, Stream, StreamItem, Subject, SubjectError,
    Subscriber, Subscription, Teardown,
};
pub use ripple_runtime::{Scheduler, SchedulerRef, TimerHandle, VirtualTimeScheduler};

#[cfg(feature = "runtime-tokio")]
pub use ripple_runtime::TokioScheduler;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::async_stream::IntoAsyncStreamExt;
    pub use ripple_core::StreamItem;
    pub use ripple_stream::prelude::*;
    pub use ripple_stream_time::prelude::*;
}
