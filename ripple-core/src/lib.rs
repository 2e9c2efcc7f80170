// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types of the ripple push-based stream library.
//!
//! - [`Stream`]: an immutable handle around a producer; every subscription runs it anew.
//! - [`Subscriber`]: the per-subscription termination guard.
//! - [`Subscription`]: the idempotent cancellation handle.
//! - [`Observer`]: the consumer record of optional `next`/`error`/`complete` callbacks.
//! - [`Teardown`]: cleanup a producer hands back, run exactly once at termination.
//! - [`Subject`]: a hot source pushed into imperatively.
//!
//! Operators live in `ripple-stream` and `ripple-stream-time`; they are plain
//! functions from one [`Stream`] to another, composed with [`Stream::pipe`] or
//! [`pipe!`].

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
pub mod logging;
pub mod error;
pub mod observer;
pub mod stream;
pub mod stream_item;
pub mod subject;
pub mod subject_error;
pub mod subscriber;
pub mod subscription;
pub mod teardown;

pub use self::error::{IntoRippleError, Result, ResultExt, RippleError};
pub use self::observer::Observer;
pub use self::stream::{boxed, BoxedOperator, Operator, Stream};
pub use self::stream_item::StreamItem;
pub use self::subject::Subject;
pub use self::subject_error::SubjectError;
pub use self::subscriber::Subscriber;
pub use self::subscription::Subscription;
pub use self::teardown::Teardown;
