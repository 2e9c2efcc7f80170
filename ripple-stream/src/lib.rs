// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operators for ripple streams.
//!
//! Every operator is a factory returning a transform `FnOnce(Stream<T>) -> Stream<U>`,
//! applied with [`Stream::pipe`](ripple_core::Stream::pipe) or folded with
//! [`pipe!`](ripple_core::pipe). Subscribing the resulting stream subscribes the
//! source; values flow from the innermost producer through each operator to the
//! consumer, and unsubscribing the outer handle cancels every upstream subscription
//! the chain created.
//!
//! ## Operator Categories
//!
//! | Operator | Behavior |
//! |----------|----------|
//! | [`map`] | Transforms each value |
//! | [`filter`] | Forwards values passing a predicate |
//! | [`take`] | First `n` values, then completes and unsubscribes upstream |
//! | [`skip`] | Drops the first `n` values |
//! | [`tap`] | Side effect per value |
//! | [`merge`] / [`merge_with`] | Interleaves several streams; completes when all do |
//! | [`switch_map`] | Follows only the latest projected inner stream |
//! | [`catch_error`] | Splices in a replacement stream on error |
//!
//! Time-based operators (`debounce_time`, `interval`, `timer`) live in
//! `ripple-stream-time`.
//!
//! ## Errors
//!
//! All operators except [`catch_error`] forward upstream errors unchanged. User
//! callbacks are not guarded: a panic in a `map` transform propagates out of the
//! notification call.
//!
//! ```
//! use ripple_core::pipe;
//! use ripple_stream::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//! let numbers = pipe!(
//!     from_iter(1..),
//!     skip(2),
//!     filter(|n: &u32| n % 2 == 1),
//!     map(|n: u32| n * 10),
//!     take(3),
//! );
//! numbers.subscribe(move |n: u32| sink.lock().unwrap().push(n));
//!
//! assert_eq!(*seen.lock().unwrap(), vec![30, 50, 70]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod catch_error;
pub mod filter;
pub mod map;
pub mod merge;
pub mod prelude;
pub mod skip;
pub mod sources;
pub mod switch_map;
pub mod take;
pub mod tap;
mod util;

pub use catch_error::catch_error;
pub use filter::filter;
pub use map::map;
pub use merge::{merge, merge_with};
pub use skip::skip;
pub use sources::{empty, from_iter, never, of, throw_error};
pub use switch_map::switch_map;
pub use take::take;
pub use tap::tap;
