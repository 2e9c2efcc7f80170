// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the ripple reactive stream library.
//!
//! This crate provides helper types, test data structures, and test sources for
//! exercising streams and operators. It is designed for use in development and
//! testing only, not for production code.
//!
//! # Key Types
//!
//! ## `Recorder<T>`
//!
//! Captures every notification of a subscription, in order:
//!
//! ```rust
//! use ripple_core::Stream;
//! use ripple_test_utils::Recorder;
//!
//! let recorder = Recorder::<&str>::new();
//! Stream::new(|s| {
//!     s.next("a");
//!     s.complete();
//! })
//! .subscribe(recorder.observer());
//!
//! assert_eq!(recorder.values(), vec!["a"]);
//! assert!(recorder.is_completed());
//! ```
//!
//! ## TestData
//!
//! ```rust
//! use ripple_test_utils::test_data::{person_alice, TestData};
//!
//! match person_alice() {
//!     TestData::Person(p) => assert_eq!(p.name, "Alice"),
//!     _ => panic!("Expected person"),
//! }
//! ```
//!
//! ## Test sources
//!
//! - [`scheduled`] - replays timed events on a `VirtualTimeScheduler`
//! - [`values_then_error`] - emits values, then errors
//! - [`SubscriptionTracker`] - counts subscriptions and teardowns of a wrapped stream

pub mod animal;
pub mod helpers;
pub mod person;
pub mod recorder;
pub mod test_data;

pub use helpers::{scheduled, values_then_error, Event, EventLog, SubscriptionTracker};
pub use recorder::{Notification, Recorder};
pub use test_data::TestData;
