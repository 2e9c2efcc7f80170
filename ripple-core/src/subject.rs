// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber source.
//!
//! A [`Subject`] is pushed into imperatively and broadcasts each notification to every
//! subscriber of its [`as_stream`](Subject::as_stream) view.
//!
//! ## Characteristics
//!
//! - **Hot**: late subscribers do not receive past values.
//! - **Terminal replay**: subscribing after `complete`/`error` immediately delivers
//!   that terminal notification.
//! - **Cheap to clone**: all clones share the same state.
//!
//! ## Example
//!
//! ```
//! use ripple_core::Subject;
//! use std::sync::{Arc, Mutex};
//!
//! let subject = Subject::<i32>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//! let subscription = subject
//!     .as_stream()
//!     .subscribe(move |v: i32| sink.lock().unwrap().push(v));
//!
//! subject.next(1).unwrap();
//! subject.next(2).unwrap();
//! subscription.unsubscribe();
//! subject.next(3).unwrap();
//!
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
//! ```

use crate::error::RippleError;
use crate::stream::Stream;
use crate::subject_error::SubjectError;
use crate::subscriber::Subscriber;
use crate::teardown::Teardown;
use parking_lot::Mutex;
use std::sync::Arc;

enum Terminal {
    Completed,
    Errored(RippleError),
}

struct SubjectState<T> {
    terminal: Option<Terminal>,
    next_id: u64,
    subscribers: Vec<(u64, Subscriber<T>)>,
}

/// A hot subject that broadcasts notifications to all current subscribers.
pub struct Subject<T> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + 'static> Subject<T> {
    /// Creates an open subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                terminal: None,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// A stream view; each subscription registers with the subject until it terminates.
    #[must_use]
    pub fn as_stream(&self) -> Stream<T> {
        let state = Arc::clone(&self.state);
        Stream::new(move |subscriber: Subscriber<T>| {
            let mut guard = state.lock();
            match &guard.terminal {
                Some(Terminal::Completed) => {
                    drop(guard);
                    subscriber.complete();
                    Teardown::empty()
                }
                Some(Terminal::Errored(err)) => {
                    let err = err.clone();
                    drop(guard);
                    subscriber.error(err);
                    Teardown::empty()
                }
                None => {
                    let id = guard.next_id;
                    guard.next_id += 1;
                    guard.subscribers.push((id, subscriber));
                    let state = Arc::clone(&state);
                    Teardown::new(move || {
                        state.lock().subscribers.retain(|(other, _)| *other != id);
                    })
                }
            }
        })
    }

    /// Sends a value to every current subscriber.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has terminated.
    pub fn next(&self, value: T) -> Result<(), SubjectError> {
        let targets = self.snapshot()?;
        for subscriber in targets {
            subscriber.next(value.clone());
        }
        Ok(())
    }

    /// Terminates the subject and every subscriber with `err`.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has already terminated.
    pub fn error(&self, err: RippleError) -> Result<(), SubjectError> {
        let targets = self.terminate(Terminal::Errored(err.clone()))?;
        for subscriber in targets {
            subscriber.error(err.clone());
        }
        Ok(())
    }

    /// Completes the subject and every subscriber.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has already terminated.
    pub fn complete(&self) -> Result<(), SubjectError> {
        let targets = self.terminate(Terminal::Completed)?;
        for subscriber in targets {
            subscriber.complete();
        }
        Ok(())
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().terminal.is_some()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().subscribers.len()
    }

    fn snapshot(&self) -> Result<Vec<Subscriber<T>>, SubjectError> {
        let state = self.state.lock();
        if state.terminal.is_some() {
            warn!("value pushed into a closed subject was dropped");
            return Err(SubjectError::Closed);
        }
        Ok(state.subscribers.iter().map(|(_, s)| s.clone()).collect())
    }

    fn terminate(&self, terminal: Terminal) -> Result<Vec<Subscriber<T>>, SubjectError> {
        let mut state = self.state.lock();
        if state.terminal.is_some() {
            warn!("terminal notification pushed into a closed subject was dropped");
            return Err(SubjectError::Closed);
        }
        state.terminal = Some(terminal);
        Ok(state.subscribers.drain(..).map(|(_, s)| s).collect())
    }
}

impl<T: Clone + Send + 'static> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}
