// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use ripple_core::{RippleError, Subject};
use ripple_runtime::{Scheduler, TimerHandle, TimerTask, VirtualTimeScheduler};
use ripple_stream_time::debounce_time;
use ripple_test_utils::test_data::{person_alice, person_bob, person_charlie};
use ripple_test_utils::{scheduled, Event, EventLog, Notification, Recorder, TestData};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

const QUIET: Duration = Duration::from_millis(50);

/// Keeps every scheduled task, cancelled or not, so a test can run a timer that
/// already passed its cancellation check when a newer value arrived.
#[derive(Clone, Default)]
struct ManualScheduler {
    tasks: Arc<Mutex<Vec<Option<TimerTask>>>>,
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("tasks", &self.tasks.lock().len())
            .finish()
    }
}

impl ManualScheduler {
    fn run(&self, index: usize) {
        let task = self.tasks.lock().get_mut(index).and_then(Option::take);
        if let Some(task) = task {
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_after(&self, _delay: Duration, task: TimerTask) -> TimerHandle {
        self.tasks.lock().push(Some(task));
        TimerHandle::new(|| {})
    }

    fn now(&self) -> Duration {
        Duration::ZERO
    }
}

#[test]
fn test_debounce_emits_last_value_after_quiet_period() {
    // Arrange
    let scheduler = VirtualTimeScheduler::new();
    let log = EventLog::new();
    let sink = log.clone();
    let clock = scheduler.clone();
    let source = scheduled(
        &scheduler,
        vec![Event::Next(0, "x"), Event::Next(10, "y"), Event::Next(20, "z")],
    );

    // Act
    source
        .pipe(debounce_time(QUIET, scheduler.clone()))
        .subscribe(move |v: &'static str| sink.push((v, clock.now())));
    scheduler.advance_by(Duration::from_millis(69));

    // Assert
    assert!(log.entries().is_empty());

    // Act
    scheduler.advance_by(Duration::from_millis(1));

    // Assert
    assert_eq!(log.entries(), vec![("z", Duration::from_millis(70))]);
}

#[test]
fn test_debounce_flushes_pending_value_before_completion() {
    // Arrange
    let scheduler = VirtualTimeScheduler::new();
    let recorder = Recorder::<&'static str>::new();
    let source = scheduled(
        &scheduler,
        vec![
            Event::Next(0, "x"),
            Event::Next(10, "y"),
            Event::Next(20, "z"),
            Event::Complete(30),
        ],
    );

    // Act
    source
        .pipe(debounce_time(QUIET, scheduler.clone()))
        .subscribe(recorder.observer());
    scheduler.advance_by(Duration::from_millis(30));

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next("z"), Notification::Complete]
    );
    assert_eq!(scheduler.pending(), 0);

    // Act
    scheduler.advance_by(Duration::from_millis(100));

    // Assert
    assert_eq!(recorder.values(), vec!["z"]);
}

#[test]
fn test_debounce_emits_once_per_quiet_interval() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualTimeScheduler::new();
    let subject = Subject::<TestData>::new();
    let recorder = Recorder::new();
    subject
        .as_stream()
        .pipe(debounce_time(QUIET, scheduler.clone()))
        .subscribe(recorder.observer());

    // Act
    subject.next(person_alice())?;
    scheduler.advance_by(Duration::from_millis(60));
    subject.next(person_bob())?;
    scheduler.advance_by(Duration::from_millis(20));
    subject.next(person_charlie())?;
    scheduler.advance_by(Duration::from_millis(60));

    // Assert
    assert_eq!(recorder.values(), vec![person_alice(), person_charlie()]);
    Ok(())
}

#[test]
fn test_debounce_error_discards_pending_value() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualTimeScheduler::new();
    let subject = Subject::<i32>::new();
    let recorder = Recorder::new();
    subject
        .as_stream()
        .pipe(debounce_time(QUIET, scheduler.clone()))
        .subscribe(recorder.observer());

    // Act
    subject.next(1)?;
    subject.error(RippleError::stream_error("source died"))?;
    scheduler.advance_by(Duration::from_millis(100));

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Error(RippleError::stream_error("source died"))]
    );
    assert_eq!(scheduler.pending(), 0);
    Ok(())
}

#[test]
fn test_unsubscribing_debounce_cancels_timer_and_source() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualTimeScheduler::new();
    let subject = Subject::<i32>::new();
    let recorder = Recorder::new();
    let subscription = subject
        .as_stream()
        .pipe(debounce_time(QUIET, scheduler.clone()))
        .subscribe(recorder.observer());
    subject.next(1)?;

    // Act
    subscription.unsubscribe();
    scheduler.advance_by(Duration::from_millis(100));

    // Assert
    assert!(recorder.notifications().is_empty());
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(subject.subscriber_count(), 0);
    Ok(())
}

#[test]
fn test_debounce_completion_without_pending_value() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualTimeScheduler::new();
    let subject = Subject::<i32>::new();
    let recorder = Recorder::new();
    subject
        .as_stream()
        .pipe(debounce_time(QUIET, scheduler.clone()))
        .subscribe(recorder.observer());
    subject.next(1)?;
    scheduler.advance_by(QUIET);

    // Act
    subject.complete()?;

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next(1), Notification::Complete]
    );
    Ok(())
}

#[test]
fn test_debounce_ignores_timer_superseded_by_newer_value() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::default();
    let subject = Subject::new();
    let recorder = Recorder::<TestData>::new();
    subject
        .as_stream()
        .pipe(debounce_time(QUIET, scheduler.clone()))
        .subscribe(recorder.observer());
    subject.next(person_alice())?;
    subject.next(person_bob())?;

    // Act
    scheduler.run(0);

    // Assert
    assert!(recorder.values().is_empty());

    // Act
    scheduler.run(1);

    // Assert
    assert_eq!(recorder.values(), vec![person_bob()]);
    Ok(())
}
