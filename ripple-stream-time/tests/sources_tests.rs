// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_runtime::VirtualTimeScheduler;
use ripple_stream::take;
use ripple_stream_time::{interval, timer};
use ripple_test_utils::{Notification, Recorder};
use std::time::Duration;

#[test]
fn test_interval_emits_counter_every_period() {
    // Arrange
    let scheduler = VirtualTimeScheduler::new();
    let recorder = Recorder::<u64>::new();

    // Act
    interval(Duration::from_millis(10), scheduler.clone()).subscribe(recorder.observer());
    scheduler.advance_by(Duration::from_millis(45));

    // Assert
    assert_eq!(recorder.values(), vec![0, 1, 2, 3]);
    assert!(!recorder.is_completed());
}

#[test]
fn test_interval_stops_after_unsubscribe() {
    // Arrange
    let scheduler = VirtualTimeScheduler::new();
    let recorder = Recorder::<u64>::new();
    let subscription =
        interval(Duration::from_millis(10), scheduler.clone()).subscribe(recorder.observer());
    scheduler.advance_by(Duration::from_millis(20));

    // Act
    subscription.unsubscribe();
    scheduler.advance_by(Duration::from_millis(100));

    // Assert
    assert_eq!(recorder.values(), vec![0, 1]);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_interval_with_take_completes_and_cancels() {
    // Arrange
    let scheduler = VirtualTimeScheduler::new();
    let recorder = Recorder::<u64>::new();

    // Act
    interval(Duration::from_millis(5), scheduler.clone())
        .pipe(take(3))
        .subscribe(recorder.observer());
    scheduler.advance_by(Duration::from_millis(100));

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![
            Notification::Next(0),
            Notification::Next(1),
            Notification::Next(2),
            Notification::Complete,
        ]
    );
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_timer_emits_zero_then_completes() {
    // Arrange
    let scheduler = VirtualTimeScheduler::new();
    let recorder = Recorder::<u64>::new();

    // Act
    timer(Duration::from_millis(30), scheduler.clone()).subscribe(recorder.observer());
    scheduler.advance_by(Duration::from_millis(29));

    // Assert
    assert!(recorder.notifications().is_empty());

    // Act
    scheduler.advance_by(Duration::from_millis(1));

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next(0), Notification::Complete]
    );
}

#[test]
fn test_timer_cancelled_before_firing() {
    // Arrange
    let scheduler = VirtualTimeScheduler::new();
    let recorder = Recorder::<u64>::new();
    let subscription =
        timer(Duration::from_millis(30), scheduler.clone()).subscribe(recorder.observer());

    // Act
    subscription.unsubscribe();
    scheduler.advance_by(Duration::from_millis(100));

    // Assert
    assert!(recorder.notifications().is_empty());
    assert_eq!(scheduler.pending(), 0);
}
