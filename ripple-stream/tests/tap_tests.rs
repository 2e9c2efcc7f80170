// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::pipe;
use ripple_stream::{filter, of, tap};
use ripple_test_utils::{EventLog, Recorder};

#[test]
fn test_tap_observes_without_changing_values() {
    // Arrange
    let recorder = Recorder::<i32>::new();
    let seen = EventLog::new();
    let sink = seen.clone();

    // Act
    of([1, 2, 3])
        .pipe(tap(move |n: &i32| sink.push(*n)))
        .subscribe(recorder.observer());

    // Assert
    assert_eq!(seen.entries(), vec![1, 2, 3]);
    assert_eq!(recorder.values(), vec![1, 2, 3]);
    assert!(recorder.is_completed());
}

#[test]
fn test_tap_sees_values_before_later_operators() {
    // Arrange
    let log = EventLog::new();
    let tapped = log.clone();
    let delivered = log.clone();

    // Act
    pipe!(
        of([1, 2, 3, 4]),
        tap(move |n: &i32| tapped.push(format!("tap {n}"))),
        filter(|n: &i32| n % 2 == 0),
    )
    .subscribe(move |n: i32| delivered.push(format!("got {n}")));

    // Assert
    assert_eq!(
        log.entries(),
        vec!["tap 1", "tap 2", "got 2", "tap 3", "tap 4", "got 4"]
    );
}
