// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::{boxed, pipe, BoxedOperator, RippleError, Stream};
use ripple_stream::prelude::*;
use ripple_test_utils::test_data::{animal_dog, person_alice, person_bob, person_charlie};
use ripple_test_utils::{values_then_error, Notification, Recorder, SubscriptionTracker, TestData};

#[test]
fn test_pipeline_over_endless_source_terminates() {
    // Arrange
    let recorder = Recorder::<u32>::new();

    // Act
    pipe!(
        from_iter(1..),
        skip(2),
        filter(|n: &u32| n % 2 == 1),
        map(|n: u32| n * 10),
        take(3),
    )
    .subscribe(recorder.observer());

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![
            Notification::Next(30),
            Notification::Next(50),
            Notification::Next(70),
            Notification::Complete,
        ]
    );
}

#[test]
fn test_pipeline_of_people_names() {
    // Arrange
    let recorder = Recorder::<String>::new();

    // Act
    pipe!(
        of([person_alice(), animal_dog(), person_bob(), person_charlie()]),
        filter(|data: &TestData| matches!(data, TestData::Person(_))),
        skip(1),
        map(|data: TestData| data.name().to_uppercase()),
    )
    .subscribe(recorder.observer());

    // Assert
    assert_eq!(recorder.values(), vec!["BOB", "CHARLIE"]);
    assert!(recorder.is_completed());
}

#[test]
fn test_error_passes_through_whole_chain() {
    // Arrange
    let recorder = Recorder::<i32>::new();

    // Act
    pipe!(
        values_then_error(vec![1, 2, 3], "deep failure"),
        map(|n: i32| n * 2),
        filter(|n: &i32| *n > 2),
        skip(0),
        take(10),
    )
    .subscribe(recorder.observer());

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![
            Notification::Next(4),
            Notification::Next(6),
            Notification::Error(RippleError::stream_error("deep failure")),
        ]
    );
}

#[test]
fn test_unsubscribe_reaches_source_through_chain() {
    // Arrange
    let tracker = SubscriptionTracker::new();
    let subscription = pipe!(
        tracker.wrap(never::<i32>()),
        map(|n: i32| n + 1),
        filter(|_: &i32| true),
        switch_map(|n: i32| of([n])),
    )
    .subscribe(|_: i32| {});

    // Act
    subscription.unsubscribe();
    subscription.unsubscribe();

    // Assert
    assert_eq!(tracker.subscribed(), 1);
    assert_eq!(tracker.torn_down(), 1);
}

#[test]
fn test_runtime_operator_list() {
    // Arrange
    let recorder = Recorder::<i32>::new();
    let mut operators: Vec<BoxedOperator<i32, i32>> = vec![boxed(map(|n: i32| n * 3))];
    operators.push(boxed(take(2)));

    // Act
    of([1, 2, 3])
        .pipe_all(operators)
        .subscribe(recorder.observer());

    // Assert
    assert_eq!(recorder.values(), vec![3, 6]);
}

#[test]
fn test_recovered_chain_keeps_operators_downstream() {
    // Arrange
    let recorder = Recorder::<i32>::new();
    let fallback: Stream<i32> = of([100, 200]);

    // Act
    pipe!(
        values_then_error(vec![1], "boom"),
        catch_error(move |_err, _caught| Ok(fallback.clone())),
        map(|n: i32| n + 1),
        take(2),
    )
    .subscribe(recorder.observer());

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next(2), Notification::Next(101), Notification::Complete]
    );
}
