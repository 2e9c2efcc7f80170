// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::{Observer, RippleError, Subject, Subscriber, Teardown};
use ripple_test_utils::{EventLog, Notification, Recorder};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[test]
fn test_complete_is_delivered_once() {
    // Arrange
    let recorder = Recorder::<i32>::new();
    let subscriber = Subscriber::new(recorder.observer());

    // Act
    subscriber.next(1);
    subscriber.complete();
    subscriber.complete();
    subscriber.next(2);
    subscriber.error(RippleError::stream_error("late"));

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next(1), Notification::Complete]
    );
    assert!(subscriber.is_closed());
}

#[test]
fn test_error_is_delivered_once() {
    // Arrange
    let recorder = Recorder::<i32>::new();
    let subscriber = Subscriber::new(recorder.observer());

    // Act
    subscriber.error(RippleError::stream_error("first"));
    subscriber.error(RippleError::stream_error("second"));
    subscriber.complete();

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Error(RippleError::stream_error("first"))]
    );
}

#[test]
fn test_unsubscribe_is_silent_and_runs_teardown_once() {
    // Arrange
    let recorder = Recorder::<i32>::new();
    let log = EventLog::new();
    let subscriber = Subscriber::new(recorder.observer());
    let sink = log.clone();
    subscriber.add_teardown(Teardown::new(move || sink.push("teardown")));

    // Act
    subscriber.unsubscribe();
    subscriber.unsubscribe();
    subscriber.complete();

    // Assert
    assert!(recorder.notifications().is_empty());
    assert_eq!(log.entries(), vec!["teardown"]);
}

#[test]
fn test_teardowns_run_in_registration_order_after_callback() {
    // Arrange
    let log = EventLog::new();
    let on_complete = log.clone();
    let subscriber: Subscriber<i32> =
        Subscriber::new(Observer::new().on_complete(move || on_complete.push("complete")));
    let first = log.clone();
    let second = log.clone();
    subscriber.add_teardown(Teardown::new(move || first.push("first")));
    subscriber.add_teardown(Teardown::new(move || second.push("second")));

    // Act
    subscriber.complete();

    // Assert
    assert_eq!(log.entries(), vec!["complete", "first", "second"]);
}

#[test]
fn test_teardown_added_after_termination_runs_immediately() {
    // Arrange
    let log = EventLog::new();
    let subscriber = Subscriber::<i32>::new(Observer::new());
    subscriber.complete();
    let sink = log.clone();

    // Act
    subscriber.add_teardown(Teardown::new(move || sink.push("late")));

    // Assert
    assert_eq!(log.entries(), vec!["late"]);
}

#[test]
fn test_missing_callbacks_are_ignored() {
    // Arrange
    let subscriber = Subscriber::<i32>::new(Observer::new());

    // Act
    subscriber.next(1);
    subscriber.error(RippleError::stream_error("ignored"));

    // Assert
    assert!(subscriber.is_closed());
}

#[test]
fn test_callback_may_terminate_another_subscriber() {
    // Arrange
    let recorder = Recorder::<i32>::new();
    let subscriber = Subscriber::new(recorder.observer());
    let this = subscriber.clone();
    let log = EventLog::new();
    let sink = log.clone();
    let driver = Subscriber::new(move |value: i32| {
        sink.push(value);
        this.next(value);
        this.complete();
    });

    // Act
    driver.next(7);
    driver.next(8);

    // Assert
    assert_eq!(log.entries(), vec![7, 8]);
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next(7), Notification::Complete]
    );
}

#[test]
fn test_subscription_reports_closed_state() {
    // Arrange
    let subscriber = Subscriber::<i32>::new(Observer::new());
    let subscription = subscriber.subscription();

    // Act
    let before = subscription.is_closed();
    subscription.unsubscribe();

    // Assert
    assert!(!before);
    assert!(subscription.is_closed());
    assert!(subscriber.is_closed());
}

#[test]
fn test_next_from_own_callback_is_delivered_after_it_returns() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32>::new();
    let log = EventLog::new();
    let sink = log.clone();
    let feedback = subject.clone();
    subject.as_stream().subscribe(move |value: i32| {
        sink.push(format!("start {value}"));
        if value < 3 {
            let _ = feedback.next(value + 1);
        }
        sink.push(format!("end {value}"));
    });

    // Act
    subject.next(0)?;

    // Assert
    assert_eq!(
        log.entries(),
        vec![
            "start 0", "end 0", "start 1", "end 1", "start 2", "end 2", "start 3", "end 3"
        ]
    );
    Ok(())
}

#[test]
fn test_queued_values_are_discarded_on_termination() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32>::new();
    let log = EventLog::new();
    let on_next = log.clone();
    let on_complete = log.clone();
    let feedback = subject.clone();
    subject.as_stream().subscribe(
        Observer::new()
            .on_next(move |value: i32| {
                on_next.push(format!("next {value}"));
                if value == 0 {
                    let _ = feedback.next(1);
                    let _ = feedback.complete();
                }
            })
            .on_complete(move || on_complete.push("complete".to_string())),
    );

    // Act
    subject.next(0)?;

    // Assert
    assert_eq!(log.entries(), vec!["next 0", "complete"]);
    Ok(())
}

#[test]
fn test_concurrent_next_calls_are_delivered_one_at_a_time() {
    // Arrange
    let delivering = Arc::new(AtomicBool::new(false));
    let overlapped = Arc::new(AtomicBool::new(false));
    let received = Arc::new(AtomicUsize::new(0));
    let subscriber = {
        let delivering = Arc::clone(&delivering);
        let overlapped = Arc::clone(&overlapped);
        let received = Arc::clone(&received);
        Subscriber::new(move |_value: usize| {
            if delivering.swap(true, Ordering::AcqRel) {
                overlapped.store(true, Ordering::Release);
            }
            received.fetch_add(1, Ordering::AcqRel);
            delivering.store(false, Ordering::Release);
        })
    };

    // Act
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let subscriber = subscriber.clone();
            thread::spawn(move || {
                for value in 0..500 {
                    subscriber.next(value);
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().expect("worker panicked");
    }

    // Assert
    assert_eq!(received.load(Ordering::Acquire), 2000);
    assert!(!overlapped.load(Ordering::Acquire));
}
