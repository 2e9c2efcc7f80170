// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridge from push-based [`Stream`]s to pull-based `futures::Stream`s.

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::channel::mpsc;
use futures::StreamExt;
use ripple_core::{debug, Observer, Stream, StreamItem, Subscription};

/// Extension trait turning a ripple [`Stream`] into an async stream.
pub trait IntoAsyncStreamExt<T> {
    /// Subscribes now and buffers every notification for an async consumer.
    ///
    /// Values arrive as `StreamItem::Value`. An upstream error arrives as a final
    /// `StreamItem::Error`; completion ends the async stream. Dropping the returned
    /// [`AsyncStream`] unsubscribes from the source.
    ///
    /// # Example
    ///
    /// ```rust
    /// use futures::StreamExt;
    /// use ripple_rx::prelude::*;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let values: Vec<i32> = of([1, 2, 3])
    ///     .into_async_stream()
    ///     .map(|item| item.unwrap())
    ///     .collect()
    ///     .await;
    /// assert_eq!(values, vec![1, 2, 3]);
    /// # }
    /// ```
    fn into_async_stream(self) -> AsyncStream<T>;
}

impl<T: Send + 'static> IntoAsyncStreamExt<T> for Stream<T> {
    fn into_async_stream(self) -> AsyncStream<T> {
        let (tx, receiver) = mpsc::unbounded();
        let on_next = tx.clone();
        let on_error = tx.clone();
        let subscription = self.subscribe(
            Observer::new()
                .on_next(move |value: T| {
                    if on_next.unbounded_send(StreamItem::Value(value)).is_err() {
                        debug!("async stream receiver gone; value dropped");
                    }
                })
                .on_error(move |err| {
                    let _ = on_error.unbounded_send(StreamItem::Error(err));
                    on_error.close_channel();
                })
                .on_complete(move || tx.close_channel()),
        );
        AsyncStream {
            receiver,
            subscription,
        }
    }
}

/// A `futures::Stream` of the notifications of one subscription.
#[must_use = "streams do nothing unless polled"]
pub struct AsyncStream<T> {
    receiver: mpsc::UnboundedReceiver<StreamItem<T>>,
    subscription: Subscription,
}

impl<T> AsyncStream<T> {
    /// The subscription feeding this stream.
    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }
}

impl<T> futures::Stream for AsyncStream<T> {
    type Item = StreamItem<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_next_unpin(cx)
    }
}

impl<T> Drop for AsyncStream<T> {
    fn drop(&mut self) {
        self.subscription.unsubscribe();
    }
}
