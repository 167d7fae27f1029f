// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::pin;
use futures::stream::{Stream, StreamExt};
use rivulet_core::{StreamItem, Subscriber, Subscription, SubscriptionState};

/// Extension trait that pushes the items of a stream into a [`Subscriber`].
pub trait SubscribeExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Spawns a driver task that delivers this stream's items to `subscriber`.
    ///
    /// # Behavior
    ///
    /// - `on_subscribe` is delivered first, with the returned handle
    /// - each `Value` becomes `on_next`, in order, one at a time
    /// - the first `Error` becomes `on_error` and ends the subscription
    /// - the end of the stream becomes `on_complete`
    /// - after [`Subscription::cancel`] nothing more is delivered and the stream
    ///   is dropped, which releases every upstream stage
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    fn subscribe_with<S>(self, subscriber: S) -> Subscription
    where
        S: Subscriber<T>;
}

impl<St, T> SubscribeExt<T> for St
where
    St: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    fn subscribe_with<S>(self, subscriber: S) -> Subscription
    where
        S: Subscriber<T>,
    {
        let subscription = Subscription::new();
        tokio::spawn(drive(self, subscriber, subscription.clone()));
        subscription
    }
}

/// Deliver `stream` to `subscriber` on the current task.
///
/// This is the loop behind [`SubscribeExt::subscribe_with`]; await it directly
/// to consume a stream without spawning. Returns the final state.
pub async fn drive<St, T, S>(
    stream: St,
    mut subscriber: S,
    subscription: Subscription,
) -> SubscriptionState
where
    St: Stream<Item = StreamItem<T>>,
    S: Subscriber<T>,
{
    if !subscription.activate() {
        return subscription.state();
    }
    subscriber.on_subscribe(subscription.clone());

    let token = subscription.cancellation_token().clone();
    let mut stream = pin!(stream);

    while !subscription.is_cancelled() {
        let Some(item) = token.run_until_cancelled(stream.next()).await else {
            break;
        };

        match item {
            Some(StreamItem::Value(value)) => {
                if subscription.is_cancelled() {
                    break;
                }
                subscriber.on_next(value);
            }
            Some(StreamItem::Error(error)) => {
                if subscription.try_fail() {
                    subscriber.on_error(error);
                    subscription.settle();
                }
                break;
            }
            None => {
                if subscription.try_complete() {
                    subscriber.on_complete();
                    subscription.settle();
                }
                break;
            }
        }
    }

    subscription.state()
}
