// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridge from push callbacks to a channel receiver.
//!
//! A [`ChannelSubscriber`] forwards every signal into an unbounded channel, so
//! a consumer that wants to pull (an HTTP body, a test) can read the receiver
//! as a `Stream<Item = StreamItem<T>>`. When the receiver is dropped the next
//! delivery fails and the subscriber cancels its own subscription.

use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use rivulet_core::{RivuletError, StreamItem, Subscriber, Subscription};

/// Subscriber that forwards signals into an unbounded channel.
pub struct ChannelSubscriber<T> {
    tx: UnboundedSender<StreamItem<T>>,
    subscription: Option<Subscription>,
}

/// Creates a subscriber and the receiver its signals are forwarded to.
///
/// The receiver ends after the terminal signal.
pub fn channel_subscriber<T>() -> (ChannelSubscriber<T>, UnboundedReceiver<StreamItem<T>>) {
    let (tx, rx) = unbounded();
    (
        ChannelSubscriber {
            tx,
            subscription: None,
        },
        rx,
    )
}

impl<T: Send + 'static> Subscriber<T> for ChannelSubscriber<T> {
    fn on_subscribe(&mut self, subscription: Subscription) {
        self.subscription = Some(subscription);
    }

    fn on_next(&mut self, value: T) {
        if self.tx.unbounded_send(StreamItem::Value(value)).is_err() {
            crate::info!("Receiver dropped, cancelling subscription");
            if let Some(subscription) = self.subscription.as_ref() {
                subscription.cancel();
            }
        }
    }

    fn on_error(&mut self, error: RivuletError) {
        if let Err(rejected) = self.tx.unbounded_send(StreamItem::Error(error)) {
            if let StreamItem::Error(error) = rejected.into_inner() {
                crate::warn!("Receiver dropped before error could be delivered: {}", error);
            }
        }
        self.tx.close_channel();
    }

    fn on_complete(&mut self) {
        self.tx.close_channel();
    }
}
