// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The push-based consumer interface.

use crate::error::RivuletError;
use crate::logging::error;
use crate::subscription::Subscription;

/// Receives the callbacks of one subscription.
///
/// Callbacks for a subscription are never delivered concurrently. The order is
/// `on_subscribe`, `on_next*`, then at most one of `on_complete` / `on_error`.
/// After cancellation nothing further is delivered.
///
/// The `Subscription` passed to `on_subscribe` is the same handle returned by
/// `subscribe`, so a subscriber can cancel itself (for example after it has
/// seen enough values).
pub trait Subscriber<T>: Send + 'static {
    /// Called once, before any other callback.
    fn on_subscribe(&mut self, subscription: Subscription) {
        let _ = subscription;
    }

    /// Called for each value, in order.
    fn on_next(&mut self, value: T);

    /// Called once if the sequence fails. Terminal.
    fn on_error(&mut self, error: RivuletError);

    /// Called once if the sequence completes. Terminal.
    fn on_complete(&mut self);
}

type OnNext<T> = Box<dyn FnMut(T) + Send>;
type OnError = Box<dyn FnMut(RivuletError) + Send>;
type OnComplete = Box<dyn FnMut() + Send>;

/// A [`Subscriber`] assembled from closures.
///
/// Without an error handler, errors are reported through the logging shim.
///
/// ```
/// use rivulet_core::{LambdaSubscriber, Subscriber};
///
/// let mut seen = Vec::new();
/// let mut subscriber = LambdaSubscriber::new(move |value: i32| seen.push(value))
///     .with_complete(|| println!("done"));
///
/// subscriber.on_next(1);
/// subscriber.on_complete();
/// ```
pub struct LambdaSubscriber<T> {
    on_next: OnNext<T>,
    on_error: Option<OnError>,
    on_complete: Option<OnComplete>,
}

impl<T> LambdaSubscriber<T> {
    /// Subscriber that only handles values.
    pub fn new(on_next: impl FnMut(T) + Send + 'static) -> Self {
        Self {
            on_next: Box::new(on_next),
            on_error: None,
            on_complete: None,
        }
    }

    /// Handle the terminal error.
    #[must_use]
    pub fn with_error(mut self, on_error: impl FnMut(RivuletError) + Send + 'static) -> Self {
        self.on_error = Some(Box::new(on_error));
        self
    }

    /// Handle completion.
    #[must_use]
    pub fn with_complete(mut self, on_complete: impl FnMut() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(on_complete));
        self
    }
}

impl<T: 'static> Subscriber<T> for LambdaSubscriber<T> {
    fn on_next(&mut self, value: T) {
        (self.on_next)(value);
    }

    fn on_error(&mut self, err: RivuletError) {
        match self.on_error.as_mut() {
            Some(on_error) => on_error(err),
            None => error!("Unhandled error in subscription: {}", err),
        }
    }

    fn on_complete(&mut self) {
        if let Some(on_complete) = self.on_complete.as_mut() {
            on_complete();
        }
    }
}
