// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The multi-valued cold producer.
//!
//! A [`Flux<T>`] is a recipe, not a running computation. It owns a factory that
//! builds a fresh item stream each time it is subscribed, so every subscriber
//! observes the complete sequence from the start and nothing runs until a
//! subscription exists.
//!
//! # Example
//!
//! ```
//! use rivulet_stream::Flux;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let upper = Flux::from_values(["alex", "ben", "chloe"])
//!     .map(|name| name.to_uppercase())
//!     .filter(|name| name.len() > 3);
//!
//! let names = upper.collect_list().resolve().await;
//! assert_eq!(names.unwrap(), Some(vec!["ALEX".to_string(), "CHLOE".to_string()]));
//! # }
//! ```

use crate::solo::Solo;
use crate::terminate_on_error::TerminateOnError;
use core::fmt;
use futures::future::ready;
use futures::stream::{self, BoxStream, Stream, StreamExt};
use rivulet_core::{LambdaSubscriber, RivuletError, StreamItem, Subscriber, Subscription};
use rivulet_exec::SubscribeExt;
use std::sync::Arc;

/// A boxed stream of items, as produced by one subscription.
pub type BoxItemStream<T> = BoxStream<'static, StreamItem<T>>;

type StreamFactory<T> = dyn Fn() -> BoxItemStream<T> + Send + Sync;

/// A cold producer of zero or more values followed by completion or one error.
#[must_use = "a Flux does nothing until it is subscribed"]
pub struct Flux<T> {
    factory: Arc<StreamFactory<T>>,
}

impl<T> Clone for Flux<T> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<T> fmt::Debug for Flux<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flux").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Flux<T> {
    /// Build a Flux from a per-subscription stream factory.
    ///
    /// `factory` is called once per subscription. Whatever the stream yields
    /// after its first error is never observed.
    pub fn from_stream_fn<F, S>(factory: F) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
        S: Stream<Item = StreamItem<T>> + Send + 'static,
    {
        Self {
            factory: Arc::new(move || TerminateOnError::new(factory()).boxed()),
        }
    }

    /// Emit each item in order, then complete.
    pub fn from_values<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone + Sync,
    {
        let items: Arc<[T]> = items.into_iter().collect();
        Self::from_stream_fn(move || {
            stream::iter(items.to_vec().into_iter().map(StreamItem::Value))
        })
    }

    /// Emit exactly one value, then complete.
    pub fn just(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::from_values([value])
    }

    /// Complete without emitting.
    pub fn empty() -> Self {
        Self::from_stream_fn(stream::empty::<StreamItem<T>>)
    }

    /// Fail every subscription with `error`.
    pub fn error(error: RivuletError) -> Self {
        Self::from_stream_fn(move || stream::once(ready(StreamItem::Error(error.clone()))))
    }

    /// Call `supplier` at subscription time and emit what the returned Flux emits.
    pub fn defer<F>(supplier: F) -> Self
    where
        F: Fn() -> Flux<T> + Send + Sync + 'static,
    {
        Self::from_stream_fn(move || supplier().to_stream())
    }

    /// Open a fresh subscription as a pull stream.
    ///
    /// Dropping the returned stream cancels the subscription and every
    /// upstream stage.
    pub fn to_stream(&self) -> BoxItemStream<T> {
        (self.factory)()
    }

    /// Subscribe `subscriber` and start producing on the Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn subscribe<S>(&self, subscriber: S) -> Subscription
    where
        S: Subscriber<T>,
    {
        self.to_stream().subscribe_with(subscriber)
    }

    /// Subscribe with a value callback only.
    ///
    /// An error, if one arrives, is logged.
    pub fn subscribe_fn<F>(&self, on_next: F) -> Subscription
    where
        F: FnMut(T) + Send + 'static,
    {
        self.subscribe(LambdaSubscriber::new(on_next))
    }

    /// Emit at most the first `count` values, then complete and cancel upstream.
    pub fn take(&self, count: usize) -> Flux<T> {
        let source = self.clone();
        Flux::from_stream_fn(move || source.to_stream().take(count))
    }

    /// The first value as a [`Solo`]; upstream is cancelled once it arrives.
    pub fn next(&self) -> Solo<T> {
        let source = self.clone();
        Solo::from_future_fn(move || {
            let mut stream = source.to_stream();
            async move { stream.next().await }
        })
    }

    /// All values gathered into one `Vec`, or the first error.
    pub fn collect_list(&self) -> Solo<Vec<T>> {
        let source = self.clone();
        Solo::from_future_fn(move || {
            let mut stream = source.to_stream();
            async move {
                let mut values = Vec::new();
                while let Some(item) = stream.next().await {
                    match item {
                        StreamItem::Value(value) => values.push(value),
                        StreamItem::Error(error) => return Some(StreamItem::Error(error)),
                    }
                }
                Some(StreamItem::Value(values))
            }
        })
    }
}
