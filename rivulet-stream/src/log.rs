// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Signal tracing for debugging pipelines.
//!
//! [`Flux::log`] reports every signal of every subscription under a category:
//!
//! ```text
//! [names] onSubscribe
//! [names] onNext("alex")
//! [names] onNext("ben")
//! [names] onComplete
//! ```
//!
//! A subscription dropped before its terminal signal reports `cancel`.

use crate::flux::Flux;
use crate::logging::info;
use core::fmt::Debug;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::{ready, Stream};
use pin_project::{pin_project, pinned_drop};
use rivulet_core::StreamItem;
use std::sync::Arc;

impl<T: Send + Debug + 'static> Flux<T> {
    /// Log every signal of each subscription under `category`.
    ///
    /// Values are rendered with their `Debug` form; the items themselves pass
    /// through unchanged.
    pub fn log(&self, category: impl Into<String>) -> Flux<T> {
        let source = self.clone();
        let category: Arc<str> = Arc::from(category.into());
        Flux::from_stream_fn(move || {
            info!("[{}] onSubscribe", category);
            LogStream {
                inner: source.to_stream(),
                category: Arc::clone(&category),
                terminated: false,
            }
        })
    }
}

#[pin_project(PinnedDrop)]
struct LogStream<S> {
    #[pin]
    inner: S,
    category: Arc<str>,
    terminated: bool,
}

impl<S, T> Stream for LogStream<S>
where
    S: Stream<Item = StreamItem<T>>,
    T: Debug,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if *this.terminated {
            return Poll::Ready(None);
        }

        let item = ready!(this.inner.poll_next(cx));
        match &item {
            Some(StreamItem::Value(value)) => info!("[{}] onNext({:?})", this.category, value),
            Some(StreamItem::Error(error)) => {
                *this.terminated = true;
                info!("[{}] onError({})", this.category, error);
            }
            None => {
                *this.terminated = true;
                info!("[{}] onComplete", this.category);
            }
        }
        Poll::Ready(item)
    }
}

#[pinned_drop]
impl<S> PinnedDrop for LogStream<S> {
    fn drop(self: Pin<&mut Self>) {
        let this = self.project();
        if !*this.terminated {
            info!("[{}] cancel", this.category);
        }
    }
}
