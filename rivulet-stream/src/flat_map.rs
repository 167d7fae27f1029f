// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::flux::{BoxItemStream, Flux};
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{SelectAll, Stream, StreamExt};
use rivulet_core::StreamItem;
use std::sync::Arc;

type Mapper<T, R> = Arc<dyn Fn(T) -> Flux<R> + Send + Sync>;

impl<T: Send + 'static> Flux<T> {
    /// Map each value to an inner Flux and merge the inner values by arrival.
    ///
    /// # Behavior
    ///
    /// - each inner is subscribed as soon as its upstream value arrives, so
    ///   inner work overlaps
    /// - values that are already available are emitted before the next
    ///   upstream value is pulled
    /// - no ordering holds across inners
    /// - completes once upstream and every inner have completed
    /// - an error from upstream or any inner terminates the output and drops
    ///   all live inners
    pub fn flat_map<R, F>(&self, f: F) -> Flux<R>
    where
        R: Send + 'static,
        F: Fn(T) -> Flux<R> + Send + Sync + 'static,
    {
        let source = self.clone();
        let mapper: Mapper<T, R> = Arc::new(f);
        Flux::from_stream_fn(move || FlatMapStream {
            upstream: Some(source.to_stream()),
            inners: SelectAll::new(),
            mapper: Arc::clone(&mapper),
        })
    }
}

struct FlatMapStream<T, R> {
    upstream: Option<BoxItemStream<T>>,
    inners: SelectAll<BoxItemStream<R>>,
    mapper: Mapper<T, R>,
}

impl<T, R> FlatMapStream<T, R> {
    fn terminate(&mut self) {
        self.upstream = None;
        self.inners = SelectAll::new();
    }
}

impl<T: Send + 'static, R: Send + 'static> Stream for FlatMapStream<T, R> {
    type Item = StreamItem<R>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            if !this.inners.is_empty() {
                if let Poll::Ready(Some(item)) = this.inners.poll_next_unpin(cx) {
                    if item.is_error() {
                        this.terminate();
                    }
                    return Poll::Ready(Some(item));
                }
            }

            let Some(upstream) = this.upstream.as_mut() else {
                return if this.inners.is_empty() {
                    Poll::Ready(None)
                } else {
                    Poll::Pending
                };
            };

            match upstream.poll_next_unpin(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    let inner = (this.mapper)(value).to_stream();
                    this.inners.push(inner);
                }
                Poll::Ready(Some(StreamItem::Error(error))) => {
                    this.terminate();
                    return Poll::Ready(Some(StreamItem::Error(error)));
                }
                Poll::Ready(None) => this.upstream = None,
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
