// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::flux::{BoxItemStream, Flux};
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::{ready, Stream, StreamExt};
use rivulet_core::StreamItem;

impl<T: Send + 'static> Flux<T> {
    /// Emit the values of `alternative` if this Flux completes without a value.
    ///
    /// `alternative` is subscribed only in that case. A primary that emits at
    /// least one value, or that fails, never touches it.
    pub fn switch_if_empty(&self, alternative: &Flux<T>) -> Flux<T> {
        let primary = self.clone();
        let alternative = alternative.clone();
        Flux::from_stream_fn(move || SwitchIfEmptyStream {
            primary: Some(primary.to_stream()),
            alternative: Some(alternative.clone()),
            fallback: None,
            emitted: false,
        })
    }

    /// Emit `value` if this Flux completes without a value.
    pub fn default_if_empty(&self, value: T) -> Flux<T>
    where
        T: Clone + Sync,
    {
        self.switch_if_empty(&Flux::just(value))
    }
}

struct SwitchIfEmptyStream<T> {
    primary: Option<BoxItemStream<T>>,
    alternative: Option<Flux<T>>,
    fallback: Option<BoxItemStream<T>>,
    emitted: bool,
}

impl<T: Send + 'static> Stream for SwitchIfEmptyStream<T> {
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if let Some(primary) = this.primary.as_mut() {
            match ready!(primary.poll_next_unpin(cx)) {
                Some(item) => {
                    if item.is_value() {
                        this.emitted = true;
                    }
                    if this.emitted || item.is_error() {
                        this.alternative = None;
                    }
                    return Poll::Ready(Some(item));
                }
                None => {
                    this.primary = None;
                    if let Some(alternative) = this.alternative.take() {
                        if !this.emitted {
                            this.fallback = Some(alternative.to_stream());
                        }
                    }
                }
            }
        }

        match this.fallback.as_mut() {
            Some(fallback) => fallback.poll_next_unpin(cx),
            None => Poll::Ready(None),
        }
    }
}
