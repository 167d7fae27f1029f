// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::flux::{BoxItemStream, Flux};
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{Stream, StreamExt};
use rivulet_core::{RivuletError, StreamItem};
use std::collections::VecDeque;

impl<T: Send + 'static> Flux<T> {
    /// Subscribe to all `sources` at once but emit in source order.
    ///
    /// Work overlaps, yet every value of the first source is emitted before
    /// any value of the second, and so on. Values that arrive early are
    /// buffered. The first error from any source terminates the output.
    pub fn merge_sequential<I>(sources: I) -> Flux<T>
    where
        I: IntoIterator<Item = Flux<T>>,
    {
        let sources: Vec<Flux<T>> = sources.into_iter().collect();
        Flux::from_stream_fn(move || {
            MergeSequentialStream::new(sources.iter().map(Flux::to_stream).collect())
        })
    }
}

struct MergeSequentialStream<T> {
    sources: Vec<Option<BoxItemStream<T>>>,
    buffers: Vec<VecDeque<T>>,
    current: usize,
}

impl<T> Unpin for MergeSequentialStream<T> {}

impl<T> MergeSequentialStream<T> {
    fn new(streams: Vec<BoxItemStream<T>>) -> Self {
        let buffers = streams.iter().map(|_| VecDeque::new()).collect();
        Self {
            sources: streams.into_iter().map(Some).collect(),
            buffers,
            current: 0,
        }
    }

    // Pull everything that is ready right now into the per-source buffers.
    fn fill(&mut self, cx: &mut Context<'_>) -> Option<RivuletError> {
        for (slot, buffer) in self.sources.iter_mut().zip(self.buffers.iter_mut()) {
            while let Some(source) = slot.as_mut() {
                match source.poll_next_unpin(cx) {
                    Poll::Ready(Some(StreamItem::Value(value))) => buffer.push_back(value),
                    Poll::Ready(Some(StreamItem::Error(error))) => return Some(error),
                    Poll::Ready(None) => *slot = None,
                    Poll::Pending => break,
                }
            }
        }
        None
    }
}

impl<T: Send + 'static> Stream for MergeSequentialStream<T> {
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if let Some(error) = this.fill(cx) {
            this.sources.clear();
            this.buffers.clear();
            return Poll::Ready(Some(StreamItem::Error(error)));
        }

        while this.current < this.buffers.len() {
            if let Some(value) = this.buffers[this.current].pop_front() {
                return Poll::Ready(Some(StreamItem::Value(value)));
            }
            if this.sources[this.current].is_some() {
                return Poll::Pending;
            }
            this.current += 1;
        }

        Poll::Ready(None)
    }
}
