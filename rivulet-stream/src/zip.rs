// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Positional pairing of several producers.
//!
//! [`Flux::zip`] pairs any number of same-typed sources through a combiner
//! over a `Vec`; [`Flux::zip_with`] pairs two sources of different types.
//!
//! In both cases:
//!
//! - every source is subscribed at once
//! - the n-th output combines the n-th value of each source
//! - the output completes as soon as any source is exhausted, and unmatched
//!   values of the longer sources are discarded
//! - an error from any source terminates the output and drops the others

use crate::flux::{BoxItemStream, Flux};
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{Stream, StreamExt};
use rivulet_core::{RivuletError, StreamItem};
use std::sync::Arc;

// What polling one source into its slot produced.
enum SlotPoll {
    Filled,
    Pending,
    Exhausted,
}

fn poll_slot<T>(
    source: &mut BoxItemStream<T>,
    slot: &mut Option<T>,
    cx: &mut Context<'_>,
) -> Result<SlotPoll, RivuletError> {
    if slot.is_some() {
        return Ok(SlotPoll::Filled);
    }
    match source.poll_next_unpin(cx) {
        Poll::Ready(Some(StreamItem::Value(value))) => {
            *slot = Some(value);
            Ok(SlotPoll::Filled)
        }
        Poll::Ready(Some(StreamItem::Error(error))) => Err(error),
        Poll::Ready(None) => Ok(SlotPoll::Exhausted),
        Poll::Pending => Ok(SlotPoll::Pending),
    }
}

impl<T: Send + 'static> Flux<T> {
    /// Zip same-typed `sources`, combining each row of values with `combiner`.
    ///
    /// With no sources the output completes immediately.
    pub fn zip<I, R, F>(sources: I, combiner: F) -> Flux<R>
    where
        I: IntoIterator<Item = Flux<T>>,
        R: Send + 'static,
        F: Fn(Vec<T>) -> R + Send + Sync + 'static,
    {
        let sources: Vec<Flux<T>> = sources.into_iter().collect();
        let combiner: Arc<dyn Fn(Vec<T>) -> R + Send + Sync> = Arc::new(combiner);
        Flux::from_stream_fn(move || ZipStream {
            slots: sources.iter().map(|_| None).collect(),
            sources: sources.iter().map(Flux::to_stream).collect(),
            combiner: Arc::clone(&combiner),
        })
    }

    /// Zip this Flux with `other`, combining each pair with `combiner`.
    pub fn zip_with<U, R, F>(&self, other: &Flux<U>, combiner: F) -> Flux<R>
    where
        U: Send + 'static,
        R: Send + 'static,
        F: Fn(T, U) -> R + Send + Sync + 'static,
    {
        let left = self.clone();
        let right = other.clone();
        let combiner: Arc<dyn Fn(T, U) -> R + Send + Sync> = Arc::new(combiner);
        Flux::from_stream_fn(move || ZipWithStream {
            left: Some(left.to_stream()),
            right: Some(right.to_stream()),
            left_slot: None,
            right_slot: None,
            combiner: Arc::clone(&combiner),
        })
    }
}

struct ZipStream<T, R> {
    sources: Vec<BoxItemStream<T>>,
    slots: Vec<Option<T>>,
    combiner: Arc<dyn Fn(Vec<T>) -> R + Send + Sync>,
}

// Buffered values are never pinned; only the boxed sources are polled.
impl<T, R> Unpin for ZipStream<T, R> {}

impl<T: Send + 'static, R: Send + 'static> Stream for ZipStream<T, R> {
    type Item = StreamItem<R>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.sources.is_empty() {
            return Poll::Ready(None);
        }

        let mut pending = false;
        let mut exhausted = false;
        let mut failure = None;
        for (source, slot) in this.sources.iter_mut().zip(this.slots.iter_mut()) {
            match poll_slot(source, slot, cx) {
                Ok(SlotPoll::Filled) => {}
                Ok(SlotPoll::Pending) => pending = true,
                Ok(SlotPoll::Exhausted) => exhausted = true,
                Err(error) => {
                    failure = Some(error);
                    break;
                }
            }
        }

        if let Some(error) = failure {
            this.sources.clear();
            this.slots.clear();
            return Poll::Ready(Some(StreamItem::Error(error)));
        }
        if exhausted {
            this.sources.clear();
            this.slots.clear();
            return Poll::Ready(None);
        }
        if pending {
            return Poll::Pending;
        }

        let row: Option<Vec<T>> = this.slots.iter_mut().map(Option::take).collect();
        Poll::Ready(row.map(|row| StreamItem::Value((this.combiner)(row))))
    }
}

struct ZipWithStream<T, U, R> {
    left: Option<BoxItemStream<T>>,
    right: Option<BoxItemStream<U>>,
    left_slot: Option<T>,
    right_slot: Option<U>,
    combiner: Arc<dyn Fn(T, U) -> R + Send + Sync>,
}

impl<T, U, R> Unpin for ZipWithStream<T, U, R> {}

impl<T, U, R> ZipWithStream<T, U, R> {
    fn finish(&mut self) {
        self.left = None;
        self.right = None;
    }
}

impl<T, U, R> Stream for ZipWithStream<T, U, R>
where
    T: Send + 'static,
    U: Send + 'static,
    R: Send + 'static,
{
    type Item = StreamItem<R>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        let (Some(left), Some(right)) = (this.left.as_mut(), this.right.as_mut()) else {
            return Poll::Ready(None);
        };

        let polled = poll_slot(left, &mut this.left_slot, cx).and_then(|left_poll| {
            poll_slot(right, &mut this.right_slot, cx).map(|right_poll| (left_poll, right_poll))
        });

        match polled {
            Err(error) => {
                this.finish();
                Poll::Ready(Some(StreamItem::Error(error)))
            }
            Ok((SlotPoll::Exhausted, _) | (_, SlotPoll::Exhausted)) => {
                this.finish();
                Poll::Ready(None)
            }
            Ok((SlotPoll::Filled, SlotPoll::Filled)) => {
                match (this.left_slot.take(), this.right_slot.take()) {
                    (Some(left), Some(right)) => {
                        Poll::Ready(Some(StreamItem::Value((this.combiner)(left, right))))
                    }
                    _ => Poll::Ready(None),
                }
            }
            Ok(_) => Poll::Pending,
        }
    }
}
