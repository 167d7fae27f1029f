// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::{ready, Stream};
use pin_project::pin_project;
use rivulet_core::StreamItem;

/// Ends a stream after its first error.
///
/// The inner stream is dropped as soon as the error is yielded, so every
/// upstream stage is released before the consumer even sees the error.
#[pin_project]
pub(crate) struct TerminateOnError<S> {
    #[pin]
    inner: Option<S>,
}

impl<S> TerminateOnError<S> {
    pub(crate) const fn new(inner: S) -> Self {
        Self { inner: Some(inner) }
    }
}

impl<S, T> Stream for TerminateOnError<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        let Some(inner) = this.inner.as_mut().as_pin_mut() else {
            return Poll::Ready(None);
        };

        match ready!(inner.poll_next(cx)) {
            Some(StreamItem::Value(value)) => Poll::Ready(Some(StreamItem::Value(value))),
            Some(StreamItem::Error(error)) => {
                this.inner.set(None);
                Poll::Ready(Some(StreamItem::Error(error)))
            }
            None => {
                this.inner.set(None);
                Poll::Ready(None)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(inner) => (0, inner.size_hint().1),
            None => (0, Some(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{executor::block_on, stream, StreamExt};
    use rivulet_core::RivuletError;

    #[test]
    fn stops_after_first_error() {
        let source = stream::iter(vec![
            StreamItem::Value(1),
            StreamItem::Error(RivuletError::source_error("first")),
            StreamItem::Value(2),
            StreamItem::Error(RivuletError::source_error("second")),
        ]);

        let items: Vec<_> = block_on(TerminateOnError::new(source).collect());

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], StreamItem::Value(1));
        assert!(items[1].is_error());
    }

    #[test]
    fn passes_completion_through() {
        let source = stream::iter(vec![StreamItem::<i32>::Value(1)]);

        let items: Vec<_> = block_on(TerminateOnError::new(source).collect());

        assert_eq!(items, vec![StreamItem::Value(1)]);
    }
}
