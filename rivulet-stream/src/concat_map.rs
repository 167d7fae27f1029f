// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::flux::Flux;
use futures::future::ready;
use futures::stream::{self, StreamExt};
use rivulet_core::StreamItem;
use std::sync::Arc;

impl<T: Send + 'static> Flux<T> {
    /// Map each value to an inner Flux and play the inners one after another.
    ///
    /// The inner for a value is subscribed only after the previous inner has
    /// completed, so the output order follows the input order exactly.
    pub fn concat_map<R, F>(&self, f: F) -> Flux<R>
    where
        R: Send + 'static,
        F: Fn(T) -> Flux<R> + Send + Sync + 'static,
    {
        let source = self.clone();
        let f = Arc::new(f);
        Flux::from_stream_fn(move || {
            let f = Arc::clone(&f);
            source
                .to_stream()
                .map(move |item| match item {
                    StreamItem::Value(value) => f(value).to_stream(),
                    StreamItem::Error(error) => {
                        stream::once(ready(StreamItem::Error(error))).boxed()
                    }
                })
                .flatten()
        })
    }
}
