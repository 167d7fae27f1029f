// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-element transforms: [`map`](Flux::map), [`try_map`](Flux::try_map) and
//! [`filter`](Flux::filter).
//!
//! All three are stateless and preserve the order of the values they keep.
//! Errors pass through untouched.

use crate::flux::Flux;
use futures::future::ready;
use futures::StreamExt;
use rivulet_core::{IntoRivuletError, StreamItem};
use std::sync::Arc;

impl<T: Send + 'static> Flux<T> {
    /// Emit `f(value)` for each value, one to one.
    pub fn map<R, F>(&self, f: F) -> Flux<R>
    where
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        let source = self.clone();
        let f = Arc::new(f);
        Flux::from_stream_fn(move || {
            let f = Arc::clone(&f);
            source.to_stream().map(move |item| item.map(|value| f(value)))
        })
    }

    /// Emit `f(value)` for each value; the first `Err` terminates the Flux.
    ///
    /// The failure is delivered as a
    /// [`RivuletError::UserError`](rivulet_core::RivuletError::UserError) and
    /// upstream is cancelled.
    ///
    /// # Example
    ///
    /// ```
    /// use rivulet_stream::Flux;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let parsed = Flux::from_values(["1", "2", "x", "4"]).try_map(|raw| raw.parse::<u32>());
    ///
    /// let error = parsed.collect_list().resolve().await.unwrap_err();
    /// assert!(error.is_user_error());
    /// # }
    /// ```
    pub fn try_map<R, E, F>(&self, f: F) -> Flux<R>
    where
        R: Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + 'static,
    {
        let source = self.clone();
        let f = Arc::new(f);
        Flux::from_stream_fn(move || {
            let f = Arc::clone(&f);
            source.to_stream().map(move |item| {
                item.and_then(|value| match f(value) {
                    Ok(mapped) => StreamItem::Value(mapped),
                    Err(error) => StreamItem::Error(error.into_rivulet()),
                })
            })
        })
    }

    /// Emit only the values for which `predicate` holds.
    pub fn filter<P>(&self, predicate: P) -> Flux<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let source = self.clone();
        let predicate = Arc::new(predicate);
        Flux::from_stream_fn(move || {
            let predicate = Arc::clone(&predicate);
            source.to_stream().filter(move |item| {
                ready(match item {
                    StreamItem::Value(value) => predicate(value),
                    StreamItem::Error(_) => true,
                })
            })
        })
    }
}
