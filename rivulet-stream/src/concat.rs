// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::flux::Flux;
use futures::stream::{self, StreamExt};

impl<T: Send + 'static> Flux<T> {
    /// Play `sources` one after another.
    ///
    /// A source is subscribed only after the previous one completed; an error
    /// ends the chain and later sources are never subscribed.
    pub fn concat<I>(sources: I) -> Flux<T>
    where
        I: IntoIterator<Item = Flux<T>>,
    {
        let sources: Vec<Flux<T>> = sources.into_iter().collect();
        Flux::from_stream_fn(move || {
            stream::iter(sources.clone()).flat_map(|source| source.to_stream())
        })
    }

    /// Play `other` after this Flux completes.
    pub fn concat_with(&self, other: &Flux<T>) -> Flux<T> {
        Flux::concat([self.clone(), other.clone()])
    }
}
