// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::flux::Flux;
use futures::stream;

impl<T: Send + 'static> Flux<T> {
    /// Subscribe to all `sources` at once and emit their values by arrival.
    ///
    /// Each source keeps its own order. Completes when every source has
    /// completed; the first error terminates the output and drops the rest.
    pub fn merge<I>(sources: I) -> Flux<T>
    where
        I: IntoIterator<Item = Flux<T>>,
    {
        let sources: Vec<Flux<T>> = sources.into_iter().collect();
        Flux::from_stream_fn(move || stream::select_all(sources.iter().map(Flux::to_stream)))
    }

    /// Merge this Flux with `other`.
    pub fn merge_with(&self, other: &Flux<T>) -> Flux<T> {
        Flux::merge([self.clone(), other.clone()])
    }
}
