// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::flux::Flux;

impl<T: Send + 'static> Flux<T> {
    /// Apply `f` to this whole pipeline.
    ///
    /// Lets a reusable chain of operators be packaged as one function.
    ///
    /// ```
    /// use rivulet_stream::Flux;
    ///
    /// fn shout(names: Flux<&'static str>) -> Flux<String> {
    ///     names.map(str::to_uppercase)
    /// }
    ///
    /// let loud = Flux::from_values(["ben"]).transform(shout);
    /// # drop(loud);
    /// ```
    pub fn transform<R, F>(&self, f: F) -> Flux<R>
    where
        F: FnOnce(Flux<T>) -> Flux<R>,
    {
        f(self.clone())
    }
}
