// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::flux::Flux;
use core::time::Duration;
use futures::StreamExt;

impl<T: Send + 'static> Flux<T> {
    /// Delay each value by `delay` before emitting it.
    ///
    /// Delays are sequential, so the spacing between values is at least
    /// `delay`. Errors and completion are not delayed.
    pub fn delay_elements(&self, delay: Duration) -> Flux<T> {
        let source = self.clone();
        Flux::from_stream_fn(move || {
            source.to_stream().then(move |item| async move {
                if item.is_value() {
                    tokio::time::sleep(delay).await;
                }
                item
            })
        })
    }
}
