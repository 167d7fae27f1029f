// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::flux::Flux;
use core::time::Duration;
use futures::stream;
use rivulet_core::StreamItem;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

impl Flux<u64> {
    /// Emit `0, 1, 2, ...`, one value per `period`, starting one period after
    /// subscription.
    ///
    /// Never completes on its own; cancel the subscription (or drop the
    /// stream) to stop it. A zero `period` is treated as one millisecond.
    pub fn interval(period: Duration) -> Flux<u64> {
        let period = period.max(Duration::from_millis(1));
        Flux::from_stream_fn(move || {
            stream::unfold(
                (None::<Interval>, 0_u64),
                move |(ticker, tick)| async move {
                    let mut ticker = ticker.unwrap_or_else(|| {
                        let mut ticker = interval_at(Instant::now() + period, period);
                        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                        ticker
                    });
                    ticker.tick().await;
                    Some((StreamItem::Value(tick), (Some(ticker), tick.wrapping_add(1))))
                },
            )
        })
    }
}
