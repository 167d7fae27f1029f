// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{self, StreamExt};
use rivulet_core::StreamItem;
use rivulet_stream::Flux;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Every value of one fresh subscription of `flux`.
///
/// # Panics
///
/// Panics if `flux` fails, or does not complete within five seconds.
pub async fn collect_values<T: Send + 'static>(flux: &Flux<T>) -> Vec<T> {
    let items: Vec<StreamItem<T>> =
        tokio::time::timeout(Duration::from_secs(5), flux.to_stream().collect())
            .await
            .expect("Flux did not complete in time");

    items
        .into_iter()
        .map(|item| match item {
            StreamItem::Value(value) => value,
            StreamItem::Error(error) => panic!("expected only values, got error: {error}"),
        })
        .collect()
}

/// Counts how many times a wrapped Flux was subscribed.
///
/// ```rust
/// use rivulet_stream::Flux;
/// use rivulet_test_utils::SubscriptionCounter;
///
/// let counter = SubscriptionCounter::new();
/// let observed = counter.wrap(&Flux::from_values([1, 2]));
/// assert_eq!(counter.count(), 0);
/// # drop(observed);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SubscriptionCounter {
    count: Arc<AtomicUsize>,
}

impl SubscriptionCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A Flux that behaves like `flux` and bumps the counter on each subscription.
    pub fn wrap<T: Send + 'static>(&self, flux: &Flux<T>) -> Flux<T> {
        let count = Arc::clone(&self.count);
        let flux = flux.clone();
        Flux::defer(move || {
            count.fetch_add(1, Ordering::SeqCst);
            flux.clone()
        })
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

/// Counts how many subscriptions of a held-open Flux were released.
///
/// [`never_ending`](Self::never_ending) builds a Flux that never emits and
/// bumps the counter when a subscription's stream is dropped, so a test can
/// check that an operator let go of a sibling or inner source.
#[derive(Debug, Clone, Default)]
pub struct ReleaseCounter {
    released: Arc<AtomicUsize>,
}

impl ReleaseCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A Flux that stays pending until its subscription is dropped.
    pub fn never_ending<T: Send + 'static>(&self) -> Flux<T> {
        let released = Arc::clone(&self.released);
        Flux::from_stream_fn(move || {
            let guard = ReleaseGuard(Arc::clone(&released));
            stream::pending::<StreamItem<T>>().map(move |item| {
                let _held = &guard;
                item
            })
        })
    }

    #[must_use]
    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

struct ReleaseGuard(Arc<AtomicUsize>);

impl Drop for ReleaseGuard {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}
