// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The single-valued cold producer.
//!
//! A [`Solo<T>`] yields at most one value: it resolves to a value, to nothing
//! (empty), or to an error. Like [`Flux`], it owns a factory and does no work
//! until subscribed or resolved.

use crate::flux::Flux;
use crate::logging::info;
use core::fmt;
use core::future::Future;
use futures::future::{ready, BoxFuture, FutureExt};
use futures::stream::{self, StreamExt};
use rivulet_core::{
    IntoRivuletError, Result, RivuletError, StreamItem, Subscriber, Subscription,
};
use std::sync::Arc;

/// The outcome of one subscription: `None` when the Solo is empty.
pub type BoxItemFuture<T> = BoxFuture<'static, Option<StreamItem<T>>>;

type FutureFactory<T> = dyn Fn() -> BoxItemFuture<T> + Send + Sync;

/// A cold producer of at most one value.
#[must_use = "a Solo does nothing until it is subscribed"]
pub struct Solo<T> {
    factory: Arc<FutureFactory<T>>,
}

impl<T> Clone for Solo<T> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<T> fmt::Debug for Solo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solo").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Solo<T> {
    /// Build a Solo from a per-subscription future factory.
    pub fn from_future_fn<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<StreamItem<T>>> + Send + 'static,
    {
        Self {
            factory: Arc::new(move || factory().boxed()),
        }
    }

    /// Emit `value`, then complete.
    pub fn single(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::from_future_fn(move || ready(Some(StreamItem::Value(value.clone()))))
    }

    /// Complete without a value.
    pub fn empty() -> Self {
        Self::from_future_fn(|| ready(None))
    }

    /// Fail every subscription with `error`.
    pub fn error(error: RivuletError) -> Self {
        Self::from_future_fn(move || ready(Some(StreamItem::Error(error.clone()))))
    }

    /// Call `supplier` at subscription time and resolve to what the returned Solo resolves to.
    pub fn defer<F>(supplier: F) -> Self
    where
        F: Fn() -> Solo<T> + Send + Sync + 'static,
    {
        Self::from_future_fn(move || supplier().to_future())
    }

    /// Open a fresh subscription as a future.
    pub fn to_future(&self) -> BoxItemFuture<T> {
        (self.factory)()
    }

    /// Await a fresh subscription.
    ///
    /// `Ok(None)` means the Solo completed empty.
    pub fn resolve(&self) -> impl Future<Output = Result<Option<T>>> + Send + 'static {
        let outcome = self.to_future();
        async move {
            match outcome.await {
                Some(StreamItem::Value(value)) => Ok(Some(value)),
                Some(StreamItem::Error(error)) => Err(error),
                None => Ok(None),
            }
        }
    }

    /// Subscribe `subscriber` and start producing on the Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn subscribe<S>(&self, subscriber: S) -> Subscription
    where
        S: Subscriber<T>,
    {
        self.into_flux().subscribe(subscriber)
    }

    /// View this Solo as a Flux of zero or one value.
    pub fn into_flux(&self) -> Flux<T> {
        let source = self.clone();
        Flux::from_stream_fn(move || stream::once(source.to_future()).filter_map(ready))
    }

    /// Resolve to `f(value)`; empty and error outcomes pass through.
    pub fn map<R, F>(&self, f: F) -> Solo<R>
    where
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        let source = self.clone();
        let f = Arc::new(f);
        Solo::from_future_fn(move || {
            let outcome = source.to_future();
            let f = Arc::clone(&f);
            async move { outcome.await.map(|item| item.map(|value| f(value))) }
        })
    }

    /// Like [`map`](Self::map), but `f` may fail; a failure becomes a user error.
    pub fn try_map<R, E, F>(&self, f: F) -> Solo<R>
    where
        R: Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
        F: Fn(T) -> core::result::Result<R, E> + Send + Sync + 'static,
    {
        let source = self.clone();
        let f = Arc::new(f);
        Solo::from_future_fn(move || {
            let outcome = source.to_future();
            let f = Arc::clone(&f);
            async move {
                outcome.await.map(|item| {
                    item.and_then(|value| match f(value) {
                        Ok(mapped) => StreamItem::Value(mapped),
                        Err(error) => StreamItem::Error(error.into_rivulet()),
                    })
                })
            }
        })
    }

    /// Keep the value only if `predicate` holds; otherwise complete empty.
    pub fn filter<P>(&self, predicate: P) -> Solo<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let source = self.clone();
        let predicate = Arc::new(predicate);
        Solo::from_future_fn(move || {
            let outcome = source.to_future();
            let predicate = Arc::clone(&predicate);
            async move {
                match outcome.await {
                    Some(StreamItem::Value(value)) if !predicate(&value) => None,
                    other => other,
                }
            }
        })
    }

    /// Chain into the Solo returned by `f`.
    pub fn flat_map<R, F>(&self, f: F) -> Solo<R>
    where
        R: Send + 'static,
        F: Fn(T) -> Solo<R> + Send + Sync + 'static,
    {
        let source = self.clone();
        let f = Arc::new(f);
        Solo::from_future_fn(move || {
            let outcome = source.to_future();
            let f = Arc::clone(&f);
            async move {
                match outcome.await {
                    Some(StreamItem::Value(value)) => f(value).to_future().await,
                    Some(StreamItem::Error(error)) => Some(StreamItem::Error(error)),
                    None => None,
                }
            }
        })
    }

    /// Expand the value into the Flux returned by `f`.
    ///
    /// An empty Solo gives an empty Flux; an error gives an error Flux.
    pub fn flat_map_many<R, F>(&self, f: F) -> Flux<R>
    where
        R: Send + 'static,
        F: Fn(T) -> Flux<R> + Send + Sync + 'static,
    {
        self.into_flux().concat_map(f)
    }

    /// Combine with `other` once both resolve; empty if either is empty.
    pub fn zip_with<U, R, F>(&self, other: &Solo<U>, combiner: F) -> Solo<R>
    where
        U: Send + 'static,
        R: Send + 'static,
        F: Fn(T, U) -> R + Send + Sync + 'static,
    {
        self.into_flux()
            .zip_with(&other.into_flux(), combiner)
            .next()
    }

    /// Resolve to `value` if this Solo completes empty.
    pub fn default_if_empty(&self, value: T) -> Solo<T>
    where
        T: Clone + Sync,
    {
        self.switch_if_empty(&Solo::single(value))
    }

    /// Resolve through `alternative` if this Solo completes empty.
    ///
    /// `alternative` is only subscribed in that case.
    pub fn switch_if_empty(&self, alternative: &Solo<T>) -> Solo<T> {
        let source = self.clone();
        let alternative = alternative.clone();
        Solo::from_future_fn(move || {
            let outcome = source.to_future();
            let alternative = alternative.clone();
            async move {
                match outcome.await {
                    None => alternative.to_future().await,
                    resolved => resolved,
                }
            }
        })
    }

    /// Apply `f` to this whole pipeline.
    pub fn transform<R, F>(&self, f: F) -> Solo<R>
    where
        F: FnOnce(Solo<T>) -> Solo<R>,
    {
        f(self.clone())
    }

    /// Log every signal of each subscription under `category`.
    pub fn log(&self, category: impl Into<String>) -> Solo<T>
    where
        T: fmt::Debug,
    {
        let source = self.clone();
        let category: Arc<str> = Arc::from(category.into());
        Solo::from_future_fn(move || {
            info!("[{}] onSubscribe", category);
            let outcome = source.to_future();
            let mut guard = CancelGuard::new(Arc::clone(&category));
            async move {
                let resolved = outcome.await;
                guard.disarm();
                match &resolved {
                    Some(StreamItem::Value(value)) => {
                        info!("[{}] onNext({:?})", guard.category, value);
                        info!("[{}] onComplete", guard.category);
                    }
                    Some(StreamItem::Error(error)) => {
                        info!("[{}] onError({})", guard.category, error);
                    }
                    None => info!("[{}] onComplete", guard.category),
                }
                resolved
            }
        })
    }
}

// Logs `cancel` if the future is dropped before it resolves.
struct CancelGuard {
    category: Arc<str>,
    armed: bool,
}

impl CancelGuard {
    fn new(category: Arc<str>) -> Self {
        Self {
            category,
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        if self.armed {
            info!("[{}] cancel", self.category);
        }
    }
}
