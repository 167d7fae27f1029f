// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types shared by every rivulet crate.
//!
//! - [`StreamItem<T>`]: a value or a terminal error flowing through a pipeline
//! - [`RivuletError`]: the error taxonomy (source, user and processing failures)
//! - [`Subscriber<T>`]: the push-based consumer interface
//! - [`Subscription`]: the handle for one live consumption, with cancellation
//! - [`Signal<T>`] / [`Emission<T>`]: records of what a subscriber observed

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cancellation_token;
pub mod error;
mod logging;
pub mod signal;
pub mod stream_item;
pub mod subscriber;
pub mod subscription;

pub use self::cancellation_token::CancellationToken;
pub use self::error::{IntoRivuletError, Result, ResultExt, RivuletError};
pub use self::signal::{Emission, Signal};
pub use self::stream_item::StreamItem;
pub use self::subscriber::{LambdaSubscriber, Subscriber};
pub use self::subscription::{Subscription, SubscriptionState};
