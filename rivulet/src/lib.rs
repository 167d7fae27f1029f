// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # rivulet
//!
//! Cold, push-based asynchronous sequences for Tokio.
//!
//! A pipeline is built from a producer ([`Flux`] for many values, [`Solo`]
//! for at most one) and a chain of operators. Building it does nothing:
//! work starts when a [`Subscriber`] subscribes, and every subscription runs
//! the whole chain afresh. The returned [`Subscription`] cancels that run.
//!
//! ```
//! use rivulet::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> rivulet::Result<()> {
//! let letters = Flux::from_values(["alex", "ben", "chloe"])
//!     .map(str::to_uppercase)
//!     .filter(|name| name.len() > 3)
//!     .concat_map(|name| Flux::from_values(name.chars().collect::<Vec<_>>()));
//!
//! let collected = letters.collect_list().resolve().await?;
//! assert_eq!(collected, Some("ALEXCHLOE".chars().collect()));
//! # Ok(())
//! # }
//! ```
//!
//! ## Crates
//!
//! - `rivulet-core`: items, errors, subscribers and the subscription state machine
//! - `rivulet-exec`: the driver that pushes a stream into a subscriber
//! - `rivulet-stream`: `Flux`, `Solo` and their operators

// Re-export core types
pub use rivulet_core::{
    CancellationToken, Emission, IntoRivuletError, LambdaSubscriber, Result, ResultExt,
    RivuletError, Signal, StreamItem, Subscriber, Subscription, SubscriptionState,
};

// Re-export the producers
pub use rivulet_stream::{BoxItemFuture, BoxItemStream, Flux, Solo};

// Re-export the driver
pub use rivulet_exec::{channel_subscriber, drive, ChannelSubscriber, SubscribeExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use rivulet_exec::SubscribeExt;
    pub use rivulet_stream::prelude::*;
}
