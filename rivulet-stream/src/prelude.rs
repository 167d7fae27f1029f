// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Everything needed to build and consume pipelines:
//!
//! ```
//! use rivulet_stream::prelude::*;
//!
//! let _letters: Flux<char> = Flux::from_values("ABC".chars().collect::<Vec<_>>());
//! ```

pub use crate::flux::{BoxItemStream, Flux};
pub use crate::solo::{BoxItemFuture, Solo};
pub use rivulet_core::{
    LambdaSubscriber, RivuletError, StreamItem, Subscriber, Subscription, SubscriptionState,
};
