// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod channel_subscriber;
mod logging;
pub mod subscribe;

// Re-export commonly used types
pub use channel_subscriber::{channel_subscriber, ChannelSubscriber};
pub use subscribe::{drive, SubscribeExt};
