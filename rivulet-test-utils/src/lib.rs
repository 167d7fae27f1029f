// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the rivulet workspace.
//!
//! This crate is meant for development and testing only.
//!
//! # Key Types
//!
//! ## `TestSubscriber` / `SignalReader`
//!
//! A subscriber that records every signal it receives, paired with a reader
//! the test uses to assert on them in order:
//!
//! ```rust
//! use rivulet_stream::Flux;
//! use rivulet_test_utils::test_subscriber;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (subscriber, mut reader) = test_subscriber();
//! let _subscription = Flux::from_values([1, 2]).subscribe(subscriber);
//!
//! reader.expect_subscribe().await;
//! assert_eq!(reader.expect_values(2).await, vec![1, 2]);
//! reader.expect_complete().await;
//! # }
//! ```
//!
//! ## Fixtures
//!
//! - [`names`](test_data::names): the `alex`, `ben`, `chloe` name list
//! - [`letters`](test_data::letters): one `String` per character
//! - [`split_chars`](test_data::split_chars) / [`split_chars_delayed`](test_data::split_chars_delayed):
//!   a name as a Flux of its characters
//!
//! ## Helpers
//!
//! - [`collect_values`](helpers::collect_values): every value of a Flux, panicking on error
//! - [`SubscriptionCounter`](helpers::SubscriptionCounter): counts how often a Flux was subscribed
//! - [`ReleaseCounter`](helpers::ReleaseCounter): counts how often a held-open Flux was released

pub mod helpers;
pub mod test_data;
pub mod test_subscriber;

pub use helpers::{collect_values, ReleaseCounter, SubscriptionCounter};
pub use test_subscriber::{test_subscriber, SignalReader, TestSubscriber};
