// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cold, push-based async sequences with lazy, composable operators.
//!
//! Two producer types live here:
//!
//! - [`Flux<T>`]: zero or more ordered values, then completion or one error
//! - [`Solo<T>`]: at most one value, then completion or one error
//!
//! Both are cold: building a pipeline does no work, and each subscription
//! triggers its own independent execution of the whole chain. Operators never
//! mutate their receiver; they return a new producer.
//!
//! ## Operator Categories
//!
//! ### Construction
//!
//! - [`Flux::from_values`], [`Flux::just`], [`Flux::empty`], [`Flux::error`], [`Flux::defer`]
//! - [`Flux::interval`]: an infinite tick source
//! - [`Solo::single`], [`Solo::empty`], [`Solo::error`], [`Solo::defer`]
//!
//! ### Transformation
//!
//! - [`map`](Flux::map), [`try_map`](Flux::try_map), [`filter`](Flux::filter)
//! - [`flat_map`](Flux::flat_map): inners interleaved by arrival
//! - [`concat_map`](Flux::concat_map): inners strictly in input order
//! - [`transform`](Flux::transform): reuse a whole chain
//! - [`switch_if_empty`](Flux::switch_if_empty), [`default_if_empty`](Flux::default_if_empty)
//! - [`delay_elements`](Flux::delay_elements), [`take`](Flux::take)
//!
//! ### Combination
//!
//! | Operator | Subscribes | Output order |
//! |----------|------------|--------------|
//! | [`Flux::concat`] | one source at a time | source by source |
//! | [`Flux::merge`] | all at once | by arrival |
//! | [`Flux::merge_sequential`] | all at once | source by source |
//! | [`Flux::zip`] | all at once | one row per position |
//!
//! ### Consumption
//!
//! - [`Flux::subscribe`] / [`Solo::subscribe`]: push into a
//!   [`Subscriber`](rivulet_core::Subscriber), returning a
//!   [`Subscription`](rivulet_core::Subscription)
//! - [`Flux::to_stream`]: pull through a `futures::Stream`
//! - [`Solo::resolve`]: await the outcome
//!
//! # Errors
//!
//! An error is always terminal: it is the last signal a subscription sees,
//! and the stages above it are dropped as it passes.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
mod concat;
mod concat_map;
mod delay_elements;
mod flat_map;
pub mod flux;
mod interval;
mod log;
mod logging;
mod map;
mod merge;
mod merge_sequential;
pub mod prelude;
pub mod solo;
mod switch_if_empty;
mod terminate_on_error;
mod transform;
mod zip;

pub use self::flux::{BoxItemStream, Flux};
pub use self::solo::{BoxItemFuture, Solo};
