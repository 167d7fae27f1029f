// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Name pipelines demonstrating each operator.
//!
//! Every method builds a fresh, unsubscribed producer over the names
//! `alex`, `ben` and `chloe` (or over letter sources for the combinators).
//! Nothing runs until the caller subscribes.

use rivulet::{Flux, Solo};
use std::time::Duration;

const NAMES: [&str; 3] = ["alex", "ben", "chloe"];
const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(1000);

/// Builds the demo pipelines.
#[derive(Debug, Clone, Copy)]
pub struct NameService {
    max_delay: Duration,
}

impl Default for NameService {
    fn default() -> Self {
        Self::new()
    }
}

impl NameService {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_max_delay(DEFAULT_MAX_DELAY)
    }

    /// Bound the random per-letter delay of the delayed pipelines.
    #[must_use]
    pub const fn with_max_delay(max_delay: Duration) -> Self {
        Self { max_delay }
    }

    pub fn names_flux(&self) -> Flux<String> {
        Flux::from_values(NAMES.map(String::from)).log("names_flux")
    }

    pub fn name_solo(&self) -> Solo<String> {
        Solo::single("alex".to_string()).log("name_solo")
    }

    pub fn names_flux_map(&self) -> Flux<String> {
        self.upper_names().log("names_flux_map")
    }

    /// Upper-cased names longer than `min_len`.
    pub fn names_flux_filter(&self, min_len: usize) -> Flux<String> {
        self.long_names(min_len).log("names_flux_filter")
    }

    /// The letters of every name longer than `min_len`, merged by arrival.
    pub fn names_flux_flat_map(&self, min_len: usize) -> Flux<String> {
        self.long_names(min_len)
            .flat_map(|name| split(&name))
            .log("names_flux_flat_map")
    }

    /// Like [`names_flux_flat_map`](Self::names_flux_flat_map), with a random
    /// per-name delay between letters, so letters of different names interleave.
    pub fn names_flux_flat_map_delay(&self, min_len: usize) -> Flux<String> {
        let max_delay = self.max_delay;
        self.long_names(min_len)
            .flat_map(move |name| split_random_delay(&name, max_delay))
            .log("names_flux_flat_map_delay")
    }

    /// Like [`names_flux_flat_map_delay`](Self::names_flux_flat_map_delay), but
    /// letters keep the order of the names.
    pub fn names_flux_concat_map(&self, min_len: usize) -> Flux<String> {
        let max_delay = self.max_delay;
        self.long_names(min_len)
            .concat_map(move |name| split_random_delay(&name, max_delay))
            .log("names_flux_concat_map")
    }

    /// The letters of `alex`, collected into one list.
    pub fn names_solo_flat_map_filter(&self, min_len: usize) -> Solo<Vec<String>> {
        self.upper_name(min_len)
            .flat_map(|name| split(&name).collect_list())
            .log("names_solo_flat_map_filter")
    }

    /// The letters of `alex`, one per value.
    pub fn names_solo_flat_map_many(&self, min_len: usize) -> Flux<String> {
        self.upper_name(min_len)
            .flat_map_many(|name| split(&name))
            .log("names_solo_flat_map_many")
    }

    /// Letters of the long names, or `default` when none qualifies.
    pub fn names_flux_transform(&self, min_len: usize) -> Flux<String> {
        Flux::from_values(NAMES.map(String::from))
            .transform(move |names| upper_longer_than(names, min_len))
            .flat_map(|name| split(&name))
            .default_if_empty("default".to_string())
            .log("names_flux_transform")
    }

    /// Letters of the long names, or the letters of `DEFAULT` when none qualifies.
    pub fn names_flux_transform_switch_if_empty(&self, min_len: usize) -> Flux<String> {
        let fallback = Flux::just("default".to_string())
            .transform(move |names| upper_longer_than(names, min_len))
            .flat_map(|name| split(&name));

        Flux::from_values(NAMES.map(String::from))
            .transform(move |names| upper_longer_than(names, min_len))
            .flat_map(|name| split(&name))
            .switch_if_empty(&fallback)
            .log("names_flux_transform_switch_if_empty")
    }

    pub fn explore_concat(&self) -> Flux<String> {
        Flux::concat([letters("ABC"), letters("DEF")]).log("explore_concat")
    }

    pub fn explore_concat_with(&self) -> Flux<String> {
        letters("ABC")
            .concat_with(&letters("DEF"))
            .log("explore_concat_with")
    }

    /// `ABC` and `DEF` with different delays, merged by arrival.
    pub fn explore_merge(&self) -> Flux<String> {
        Flux::merge([
            letters("ABC").delay_elements(Duration::from_millis(100)),
            letters("DEF").delay_elements(Duration::from_millis(125)),
        ])
        .log("explore_merge")
    }

    pub fn explore_merge_with(&self) -> Flux<String> {
        letters("ABC")
            .delay_elements(Duration::from_millis(100))
            .merge_with(&letters("DEF").delay_elements(Duration::from_millis(125)))
            .log("explore_merge_with")
    }

    /// Both sources run at once, yet all of `ABC` precedes `DEF`.
    pub fn explore_merge_sequential(&self) -> Flux<String> {
        Flux::merge_sequential([
            letters("ABC").delay_elements(Duration::from_millis(100)),
            letters("DEF").delay_elements(Duration::from_millis(125)),
        ])
        .log("explore_merge_sequential")
    }

    pub fn explore_zip(&self) -> Flux<String> {
        Flux::zip([letters("ABC"), letters("DEF")], |row| row.concat()).log("explore_zip")
    }

    pub fn explore_zip4(&self) -> Flux<String> {
        Flux::zip(
            [letters("ABC"), letters("DEF"), letters("123"), letters("456")],
            |row| row.concat(),
        )
        .log("explore_zip4")
    }

    pub fn explore_zip_with(&self) -> Flux<String> {
        letters("ABC")
            .zip_with(&letters("DEF"), |left, right| left + &right)
            .log("explore_zip_with")
    }

    pub fn explore_zip_with_solo(&self) -> Solo<String> {
        Solo::single("A".to_string())
            .zip_with(&Solo::single("D".to_string()), |left, right| left + &right)
            .log("explore_zip_with_solo")
    }

    fn upper_names(&self) -> Flux<String> {
        Flux::from_values(NAMES.map(String::from)).map(|name| name.to_uppercase())
    }

    fn long_names(&self, min_len: usize) -> Flux<String> {
        self.upper_names().filter(move |name| name.len() > min_len)
    }

    fn upper_name(&self, min_len: usize) -> Solo<String> {
        Solo::single("alex".to_string())
            .map(|name| name.to_uppercase())
            .filter(move |name| name.len() > min_len)
    }
}

fn upper_longer_than(names: Flux<String>, min_len: usize) -> Flux<String> {
    names
        .map(|name| name.to_uppercase())
        .filter(move |name| name.len() > min_len)
}

fn letters(text: &str) -> Flux<String> {
    Flux::from_values(text.chars().map(String::from).collect::<Vec<_>>())
}

fn split(name: &str) -> Flux<String> {
    letters(name)
}

// One random delay per name, applied to each of its letters.
fn split_random_delay(name: &str, max_delay: Duration) -> Flux<String> {
    let max_millis = u64::try_from(max_delay.as_millis()).unwrap_or(u64::MAX);
    let delay = Duration::from_millis(fastrand::u64(0..=max_millis));
    split(name).delay_elements(delay)
}
