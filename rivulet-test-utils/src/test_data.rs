// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_stream::Flux;
use std::time::Duration;

pub fn names() -> Vec<String> {
    vec!["alex".to_string(), "ben".to_string(), "chloe".to_string()]
}

/// One single-character `String` per character of `text`.
pub fn letters(text: &str) -> Vec<String> {
    text.chars().map(String::from).collect()
}

/// `name` as a Flux of its characters.
pub fn split_chars(name: &str) -> Flux<String> {
    Flux::from_values(letters(name))
}

/// Like [`split_chars`], with each character delayed by `delay`.
pub fn split_chars_delayed(name: &str, delay: Duration) -> Flux<String> {
    split_chars(name).delay_elements(delay)
}
