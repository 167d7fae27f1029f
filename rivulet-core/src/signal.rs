// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RivuletError;
use core::fmt;

/// One callback observed by a subscriber.
///
/// A well-formed trace is `Subscribe`, any number of `Next`, then exactly one
/// of `Complete` or `Error`. A cancelled subscription ends without a terminal
/// signal.
#[derive(Debug, Clone)]
pub enum Signal<T> {
    /// `on_subscribe` was called
    Subscribe,
    /// `on_next` was called with this value
    Next(T),
    /// `on_complete` was called
    Complete,
    /// `on_error` was called with this cause
    Error(RivuletError),
}

impl<T> Signal<T> {
    /// Returns `true` for `Complete` and `Error`.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Signal::Complete | Signal::Error(_))
    }

    /// The callback name, as it appears in emission traces.
    pub const fn kind(&self) -> &'static str {
        match self {
            Signal::Subscribe => "onSubscribe",
            Signal::Next(_) => "onNext",
            Signal::Complete => "onComplete",
            Signal::Error(_) => "onError",
        }
    }

    /// Returns the value carried by `Next`.
    pub fn into_value(self) -> Option<T> {
        match self {
            Signal::Next(value) => Some(value),
            _ => None,
        }
    }
}

// Errors compare by message so traces can be asserted whole
impl<T: PartialEq> PartialEq for Signal<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Signal::Subscribe, Signal::Subscribe) | (Signal::Complete, Signal::Complete) => true,
            (Signal::Next(a), Signal::Next(b)) => a == b,
            (Signal::Error(a), Signal::Error(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Next(value) => write!(f, "onNext({value:?})"),
            Signal::Error(error) => write!(f, "onError({error})"),
            other => f.write_str(other.kind()),
        }
    }
}

/// A [`Signal`] together with its position in the subscription's trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Emission<T> {
    /// Zero-based position; `Subscribe` is always at 0
    pub position: usize,
    /// What was observed
    pub signal: Signal<T>,
}

impl<T> Emission<T> {
    /// Pair a signal with its position.
    pub const fn new(position: usize, signal: Signal<T>) -> Self {
        Self { position, signal }
    }
}
