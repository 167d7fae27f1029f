// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RivuletError;

/// What one pipeline stage hands to the next: a value or the terminal error.
///
/// A stage forwards at most one `Error` and ends its output right after it.
#[derive(Debug, Clone)]
pub enum StreamItem<T> {
    Value(T),
    Error(RivuletError),
}

// Only values compare; an error is never equal to anything
impl<T: PartialEq> PartialEq for StreamItem<T> {
    fn eq(&self, other: &Self) -> bool {
        matches!((self, other), (Self::Value(a), Self::Value(b)) if a == b)
    }
}

impl<T> StreamItem<T> {
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Transform the value, leaving an error as it is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> StreamItem<U> {
        self.and_then(|value| StreamItem::Value(f(value)))
    }

    /// Replace the value with whatever `f` yields, which may be an error.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> StreamItem<U>) -> StreamItem<U> {
        match self {
            Self::Value(value) => f(value),
            Self::Error(error) => StreamItem::Error(error),
        }
    }
}

impl<T> From<Result<T, RivuletError>> for StreamItem<T> {
    fn from(result: Result<T, RivuletError>) -> Self {
        result.map_or_else(Self::Error, Self::Value)
    }
}

impl<T> From<StreamItem<T>> for Result<T, RivuletError> {
    fn from(item: StreamItem<T>) -> Self {
        match item {
            StreamItem::Value(value) => Ok(value),
            StreamItem::Error(error) => Err(error),
        }
    }
}
