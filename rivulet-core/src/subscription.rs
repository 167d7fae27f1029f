// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Handle and state machine for one live consumption of a producer.
//!
//! ```text
//! Unsubscribed ──> Active ──> Completed
//!      │             ├──────> Errored
//!      └─────────────┴──────> Cancelled
//! ```
//!
//! Terminal states have no exits. Only the consumer cancels; only the driver
//! activates, completes or fails. Because every transition is a single
//! compare-and-swap, a cancel racing with completion has exactly one winner,
//! and the loser's callback is never delivered.

use crate::cancellation_token::CancellationToken;
use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use event_listener::Event;
use std::sync::Arc;

/// Lifecycle state of a [`Subscription`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SubscriptionState {
    /// Created, production not started yet
    Unsubscribed = 0,
    /// Production running, values may be delivered
    Active = 1,
    /// `on_complete` was delivered
    Completed = 2,
    /// `on_error` was delivered
    Errored = 3,
    /// The consumer cancelled before a terminal signal
    Cancelled = 4,
}

impl SubscriptionState {
    /// Returns `true` for `Completed`, `Errored` and `Cancelled`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Errored | Self::Cancelled)
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Unsubscribed,
            1 => Self::Active,
            2 => Self::Completed,
            3 => Self::Errored,
            _ => Self::Cancelled,
        }
    }
}

/// Cancellation handle for one subscription.
///
/// Cheap to clone; all clones refer to the same subscription. Dropping a
/// handle does not cancel: call [`cancel`](Self::cancel).
#[derive(Clone, Debug)]
pub struct Subscription {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    state: AtomicU8,
    token: CancellationToken,
    // Set once the terminal callback has returned (or on cancellation)
    settled: AtomicBool,
    settled_event: Event,
}

impl Subscription {
    /// Create a handle in the `Unsubscribed` state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                state: AtomicU8::new(SubscriptionState::Unsubscribed as u8),
                token: CancellationToken::new(),
                settled: AtomicBool::new(false),
                settled_event: Event::new(),
            }),
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SubscriptionState {
        SubscriptionState::from_u8(self.inner.state.load(Ordering::Acquire))
    }

    /// Cancel the subscription.
    ///
    /// Returns `true` if this call moved the subscription to `Cancelled`;
    /// `false` if it had already reached a terminal state.
    pub fn cancel(&self) -> bool {
        let cancelled = self.transition(|state| !state.is_terminal(), SubscriptionState::Cancelled);
        if cancelled {
            self.inner.token.cancel();
            self.settle();
        }
        cancelled
    }

    /// Returns `true` once the subscription is `Cancelled`.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.state() == SubscriptionState::Cancelled
    }

    /// Returns `true` while values may still be delivered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state() == SubscriptionState::Active
    }

    /// Returns `true` once any terminal state was reached.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.state().is_terminal()
    }

    /// Token cancelled together with this subscription.
    #[must_use]
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.inner.token
    }

    /// Wait until the subscription has settled and return its final state.
    ///
    /// For `Completed` and `Errored` this resolves after the terminal callback
    /// returned; for `Cancelled`, as soon as `cancel` was called.
    pub async fn terminated(&self) -> SubscriptionState {
        loop {
            if self.inner.settled.load(Ordering::Acquire) {
                return self.state();
            }
            let listener = self.inner.settled_event.listen();
            if self.inner.settled.load(Ordering::Acquire) {
                return self.state();
            }
            listener.await;
        }
    }

    /// `Unsubscribed → Active`. Called by the driver before `on_subscribe`.
    pub fn activate(&self) -> bool {
        self.transition(
            |state| state == SubscriptionState::Unsubscribed,
            SubscriptionState::Active,
        )
    }

    /// `Active → Completed`. The driver delivers `on_complete` only if this returns `true`.
    pub fn try_complete(&self) -> bool {
        self.transition(
            |state| state == SubscriptionState::Active,
            SubscriptionState::Completed,
        )
    }

    /// `Active → Errored`. The driver delivers `on_error` only if this returns `true`.
    pub fn try_fail(&self) -> bool {
        self.transition(
            |state| state == SubscriptionState::Active,
            SubscriptionState::Errored,
        )
    }

    /// Mark the terminal callback as delivered and wake `terminated()` waiters.
    pub fn settle(&self) {
        self.inner.settled.store(true, Ordering::Release);
        self.inner.settled_event.notify(usize::MAX);
    }

    fn transition(
        &self,
        allowed: impl Fn(SubscriptionState) -> bool,
        to: SubscriptionState,
    ) -> bool {
        let mut current = self.inner.state.load(Ordering::Acquire);
        loop {
            if !allowed(SubscriptionState::from_u8(current)) {
                return false;
            }
            match self.inner.state.compare_exchange_weak(
                current,
                to as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(actual) => current = actual,
            }
        }
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::new()
    }
}
