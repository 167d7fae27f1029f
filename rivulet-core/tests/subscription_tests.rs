// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Emission, RivuletError, Signal, Subscription, SubscriptionState};
use std::time::Duration;
use tokio::time::{sleep, timeout};

#[test]
fn test_lifecycle_unsubscribed_active_completed() {
    let subscription = Subscription::new();
    assert_eq!(subscription.state(), SubscriptionState::Unsubscribed);

    assert!(subscription.activate());
    assert!(subscription.is_active());

    assert!(subscription.try_complete());
    assert_eq!(subscription.state(), SubscriptionState::Completed);
    assert!(subscription.is_terminated());
}

#[test]
fn test_cancel_wins_over_late_completion() {
    let subscription = Subscription::new();
    subscription.activate();

    assert!(subscription.cancel());

    assert!(!subscription.try_complete());
    assert!(!subscription.try_fail());
    assert!(subscription.is_cancelled());
}

#[test]
fn test_cancel_after_error_is_a_no_op() {
    let subscription = Subscription::new();
    subscription.activate();
    subscription.try_fail();

    assert!(!subscription.cancel());
    assert_eq!(subscription.state(), SubscriptionState::Errored);
    assert!(!subscription.cancellation_token().is_cancelled());
}

#[test]
fn test_clones_share_state() {
    let subscription = Subscription::new();
    let handle = subscription.clone();

    handle.cancel();

    assert!(subscription.is_cancelled());
}

#[tokio::test]
async fn test_terminated_waits_for_settle() -> anyhow::Result<()> {
    // Arrange
    let subscription = Subscription::new();
    subscription.activate();
    let waiter = {
        let subscription = subscription.clone();
        tokio::spawn(async move { subscription.terminated().await })
    };

    // Act
    subscription.try_complete();
    sleep(Duration::from_millis(10)).await;
    assert!(!waiter.is_finished(), "must wait until the callback returned");
    subscription.settle();

    // Assert
    let state = timeout(Duration::from_millis(500), waiter).await??;
    assert_eq!(state, SubscriptionState::Completed);

    Ok(())
}

#[tokio::test]
async fn test_terminated_resolves_on_cancel() -> anyhow::Result<()> {
    let subscription = Subscription::new();
    subscription.activate();

    subscription.cancel();

    let state = timeout(Duration::from_millis(100), subscription.terminated()).await?;
    assert_eq!(state, SubscriptionState::Cancelled);

    Ok(())
}

#[test]
fn test_signal_display_and_equality() {
    let next: Signal<&str> = Signal::Next("A");
    assert_eq!(next.to_string(), "onNext(\"A\")");
    assert_eq!(Signal::<i32>::Complete.to_string(), "onComplete");

    let a: Signal<i32> = Signal::Error(RivuletError::source_error("bad"));
    let b: Signal<i32> = Signal::Error(RivuletError::source_error("bad"));
    assert_eq!(a, b);
    assert!(a.is_terminal());
    assert!(!Signal::<i32>::Subscribe.is_terminal());

    let emission = Emission::new(1, Signal::Next(5));
    assert_eq!(emission.signal.into_value(), Some(5));
}
