// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use rivulet_core::{StreamItem, SubscriptionState};
use rivulet_stream::Flux;
use rivulet_test_utils::{collect_values, test_subscriber};
use std::time::{Duration, Instant};
use tokio::time::timeout;

#[tokio::test]
async fn test_interval_counts_from_zero() -> anyhow::Result<()> {
    // Arrange
    let flux = Flux::interval(Duration::from_millis(10)).take(4);

    // Act
    let values = collect_values(&flux).await;

    // Assert
    assert_eq!(values, vec![0, 1, 2, 3]);

    Ok(())
}

#[tokio::test]
async fn test_interval_first_value_after_one_period() -> anyhow::Result<()> {
    // Arrange
    let flux = Flux::interval(Duration::from_millis(40));
    let mut stream = flux.to_stream();

    // Act
    let started = Instant::now();
    let first = timeout(Duration::from_secs(1), stream.next()).await?;

    // Assert
    assert_eq!(first, Some(StreamItem::Value(0)));
    assert!(started.elapsed() >= Duration::from_millis(35));

    Ok(())
}

#[tokio::test]
async fn test_interval_stops_only_on_cancel() -> anyhow::Result<()> {
    // Arrange
    let flux = Flux::interval(Duration::from_millis(10));
    let (subscriber, mut reader) = test_subscriber();

    // Act
    let subscription = flux.subscribe(subscriber);
    reader.expect_subscribe().await;
    let values = reader.expect_values(4).await;
    subscription.cancel();
    let state = timeout(Duration::from_secs(1), subscription.terminated()).await?;

    // Assert
    assert_eq!(values, vec![0, 1, 2, 3]);
    assert_eq!(state, SubscriptionState::Cancelled);
    reader.assert_no_emission(50).await;

    Ok(())
}

#[tokio::test]
async fn test_each_subscription_restarts_the_count() -> anyhow::Result<()> {
    // Arrange
    let flux = Flux::interval(Duration::from_millis(5)).take(2);

    // Act
    let first = collect_values(&flux).await;
    let second = collect_values(&flux).await;

    // Assert
    assert_eq!(first, vec![0, 1]);
    assert_eq!(second, vec![0, 1]);

    Ok(())
}
