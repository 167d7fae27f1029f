// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use rivulet_core::{RivuletError, SubscriptionState};
use rivulet_stream::Flux;
use rivulet_test_utils::{test_subscriber, ReleaseCounter};
use std::time::Duration;
use tokio::time::{sleep, timeout};

async fn wait_for_release(counter: &ReleaseCounter, expected: usize) -> anyhow::Result<()> {
    timeout(Duration::from_secs(1), async {
        while counter.released() < expected {
            sleep(Duration::from_millis(5)).await;
        }
    })
    .await?;
    Ok(())
}

#[tokio::test]
async fn test_merge_error_releases_sibling() -> anyhow::Result<()> {
    // Arrange
    let counter = ReleaseCounter::new();
    let flux = Flux::merge([
        counter.never_ending::<String>(),
        Flux::error(RivuletError::source_error("down")),
    ]);
    let (subscriber, mut signals) = test_subscriber();

    // Act
    let _subscription = flux.subscribe(subscriber);

    // Assert
    signals.expect_subscribe().await;
    let error = signals.expect_error().await;
    assert!(error.is_source_error());
    assert_eq!(counter.released(), 1);

    Ok(())
}

#[tokio::test]
async fn test_flat_map_cancel_releases_every_inner() -> anyhow::Result<()> {
    // Arrange
    let counter = ReleaseCounter::new();
    let flux = {
        let counter = counter.clone();
        Flux::from_values([1, 2, 3]).flat_map(move |_| counter.never_ending::<i32>())
    };
    let (subscriber, mut signals) = test_subscriber();

    // Act
    let subscription = flux.subscribe(subscriber);
    signals.expect_subscribe().await;
    signals.assert_no_emission(20).await;
    assert_eq!(counter.released(), 0);
    assert!(subscription.cancel());
    let state = timeout(Duration::from_secs(1), subscription.terminated()).await?;

    // Assert
    assert_eq!(state, SubscriptionState::Cancelled);
    wait_for_release(&counter, 3).await?;
    assert_eq!(counter.released(), 3);

    Ok(())
}

#[tokio::test]
async fn test_merge_cancel_releases_every_source() -> anyhow::Result<()> {
    // Arrange
    let counter = ReleaseCounter::new();
    let flux = counter
        .never_ending::<i32>()
        .merge_with(&counter.never_ending());
    let (subscriber, mut signals) = test_subscriber();

    // Act
    let subscription = flux.subscribe(subscriber);
    signals.expect_subscribe().await;
    subscription.cancel();

    // Assert
    wait_for_release(&counter, 2).await?;
    assert_eq!(counter.released(), 2);

    Ok(())
}

#[tokio::test]
async fn test_zip_with_error_releases_partner() -> anyhow::Result<()> {
    // Arrange
    let counter = ReleaseCounter::new();
    let flux = counter
        .never_ending::<String>()
        .zip_with(&Flux::<u32>::error(RivuletError::source_error("gone")), |name, n| {
            format!("{name}{n}")
        });

    // Act
    let mut stream = flux.to_stream();
    let first = timeout(Duration::from_secs(1), stream.next()).await?;

    // Assert
    assert!(first.is_some_and(|item| item.is_error()));
    assert_eq!(counter.released(), 1);
    assert!(stream.next().await.is_none());

    Ok(())
}

#[tokio::test]
async fn test_zip_error_releases_every_other_source() -> anyhow::Result<()> {
    // Arrange
    let counter = ReleaseCounter::new();
    let flux = Flux::zip(
        [
            counter.never_ending::<String>(),
            counter.never_ending(),
            Flux::error(RivuletError::source_error("gone")),
        ],
        |row| row.concat(),
    );

    // Act
    let mut stream = flux.to_stream();
    let first = timeout(Duration::from_secs(1), stream.next()).await?;

    // Assert
    assert!(first.is_some_and(|item| item.is_error()));
    assert_eq!(counter.released(), 2);

    Ok(())
}
