// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::RivuletError;
use rivulet_stream::Flux;
use rivulet_test_utils::test_data::names;
use rivulet_test_utils::{collect_values, test_subscriber};

#[derive(Debug, thiserror::Error)]
#[error("rejected {0}")]
struct Rejected(String);

#[tokio::test]
async fn test_map_then_filter_keeps_order() -> anyhow::Result<()> {
    // Arrange
    let flux = Flux::from_values(names())
        .map(|name| name.to_uppercase())
        .filter(|name| name.len() > 3);

    // Act
    let values = collect_values(&flux).await;

    // Assert
    assert_eq!(values, vec!["ALEX", "CHLOE"]);

    Ok(())
}

#[tokio::test]
async fn test_filter_may_emit_nothing() -> anyhow::Result<()> {
    // Arrange
    let flux = Flux::from_values(names()).filter(|name| name.len() > 10);

    // Act
    let (subscriber, mut reader) = test_subscriber();
    let _subscription = flux.subscribe(subscriber);

    // Assert
    reader.expect_subscribe().await;
    reader.expect_complete().await;

    Ok(())
}

#[tokio::test]
async fn test_map_on_empty_completes() -> anyhow::Result<()> {
    // Arrange
    let flux = Flux::<i32>::empty().map(|n| n * 2);

    // Act
    let values = collect_values(&flux).await;

    // Assert
    assert!(values.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_try_map_failure_terminates_with_user_error() -> anyhow::Result<()> {
    // Arrange
    let flux = Flux::from_values(names()).try_map(|name| {
        if name == "ben" {
            Err(Rejected(name))
        } else {
            Ok(name.len())
        }
    });

    // Act
    let (subscriber, mut reader) = test_subscriber();
    let _subscription = flux.subscribe(subscriber);

    // Assert
    reader.expect_subscribe().await;
    assert_eq!(reader.expect_next().await, 4);
    let error = reader.expect_error().await;
    assert!(error.is_user_error());
    assert_eq!(error.to_string(), "User error: rejected ben");
    assert!(reader.next_emission().await.is_none());

    Ok(())
}

#[tokio::test]
async fn test_errors_pass_through_filter() -> anyhow::Result<()> {
    // Arrange
    let flux = Flux::<i32>::error(RivuletError::source_error("down")).filter(|_| false);

    // Act
    let error = flux.collect_list().resolve().await.unwrap_err();

    // Assert
    assert!(error.is_source_error());

    Ok(())
}
