// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::RivuletError;
use rivulet_stream::Flux;
use rivulet_test_utils::test_data::letters;
use rivulet_test_utils::{collect_values, SubscriptionCounter};
use std::time::Duration;

fn abc() -> Flux<String> {
    Flux::from_values(letters("ABC"))
}

fn def() -> Flux<String> {
    Flux::from_values(letters("DEF"))
}

#[tokio::test]
async fn test_concat_plays_sources_back_to_back() -> anyhow::Result<()> {
    // Arrange
    let flux = Flux::concat([abc(), def()]);

    // Act
    let values = collect_values(&flux).await;

    // Assert
    assert_eq!(values, letters("ABCDEF"));

    Ok(())
}

#[tokio::test]
async fn test_concat_never_interleaves_delayed_sources() -> anyhow::Result<()> {
    // Arrange
    let flux = abc()
        .delay_elements(Duration::from_millis(10))
        .concat_with(&def().delay_elements(Duration::from_millis(1)));

    // Act
    let values = collect_values(&flux).await;

    // Assert
    assert_eq!(values, letters("ABCDEF"));

    Ok(())
}

#[tokio::test]
async fn test_concat_error_skips_later_sources() -> anyhow::Result<()> {
    // Arrange
    let counter = SubscriptionCounter::new();
    let later = counter.wrap(&def());
    let flux = Flux::concat([abc(), Flux::error(RivuletError::source_error("stop")), later]);

    // Act
    let outcome = flux.collect_list().resolve().await;

    // Assert
    assert!(outcome.is_err());
    assert_eq!(counter.count(), 0);

    Ok(())
}

#[tokio::test]
async fn test_concat_of_nothing_completes() -> anyhow::Result<()> {
    // Arrange
    let flux = Flux::<String>::concat(Vec::new());

    // Act
    let values = collect_values(&flux).await;

    // Assert
    assert!(values.is_empty());

    Ok(())
}
