// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::RivuletError;
use rivulet_stream::Flux;
use rivulet_test_utils::test_data::{letters, names, split_chars};
use rivulet_test_utils::{collect_values, SubscriptionCounter};

fn long_names(min_len: usize) -> Flux<String> {
    Flux::from_values(names())
        .map(|name| name.to_uppercase())
        .filter(move |name| name.len() > min_len)
}

#[tokio::test]
async fn test_non_empty_primary_never_subscribes_alternative() -> anyhow::Result<()> {
    // Arrange
    let counter = SubscriptionCounter::new();
    let alternative = counter.wrap(&Flux::just("default".to_string()));
    let flux = long_names(3).switch_if_empty(&alternative);

    // Act
    let values = collect_values(&flux).await;

    // Assert
    assert_eq!(values, vec!["ALEX", "CHLOE"]);
    assert_eq!(counter.count(), 0);

    Ok(())
}

#[tokio::test]
async fn test_empty_primary_emits_alternative() -> anyhow::Result<()> {
    // Arrange
    let counter = SubscriptionCounter::new();
    let alternative = counter.wrap(
        &Flux::just("default".to_string()).flat_map(|word| split_chars(&word.to_uppercase())),
    );
    let flux = long_names(6).switch_if_empty(&alternative);

    // Act
    let values = collect_values(&flux).await;

    // Assert
    assert_eq!(values, letters("DEFAULT"));
    assert_eq!(counter.count(), 1);

    Ok(())
}

#[tokio::test]
async fn test_default_if_empty() -> anyhow::Result<()> {
    // Arrange
    let flux = long_names(6).default_if_empty("default".to_string());

    // Act
    let values = collect_values(&flux).await;

    // Assert
    assert_eq!(values, vec!["default"]);

    Ok(())
}

#[tokio::test]
async fn test_primary_error_skips_alternative() -> anyhow::Result<()> {
    // Arrange
    let counter = SubscriptionCounter::new();
    let alternative = counter.wrap(&Flux::just(1));
    let flux = Flux::error(RivuletError::source_error("broken")).switch_if_empty(&alternative);

    // Act
    let outcome = flux.collect_list().resolve().await;

    // Assert
    assert!(outcome.is_err());
    assert_eq!(counter.count(), 0);

    Ok(())
}

#[tokio::test]
async fn test_transform_packages_a_chain() -> anyhow::Result<()> {
    // Arrange
    let shout = |flux: Flux<String>| {
        flux.map(|name| name.to_uppercase())
            .filter(|name| name.len() > 3)
    };

    // Act
    let values = collect_values(&Flux::from_values(names()).transform(shout)).await;

    // Assert
    assert_eq!(values, vec!["ALEX", "CHLOE"]);

    Ok(())
}
