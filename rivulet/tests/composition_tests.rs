// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use rivulet::prelude::*;
use rivulet::{channel_subscriber, Signal};
use rivulet_test_utils::test_data::{letters, names, split_chars, split_chars_delayed};
use rivulet_test_utils::{collect_values, test_subscriber, SubscriptionCounter};
use std::time::Duration;
use tokio::time::timeout;

fn upper_names() -> Flux<String> {
    Flux::from_values(names()).map(|name| name.to_uppercase())
}

#[tokio::test]
async fn test_map_filter_flat_map_pipeline() -> anyhow::Result<()> {
    // Arrange
    let flux = upper_names()
        .filter(|name| name.len() > 3)
        .flat_map(|name| split_chars(&name));

    // Act
    let (subscriber, mut reader) = test_subscriber();
    let _subscription = flux.subscribe(subscriber);

    // Assert
    reader.expect_subscribe().await;
    assert_eq!(reader.values_until_complete().await, letters("ALEXCHLOE"));

    Ok(())
}

#[tokio::test]
async fn test_full_signal_trace() -> anyhow::Result<()> {
    // Arrange
    let flux = Flux::from_values(letters("AB"));

    // Act
    let (subscriber, mut reader) = test_subscriber();
    let _subscription = flux.subscribe(subscriber);
    let trace: Vec<Signal<String>> = reader
        .emissions_until_terminal()
        .await
        .into_iter()
        .map(|emission| emission.signal)
        .collect();

    // Assert
    assert_eq!(
        trace,
        vec![
            Signal::Subscribe,
            Signal::Next("A".to_string()),
            Signal::Next("B".to_string()),
            Signal::Complete,
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_transform_with_fallbacks() -> anyhow::Result<()> {
    // Arrange
    let long = |min_len: usize| {
        move |flux: Flux<String>| {
            flux.map(|name| name.to_uppercase())
                .filter(move |name| name.len() > min_len)
        }
    };
    let defaulted = Flux::from_values(names())
        .transform(long(6))
        .default_if_empty("default".to_string());
    let switched = Flux::from_values(names())
        .transform(long(6))
        .switch_if_empty(
            &Flux::just("default".to_string()).flat_map(|word| split_chars(&word.to_uppercase())),
        );

    // Act
    let defaulted = collect_values(&defaulted).await;
    let switched = collect_values(&switched).await;

    // Assert
    assert_eq!(defaulted, vec!["default"]);
    assert_eq!(switched, letters("DEFAULT"));

    Ok(())
}

#[tokio::test]
async fn test_concat_merge_and_merge_sequential_agree_on_content() -> anyhow::Result<()> {
    // Arrange
    let abc = || Flux::from_values(letters("ABC")).delay_elements(Duration::from_millis(10));
    let def = || Flux::from_values(letters("DEF")).delay_elements(Duration::from_millis(5));

    // Act
    let concatenated = collect_values(&abc().concat_with(&def())).await;
    let merged = collect_values(&abc().merge_with(&def())).await;
    let sequential = collect_values(&Flux::merge_sequential([abc(), def()])).await;

    // Assert
    assert_eq!(concatenated, letters("ABCDEF"));
    assert_eq!(merged.len(), 6);
    assert_eq!(sequential, letters("ABCDEF"));

    Ok(())
}

#[tokio::test]
async fn test_zip_of_letter_sources() -> anyhow::Result<()> {
    // Arrange
    let flux = Flux::zip(
        [Flux::from_values(letters("ABC")), Flux::from_values(letters("DEF"))],
        |row| row.concat(),
    );

    // Act
    let values = collect_values(&flux).await;

    // Assert
    assert_eq!(values, vec!["AD", "BE", "CF"]);

    Ok(())
}

#[tokio::test]
async fn test_switch_if_empty_counter() -> anyhow::Result<()> {
    // Arrange
    let counter = SubscriptionCounter::new();
    let alternative = counter.wrap(&Flux::just("fallback".to_string()));

    // Act
    let non_empty = collect_values(&upper_names().switch_if_empty(&alternative)).await;
    let empty = collect_values(&Flux::<String>::empty().switch_if_empty(&alternative)).await;

    // Assert
    assert_eq!(non_empty.len(), 3);
    assert_eq!(empty, vec!["fallback"]);
    assert_eq!(counter.count(), 1);

    Ok(())
}

#[tokio::test]
async fn test_interval_take_four_then_cancel() -> anyhow::Result<()> {
    // Arrange
    let (subscriber, mut reader) = test_subscriber();

    // Act
    let subscription = Flux::interval(Duration::from_millis(10)).subscribe(subscriber);
    reader.expect_subscribe().await;
    let values = reader.expect_values(4).await;
    subscription.cancel();

    // Assert
    assert_eq!(values, vec![0, 1, 2, 3]);
    let state = timeout(Duration::from_secs(1), subscription.terminated()).await?;
    assert_eq!(state, SubscriptionState::Cancelled);

    Ok(())
}

#[tokio::test]
async fn test_channel_subscriber_bridges_to_pull() -> anyhow::Result<()> {
    // Arrange
    let flux =
        upper_names().concat_map(|name| split_chars_delayed(&name, Duration::from_millis(1)));
    let (subscriber, rx) = channel_subscriber();

    // Act
    let _subscription = flux.subscribe(subscriber);
    let received: Vec<String> = timeout(
        Duration::from_secs(2),
        rx.filter_map(|item| async move { Result::<_, RivuletError>::from(item).ok() })
            .collect(),
    )
    .await?;

    // Assert
    assert_eq!(received, letters("ALEXBENCHLOE"));

    Ok(())
}

#[tokio::test]
async fn test_solo_pipeline_into_flux() -> anyhow::Result<()> {
    // Arrange
    let solo = Solo::single("alex".to_string())
        .map(|name| name.to_uppercase())
        .filter(|name| name.len() > 3);

    // Act
    let letters_of_alex = collect_values(&solo.flat_map_many(|name| split_chars(&name))).await;
    let zipped = Solo::single("A".to_string())
        .zip_with(&Solo::single("D".to_string()), |left, right| left + &right)
        .resolve()
        .await?;

    // Assert
    assert_eq!(letters_of_alex, letters("ALEX"));
    assert_eq!(zipped.as_deref(), Some("AD"));

    Ok(())
}
