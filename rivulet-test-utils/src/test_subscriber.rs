// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::StreamExt;
use rivulet_core::{Emission, RivuletError, Signal, Subscriber, Subscription};
use std::fmt::Debug;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout};

const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

/// Subscriber that records every signal, tagged with its position.
pub struct TestSubscriber<T> {
    tx: UnboundedSender<Emission<T>>,
    position: usize,
    handle: Arc<Mutex<Option<Subscription>>>,
}

/// Reads the signals recorded by the paired [`TestSubscriber`].
///
/// Every `expect_*` method waits up to one second and panics on timeout or on
/// an unexpected signal.
pub struct SignalReader<T> {
    rx: UnboundedReceiver<Emission<T>>,
    wait: Duration,
    handle: Arc<Mutex<Option<Subscription>>>,
}

/// Create a recording subscriber and its reader.
pub fn test_subscriber<T>() -> (TestSubscriber<T>, SignalReader<T>) {
    let (tx, rx) = unbounded();
    let handle = Arc::new(Mutex::new(None));
    (
        TestSubscriber {
            tx,
            position: 0,
            handle: Arc::clone(&handle),
        },
        SignalReader {
            rx,
            wait: DEFAULT_TIMEOUT,
            handle,
        },
    )
}

impl<T> TestSubscriber<T> {
    fn record(&mut self, signal: Signal<T>) {
        let emission = Emission::new(self.position, signal);
        self.position += 1;
        let _ = self.tx.unbounded_send(emission);
    }
}

impl<T: Send + 'static> Subscriber<T> for TestSubscriber<T> {
    fn on_subscribe(&mut self, subscription: Subscription) {
        *self.handle.lock() = Some(subscription);
        self.record(Signal::Subscribe);
    }

    fn on_next(&mut self, value: T) {
        self.record(Signal::Next(value));
    }

    fn on_error(&mut self, error: RivuletError) {
        self.record(Signal::Error(error));
        self.tx.close_channel();
    }

    fn on_complete(&mut self) {
        self.record(Signal::Complete);
        self.tx.close_channel();
    }
}

impl<T: Debug> SignalReader<T> {
    /// Use `wait` instead of the default timeout for every expectation.
    #[must_use]
    pub fn with_timeout(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    /// The handle delivered through `onSubscribe`, once it has arrived.
    pub fn subscription(&self) -> Option<Subscription> {
        self.handle.lock().clone()
    }

    /// Cancel the subscription, returning `false` if it had not started or had already terminated.
    pub fn cancel(&self) -> bool {
        self.subscription()
            .is_some_and(|subscription| subscription.cancel())
    }

    /// The next recorded emission, or `None` once the subscriber has terminated.
    pub async fn next_emission(&mut self) -> Option<Emission<T>> {
        timeout(self.wait, self.rx.next())
            .await
            .unwrap_or_else(|_| panic!("Timeout: no signal within {:?}", self.wait))
    }

    async fn next_signal(&mut self) -> Signal<T> {
        self.next_emission()
            .await
            .expect("subscriber terminated, no more signals")
            .signal
    }

    pub async fn expect_subscribe(&mut self) {
        match self.next_signal().await {
            Signal::Subscribe => {}
            other => panic!("expected onSubscribe, got {other}"),
        }
    }

    /// Expect `onNext` and return its value.
    pub async fn expect_next(&mut self) -> T {
        match self.next_signal().await {
            Signal::Next(value) => value,
            other => panic!("expected onNext, got {other}"),
        }
    }

    /// Expect exactly `count` consecutive `onNext` signals.
    pub async fn expect_values(&mut self, count: usize) -> Vec<T> {
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.expect_next().await);
        }
        values
    }

    pub async fn expect_complete(&mut self) {
        match self.next_signal().await {
            Signal::Complete => {}
            other => panic!("expected onComplete, got {other}"),
        }
    }

    /// Expect `onError` and return its cause.
    pub async fn expect_error(&mut self) -> RivuletError {
        match self.next_signal().await {
            Signal::Error(error) => error,
            other => panic!("expected onError, got {other}"),
        }
    }

    /// Collect `onNext` values until `onComplete`; panics on `onError`.
    pub async fn values_until_complete(&mut self) -> Vec<T> {
        let mut values = Vec::new();
        loop {
            match self.next_signal().await {
                Signal::Subscribe => {}
                Signal::Next(value) => values.push(value),
                Signal::Complete => return values,
                Signal::Error(error) => panic!("expected onComplete, got onError({error})"),
            }
        }
    }

    /// Every emission up to and including the terminal one.
    pub async fn emissions_until_terminal(&mut self) -> Vec<Emission<T>> {
        let mut emissions = Vec::new();
        while let Some(emission) = self.next_emission().await {
            let terminal = emission.signal.is_terminal();
            emissions.push(emission);
            if terminal {
                break;
            }
        }
        emissions
    }

    /// Assert nothing is recorded for `millis` milliseconds.
    pub async fn assert_no_emission(&mut self, millis: u64) {
        tokio::select! {
            emission = self.rx.next() => {
                if let Some(emission) = emission {
                    panic!("Unexpected emission, expected no output: {}", emission.signal);
                }
            }
            () = sleep(Duration::from_millis(millis)) => {}
        }
    }
}
