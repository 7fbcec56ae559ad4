//! Generic asynchronous loader with observable state
//!
//! `FetchCore` drives one logical data source: it runs the configured fetch
//! function for a key, publishes `{data, is_fetching, error}` transitions on
//! a watch channel, and uses a generation counter so a late response from a
//! superseded load can never overwrite newer state.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::watch;
use tracing::{debug, warn};
use waypoint_api::{FetchError, FetchState, Result};

const DEFAULT_FALLBACK_MESSAGE: &str = "Failed to fetch data.";

type FetchFn<K, T> = Arc<dyn Fn(K) -> BoxFuture<'static, Result<T>> + Send + Sync>;

/// Generic async loader for one data source.
///
/// Loading is triggered per key via [`load`](Self::load); calling it again
/// (same key or a new one) starts a new generation and the previous in-flight
/// response is dropped on arrival. There is no automatic retry.
pub struct FetchCore<K, T> {
    state: watch::Sender<FetchState<T>>,
    generation: AtomicU64,
    fetch_fn: FetchFn<K, T>,
    fallback_message: String,
}

impl<K, T> FetchCore<K, T>
where
    K: Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    pub fn new<F, Fut>(initial: T, fetch_fn: F) -> Self
    where
        F: Fn(K) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let (state, _) = watch::channel(FetchState::new(initial));
        Self {
            state,
            generation: AtomicU64::new(0),
            fetch_fn: Arc::new(move |key| Box::pin(fetch_fn(key))),
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
        }
    }

    /// Replace the generic error message used when a failure carries none.
    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    /// Run the fetch function for `key` and publish the outcome.
    ///
    /// `is_fetching` is true strictly between request start and settlement.
    /// If another `load` starts before this one settles, the stale outcome is
    /// discarded instead of being applied.
    pub async fn load(&self, key: K) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|s| s.is_fetching = true);
        debug!(generation, "fetch started");

        let outcome = (self.fetch_fn)(key).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            warn!(generation, "discarding stale fetch response");
            return;
        }

        let fallback = self.fallback_message.clone();
        self.state.send_modify(|s| {
            s.is_fetching = false;
            match outcome {
                Ok(value) => {
                    s.data = value;
                    s.error = None;
                }
                Err(err) => {
                    debug!(error = %err, generation, "fetch failed");
                    // `data` keeps its last known value
                    s.error = Some(FetchError::from_error(&err, &fallback));
                }
            }
        });
    }

    /// External optimistic write of the held value.
    pub fn set_data(&self, value: T) {
        self.state.send_modify(|s| s.data = value);
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState<T> {
        self.state.borrow().clone()
    }

    /// Observe state transitions.
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.state.subscribe()
    }
}
