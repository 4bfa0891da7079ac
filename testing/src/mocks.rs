//! Mock fetchers and renderers.
//!
//! The mocks never sleep: `ManualFetcher` parks each fetch on a channel
//! the test resolves by hand, so out-of-order completion and
//! cancellation races become ordinary sequential test code.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::oneshot;
use typeahead_core::cancel::CancelSignal;
use typeahead_core::error::FetchError;
use typeahead_core::fetch::{FetchFuture, Fetcher};
use typeahead_core::outcome::{Item, Outcome};
use typeahead_core::render::Renderer;

/// Build labelled items with unit payloads, the common test fixture shape.
#[must_use]
pub fn labeled_items(labels: &[&str]) -> Vec<Item<()>> {
    labels.iter().map(|label| Item::new(*label, ())).collect()
}

/// Fetcher whose resolutions the test drives by hand, in any order.
///
/// Each `fetch` call parks on a oneshot channel and deliberately ignores
/// its cancel signal, modelling a transport that never honors aborts —
/// the coordinator's token comparison has to cope on its own. Clones
/// share the pending list, so the test keeps one handle while the
/// coordinator owns the other.
pub struct ManualFetcher<Q, T> {
    pending: Arc<Mutex<Vec<PendingFetch<Q, T>>>>,
}

struct PendingFetch<Q, T> {
    query: Q,
    reply: Option<oneshot::Sender<Result<Vec<Item<T>>, FetchError>>>,
}

impl<Q, T> ManualFetcher<Q, T> {
    /// Create a fetcher with no pending calls.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// How many times `fetch` has been called so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        lock(&self.pending).len()
    }

    /// The queries fetched so far, in call order.
    #[must_use]
    pub fn queries(&self) -> Vec<Q>
    where
        Q: Clone,
    {
        lock(&self.pending).iter().map(|p| p.query.clone()).collect()
    }

    /// Resolve the `index`-th fetch (0-based, in call order).
    ///
    /// Returns `false` when the index is unknown, already resolved, or
    /// the waiting future was dropped.
    pub fn resolve(&self, index: usize, result: Result<Vec<Item<T>>, FetchError>) -> bool {
        let reply = {
            let mut pending = lock(&self.pending);
            match pending.get_mut(index) {
                Some(fetch) => fetch.reply.take(),
                None => None,
            }
        };
        match reply {
            Some(tx) => tx.send(result).is_ok(),
            None => false,
        }
    }
}

impl<Q, T> Default for ManualFetcher<Q, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q, T> Clone for ManualFetcher<Q, T> {
    fn clone(&self) -> Self {
        Self {
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<Q, T> Fetcher<Q, T> for ManualFetcher<Q, T>
where
    Q: Send + 'static,
    T: Send + 'static,
{
    fn fetch(&self, query: Q, _cancel: CancelSignal) -> FetchFuture<T> {
        let (tx, rx) = oneshot::channel();
        lock(&self.pending).push(PendingFetch {
            query,
            reply: Some(tx),
        });
        Box::pin(async move {
            match rx.await {
                Ok(result) => result,
                Err(_) => Err(FetchError::Transport("fetch abandoned by test".to_owned())),
            }
        })
    }
}

/// Fetcher that resolves immediately with a canned result set.
pub struct StaticFetcher<T> {
    items: Vec<Item<T>>,
    calls: Arc<AtomicUsize>,
}

impl<T> StaticFetcher<T> {
    /// Create a fetcher that always answers with `items`.
    #[must_use]
    pub fn new(items: Vec<Item<T>>) -> Self {
        Self {
            items,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times `fetch` has been called so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<Q, T> Fetcher<Q, T> for StaticFetcher<T>
where
    Q: Send,
    T: Clone + Send + Sync + 'static,
{
    fn fetch(&self, _query: Q, _cancel: CancelSignal) -> FetchFuture<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let items = self.items.clone();
        Box::pin(async move { Ok(items) })
    }
}

/// Fetcher that fails every call with a fixed error.
pub struct FailingFetcher {
    error: FetchError,
}

impl FailingFetcher {
    /// Create a fetcher that always answers with `error`.
    #[must_use]
    pub const fn new(error: FetchError) -> Self {
        Self { error }
    }
}

impl<Q, T> Fetcher<Q, T> for FailingFetcher
where
    Q: Send,
    T: Send + 'static,
{
    fn fetch(&self, _query: Q, _cancel: CancelSignal) -> FetchFuture<T> {
        let error = self.error.clone();
        Box::pin(async move { Err(error) })
    }
}

/// Renderer that records every call for later assertions.
pub struct RecordingRenderer<Q, T> {
    calls: Arc<Mutex<Vec<(Q, Outcome<T>)>>>,
}

impl<Q, T> RecordingRenderer<Q, T> {
    /// Create a renderer with an empty call log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// How many times the render callback was invoked.
    #[must_use]
    pub fn render_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Every render call, in invocation order.
    #[must_use]
    pub fn calls(&self) -> Vec<(Q, Outcome<T>)>
    where
        Q: Clone,
        T: Clone,
    {
        lock(&self.calls).clone()
    }

    /// The most recent render call, if any.
    #[must_use]
    pub fn last(&self) -> Option<(Q, Outcome<T>)>
    where
        Q: Clone,
        T: Clone,
    {
        lock(&self.calls).last().cloned()
    }
}

impl<Q, T> Default for RecordingRenderer<Q, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q, T> Clone for RecordingRenderer<Q, T> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<Q, T> Renderer<Q, T> for RecordingRenderer<Q, T>
where
    Q: Clone + Send + Sync,
    T: Send,
{
    fn render(&self, query: &Q, outcome: Outcome<T>) {
        lock(&self.calls).push((query.clone(), outcome));
    }
}

// Mutex poison is unrecoverable; continue with the inner value.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeahead_core::cancel::cancel_pair;

    #[tokio::test]
    async fn manual_fetcher_resolves_in_any_order() {
        let fetcher: ManualFetcher<String, ()> = ManualFetcher::new();
        let (_h1, s1) = cancel_pair();
        let (_h2, s2) = cancel_pair();

        let first = fetcher.fetch("first".to_owned(), s1);
        let second = fetcher.fetch("second".to_owned(), s2);
        assert_eq!(fetcher.call_count(), 2);

        assert!(fetcher.resolve(1, Ok(labeled_items(&["b"]))));
        assert!(fetcher.resolve(0, Ok(labeled_items(&["a"]))));
        // Double-resolve is refused.
        assert!(!fetcher.resolve(0, Ok(vec![])));

        assert_eq!(second.await, Ok(labeled_items(&["b"])));
        assert_eq!(first.await, Ok(labeled_items(&["a"])));
    }

    #[tokio::test]
    async fn static_fetcher_answers_every_call() {
        let fetcher = StaticFetcher::new(labeled_items(&["always"]));
        let (_h, signal) = cancel_pair();
        let items: Result<Vec<Item<()>>, _> =
            Fetcher::<String, ()>::fetch(&fetcher, "q".to_owned(), signal.clone()).await;
        assert_eq!(items, Ok(labeled_items(&["always"])));

        let _ = Fetcher::<String, ()>::fetch(&fetcher, "again".to_owned(), signal).await;
        assert_eq!(fetcher.call_count(), 2);
    }

    #[tokio::test]
    async fn failing_fetcher_fails_with_its_error() {
        let fetcher = FailingFetcher::new(FetchError::Status(503));
        let (_h, signal) = cancel_pair();
        let result: Result<Vec<Item<()>>, _> =
            Fetcher::<String, ()>::fetch(&fetcher, "q".to_owned(), signal).await;
        assert_eq!(result, Err(FetchError::Status(503)));
    }

    #[tokio::test]
    async fn recording_renderer_keeps_order() {
        let renderer: RecordingRenderer<String, ()> = RecordingRenderer::new();
        renderer.render(&"a".to_owned(), Outcome::Success(vec![]));
        renderer.render(&"b".to_owned(), Outcome::Cancelled);
        assert_eq!(renderer.render_count(), 2);
        assert_eq!(renderer.last().map(|(q, _)| q), Some("b".to_owned()));
    }
}
