//! The fetch seam between the coordinator and the network.

use std::future::Future;
use std::pin::Pin;

use crate::cancel::CancelSignal;
use crate::error::FetchError;
use crate::outcome::Item;

/// Boxed future returned by a [`Fetcher`].
pub type FetchFuture<T> =
    Pin<Box<dyn Future<Output = Result<Vec<Item<T>>, FetchError>> + Send>>;

/// One network lookup.
///
/// The contract the coordinator relies on:
///
/// - the returned future resolves exactly once;
/// - `cancel` is honored on a best-effort basis — a cancelled fetch may
///   still resolve with anything, the coordinator discards stale outcomes
///   by token comparison;
/// - `Err` is reserved for genuine failures. Cancellation is reported via
///   the signal, never as an error, so the error-render path stays
///   meaningful.
///
/// Timeouts are the fetcher's responsibility, surfaced as
/// [`FetchError::Transport`].
pub trait Fetcher<Q, T>: Send + Sync {
    /// Start one lookup for `query`.
    fn fetch(&self, query: Q, cancel: CancelSignal) -> FetchFuture<T>;
}

impl<Q, T, F, Fut> Fetcher<Q, T> for F
where
    F: Fn(Q, CancelSignal) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<Item<T>>, FetchError>> + Send + 'static,
{
    fn fetch(&self, query: Q, cancel: CancelSignal) -> FetchFuture<T> {
        Box::pin(self(query, cancel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::cancel_pair;

    #[tokio::test]
    async fn closures_are_fetchers() {
        let fetcher = |query: String, _cancel: CancelSignal| async move {
            Ok(vec![Item::new(query, ())])
        };
        let (_handle, signal) = cancel_pair();
        let items = fetcher.fetch("asu".to_owned(), signal).await;
        assert_eq!(items, Ok(vec![Item::new("asu", ())]));
    }
}
