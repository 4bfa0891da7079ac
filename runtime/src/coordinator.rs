//! Single-flight request coordination.
//!
//! At most one request is conceptually "current" at any time. Starting a
//! new request synchronously retires the previous token and signals its
//! fetch to stop; whatever that fetch later resolves to is compared
//! against the current token and discarded when stale. Token identity,
//! not response arrival order, decides what reaches the renderer, so a
//! slow response to an old request can never overwrite a fast response to
//! a newer one — even on a transport that ignores cancellation.

use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use futures::FutureExt;
use typeahead_core::cancel::{CancelHandle, cancel_pair};
use typeahead_core::error::FetchError;
use typeahead_core::fetch::Fetcher;
use typeahead_core::outcome::Outcome;
use typeahead_core::render::Renderer;
use typeahead_core::state::RequestState;
use typeahead_core::token::{RequestToken, TokenMinter};

use crate::error::CoordinatorError;

/// Owns the single-flight invariant for one input source.
///
/// The fetcher (network seam) and renderer (view seam) are injected at
/// construction; [`start`](Self::start) is the per-trigger entry point.
/// The coordinator is cheap to clone — clones share the same current
/// token, cancel handle, and state, so a debounce callback and the
/// owning widget can both hold one.
///
/// # Example
///
/// ```ignore
/// let coordinator = RequestCoordinator::new(geocoder, results_panel);
/// coordinator.start(Query::new("asu"))?;
/// coordinator.start(Query::new("asunción"))?; // supersedes the first
/// ```
pub struct RequestCoordinator<Q, T> {
    fetcher: Arc<dyn Fetcher<Q, T>>,
    renderer: Arc<dyn Renderer<Q, T>>,
    minter: Arc<TokenMinter>,
    current: Arc<AtomicU64>,
    cancel: Arc<Mutex<Option<CancelHandle>>>,
    state: Arc<Mutex<RequestState>>,
    disposed: Arc<AtomicBool>,
}

impl<Q, T> RequestCoordinator<Q, T>
where
    Q: Clone + Send + Sync + 'static,
    T: Send + 'static,
{
    /// Create a coordinator around a fetcher and a renderer.
    pub fn new(
        fetcher: impl Fetcher<Q, T> + 'static,
        renderer: impl Renderer<Q, T> + 'static,
    ) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            renderer: Arc::new(renderer),
            minter: Arc::new(TokenMinter::new()),
            current: Arc::new(AtomicU64::new(0)),
            cancel: Arc::new(Mutex::new(None)),
            state: Arc::new(Mutex::new(RequestState::Idle)),
            disposed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start a request for `query`, superseding any request in flight.
    ///
    /// The new token is minted and the previous one retired *before* this
    /// method returns — there is no window in which two tokens are
    /// simultaneously current. The superseded fetch is signalled to stop
    /// on a best-effort basis; its outcome, whenever and however it
    /// arrives, is discarded at settlement by token comparison.
    ///
    /// The fetch runs on a spawned task. Its outcome reaches the renderer
    /// exactly once, and only if this token is still current when it
    /// settles.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::Disposed`] after
    /// [`dispose`](Self::dispose); nothing is spawned in that case.
    pub fn start(&self, query: Q) -> Result<RequestToken, CoordinatorError> {
        if self.disposed.load(Ordering::Acquire) {
            tracing::debug!("rejected start: coordinator is disposed");
            return Err(CoordinatorError::Disposed);
        }

        // Mint and publish the new token before anything can suspend.
        let token = self.minter.mint();
        self.current.store(token.value(), Ordering::SeqCst);
        metrics::counter!("coordinator.requests.started").increment(1);
        tracing::debug!(token = token.value(), "starting request");

        // Install the fresh cancel handle; releasing the old one signals
        // the superseded fetch to stop.
        let (handle, signal) = cancel_pair();
        let previous = {
            let mut slot = lock(&self.cancel);
            slot.replace(handle)
        };
        if let Some(previous) = previous {
            previous.cancel();
            metrics::counter!("coordinator.requests.superseded").increment(1);
            tracing::trace!(token = token.value(), "superseded previous request");
        }

        self.set_state(RequestState::InFlight(token));

        let coordinator = self.clone();
        tokio::spawn(async move {
            let mut cancelled = signal.clone();
            let fetcher = Arc::clone(&coordinator.fetcher);
            let fetch_query = query.clone();
            // catch_unwind maps a panicking fetcher (the moral equivalent
            // of fetchFn throwing synchronously) to a transport failure.
            let fetch = AssertUnwindSafe(async move {
                fetcher.fetch(fetch_query, signal).await
            })
            .catch_unwind();

            let outcome = tokio::select! {
                result = fetch => match result {
                    Ok(Ok(items)) => Outcome::Success(items),
                    Ok(Err(error)) => Outcome::Failure(error),
                    Err(_panic) => {
                        Outcome::Failure(FetchError::Transport("fetcher panicked".to_owned()))
                    },
                },
                () = cancelled.cancelled() => Outcome::Cancelled,
            };

            coordinator.settle(token, &query, outcome);
        });

        Ok(token)
    }

    /// Tear the coordinator down. Idempotent.
    ///
    /// Cancels any in-flight fetch exactly once; every settlement arriving
    /// afterwards is discarded, so the renderer is never invoked again.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }

        let handle = lock(&self.cancel).take();
        if let Some(handle) = handle {
            handle.cancel();
            metrics::counter!("coordinator.requests.cancelled").increment(1);
        }
        self.set_state(RequestState::Idle);
        tracing::debug!("coordinator disposed");
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    /// Snapshot of the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> RequestState {
        *lock(&self.state)
    }

    /// Deliver `outcome` for `token`, or discard it when stale.
    ///
    /// Called from the spawned settlement task. The token comparison here
    /// is the central correctness property: only the numerically latest
    /// token's outcome is ever rendered, regardless of arrival order.
    fn settle(&self, token: RequestToken, query: &Q, outcome: Outcome<T>) {
        if self.disposed.load(Ordering::Acquire) {
            tracing::trace!(token = token.value(), "discarding outcome: disposed");
            metrics::counter!("coordinator.outcomes.discarded", "reason" => "disposed")
                .increment(1);
            return;
        }

        if self.current.load(Ordering::SeqCst) != token.value() {
            tracing::trace!(token = token.value(), "discarding outcome: superseded");
            metrics::counter!("coordinator.outcomes.discarded", "reason" => "stale")
                .increment(1);
            return;
        }

        // This request's cancel handle is spent.
        lock(&self.cancel).take();

        if outcome.is_cancelled() {
            // Dispose raced settlement; absorb without rendering so the
            // view never flashes an error for a normal teardown.
            tracing::trace!(token = token.value(), "absorbing cancelled outcome");
            metrics::counter!("coordinator.outcomes.absorbed").increment(1);
            self.set_state(RequestState::Idle);
            return;
        }

        if let Outcome::Failure(error) = &outcome {
            tracing::warn!(token = token.value(), error = %error, "request failed");
        } else {
            tracing::debug!(token = token.value(), "request settled");
        }
        metrics::counter!("coordinator.outcomes.rendered").increment(1);

        self.set_state(RequestState::Settled(token));
        self.renderer.render(query, outcome);
        self.set_state(RequestState::Idle);
    }

    fn set_state(&self, next: RequestState) {
        *lock(&self.state) = next;
    }
}

impl<Q, T> Clone for RequestCoordinator<Q, T> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            renderer: Arc::clone(&self.renderer),
            minter: Arc::clone(&self.minter),
            current: Arc::clone(&self.current),
            cancel: Arc::clone(&self.cancel),
            state: Arc::clone(&self.state),
            disposed: Arc::clone(&self.disposed),
        }
    }
}

impl<Q, T> std::fmt::Debug for RequestCoordinator<Q, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestCoordinator")
            .field("state", &*lock(&self.state))
            .field("disposed", &self.disposed.load(Ordering::Acquire))
            .finish_non_exhaustive()
    }
}

// Mutex poison is unrecoverable; continue with the inner value.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
