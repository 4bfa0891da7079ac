//! Cooperative cancellation signalling.
//!
//! A [`CancelHandle`]/[`CancelSignal`] pair plays the role an
//! `AbortController`/`AbortSignal` pair plays for a browser fetch: the
//! request's owner keeps the handle, the fetch gets the signal.
//! Cancellation is best-effort — the coordinator's token comparison stays
//! correct even against a fetcher that ignores its signal entirely.

use tokio::sync::watch;

/// Create a connected handle/signal pair.
#[must_use]
pub fn cancel_pair() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelSignal { rx })
}

/// Owner side of a cancellation pair.
///
/// Trips the paired signals on [`cancel`](Self::cancel), or implicitly
/// when dropped, so a superseded handle can never leave a fetcher waiting
/// on a signal that will not arrive.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Request cancellation of the associated fetch.
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }

    /// Whether cancellation has already been requested on this handle.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

/// Fetcher side of a cancellation pair. Cheap to clone.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

impl CancelSignal {
    /// Whether cancellation was requested. A dropped handle counts as
    /// cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }

    /// Wait until cancellation is requested or the handle is dropped.
    pub async fn cancelled(&mut self) {
        while !*self.rx.borrow() {
            if self.rx.changed().await.is_err() {
                // Handle dropped without an explicit cancel.
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_uncancelled() {
        let (handle, signal) = cancel_pair();
        assert!(!signal.is_cancelled());
        assert!(!handle.is_cancelled());
    }

    #[tokio::test]
    async fn cancel_trips_every_signal_clone() {
        let (handle, signal) = cancel_pair();
        let mut cloned = signal.clone();
        handle.cancel();
        assert!(signal.is_cancelled());
        cloned.cancelled().await;
    }

    #[tokio::test]
    async fn dropped_handle_reads_as_cancelled() {
        let (handle, mut signal) = cancel_pair();
        drop(handle);
        assert!(signal.is_cancelled());
        signal.cancelled().await;
    }

    #[tokio::test]
    async fn cancel_is_idempotent() {
        let (handle, signal) = cancel_pair();
        handle.cancel();
        handle.cancel();
        assert!(signal.is_cancelled());
    }
}
