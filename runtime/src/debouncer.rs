//! Quiet-period coalescing of bursty triggers.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Collapses a run of trigger events into exactly one callback invocation
/// per quiet period, carrying the *last* scheduled query.
///
/// The timer is an owned, abortable tokio task rather than a closure over
/// mutable outer state, which keeps teardown deterministic: dropping the
/// debouncer or calling [`cancel`](Self::cancel) guarantees the pending
/// timer never fires. A generation counter closes the remaining window
/// where an abort races a timer that has already slept its full delay — a
/// task that is no longer the newest generation never invokes the
/// callback.
///
/// A zero delay turns [`schedule`](Self::schedule) into a synchronous
/// call, which is what explicit submit paths use to bypass debouncing.
pub struct Debouncer<Q> {
    delay: Duration,
    on_quiet: Arc<dyn Fn(Q) + Send + Sync>,
    generation: Arc<AtomicU64>,
    timer: Option<JoinHandle<()>>,
}

impl<Q: Send + 'static> Debouncer<Q> {
    /// Create a debouncer firing `on_quiet` after `delay` of silence.
    pub fn new(delay: Duration, on_quiet: impl Fn(Q) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            on_quiet: Arc::new(on_quiet),
            generation: Arc::new(AtomicU64::new(0)),
            timer: None,
        }
    }

    /// Arm (or re-arm) the timer with `query`.
    ///
    /// Any previously pending timer is invalidated and will never fire.
    /// After `delay` elapses with no further `schedule` call, the callback
    /// receives this query — exactly once per quiet run.
    pub fn schedule(&mut self, query: Q) {
        let generation = self.invalidate();

        if self.delay.is_zero() {
            tracing::trace!("zero delay, firing synchronously");
            (self.on_quiet)(query);
            return;
        }

        let delay = self.delay;
        let on_quiet = Arc::clone(&self.on_quiet);
        let current = Arc::clone(&self.generation);

        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // A newer schedule() or cancel() wins the race against a timer
            // that slipped past its abort.
            if current.load(Ordering::SeqCst) == generation {
                tracing::trace!(generation, "quiet period elapsed, firing");
                on_quiet(query);
            }
        }));
    }

    /// Invalidate any pending timer without firing. Idempotent.
    pub fn cancel(&mut self) {
        self.invalidate();
    }

    /// Whether a trigger is currently waiting out its quiet period.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.timer.as_ref().is_some_and(|timer| !timer.is_finished())
    }

    /// Abort the pending timer and bump the generation, returning the new
    /// generation for the next timer to carry.
    fn invalidate(&mut self) -> u64 {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl<Q> Drop for Debouncer<Q> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl<Q> std::fmt::Debug for Debouncer<Q> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("armed", &self.timer.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[tokio::test]
    async fn zero_delay_fires_synchronously() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&fired);
        let mut debouncer = Debouncer::new(Duration::ZERO, move |query: String| {
            sink.lock().unwrap().push(query);
        });

        debouncer.schedule("now".to_owned());
        // No await between schedule and assert.
        assert_eq!(*fired.lock().unwrap(), vec!["now".to_owned()]);
        assert!(!debouncer.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn armed_until_fired() {
        let mut debouncer = Debouncer::new(Duration::from_millis(50), |_: String| {});
        assert!(!debouncer.is_armed());
        debouncer.schedule("q".to_owned());
        assert!(debouncer.is_armed());
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(!debouncer.is_armed());
    }
}
