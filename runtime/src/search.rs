//! Input wiring and the minimum-length policy.

use typeahead_core::config::SearchConfig;
use typeahead_core::fetch::Fetcher;
use typeahead_core::query::Query;
use typeahead_core::render::Renderer;
use typeahead_core::state::RequestState;

use crate::coordinator::RequestCoordinator;
use crate::debouncer::Debouncer;

/// Debounced, single-flight search wiring for one input field.
///
/// Reproduces what a widget call-site needs at the render boundary:
/// input events feed the [`Debouncer`], the quiet-period callback starts
/// a request on the [`RequestCoordinator`], and explicit submits bypass
/// the debounce window. The minimum-length policy lives here — not in
/// the debouncer or the coordinator — because it is call-site policy.
///
/// Length policy: an **empty** query always fires, so the view can clear
/// previously rendered results; a non-empty query shorter than
/// [`SearchConfig::min_length`] is suppressed entirely and never reaches
/// the fetcher.
pub struct SearchBox<T> {
    config: SearchConfig,
    debouncer: Debouncer<Query>,
    coordinator: RequestCoordinator<Query, T>,
}

impl<T: Send + 'static> SearchBox<T> {
    /// Wire a fetcher and renderer behind `config`.
    #[must_use]
    pub fn new(
        config: SearchConfig,
        fetcher: impl Fetcher<Query, T> + 'static,
        renderer: impl Renderer<Query, T> + 'static,
    ) -> Self {
        let coordinator = RequestCoordinator::new(fetcher, renderer);
        let trigger = coordinator.clone();
        let debouncer = Debouncer::new(config.debounce, move |query: Query| {
            if trigger.start(query).is_err() {
                tracing::trace!("debounced trigger dropped: coordinator disposed");
            }
        });

        Self {
            config,
            debouncer,
            coordinator,
        }
    }

    /// Feed one input event (the field's full current text).
    ///
    /// Re-arms the debounce window; after a quiet period the last fed
    /// query starts a request. Each fired trigger starts a request even if
    /// the text equals the previous fetch, so resubmitting after a failure
    /// retries.
    pub fn input(&mut self, raw: &str) {
        let query = Query::new(raw);
        if !self.meets_length(&query) {
            tracing::trace!(query = %query, "input below minimum length, suppressed");
            return;
        }
        self.debouncer.schedule(query);
    }

    /// Explicit submit: cancel any pending debounce window and start the
    /// request immediately. Still honors the minimum-length policy.
    pub fn submit(&mut self, raw: &str) {
        let query = Query::new(raw);
        if !self.meets_length(&query) {
            tracing::trace!(query = %query, "submit below minimum length, suppressed");
            return;
        }
        self.debouncer.cancel();
        if self.coordinator.start(query).is_err() {
            tracing::trace!("submit dropped: coordinator disposed");
        }
    }

    /// Lifecycle snapshot spanning the debounce window and the
    /// coordinator: `Pending` while a trigger waits out its quiet period,
    /// otherwise whatever the coordinator reports.
    #[must_use]
    pub fn state(&self) -> RequestState {
        if self.debouncer.is_armed() {
            RequestState::Pending
        } else {
            self.coordinator.state()
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Tear down: the pending timer never fires, the in-flight request is
    /// cancelled, and the renderer is never invoked again. Idempotent.
    pub fn dispose(&mut self) {
        self.debouncer.cancel();
        self.coordinator.dispose();
    }

    fn meets_length(&self, query: &Query) -> bool {
        query.is_empty() || query.len() >= self.config.min_length
    }
}

impl<T> std::fmt::Debug for SearchBox<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchBox")
            .field("config", &self.config)
            .field("debouncer", &self.debouncer)
            .finish_non_exhaustive()
    }
}
