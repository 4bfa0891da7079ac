//! # Typeahead Testing
//!
//! Testing utilities for the typeahead architecture.
//!
//! This crate provides:
//! - Mock fetchers whose resolution timing and order the test controls
//! - A recording renderer for asserting what actually reached the view
//! - Small helpers for building result fixtures
//!
//! ## Example
//!
//! ```ignore
//! use typeahead_runtime::RequestCoordinator;
//! use typeahead_testing::{ManualFetcher, RecordingRenderer, labeled_items};
//!
//! #[tokio::test]
//! async fn latest_request_wins() {
//!     let fetcher = ManualFetcher::new();
//!     let renderer = RecordingRenderer::new();
//!     let coordinator = RequestCoordinator::new(fetcher.clone(), renderer.clone());
//!
//!     coordinator.start("old".to_owned())?;
//!     coordinator.start("new".to_owned())?;
//!
//!     // Resolve out of order: the stale fetch finishes last.
//!     fetcher.resolve(1, Ok(labeled_items(&["fresh"])));
//!     fetcher.resolve(0, Ok(labeled_items(&["stale"])));
//!
//!     assert_eq!(renderer.render_count(), 1);
//! }
//! ```

/// Mock fetchers and renderers
pub mod mocks;

pub use mocks::{
    FailingFetcher, ManualFetcher, RecordingRenderer, StaticFetcher, labeled_items,
};

/// Install a compact tracing subscriber for a test run.
///
/// Safe to call from every test; only the first call in a process takes
/// effect. Honors `RUST_LOG`, defaulting to trace-level output for the
/// typeahead crates.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "typeahead_runtime=trace,typeahead_core=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}
