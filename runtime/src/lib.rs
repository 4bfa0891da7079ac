//! # Typeahead Runtime
//!
//! The two active components of the typeahead architecture, plus the glue
//! a widget call-site needs:
//!
//! - **[`Debouncer`]**: collapses a burst of triggers into at most one
//!   callback per quiet period, carrying the last query seen
//! - **[`RequestCoordinator`]**: enforces single-flight request semantics —
//!   at most one request is current at a time, and only the current
//!   request's outcome ever reaches the renderer
//! - **[`SearchBox`]**: wires both together with the minimum-length policy
//!
//! Control flow: input event → [`Debouncer`] (delay/reset) → quiet period →
//! [`RequestCoordinator::start`] → asynchronous settlement → render
//! callback, invoked only if the settling request is still current.
//!
//! ## Example
//!
//! ```ignore
//! use typeahead_core::{Outcome, Query, SearchConfig};
//! use typeahead_runtime::SearchBox;
//!
//! let mut search = SearchBox::new(
//!     SearchConfig::default(),
//!     |query: Query, _cancel| async move { backend.lookup(query).await },
//!     |query: &Query, outcome: Outcome<RowData>| view.show(query, outcome),
//! );
//!
//! search.input("a");
//! search.input("as");
//! search.input("asu");
//! // One fetch for "asu" fires after the quiet period; earlier keystrokes
//! // never reach the network or the view.
//! ```

/// Single-flight request coordination
pub mod coordinator;

/// Quiet-period coalescing of bursty triggers
pub mod debouncer;

/// Input wiring and the minimum-length policy
pub mod search;

/// Error types for the coordinator runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during coordinator operations.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum CoordinatorError {
        /// The coordinator was torn down and starts no further requests.
        ///
        /// Returned by `start()` after `dispose()`; settlements of
        /// requests already in flight become silent no-ops instead.
        #[error("coordinator is disposed")]
        Disposed,
    }
}

pub use coordinator::RequestCoordinator;
pub use debouncer::Debouncer;
pub use error::CoordinatorError;
pub use search::SearchBox;
