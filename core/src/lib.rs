//! # Typeahead Core
//!
//! Shared vocabulary for the typeahead request coordinator.
//!
//! This crate defines the types the runtime crate coordinates over:
//! queries, result items, outcomes, request tokens, cancellation
//! signalling, and the two collaborator seams ([`Fetcher`] and
//! [`Renderer`]) a call site plugs into.
//!
//! ## Core Concepts
//!
//! - **Query**: immutable, comparable user intent captured per trigger
//! - **RequestToken**: identity minted per started request; only the most
//!   recently minted token is "current"
//! - **Outcome**: how a request ended (results, failure, or cancellation)
//! - **Fetcher / Renderer**: the network seam and the view seam; the
//!   coordinator consumes from them only, it never owns I/O or presentation
//!
//! ## Example
//!
//! ```
//! use typeahead_core::{Item, Outcome, Query};
//!
//! let query = Query::new("  asunción ");
//! assert_eq!(query.as_str(), "asunción");
//!
//! let outcome: Outcome<(f64, f64)> = Outcome::Success(vec![
//!     Item::new("Asunción, Paraguay", (-25.2867, -57.6459)),
//! ]);
//! assert!(outcome.is_success());
//! ```

/// Cooperative cancellation signalling (handle/signal pair)
pub mod cancel;

/// Debounce and minimum-length configuration
pub mod config;

/// Failure vocabulary for fetches
pub mod error;

/// The fetch seam between the coordinator and the network
pub mod fetch;

/// Request outcomes and result items
pub mod outcome;

/// Trimmed, comparable user queries
pub mod query;

/// The render seam between the coordinator and the view
pub mod render;

/// Coordinator lifecycle states
pub mod state;

/// Request identity and staleness detection
pub mod token;

pub use cancel::{CancelHandle, CancelSignal, cancel_pair};
pub use config::SearchConfig;
pub use error::FetchError;
pub use fetch::{FetchFuture, Fetcher};
pub use outcome::{Item, Outcome};
pub use query::Query;
pub use render::Renderer;
pub use state::RequestState;
pub use token::{RequestToken, TokenMinter};
