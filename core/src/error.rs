//! Failure vocabulary for fetches.

use thiserror::Error;

/// Why a fetch failed.
///
/// Cancellation is deliberately absent: a fetcher reports cancellation
/// through its [`CancelSignal`](crate::cancel::CancelSignal), never by
/// failing, so this type stays reserved for genuine transport problems
/// that the render boundary may want to show with a retry-friendly
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The backend answered with a non-success HTTP status.
    #[error("HTTP {0}")]
    Status(u16),

    /// The request could not be completed at the transport level
    /// (connection failure, timeout enforced by the fetcher, malformed
    /// response body).
    #[error("transport error: {0}")]
    Transport(String),
}
