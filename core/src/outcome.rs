//! Request outcomes and result items.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// One display row returned by a fetch.
///
/// The coordinator never interprets `payload`; it is whatever the call
/// site needs to act on a selection — coordinates for the place picker,
/// row data for the live filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item<T> {
    /// Text shown to the user.
    pub label: String,
    /// Opaque data for the call site.
    pub payload: T,
}

impl<T> Item<T> {
    /// Build an item from a label and its payload.
    pub fn new(label: impl Into<String>, payload: T) -> Self {
        Self {
            label: label.into(),
            payload,
        }
    }
}

/// How one request ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The fetch resolved with result rows, possibly none.
    Success(Vec<Item<T>>),
    /// The fetch genuinely failed; delivered once via the error-render
    /// path, never retried automatically.
    Failure(FetchError),
    /// The request was superseded or torn down. Absorbed by the
    /// coordinator; a renderer never sees this variant.
    Cancelled,
}

impl<T> Outcome<T> {
    /// Whether this outcome carries result rows.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether this outcome is a genuine failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Whether this outcome is a cancellation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// The result rows, when present.
    #[must_use]
    pub fn items(&self) -> Option<&[Item<T>]> {
        match self {
            Self::Success(items) => Some(items),
            Self::Failure(_) | Self::Cancelled => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_partition_the_variants() {
        let success: Outcome<()> = Outcome::Success(vec![Item::new("a", ())]);
        let failure: Outcome<()> = Outcome::Failure(FetchError::Status(500));
        let cancelled: Outcome<()> = Outcome::Cancelled;

        assert!(success.is_success() && !success.is_failure());
        assert!(failure.is_failure() && !failure.is_cancelled());
        assert!(cancelled.is_cancelled() && !cancelled.is_success());
    }

    #[test]
    fn items_only_on_success() {
        let success: Outcome<u8> = Outcome::Success(vec![Item::new("a", 1)]);
        assert_eq!(success.items().map(<[Item<u8>]>::len), Some(1));
        assert!(Outcome::<u8>::Cancelled.items().is_none());
    }
}
