//! Trimmed, comparable user queries.

use serde::{Deserialize, Serialize};

/// A captured piece of user intent: the search text, trimmed.
///
/// Two queries are equal exactly when they would produce the same request,
/// so equality is string equality of the trimmed text. A `Query` is
/// immutable once captured; re-typing the same text yields an equal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query(String);

impl Query {
    /// Capture a query from raw input, trimming surrounding whitespace.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_owned())
    }

    /// The trimmed query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters rather than bytes, so minimum-length policies
    /// count what the user sees in the input field.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether the trimmed text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(Query::new("  asu  ").as_str(), "asu");
        assert_eq!(Query::new("\tasu\n"), Query::new("asu"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let query = Query::new("Asunción");
        assert_eq!(query.len(), 8);
        assert!(query.as_str().len() > 8);
    }

    #[test]
    fn whitespace_only_input_is_empty() {
        assert!(Query::new("   ").is_empty());
        assert_eq!(Query::new("   ").len(), 0);
    }

    proptest! {
        #[test]
        fn capture_is_idempotent(raw in ".{0,64}") {
            let query = Query::new(&raw);
            prop_assert_eq!(Query::new(query.as_str()), query);
        }

        #[test]
        fn captured_text_never_grows(raw in ".{0,64}") {
            let query = Query::new(&raw);
            prop_assert!(query.len() <= raw.chars().count());
        }
    }
}
