//! Debounce and minimum-length configuration.

use std::time::Duration;

/// Tuning knobs for one search box.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use typeahead_core::SearchConfig;
///
/// let config = SearchConfig::new()
///     .with_debounce(Duration::from_millis(200))
///     .with_min_length(3);
/// assert_eq!(config.min_length, 3);
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Quiet period a burst of input must survive before a fetch fires.
    /// Zero collapses scheduling into a synchronous fire.
    pub debounce: Duration,

    /// Non-empty queries shorter than this never fetch. Empty queries are
    /// exempt, so the view can clear previously rendered results.
    pub min_length: usize,
}

impl SearchConfig {
    /// Create a configuration with default settings.
    ///
    /// Defaults:
    /// - `debounce`: 350 ms
    /// - `min_length`: 2
    #[must_use]
    pub const fn new() -> Self {
        Self {
            debounce: Duration::from_millis(350),
            min_length: 2,
        }
    }

    /// Set the debounce quiet period.
    #[must_use]
    pub const fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Set the minimum query length.
    #[must_use]
    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_small_and_non_zero() {
        let config = SearchConfig::default();
        assert!(!config.debounce.is_zero());
        assert!(config.min_length > 0);
    }

    #[test]
    fn builders_override_fields() {
        let config = SearchConfig::new()
            .with_debounce(Duration::ZERO)
            .with_min_length(5);
        assert!(config.debounce.is_zero());
        assert_eq!(config.min_length, 5);
    }
}
