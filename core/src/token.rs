//! Request identity and staleness detection.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of one started request.
///
/// Tokens carry no semantic content; they exist only so a settling response
/// can be compared against the most recently minted token. Creation order
/// and numeric order coincide, so "newer" is just "greater".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Raw counter value, mainly useful for logging.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Mints strictly increasing [`RequestToken`]s.
///
/// Shared by reference between a coordinator and its spawned settlement
/// tasks; minting is a single atomic increment.
#[derive(Debug, Default)]
pub struct TokenMinter {
    next: AtomicU64,
}

impl TokenMinter {
    /// Create a minter whose first token is `#1`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Mint the next token. Every call returns a strictly greater token
    /// than any previous call on the same minter.
    pub fn mint(&self) -> RequestToken {
        RequestToken(self.next.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_strictly_increasing() {
        let minter = TokenMinter::new();
        let first = minter.mint();
        let second = minter.mint();
        let third = minter.mint();
        assert!(first < second && second < third);
        assert_eq!(first.value(), 1);
    }

    #[test]
    fn tokens_order_by_creation_across_interleaving() {
        let minter = TokenMinter::new();
        let older = minter.mint();
        let newer = minter.mint();
        // Only the numerically greatest token is current.
        assert!(newer.max(older) == newer);
    }
}
