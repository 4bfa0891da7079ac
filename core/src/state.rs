//! Coordinator lifecycle states.

use crate::token::RequestToken;

/// Where a request pipeline currently is in its lifecycle.
///
/// Exactly one state is active per coordinator at any instant. Transitions
/// are owned exclusively by the coordinator; callers only ever observe a
/// snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    /// No request pending or running.
    Idle,
    /// A trigger is waiting out its debounce window.
    Pending,
    /// A fetch is running under the given token.
    InFlight(RequestToken),
    /// The given token's outcome is being delivered to the renderer.
    Settled(RequestToken),
}

impl RequestState {
    /// Whether nothing is pending or running.
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether a fetch is currently running.
    #[must_use]
    pub const fn is_in_flight(self) -> bool {
        matches!(self, Self::InFlight(_))
    }

    /// The token attached to this state, when there is one.
    #[must_use]
    pub const fn token(self) -> Option<RequestToken> {
        match self {
            Self::InFlight(token) | Self::Settled(token) => Some(token),
            Self::Idle | Self::Pending => None,
        }
    }
}

impl std::fmt::Display for RequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Pending => write!(f, "pending"),
            Self::InFlight(token) => write!(f, "in-flight({token})"),
            Self::Settled(token) => write!(f, "settled({token})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenMinter;

    #[test]
    fn token_is_attached_to_active_states_only() {
        let minter = TokenMinter::new();
        let token = minter.mint();
        assert_eq!(RequestState::InFlight(token).token(), Some(token));
        assert_eq!(RequestState::Settled(token).token(), Some(token));
        assert_eq!(RequestState::Idle.token(), None);
        assert_eq!(RequestState::Pending.token(), None);
    }

    #[test]
    fn predicates() {
        assert!(RequestState::Idle.is_idle());
        assert!(!RequestState::Pending.is_idle());
        let token = TokenMinter::new().mint();
        assert!(RequestState::InFlight(token).is_in_flight());
    }
}
