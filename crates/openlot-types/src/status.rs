//! # AuctionStatus — the auction lifecycle state machine
//!
//! ```text
//!   ┌──────┐  buy accepted   ┌──────┐
//!   │ OPEN ├────────────────▶│ SOLD │
//!   └───┬──┘                 └──────┘
//!       │ finalize after window
//!       ▼
//!   ┌────────┐
//!   │ CLOSED │
//!   └────────┘
//! ```
//!
//! ## Lifecycle Properties
//!
//! - **Monotonic**: OPEN is the only non-terminal state; transitions never
//!   go backwards
//! - **Single-shot sale**: OPEN → SOLD is irreversible, a lot sells once
//! - **Mutually exclusive endings**: an auction is never both SOLD and CLOSED
//! - **Terminal inertness**: every state-changing entry point is rejected
//!   once a terminal state is reached

use serde::{Deserialize, Serialize};

/// The lifecycle state of an auction.
///
/// Transitions are **monotonic** (never go backwards):
/// - `Open → Sold` (a buyer accepted the quoted price)
/// - `Open → Closed` (the window lapsed and the lot was returned)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuctionStatus {
    /// Accepting deposits and a single buy. The only mutable state.
    Open,
    /// A buyer accepted the quoted price and the full lot was delivered.
    /// **Irreversible.**
    Sold,
    /// The window lapsed without a sale; the lot went back to the seller.
    /// **Irreversible.**
    Closed,
}

impl AuctionStatus {
    /// Can this auction transition to the given target state?
    #[must_use]
    pub fn can_transition_to(&self, target: Self) -> bool {
        matches!((self, target), (Self::Open, Self::Sold | Self::Closed))
    }

    /// Returns `true` once no further state change is possible.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Sold | Self::Closed)
    }
}

impl std::fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Sold => write!(f, "SOLD"),
            Self::Closed => write!(f, "CLOSED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_transitions_valid() {
        assert!(AuctionStatus::Open.can_transition_to(AuctionStatus::Sold));
        assert!(AuctionStatus::Open.can_transition_to(AuctionStatus::Closed));
    }

    #[test]
    fn state_transitions_invalid() {
        assert!(!AuctionStatus::Sold.can_transition_to(AuctionStatus::Open));
        assert!(!AuctionStatus::Sold.can_transition_to(AuctionStatus::Closed));
        assert!(!AuctionStatus::Closed.can_transition_to(AuctionStatus::Open));
        assert!(!AuctionStatus::Closed.can_transition_to(AuctionStatus::Sold));
        assert!(!AuctionStatus::Open.can_transition_to(AuctionStatus::Open));
    }

    #[test]
    fn terminal_states() {
        assert!(!AuctionStatus::Open.is_terminal());
        assert!(AuctionStatus::Sold.is_terminal());
        assert!(AuctionStatus::Closed.is_terminal());
    }

    #[test]
    fn status_display() {
        assert_eq!(format!("{}", AuctionStatus::Open), "OPEN");
        assert_eq!(format!("{}", AuctionStatus::Sold), "SOLD");
        assert_eq!(format!("{}", AuctionStatus::Closed), "CLOSED");
    }

    #[test]
    fn status_serde_roundtrip() {
        let status = AuctionStatus::Sold;
        let json = serde_json::to_string(&status).unwrap();
        let back: AuctionStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, back);
    }
}
