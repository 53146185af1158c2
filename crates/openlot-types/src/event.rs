//! Observer-facing notices for the OpenLot audit trail.
//!
//! Notices are fire-and-forget evidence: the state machine records them for
//! downstream observers but never reads them back. Delivery is not
//! correctness-bearing, so nothing here can fail.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AccountId, AuctionId};

/// A notice emitted by the auction state machine after a committed
/// transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AuctionNotice {
    /// The seller escrowed an additional `amount` of the sale asset.
    DepositAccepted {
        auction_id: AuctionId,
        amount: Decimal,
        escrowed_total: Decimal,
        at: DateTime<Utc>,
    },
    /// A buyer accepted the quoted price; the full lot was delivered.
    SaleCompleted {
        auction_id: AuctionId,
        buyer: AccountId,
        price: Decimal,
        lot: Decimal,
        at: DateTime<Utc>,
    },
    /// The window lapsed without a sale; the remaining lot went back.
    AuctionClosed {
        auction_id: AuctionId,
        returned: Decimal,
        at: DateTime<Utc>,
    },
}

impl AuctionNotice {
    /// The auction that emitted this notice.
    #[must_use]
    pub fn auction_id(&self) -> AuctionId {
        match self {
            Self::DepositAccepted { auction_id, .. }
            | Self::SaleCompleted { auction_id, .. }
            | Self::AuctionClosed { auction_id, .. } => *auction_id,
        }
    }

    /// When the notice was emitted.
    #[must_use]
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Self::DepositAccepted { at, .. }
            | Self::SaleCompleted { at, .. }
            | Self::AuctionClosed { at, .. } => *at,
        }
    }
}

impl std::fmt::Display for AuctionNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DepositAccepted { .. } => write!(f, "DEPOSIT_ACCEPTED"),
            Self::SaleCompleted { .. } => write!(f, "SALE_COMPLETED"),
            Self::AuctionClosed { .. } => write!(f, "AUCTION_CLOSED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_display_labels() {
        let notice = AuctionNotice::DepositAccepted {
            auction_id: AuctionId::new(),
            amount: Decimal::ONE,
            escrowed_total: Decimal::ONE,
            at: Utc::now(),
        };
        assert_eq!(format!("{notice}"), "DEPOSIT_ACCEPTED");
    }

    #[test]
    fn notice_accessors() {
        let id = AuctionId::new();
        let at = Utc::now();
        let notice = AuctionNotice::SaleCompleted {
            auction_id: id,
            buyer: AccountId::new(),
            price: Decimal::new(100, 0),
            lot: Decimal::ONE,
            at,
        };
        assert_eq!(notice.auction_id(), id);
        assert_eq!(notice.at(), at);
    }

    #[test]
    fn notice_serde_roundtrip() {
        let notice = AuctionNotice::AuctionClosed {
            auction_id: AuctionId::new(),
            returned: Decimal::new(500, 0),
            at: Utc::now(),
        };
        let json = serde_json::to_string(&notice).unwrap();
        let back: AuctionNotice = serde_json::from_str(&json).unwrap();
        assert_eq!(notice.auction_id(), back.auction_id());
    }
}
