//! Sale record: the immutable evidence of a completed auction.
//!
//! A [`Sale`] is produced exactly once, when a buyer accepts the quoted
//! price. Its SHA-256 digest makes the record independently checkable in an
//! external audit trail.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AccountId, Asset, AuctionId};

/// The immutable record of a completed sale.
///
/// Records the full-lot fill at the price quoted when the buyer accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    /// The auction that produced this sale.
    pub auction_id: AuctionId,
    /// The account that accepted the quoted price.
    pub buyer: AccountId,
    /// The account that received the proceeds.
    pub seller: AccountId,
    /// The asset delivered to the buyer.
    pub sale_asset: Asset,
    /// The asset the buyer paid with.
    pub payment_asset: Asset,
    /// Quantity delivered (the full escrowed lot).
    pub lot: Decimal,
    /// Price paid for the full lot, in `payment_asset` units.
    pub price: Decimal,
    /// When the sale executed.
    pub executed_at: DateTime<Utc>,
}

impl Sale {
    /// Deterministic SHA-256 digest over the canonical sale payload.
    ///
    /// Format: `"openlot:sale:v1:" || auction_id || buyer || seller || sale_asset || payment_asset || lot || price || executed_at`
    #[must_use]
    pub fn digest(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(b"openlot:sale:v1:");
        hasher.update(self.auction_id.0.as_bytes());
        hasher.update(self.buyer.0.as_bytes());
        hasher.update(self.seller.0.as_bytes());
        hasher.update(self.sale_asset.as_bytes());
        hasher.update(self.payment_asset.as_bytes());
        hasher.update(self.lot.to_string().as_bytes());
        hasher.update(self.price.to_string().as_bytes());
        hasher.update(self.executed_at.to_rfc3339().as_bytes());
        hasher.finalize().into()
    }

    /// Hex encoding of [`Self::digest`], for logs and receipts.
    #[must_use]
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest())
    }
}

impl std::fmt::Display for Sale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sale[{}] {} {} @ {} {} to {}",
            self.auction_id, self.lot, self.sale_asset, self.price, self.payment_asset, self.buyer,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sale() -> Sale {
        Sale {
            auction_id: AuctionId::new(),
            buyer: AccountId::new(),
            seller: AccountId::new(),
            sale_asset: "LOT".to_string(),
            payment_asset: "PAY".to_string(),
            lot: Decimal::new(1000, 0),
            price: Decimal::new(999_970, 0),
            executed_at: Utc::now(),
        }
    }

    #[test]
    fn digest_deterministic() {
        let sale = make_sale();
        assert_eq!(sale.digest(), sale.digest());
    }

    #[test]
    fn digest_differs_by_price() {
        let sale1 = make_sale();
        let mut sale2 = sale1.clone();
        sale2.price = Decimal::new(1, 0);
        assert_ne!(sale1.digest(), sale2.digest());
    }

    #[test]
    fn digest_hex_is_64_chars() {
        let sale = make_sale();
        assert_eq!(sale.digest_hex().len(), 64);
    }

    #[test]
    fn sale_display() {
        let sale = make_sale();
        let s = format!("{sale}");
        assert!(s.contains("LOT"));
        assert!(s.contains("999970"));
    }

    #[test]
    fn sale_serde_roundtrip() {
        let sale = make_sale();
        let json = serde_json::to_string(&sale).unwrap();
        let back: Sale = serde_json::from_str(&json).unwrap();
        assert_eq!(sale.auction_id, back.auction_id);
        assert_eq!(sale.price, back.price);
        assert_eq!(sale.digest(), back.digest());
    }
}
