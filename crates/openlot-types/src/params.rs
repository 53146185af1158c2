//! Auction parameters: the immutable configuration fixed at creation.
//!
//! Everything time-dependent is a pure function of these parameters plus a
//! caller-supplied clock reading. The engine itself never consults a live
//! clock.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AccountId, Asset, OpenlotError};

/// Immutable parameters of a descending-price auction.
///
/// The offer covers the full escrowed lot: it starts at `starting_price`
/// and decreases by `decay_per_second` each elapsed second until the window
/// `[start_time, start_time + duration)` lapses or the price reaches zero,
/// whichever comes first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuctionParams {
    /// The asset being sold (the escrowed lot).
    pub sale_asset: Asset,
    /// The asset the buyer pays with. May equal `sale_asset`.
    pub payment_asset: Asset,
    /// The account that escrows the lot and receives the proceeds.
    pub seller: AccountId,
    /// Price of the full lot at `start_time`, in `payment_asset` units.
    pub starting_price: Decimal,
    /// Linear price decrease per elapsed second.
    pub decay_per_second: Decimal,
    /// When the price clock starts.
    pub start_time: DateTime<Utc>,
    /// Length of the actionable window.
    pub duration: Duration,
}

impl AuctionParams {
    /// Validate the parameters.
    ///
    /// # Errors
    /// Returns `OL_ERR_901` if a price field is negative or an asset
    /// identifier is empty.
    pub fn validate(&self) -> crate::Result<()> {
        if self.sale_asset.is_empty() {
            return Err(OpenlotError::Configuration(
                "sale_asset must not be empty".to_string(),
            ));
        }
        if self.payment_asset.is_empty() {
            return Err(OpenlotError::Configuration(
                "payment_asset must not be empty".to_string(),
            ));
        }
        if self.starting_price < Decimal::ZERO {
            return Err(OpenlotError::Configuration(
                "starting_price must be non-negative".to_string(),
            ));
        }
        if self.decay_per_second < Decimal::ZERO {
            return Err(OpenlotError::Configuration(
                "decay_per_second must be non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Whole seconds elapsed since `start_time`, clamped at zero before the
    /// window opens.
    #[must_use]
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u64 {
        u64::try_from((now - self.start_time).num_seconds().max(0)).unwrap_or(0)
    }

    /// Returns `true` once the actionable window has lapsed.
    ///
    /// The comparison happens in the elapsed-seconds domain, so a `duration`
    /// beyond the representable `DateTime` range cannot overflow.
    #[must_use]
    pub fn is_time_expired(&self, now: DateTime<Utc>) -> bool {
        self.elapsed_secs(now) >= self.duration.as_secs()
    }

    /// Seconds remaining until the window lapses (zero once expired).
    #[must_use]
    pub fn remaining_secs(&self, now: DateTime<Utc>) -> u64 {
        self.duration.as_secs().saturating_sub(self.elapsed_secs(now))
    }
}

/// Dummy parameters for testing. **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
impl AuctionParams {
    /// One-hour auction decaying 1 payment unit per second from 1,000,000.
    #[must_use]
    pub fn dummy(seller: AccountId, start_time: DateTime<Utc>) -> Self {
        Self {
            sale_asset: "LOT".to_string(),
            payment_asset: "PAY".to_string(),
            seller,
            starting_price: Decimal::new(1_000_000, 0),
            decay_per_second: Decimal::ONE,
            start_time,
            duration: Duration::from_secs(crate::constants::DEFAULT_DURATION_SECS),
        }
    }
}
