//! Supply conservation invariant checker.
//!
//! Mathematical invariant enforced over the in-memory ledger:
//! ```text
//! ∀ asset: Σ(held balances) == Σ(minted)
//! ```
//!
//! Transfers move supply between holders and never create or destroy it.
//! If this invariant ever breaks, custody accounting has gone catastrophically
//! wrong and the host must halt.

use std::collections::HashMap;

use openlot_types::{Asset, OpenlotError, Result};
use rust_decimal::Decimal;

/// Tracks per-asset minted totals and validates conservation on demand.
pub struct SupplyConservation {
    /// Total minted per asset since genesis.
    minted: HashMap<Asset, Decimal>,
}

impl SupplyConservation {
    /// Create a new supply conservation tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            minted: HashMap::new(),
        }
    }

    /// Record newly minted supply.
    pub fn record_mint(&mut self, asset: &str, amount: Decimal) {
        *self
            .minted
            .entry(asset.to_string())
            .or_insert(Decimal::ZERO) += amount;
    }

    /// Expected total supply for an asset: everything minted so far.
    #[must_use]
    pub fn expected_supply(&self, asset: &str) -> Decimal {
        self.minted.get(asset).copied().unwrap_or(Decimal::ZERO)
    }

    /// Verify that the actual supply (sum of all held balances) matches
    /// the minted total for a given asset.
    ///
    /// # Errors
    /// Returns [`OpenlotError::SupplyInvariantViolation`] if actual ≠ expected.
    pub fn verify(&self, asset: &str, actual_supply: Decimal) -> Result<()> {
        let expected = self.expected_supply(asset);
        if actual_supply != expected {
            return Err(OpenlotError::SupplyInvariantViolation {
                reason: format!(
                    "Asset {asset}: actual supply {actual_supply} != minted {expected}"
                ),
            });
        }
        Ok(())
    }

    /// Get all tracked assets.
    #[must_use]
    pub fn tracked_assets(&self) -> Vec<String> {
        self.minted.keys().cloned().collect()
    }
}

impl Default for SupplyConservation {
    fn default() -> Self {
        Self::new()
    }
}
