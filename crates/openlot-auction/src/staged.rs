//! Staged settlement: an all-or-nothing unit of custody transfers.
//!
//! A settlement unit executes legs in two phases:
//! 1. **collect**: pull funds into the escrow account under an allowance.
//!    Every executed collect is journaled together with its inverse, which
//!    the escrow account can always perform on its own authority.
//! 2. **disburse**: pay funds out of the escrow account. The first
//!    successful disbursement is the point of no return.
//!
//! While only collects have executed, [`StagedSettlement::unwind`] refunds
//! them in reverse journal order and restores every balance the unit
//! touched. Callers sequence legs so that every leg that can still fail
//! runs before the point of no return.

use openlot_ledger::AssetLedger;
use openlot_types::{AccountId, Asset, OpenlotError, Result};
use rust_decimal::Decimal;

/// One executed, refundable collect leg.
#[derive(Debug, Clone)]
struct CollectedLeg {
    asset: Asset,
    payer: AccountId,
    amount: Decimal,
}

/// An all-or-nothing settlement unit over an [`AssetLedger`].
#[derive(Debug)]
pub struct StagedSettlement {
    /// Account collecting and disbursing funds.
    escrow: AccountId,
    /// Executed collect legs, journal order.
    collected: Vec<CollectedLeg>,
    /// Set once a disbursement executes.
    disbursed: bool,
}

impl StagedSettlement {
    /// Open a settlement unit operating with `escrow`'s authority.
    #[must_use]
    pub fn new(escrow: AccountId) -> Self {
        Self {
            escrow,
            collected: Vec::new(),
            disbursed: false,
        }
    }

    /// Execute a collect leg: `payer` pays `amount` of `asset` into escrow
    /// under the allowance previously granted to the escrow account.
    ///
    /// On success the leg is journaled so the unit can still be unwound.
    ///
    /// # Errors
    /// Propagates the ledger's rejection unchanged. A failed collect moves
    /// nothing and journals nothing.
    pub fn collect(
        &mut self,
        ledger: &mut impl AssetLedger,
        asset: &str,
        payer: AccountId,
        amount: Decimal,
    ) -> Result<()> {
        ledger.transfer_from(asset, self.escrow, payer, self.escrow, amount)?;
        self.collected.push(CollectedLeg {
            asset: asset.to_string(),
            payer,
            amount,
        });
        Ok(())
    }

    /// Execute a disbursement leg: escrow pays `amount` of `asset` to
    /// `recipient` from its own balance.
    ///
    /// A successful disbursement seals the unit against unwinding, so
    /// callers disburse only once every remaining leg is covered by funds
    /// already held in escrow.
    ///
    /// # Errors
    /// Propagates the ledger's rejection unchanged. A failed disbursement
    /// moves nothing and leaves the unit unwindable.
    pub fn disburse(
        &mut self,
        ledger: &mut impl AssetLedger,
        asset: &str,
        recipient: AccountId,
        amount: Decimal,
    ) -> Result<()> {
        ledger.transfer(asset, self.escrow, recipient, amount)?;
        self.disbursed = true;
        Ok(())
    }

    /// Refund every journaled collect in reverse order, restoring the
    /// balances the unit touched.
    ///
    /// # Errors
    /// Returns `OL_ERR_900` if a disbursement already executed. Refund
    /// transfers themselves cannot be declined by a conforming ledger:
    /// the escrow still holds every collected amount.
    pub fn unwind(mut self, ledger: &mut impl AssetLedger) -> Result<()> {
        if self.disbursed {
            return Err(OpenlotError::Internal(
                "cannot unwind a settlement after a disbursement".to_string(),
            ));
        }
        while let Some(leg) = self.collected.pop() {
            ledger.transfer(&leg.asset, self.escrow, leg.payer, leg.amount)?;
            tracing::warn!(
                asset = %leg.asset,
                payer = %leg.payer,
                amount = %leg.amount,
                "Settlement leg unwound"
            );
        }
        Ok(())
    }

    /// Seal the unit: all executed legs are final and the journal is
    /// discarded.
    pub fn commit(self) {
        tracing::debug!(
            escrow = %self.escrow,
            legs = self.collected.len(),
            "Settlement committed"
        );
    }

    /// Number of journaled collect legs.
    #[must_use]
    pub fn collected_legs(&self) -> usize {
        self.collected.len()
    }

    /// Whether the unit has passed the point of no return.
    #[must_use]
    pub fn has_disbursed(&self) -> bool {
        self.disbursed
    }
}
