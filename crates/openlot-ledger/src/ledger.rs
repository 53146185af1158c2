//! Custody primitives: the [`AssetLedger`] trait and its in-memory
//! reference implementation.
//!
//! Tracks per-(holder, asset) held balances and per-(owner, spender, asset)
//! allowances. All mutations are atomic: either the full transfer applies or
//! every balance and allowance is unchanged.

use std::collections::HashMap;

use openlot_types::{AccountId, Asset, OpenlotError, Result};
use rust_decimal::Decimal;

use crate::SupplyConservation;

/// The custody collaborator the auction engine settles against.
///
/// Implementations must be all-or-nothing per call: a declined transfer
/// leaves every balance and allowance unchanged. The settlement journal
/// relies on that contract when it records compensating transfers.
pub trait AssetLedger {
    /// Move `amount` of `asset` out of `owner`, debiting the allowance
    /// `owner` granted to `spender`.
    ///
    /// # Errors
    /// Returns `InsufficientAllowance` or `InsufficientBalance` if the
    /// authorization or the owner's held balance cannot cover `amount`.
    fn transfer_from(
        &mut self,
        asset: &str,
        spender: AccountId,
        owner: AccountId,
        recipient: AccountId,
        amount: Decimal,
    ) -> Result<()>;

    /// Move `amount` of `asset` from `sender`'s own held balance.
    ///
    /// # Errors
    /// Returns `InsufficientBalance` if `sender` holds less than `amount`.
    fn transfer(
        &mut self,
        asset: &str,
        sender: AccountId,
        recipient: AccountId,
        amount: Decimal,
    ) -> Result<()>;

    /// The balance `holder` currently holds. Unknown holders read as zero.
    fn balance_of(&self, asset: &str, holder: AccountId) -> Decimal;
}

/// In-memory reference ledger.
///
/// Source of truth for balances in tests and single-process hosts. Supply
/// enters only through [`InMemoryLedger::mint`]; transfers conserve it.
pub struct InMemoryLedger {
    /// Per-(holder, asset) held balances.
    balances: HashMap<(AccountId, Asset), Decimal>,
    /// Per-(owner, spender, asset) transfer authorizations.
    allowances: HashMap<(AccountId, AccountId, Asset), Decimal>,
    /// Minted totals, checked against held totals.
    conservation: SupplyConservation,
}

impl InMemoryLedger {
    /// Create a new empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
            allowances: HashMap::new(),
            conservation: SupplyConservation::new(),
        }
    }

    /// Create supply and credit it to `recipient` (the host funding path).
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `amount` is negative.
    pub fn mint(&mut self, asset: &str, recipient: AccountId, amount: Decimal) -> Result<()> {
        if amount < Decimal::ZERO {
            return Err(OpenlotError::InvalidArgument {
                reason: "mint amount must be non-negative".to_string(),
            });
        }
        self.credit(asset, recipient, amount);
        self.conservation.record_mint(asset, amount);
        tracing::debug!(asset, recipient = %recipient, amount = %amount, "Supply minted");
        Ok(())
    }

    /// Grant `spender` the right to move up to `amount` of `asset` out of
    /// `owner`'s balance via [`AssetLedger::transfer_from`].
    ///
    /// Replaces any previous allowance for the same (owner, spender, asset).
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `amount` is negative.
    pub fn approve(
        &mut self,
        asset: &str,
        owner: AccountId,
        spender: AccountId,
        amount: Decimal,
    ) -> Result<()> {
        if amount < Decimal::ZERO {
            return Err(OpenlotError::InvalidArgument {
                reason: "allowance must be non-negative".to_string(),
            });
        }
        self.allowances
            .insert((owner, spender, asset.to_string()), amount);
        Ok(())
    }

    /// The remaining allowance `owner` granted to `spender`.
    #[must_use]
    pub fn allowance(&self, asset: &str, owner: AccountId, spender: AccountId) -> Decimal {
        self.allowances
            .get(&(owner, spender, asset.to_string()))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Total supply of an asset (sum over all holders).
    #[must_use]
    pub fn total_supply(&self, asset: &str) -> Decimal {
        self.balances
            .iter()
            .filter(|((_, a), _)| a == asset)
            .map(|(_, balance)| *balance)
            .sum()
    }

    /// Verify that held supply equals minted supply for `asset`.
    ///
    /// # Errors
    /// Returns [`OpenlotError::SupplyInvariantViolation`] on mismatch.
    pub fn verify_supply(&self, asset: &str) -> Result<()> {
        self.conservation.verify(asset, self.total_supply(asset))
    }

    fn credit(&mut self, asset: &str, holder: AccountId, amount: Decimal) {
        *self
            .balances
            .entry((holder, asset.to_string()))
            .or_insert(Decimal::ZERO) += amount;
    }

    fn debit(&mut self, asset: &str, holder: AccountId, amount: Decimal) {
        *self
            .balances
            .entry((holder, asset.to_string()))
            .or_insert(Decimal::ZERO) -= amount;
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetLedger for InMemoryLedger {
    fn transfer_from(
        &mut self,
        asset: &str,
        spender: AccountId,
        owner: AccountId,
        recipient: AccountId,
        amount: Decimal,
    ) -> Result<()> {
        if amount < Decimal::ZERO {
            return Err(OpenlotError::InvalidArgument {
                reason: "transfer amount must be non-negative".to_string(),
            });
        }
        let approved = self.allowance(asset, owner, spender);
        if approved < amount {
            return Err(OpenlotError::InsufficientAllowance {
                needed: amount,
                approved,
            });
        }
        let available = self.balance_of(asset, owner);
        if available < amount {
            return Err(OpenlotError::InsufficientBalance {
                needed: amount,
                available,
            });
        }

        // All checks passed; the mutations below cannot fail.
        self.allowances
            .insert((owner, spender, asset.to_string()), approved - amount);
        self.debit(asset, owner, amount);
        self.credit(asset, recipient, amount);

        tracing::debug!(
            asset,
            owner = %owner,
            recipient = %recipient,
            amount = %amount,
            "Allowance transfer applied"
        );
        Ok(())
    }

    fn transfer(
        &mut self,
        asset: &str,
        sender: AccountId,
        recipient: AccountId,
        amount: Decimal,
    ) -> Result<()> {
        if amount < Decimal::ZERO {
            return Err(OpenlotError::InvalidArgument {
                reason: "transfer amount must be non-negative".to_string(),
            });
        }
        let available = self.balance_of(asset, sender);
        if available < amount {
            return Err(OpenlotError::InsufficientBalance {
                needed: amount,
                available,
            });
        }

        self.debit(asset, sender, amount);
        self.credit(asset, recipient, amount);

        tracing::debug!(
            asset,
            sender = %sender,
            recipient = %recipient,
            amount = %amount,
            "Transfer applied"
        );
        Ok(())
    }

    fn balance_of(&self, asset: &str, holder: AccountId) -> Decimal {
        self.balances
            .get(&(holder, asset.to_string()))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}
