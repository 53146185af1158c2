//! The descending-price auction state machine.
//!
//! One [`DutchAuction`] sells one lot of one asset. The seller escrows the
//! lot, the quoted price decays linearly from the starting price, and the
//! first buyer to accept the quote takes the entire lot. If nobody buys
//! before the window lapses, anyone may finalize and the lot returns to
//! the seller.
//!
//! ```text
//!             deposit (seller, repeatable)
//!                v
//!   [ OPEN ] --- buy (in window, price > 0) ---> [ SOLD ]
//!       |
//!       +------- finalize (window lapsed) -----> [ CLOSED ]
//! ```
//!
//! ## Custody Properties
//!
//! - The auction owns a dedicated escrow account; deposits and buyer
//!   payments route through it, never through the auction's callers
//! - Every entry point takes the caller, the clock reading, and the ledger
//!   explicitly; nothing is read from ambient state
//! - A failed entry point leaves `status`, the escrowed amount, and (for
//!   `buy`) every ledger balance exactly as it found them
//! - Terminal states are inert: all entry points reject with
//!   `AlreadyTerminal` once the auction is SOLD or CLOSED

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use openlot_ledger::AssetLedger;
use openlot_pricing::{PriceQuote, compute_quote};
use openlot_types::{
    AccountId, AuctionId, AuctionNotice, AuctionParams, AuctionStatus, OpenlotError, Result, Sale,
};

use crate::notice::NoticeLog;
use crate::staged::StagedSettlement;

/// A single descending-price auction and its escrowed lot.
#[derive(Debug)]
pub struct DutchAuction {
    id: AuctionId,
    params: AuctionParams,
    /// Ledger account holding the lot and in-flight payments.
    escrow_account: AccountId,
    /// Units of the sale asset currently held in escrow.
    escrowed_amount: Decimal,
    status: AuctionStatus,
    /// The completed sale, once `status` is SOLD.
    sale: Option<Sale>,
    notices: NoticeLog,
}

impl DutchAuction {
    /// Open a new auction with a freshly provisioned escrow account.
    ///
    /// # Errors
    /// Returns `OL_ERR_901` if the parameters fail validation.
    pub fn new(params: AuctionParams) -> Result<Self> {
        params.validate()?;
        let id = AuctionId::new();
        let escrow_account = AccountId::new();
        tracing::info!(
            auction = %id,
            seller = %params.seller,
            sale_asset = %params.sale_asset,
            payment_asset = %params.payment_asset,
            starting_price = %params.starting_price,
            decay_per_second = %params.decay_per_second,
            duration_secs = params.duration.as_secs(),
            "Auction opened"
        );
        Ok(Self {
            id,
            params,
            escrow_account,
            escrowed_amount: Decimal::ZERO,
            status: AuctionStatus::Open,
            sale: None,
            notices: NoticeLog::default(),
        })
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Escrow an additional `amount` of the sale asset.
    ///
    /// Only the seller may grow the lot, and only while the auction is
    /// OPEN. The lot moves seller -> escrow under the allowance the seller
    /// granted to the escrow account.
    ///
    /// # Errors
    /// - `AlreadyTerminal` once the auction is SOLD or CLOSED
    /// - `Unauthorized` if `caller` is not the seller
    /// - `InvalidArgument` if `amount` is not strictly positive
    /// - `TransferFailed` if the ledger declines the move; nothing changes
    pub fn deposit<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        caller: AccountId,
        amount: Decimal,
        now: DateTime<Utc>,
    ) -> Result<()> {
        self.ensure_open()?;
        if caller != self.params.seller {
            return Err(OpenlotError::Unauthorized {
                reason: "only the seller may deposit into the lot".to_string(),
            });
        }
        if amount <= Decimal::ZERO {
            return Err(OpenlotError::InvalidArgument {
                reason: format!("deposit amount must be positive, got {amount}"),
            });
        }

        ledger
            .transfer_from(
                &self.params.sale_asset,
                self.escrow_account,
                self.params.seller,
                self.escrow_account,
                amount,
            )
            .map_err(|err| OpenlotError::TransferFailed {
                reason: err.to_string(),
            })?;

        self.escrowed_amount += amount;
        self.notices.record(AuctionNotice::DepositAccepted {
            auction_id: self.id,
            amount,
            escrowed_total: self.escrowed_amount,
            at: now,
        });
        tracing::info!(
            auction = %self.id,
            amount = %amount,
            escrowed_total = %self.escrowed_amount,
            "Deposit accepted"
        );
        Ok(())
    }

    /// Accept the current quote and take the entire escrowed lot.
    ///
    /// Settlement runs as one staged unit: the buyer's payment is collected
    /// into escrow first, the lot is delivered second, and the seller is
    /// paid last. A delivery failure unwinds the collected payment, so a
    /// failed buy leaves every balance as it found it.
    ///
    /// # Errors
    /// - `AlreadyTerminal` once the auction is SOLD or CLOSED
    /// - `WindowExpired` if the window lapsed or the price decayed to zero
    /// - `NothingToSell` if no lot is escrowed
    /// - `PaymentFailed` if the buyer's payment cannot be collected
    /// - `SettlementFailed` if a later leg is declined; collected legs are
    ///   unwound and the auction stays OPEN
    pub fn buy<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        caller: AccountId,
        now: DateTime<Utc>,
    ) -> Result<Sale> {
        self.ensure_open()?;

        let quote = compute_quote(&self.params, now);
        if !quote.is_actionable() {
            return Err(OpenlotError::WindowExpired);
        }
        if self.escrowed_amount <= Decimal::ZERO {
            return Err(OpenlotError::NothingToSell);
        }

        let price = quote.price;
        let lot = self.escrowed_amount;
        let mut staged = StagedSettlement::new(self.escrow_account);

        // Leg 1: secure the buyer's payment before anything is released.
        staged
            .collect(ledger, &self.params.payment_asset, caller, price)
            .map_err(|err| OpenlotError::PaymentFailed {
                reason: err.to_string(),
            })?;

        // Leg 2: deliver the lot. On failure the collected payment is
        // refunded and the auction is untouched.
        if let Err(err) = staged.disburse(ledger, &self.params.sale_asset, caller, lot) {
            staged.unwind(ledger)?;
            return Err(OpenlotError::SettlementFailed {
                reason: format!("lot delivery declined: {err}"),
            });
        }

        // Leg 3: pay the seller. The escrow holds the collected price, so
        // a conforming ledger cannot decline this leg.
        staged
            .disburse(ledger, &self.params.payment_asset, self.params.seller, price)
            .map_err(|err| OpenlotError::SettlementFailed {
                reason: format!("seller payout declined: {err}"),
            })?;

        staged.commit();

        self.escrowed_amount = Decimal::ZERO;
        self.transition(AuctionStatus::Sold)?;

        let sale = Sale {
            auction_id: self.id,
            buyer: caller,
            seller: self.params.seller,
            sale_asset: self.params.sale_asset.clone(),
            payment_asset: self.params.payment_asset.clone(),
            lot,
            price,
            executed_at: now,
        };
        self.notices.record(AuctionNotice::SaleCompleted {
            auction_id: self.id,
            buyer: caller,
            price,
            lot,
            at: now,
        });
        tracing::info!(
            auction = %self.id,
            buyer = %caller,
            price = %price,
            lot = %lot,
            elapsed_secs = quote.elapsed_secs,
            digest = sale.digest_hex(),
            "Sale completed"
        );
        self.sale = Some(sale.clone());
        Ok(sale)
    }

    /// Close a lapsed auction, returning any remaining lot to the seller.
    ///
    /// Callable by any account: expiry cleanup is unprivileged. The caller
    /// is recorded in the closure log line.
    ///
    /// # Errors
    /// - `AlreadyTerminal` once the auction is SOLD or CLOSED
    /// - `WindowStillActive` before the window lapses
    /// - `TransferFailed` if the return transfer is declined; the auction
    ///   stays OPEN so the call can be retried
    pub fn finalize<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        caller: AccountId,
        now: DateTime<Utc>,
    ) -> Result<()> {
        self.ensure_open()?;
        if !self.params.is_time_expired(now) {
            return Err(OpenlotError::WindowStillActive {
                remaining_secs: self.params.remaining_secs(now),
            });
        }

        let returned = self.escrowed_amount;
        if returned > Decimal::ZERO {
            ledger
                .transfer(
                    &self.params.sale_asset,
                    self.escrow_account,
                    self.params.seller,
                    returned,
                )
                .map_err(|err| OpenlotError::TransferFailed {
                    reason: err.to_string(),
                })?;
        }

        self.escrowed_amount = Decimal::ZERO;
        self.transition(AuctionStatus::Closed)?;
        self.notices.record(AuctionNotice::AuctionClosed {
            auction_id: self.id,
            returned,
            at: now,
        });
        tracing::info!(
            auction = %self.id,
            caller = %caller,
            returned = %returned,
            "Auction closed"
        );
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Quoted price for the full lot at instant `now`.
    #[must_use]
    pub fn current_price(&self, now: DateTime<Utc>) -> Decimal {
        compute_quote(&self.params, now).price
    }

    /// Full price quote at instant `now`.
    #[must_use]
    pub fn quote(&self, now: DateTime<Utc>) -> PriceQuote {
        compute_quote(&self.params, now)
    }

    #[must_use]
    pub fn id(&self) -> AuctionId {
        self.id
    }

    #[must_use]
    pub fn params(&self) -> &AuctionParams {
        &self.params
    }

    #[must_use]
    pub fn seller(&self) -> AccountId {
        self.params.seller
    }

    /// The ledger account buyers and the seller grant allowances to.
    #[must_use]
    pub fn escrow_account(&self) -> AccountId {
        self.escrow_account
    }

    #[must_use]
    pub fn status(&self) -> AuctionStatus {
        self.status
    }

    #[must_use]
    pub fn escrowed_amount(&self) -> Decimal {
        self.escrowed_amount
    }

    /// The completed sale record, once the auction is SOLD.
    #[must_use]
    pub fn sale(&self) -> Option<&Sale> {
        self.sale.as_ref()
    }

    /// Lifecycle notices recorded so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> &NoticeLog {
        &self.notices
    }

    fn ensure_open(&self) -> Result<()> {
        if self.status.is_terminal() {
            return Err(OpenlotError::AlreadyTerminal {
                status: self.status,
            });
        }
        Ok(())
    }

    fn transition(&mut self, target: AuctionStatus) -> Result<()> {
        if !self.status.can_transition_to(target) {
            return Err(OpenlotError::AlreadyTerminal {
                status: self.status,
            });
        }
        self.status = target;
        Ok(())
    }
}
