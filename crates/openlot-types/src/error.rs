//! Error types for the OpenLot auction engine.
//!
//! All errors use the `OL_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Parameter errors
//! - 2xx: Ledger / custody errors
//! - 3xx: Auction lifecycle errors
//! - 4xx: Auction window errors
//! - 5xx: Settlement errors
//! - 9xx: General / internal errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::AuctionStatus;

/// Central error enum for all OpenLot operations.
#[derive(Debug, Error)]
pub enum OpenlotError {
    // =================================================================
    // Parameter Errors (1xx)
    // =================================================================
    /// A caller-supplied value failed validation (zero amount, etc.).
    #[error("OL_ERR_100: Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    // =================================================================
    // Ledger / Custody Errors (2xx)
    // =================================================================
    /// Not enough held balance to perform the transfer.
    #[error("OL_ERR_200: Insufficient available balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Decimal, available: Decimal },

    /// The owner has not pre-authorized enough for this spender.
    #[error("OL_ERR_201: Insufficient allowance: need {needed}, approved {approved}")]
    InsufficientAllowance { needed: Decimal, approved: Decimal },

    /// Supply conservation invariant violated — critical safety alert.
    #[error("OL_ERR_202: Supply invariant violation: {reason}")]
    SupplyInvariantViolation { reason: String },

    // =================================================================
    // Auction Lifecycle Errors (3xx)
    // =================================================================
    /// The caller lacks the capability for this entry point.
    #[error("OL_ERR_300: Unauthorized: {reason}")]
    Unauthorized { reason: String },

    /// The auction has already reached a terminal state.
    #[error("OL_ERR_301: Auction already terminal in state {status}")]
    AlreadyTerminal { status: AuctionStatus },

    /// A buy was attempted with nothing escrowed.
    #[error("OL_ERR_302: Nothing to sell: escrowed lot is zero")]
    NothingToSell,

    // =================================================================
    // Auction Window Errors (4xx)
    // =================================================================
    /// The actionable window has lapsed (or the price decayed to zero).
    #[error("OL_ERR_400: Auction window expired")]
    WindowExpired,

    /// Finalize was attempted before the window lapsed.
    #[error("OL_ERR_401: Auction window still active: {remaining_secs}s remaining")]
    WindowStillActive { remaining_secs: u64 },

    // =================================================================
    // Settlement Errors (5xx)
    // =================================================================
    /// The buyer's payment could not be collected. Nothing moved.
    #[error("OL_ERR_500: Payment failed: {reason}")]
    PaymentFailed { reason: String },

    /// A settlement leg failed after payment was collected; the collected
    /// legs were unwound and no partial state remains.
    #[error("OL_ERR_501: Settlement failed: {reason}")]
    SettlementFailed { reason: String },

    /// A single custody transfer was declined by the ledger.
    #[error("OL_ERR_502: Transfer failed: {reason}")]
    TransferFailed { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("OL_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Configuration error (invalid auction parameters, missing fields, etc.).
    #[error("OL_ERR_901: Configuration error: {0}")]
    Configuration(String),

    /// I/O error (disk, network).
    #[error("OL_ERR_902: I/O error: {0}")]
    Io(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, OpenlotError>;

// Conversion from std::io::Error
impl From<std::io::Error> for OpenlotError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = OpenlotError::WindowExpired;
        let msg = format!("{err}");
        assert!(msg.starts_with("OL_ERR_400"), "Got: {msg}");
    }

    #[test]
    fn insufficient_balance_display() {
        let err = OpenlotError::InsufficientBalance {
            needed: Decimal::new(100, 0),
            available: Decimal::new(50, 0),
        };
        let msg = format!("{err}");
        assert!(msg.contains("OL_ERR_200"));
        assert!(msg.contains("100"));
        assert!(msg.contains("50"));
    }

    #[test]
    fn already_terminal_display() {
        let err = OpenlotError::AlreadyTerminal {
            status: AuctionStatus::Sold,
        };
        let msg = format!("{err}");
        assert!(msg.contains("OL_ERR_301"));
        assert!(msg.contains("SOLD"));
    }

    #[test]
    fn all_errors_have_ol_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(OpenlotError::InvalidArgument {
                reason: "test".into(),
            }),
            Box::new(OpenlotError::NothingToSell),
            Box::new(OpenlotError::WindowStillActive { remaining_secs: 30 }),
            Box::new(OpenlotError::PaymentFailed {
                reason: "test".into(),
            }),
            Box::new(OpenlotError::Internal("test".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("OL_ERR_"),
                "Error missing OL_ERR_ prefix: {msg}"
            );
        }
    }
}
