//! # openlot-auction
//!
//! **Auction Plane**: the descending-price lifecycle and its settlement
//! against an asset ledger.
//!
//! ## Architecture
//!
//! The plane is built from three pieces:
//!
//! 1. [`DutchAuction`]: the state machine. Owns the parameters, the escrow
//!    account, the escrowed amount, and the OPEN -> SOLD / CLOSED status.
//!    Every entry point takes the caller, the clock reading, and the
//!    ledger explicitly.
//! 2. [`StagedSettlement`]: all-or-nothing custody transfers. Collect legs
//!    are journaled and refundable until the first disbursement, so a buy
//!    that fails mid-settlement restores every balance it touched.
//! 3. [`NoticeLog`]: bounded buffer of lifecycle notices for hosts to
//!    poll.
//!
//! ## Entry point flow
//!
//! ```text
//! deposit  --> transfer_from(seller -> escrow)              [stays OPEN]
//! buy      --> collect payment / deliver lot / pay seller   --> SOLD
//! finalize --> transfer(escrow -> seller) remainder         --> CLOSED
//! ```
//!
//! Failed entry points are no-ops on auction state and, through the staged
//! unit, on ledger balances.

pub mod auction;
pub mod notice;
pub mod staged;

pub use auction::DutchAuction;
pub use notice::NoticeLog;
pub use staged::StagedSettlement;
