//! # openlot-ledger
//!
//! **Custody Plane**: the asset ledger the auction engine settles against.
//!
//! ## Architecture
//!
//! 1. **AssetLedger**: the trait boundary between the auction state machine
//!    and whatever holds real balances
//! 2. **InMemoryLedger**: reference implementation with held balances and
//!    pre-authorized allowances
//! 3. **SupplyConservation**: per-asset minted-total tracking; transfers
//!    must conserve supply
//!
//! ## Transfer authority
//!
//! ```text
//! approve(owner, spender)  grants  transfer_from(owner -> recipient)
//! transfer(sender -> recipient)    spends the sender's own held balance
//! ```
//!
//! Every mutation is all-or-nothing: a declined transfer leaves balances
//! and allowances untouched.

pub mod conservation;
pub mod ledger;

pub use conservation::SupplyConservation;
pub use ledger::{AssetLedger, InMemoryLedger};
