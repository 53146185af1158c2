//! # openlot-types
//!
//! Shared types, errors, and configuration for the **OpenLot** auction engine.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AuctionId`], [`AccountId`], [`Asset`]
//! - **Auction configuration**: [`AuctionParams`]
//! - **Lifecycle model**: [`AuctionStatus`]
//! - **Sale model**: [`Sale`]
//! - **Notice model**: [`AuctionNotice`]
//! - **Errors**: [`OpenlotError`] with `OL_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod constants;
pub mod error;
pub mod event;
pub mod ids;
pub mod params;
pub mod sale;
pub mod status;

// Re-export all primary types at crate root for ergonomic imports:
//   use openlot_types::{AuctionParams, AuctionStatus, Sale, ...};

pub use error::*;
pub use event::*;
pub use ids::*;
pub use params::*;
pub use sale::*;
pub use status::*;

// Constants are accessed via `openlot_types::constants::FOO`
// (not re-exported to avoid name collisions).
