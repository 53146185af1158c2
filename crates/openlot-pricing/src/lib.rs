//! # openlot-pricing
//!
//! **Pure price-curve computation for OpenLot.**
//!
//! The pricing engine is the compute plane -- it takes auction parameters
//! and a clock reading and produces the quoted price. It has:
//!
//! - **Zero side effects**: no custody, no mutable state, no clock reads of
//!   its own
//! - **Deterministic output**: same parameters + same instant -> same quote
//! - **Total domain**: defined before the window opens and arbitrarily far
//!   past expiry
//! - **Overflow safety**: a decay product past the `Decimal` range clamps to
//!   the zero floor instead of panicking

pub mod curve;

pub use curve::{PriceQuote, compute_quote};
