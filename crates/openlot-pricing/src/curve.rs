//! Quoted-price computation for descending-price auctions.
//!
//! The offer price decreases linearly from `starting_price` by
//! `decay_per_second` each elapsed second, pinned at zero once the window
//! lapses or the decay consumes the full starting price.
//!
//! The computation is deterministic: same parameters + same instant → same quote.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use openlot_types::AuctionParams;

/// Result of a price quote.
#[derive(Debug, Clone)]
pub struct PriceQuote {
    /// The quoted price for the full lot, in payment-asset units.
    pub price: Decimal,
    /// Whole seconds elapsed since the window opened (zero before it opens).
    pub elapsed_secs: u64,
    /// The window has lapsed; the price is pinned at zero.
    pub time_expired: bool,
    /// Linear decay consumed the full starting price before the window lapsed.
    pub floor_reached: bool,
}

impl PriceQuote {
    /// Returns `true` if a buy at this quote could succeed: the window is
    /// still open and the price has not decayed to zero.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        !self.time_expired && self.price > Decimal::ZERO
    }
}

/// Compute the quoted price for the given parameters at instant `now`.
///
/// Algorithm:
/// 1. Clamp elapsed time at zero; quotes before `start_time` pay the full
///    starting price
/// 2. A lapsed window pins the price at zero
/// 3. `decrease = elapsed × decay_per_second`, checked; a product past the
///    `Decimal` range is treated exactly like a decay past zero
/// 4. Otherwise `price = starting_price − decrease`
///
/// # Returns
/// A [`PriceQuote`]. The function is total and never panics.
#[must_use]
pub fn compute_quote(params: &AuctionParams, now: DateTime<Utc>) -> PriceQuote {
    let elapsed_secs = params.elapsed_secs(now);

    if params.is_time_expired(now) {
        return PriceQuote {
            price: Decimal::ZERO,
            elapsed_secs,
            time_expired: true,
            floor_reached: false,
        };
    }

    // Decimal::from(u64) is exact; the checked product catches the decay
    // running past the representable range.
    let decrease = Decimal::from(elapsed_secs).checked_mul(params.decay_per_second);

    match decrease {
        Some(d) if d < params.starting_price => PriceQuote {
            price: params.starting_price - d,
            elapsed_secs,
            time_expired: false,
            floor_reached: false,
        },
        // Decay at or past the starting price, or an overflowed product.
        _ => PriceQuote {
            price: Decimal::ZERO,
            elapsed_secs,
            time_expired: false,
            floor_reached: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use openlot_types::AccountId;

    use super::*;

    fn make_params() -> AuctionParams {
        // 1,000,000 starting price, 1/s decay, 3600s window
        AuctionParams::dummy(AccountId::new(), Utc::now())
    }

    #[test]
    fn quote_at_start_is_starting_price() {
        let params = make_params();
        let q = compute_quote(&params, params.start_time);
        assert_eq!(q.price, Decimal::new(1_000_000, 0));
        assert_eq!(q.elapsed_secs, 0);
        assert!(q.is_actionable());
    }

    #[test]
    fn quote_decreases_linearly() {
        let params = make_params();
        let at_30s = params.start_time + chrono::Duration::seconds(30);
        let q = compute_quote(&params, at_30s);
        assert_eq!(q.price, Decimal::new(999_970, 0));
        assert_eq!(q.elapsed_secs, 30);
        assert!(!q.time_expired);
        assert!(!q.floor_reached);
    }

    #[test]
    fn quote_before_start_pays_full_price() {
        let params = make_params();
        let early = params.start_time - chrono::Duration::seconds(120);
        let q = compute_quote(&params, early);
        assert_eq!(q.price, Decimal::new(1_000_000, 0));
        assert_eq!(q.elapsed_secs, 0);
    }

    #[test]
    fn quote_zero_at_window_boundary() {
        let params = make_params();
        let boundary = params.start_time + chrono::Duration::seconds(3600);
        let q = compute_quote(&params, boundary);
        assert_eq!(q.price, Decimal::ZERO);
        assert!(q.time_expired);
        assert!(!q.is_actionable());
    }

    #[test]
    fn quote_zero_far_past_expiry() {
        let params = make_params();
        let distant = params.start_time + chrono::Duration::days(3650);
        let q = compute_quote(&params, distant);
        assert_eq!(q.price, Decimal::ZERO);
        assert!(q.time_expired);
    }

    #[test]
    fn floor_reached_before_window_lapses() {
        let mut params = make_params();
        params.starting_price = Decimal::new(100, 0);
        params.decay_per_second = Decimal::new(60, 0);
        let at_2s = params.start_time + chrono::Duration::seconds(2);
        let q = compute_quote(&params, at_2s);
        assert_eq!(q.price, Decimal::ZERO);
        assert!(q.floor_reached);
        assert!(!q.time_expired);
        assert!(!q.is_actionable());
    }

    #[test]
    fn floor_at_exact_decay_boundary() {
        let mut params = make_params();
        params.starting_price = Decimal::new(100, 0);
        // decrease == starting_price pins the quote at zero
        let at_100s = params.start_time + chrono::Duration::seconds(100);
        let q = compute_quote(&params, at_100s);
        assert_eq!(q.price, Decimal::ZERO);
        assert!(q.floor_reached);
    }

    #[test]
    fn overflowing_decay_clamps_to_floor() {
        let mut params = make_params();
        params.decay_per_second = Decimal::MAX;
        let at_2s = params.start_time + chrono::Duration::seconds(2);
        let q = compute_quote(&params, at_2s);
        assert_eq!(q.price, Decimal::ZERO);
        assert!(q.floor_reached);
    }

    #[test]
    fn zero_starting_price_quotes_zero() {
        let mut params = make_params();
        params.starting_price = Decimal::ZERO;
        let q = compute_quote(&params, params.start_time);
        assert_eq!(q.price, Decimal::ZERO);
        assert!(!q.is_actionable());
    }

    #[test]
    fn zero_decay_holds_price_until_expiry() {
        let mut params = make_params();
        params.decay_per_second = Decimal::ZERO;
        let late = params.start_time + chrono::Duration::seconds(3599);
        let q = compute_quote(&params, late);
        assert_eq!(q.price, Decimal::new(1_000_000, 0));
        assert!(q.is_actionable());
    }

    #[test]
    fn price_monotone_nonincreasing_over_random_sample() {
        use rand::Rng;

        let params = make_params();
        let mut rng = rand::thread_rng();
        let mut offsets: Vec<u64> = (0..200).map(|_| rng.gen_range(0..=7200)).collect();
        offsets.sort_unstable();

        let mut last = compute_quote(&params, params.start_time).price;
        for offset in offsets {
            let at = params.start_time + chrono::Duration::seconds(i64::try_from(offset).unwrap());
            let price = compute_quote(&params, at).price;
            assert!(price <= last, "price rose from {last} to {price} at +{offset}s");
            last = price;
        }
    }
}
