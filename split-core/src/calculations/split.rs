//! Gratuity and per-person share calculations.
//!
//! The whole computation is two formulas:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Tip amount: check amount × tip percentage / 100 |
//! | 2    | Grand total: check amount + tip amount |
//! | 3    | Per-person share: grand total / party size |
//!
//! The tip amount is rounded half-up to cents so the displayed figures add
//! up exactly; the grand total is the plain sum and therefore equals the
//! check amount whenever the tip is zero. The per-person share is kept as
//! the exact decimal quotient — multiplying it back by the party size
//! reproduces the grand total to full precision — and is rounded only when
//! formatted for display.
//!
//! There are no error conditions: [`TipRate`] and [`PartySize`] are valid by
//! construction, and a party size is never below 2, so the division cannot
//! be by zero. A negative check amount is computed through unchanged but
//! logged, since input widgets do not constrain the sign.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use crate::models::{PartySize, TipRate};

/// Rounds a decimal value to cents using half-up rounding.
///
/// Values at exactly half a cent round away from zero, the usual convention
/// for money.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use split_core::round_half_up;
///
/// assert_eq!(round_half_up(dec!(12.344)), dec!(12.34));
/// assert_eq!(round_half_up(dec!(12.345)), dec!(12.35));
/// assert_eq!(round_half_up(dec!(-12.345)), dec!(-12.35));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Result of splitting one check.
///
/// Carries the inputs alongside the derived figures so a single record tells
/// the whole story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitBreakdown {
    /// The check amount before gratuity.
    pub check_amount: Decimal,

    /// Tip percentage applied to the check.
    pub tip_percent: u8,

    /// Number of people sharing the total.
    pub party_size: u8,

    /// Gratuity in currency, rounded to cents.
    pub tip_amount: Decimal,

    /// Check amount plus tip.
    pub grand_total: Decimal,

    /// Each person's share of the grand total, as the exact quotient.
    ///
    /// Round with [`round_half_up`] when presenting as currency.
    pub per_person: Decimal,
}

/// Splits a check: applies the gratuity and divides the total across the
/// party.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use split_core::{PartySize, TipRate, split_check};
///
/// let breakdown = split_check(
///     dec!(100.00),
///     TipRate::new(20).unwrap(),
///     PartySize::new(4).unwrap(),
/// );
///
/// assert_eq!(breakdown.tip_amount, dec!(20.00));
/// assert_eq!(breakdown.grand_total, dec!(120.00));
/// assert_eq!(breakdown.per_person, dec!(30.00));
/// ```
pub fn split_check(
    check_amount: Decimal,
    tip: TipRate,
    party: PartySize,
) -> SplitBreakdown {
    if check_amount < Decimal::ZERO {
        warn!(
            check_amount = %check_amount,
            "check amount is negative; computing anyway"
        );
    }

    let tip_amount = round_half_up(check_amount * tip.multiplier());
    let grand_total = check_amount + tip_amount;
    let per_person = grand_total / party.as_decimal();

    SplitBreakdown {
        check_amount,
        tip_percent: tip.percent(),
        party_size: party.count(),
        tip_amount,
        grand_total,
        per_person,
    }
}
