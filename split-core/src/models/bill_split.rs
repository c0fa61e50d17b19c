use rust_decimal::Decimal;

use crate::calculations::{SplitBreakdown, split_check};
use crate::models::{PartySize, TipRate};

/// The state of one bill being split: a check amount, a party size, and a
/// tip rate.
///
/// This is the single record the application mutates. The two derived
/// figures — the grand total and the per-person share — are recomputed on
/// every read; nothing is cached.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use split_core::{BillSplit, PartySize, TipRate};
///
/// let mut bill = BillSplit::default();
/// bill.set_check_amount(dec!(100.00));
/// bill.set_party_size(PartySize::from_index(2).unwrap());
///
/// assert_eq!(bill.total_amount(), dec!(120.00));
/// assert_eq!(bill.amount_per_person(), dec!(30.00));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BillSplit {
    check_amount: Decimal,
    party_size: PartySize,
    tip: TipRate,
}

impl BillSplit {
    /// Creates a bill with the given inputs.
    pub fn new(
        check_amount: Decimal,
        party_size: PartySize,
        tip: TipRate,
    ) -> Self {
        Self {
            check_amount,
            party_size,
            tip,
        }
    }

    /// The check amount before gratuity.
    pub fn check_amount(&self) -> Decimal {
        self.check_amount
    }

    /// The party splitting the check.
    pub fn party_size(&self) -> PartySize {
        self.party_size
    }

    /// The gratuity rate.
    pub fn tip(&self) -> TipRate {
        self.tip
    }

    /// Replaces the check amount.
    pub fn set_check_amount(
        &mut self,
        amount: Decimal,
    ) {
        self.check_amount = amount;
    }

    /// Replaces the party size.
    pub fn set_party_size(
        &mut self,
        party_size: PartySize,
    ) {
        self.party_size = party_size;
    }

    /// Replaces the tip rate.
    pub fn set_tip(
        &mut self,
        tip: TipRate,
    ) {
        self.tip = tip;
    }

    /// Check amount plus gratuity.
    pub fn total_amount(&self) -> Decimal {
        self.breakdown().grand_total
    }

    /// Each person's share of the total, as the exact quotient.
    pub fn amount_per_person(&self) -> Decimal {
        self.breakdown().per_person
    }

    /// The full split for the current inputs.
    pub fn breakdown(&self) -> SplitBreakdown {
        split_check(self.check_amount, self.tip, self.party_size)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_bill_is_two_people_at_twenty_percent_of_nothing() {
        let bill = BillSplit::default();

        assert_eq!(bill.check_amount(), Decimal::ZERO);
        assert_eq!(bill.party_size().count(), 2);
        assert_eq!(bill.tip().percent(), 20);
        assert_eq!(bill.total_amount(), Decimal::ZERO);
        assert_eq!(bill.amount_per_person(), Decimal::ZERO);
    }

    #[test]
    fn setters_replace_each_field_independently() {
        let mut bill = BillSplit::default();

        bill.set_check_amount(dec!(60.00));
        bill.set_party_size(PartySize::new(3).unwrap());
        bill.set_tip(TipRate::new(10).unwrap());

        assert_eq!(bill.check_amount(), dec!(60.00));
        assert_eq!(bill.party_size().count(), 3);
        assert_eq!(bill.tip().percent(), 10);
        assert_eq!(bill.total_amount(), dec!(66.00));
        assert_eq!(bill.amount_per_person(), dec!(22.00));
    }

    #[test]
    fn derived_values_track_the_latest_inputs() {
        let mut bill = BillSplit::new(
            dec!(50.00),
            PartySize::new(2).unwrap(),
            TipRate::ZERO,
        );

        assert_eq!(bill.total_amount(), dec!(50.00));
        assert_eq!(bill.amount_per_person(), dec!(25.00));

        bill.set_tip(TipRate::new(20).unwrap());

        assert_eq!(bill.total_amount(), dec!(60.00));
        assert_eq!(bill.amount_per_person(), dec!(30.00));
    }

    #[test]
    fn breakdown_echoes_the_inputs() {
        let bill = BillSplit::new(
            dec!(80.00),
            PartySize::new(5).unwrap(),
            TipRate::new(15).unwrap(),
        );

        let breakdown = bill.breakdown();

        assert_eq!(breakdown.check_amount, dec!(80.00));
        assert_eq!(breakdown.party_size, 5);
        assert_eq!(breakdown.tip_percent, 15);
    }
}
