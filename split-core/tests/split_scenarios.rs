//! End-to-end scenarios walking the bill record the way the form drives it:
//! start from defaults, edit one field at a time, and read the derived
//! figures after each edit.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use split_core::{BillSplit, PartySize, TipRate, round_half_up};

#[test]
fn dinner_for_four_with_twenty_percent_tip() {
    let mut bill = BillSplit::default();

    bill.set_check_amount(dec!(100.00));
    bill.set_party_size(PartySize::from_index(2).unwrap());

    assert_eq!(bill.total_amount(), dec!(120.00));
    assert_eq!(bill.amount_per_person(), dec!(30.00));
}

#[test]
fn lunch_for_two_with_no_tip() {
    let mut bill = BillSplit::default();

    bill.set_check_amount(dec!(50.00));
    bill.set_tip(TipRate::ZERO);

    assert_eq!(bill.total_amount(), dec!(50.00));
    assert_eq!(bill.amount_per_person(), dec!(25.00));
}

#[test]
fn empty_check_stays_at_zero_for_any_selection() {
    let mut bill = BillSplit::default();

    for tip in [0u8, 20, 100] {
        for size in [2u8, 13, 99] {
            bill.set_tip(TipRate::new(tip).unwrap());
            bill.set_party_size(PartySize::new(size).unwrap());

            assert_eq!(bill.total_amount(), Decimal::ZERO);
            assert_eq!(bill.amount_per_person(), Decimal::ZERO);
        }
    }
}

#[test]
fn editing_the_tip_after_the_fact_updates_both_figures() {
    let mut bill = BillSplit::new(
        dec!(200.00),
        PartySize::new(4).unwrap(),
        TipRate::ZERO,
    );

    assert_eq!(bill.total_amount(), dec!(200.00));

    bill.set_tip(TipRate::new(25).unwrap());

    assert_eq!(bill.total_amount(), dec!(250.00));
    assert_eq!(bill.amount_per_person(), dec!(62.50));
}

#[test]
fn every_party_size_shares_the_total_without_loss() {
    let bill_total = dec!(157.30);

    for size in PartySize::all() {
        let mut bill = BillSplit::default();
        bill.set_check_amount(bill_total);
        bill.set_tip(TipRate::ZERO);
        bill.set_party_size(size);

        let rebuilt = bill.amount_per_person() * size.as_decimal();
        let drift = (rebuilt - bill.total_amount()).abs();

        assert!(
            drift < dec!(0.0000000000000000000001),
            "size {} drifted by {drift}",
            size.count()
        );
    }
}

#[test]
fn displayed_share_for_an_uneven_split_rounds_to_cents() {
    let mut bill = BillSplit::default();

    bill.set_check_amount(dec!(100.00));
    bill.set_tip(TipRate::ZERO);
    bill.set_party_size(PartySize::new(3).unwrap());

    assert_eq!(round_half_up(bill.amount_per_person()), dec!(33.33));
}

#[test]
fn selector_extremes_map_to_the_documented_party_sizes() {
    assert_eq!(PartySize::from_index(0).unwrap().count(), 2);
    assert_eq!(PartySize::from_index(97).unwrap().count(), 99);
}
