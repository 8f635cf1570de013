// Per-charge proration
//
// - prorated = round2(annual * fraction), half-up
// - Month mode prorates by exact twelfths, not the rounded fraction
// - Input order preserved
// - Negative amounts and empty lists rejected without partial output

use charge_regularization::core::CalculationError;
use charge_regularization::regularizations::models::{
    CalculationMethod, ChargeCategory, ChargeItem, LeasePeriod,
};
use charge_regularization::regularizations::services::{
    prorate_charges, prorate_window_charges, resolve_occupancy_window,
};
use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_full_year_keeps_annual_amounts() {
    let items = vec![
        ChargeItem::recoverable(ChargeCategory::Water, dec!(480.35)),
        ChargeItem::recoverable(ChargeCategory::Heating, dec!(720)),
        ChargeItem::non_recoverable(ChargeCategory::Insurance, dec!(500)),
    ];

    let prorated = prorate_charges(&items, Decimal::ONE).unwrap();

    for (item, charge) in items.iter().zip(&prorated) {
        assert_eq!(charge.prorated_amount, item.annual_amount);
    }
}

#[test]
fn test_partial_year_water_charge() {
    let items = vec![ChargeItem::recoverable(ChargeCategory::Water, dec!(1200))];
    let prorated = prorate_charges(&items, dec!(0.5041)).unwrap();

    assert_eq!(prorated[0].prorated_amount, dec!(604.92));
    assert!(prorated[0].is_recoverable);
}

fn prorate_by_months(start_month: u32, annual: Decimal) -> Decimal {
    let start = NaiveDate::from_ymd_opt(2023, start_month, 1).unwrap();
    let lease = LeasePeriod::open_ended(start, 2023);
    let window = resolve_occupancy_window(&lease, CalculationMethod::ProrataMonths, 4).unwrap();
    let items = vec![ChargeItem::recoverable(ChargeCategory::Water, annual)];

    prorate_window_charges(&items, &window).unwrap()[0].prorated_amount
}

#[test]
fn test_month_mode_one_and_five_twelfths() {
    // December only, then August through December
    assert_eq!(prorate_by_months(12, dec!(1200)), dec!(100.00));
    assert_eq!(prorate_by_months(8, dec!(1200)), dec!(500.00));
    assert_eq!(prorate_by_months(8, dec!(120000)), dec!(50000.00));
}

#[test]
fn test_month_mode_uneven_amount_rounds_once() {
    // 1000 * 7 / 12 = 583.333...
    assert_eq!(prorate_by_months(6, dec!(1000)), dec!(583.33));
}

#[test]
fn test_input_order_is_preserved() {
    let items = vec![
        ChargeItem::recoverable(ChargeCategory::Gardening, dec!(120)),
        ChargeItem::recoverable(ChargeCategory::Cleaning, dec!(300)),
        ChargeItem::recoverable(ChargeCategory::Water, dec!(480)),
        ChargeItem::recoverable(ChargeCategory::from("intercom"), dec!(60)),
    ];

    let prorated = prorate_charges(&items, dec!(0.25)).unwrap();
    let categories: Vec<&str> = prorated.iter().map(|c| c.category.as_str()).collect();

    assert_eq!(categories, vec!["gardening", "cleaning", "water", "intercom"]);
}

#[test]
fn test_negative_amount_is_rejected() {
    let items = vec![
        ChargeItem::recoverable(ChargeCategory::Water, dec!(480)),
        ChargeItem::recoverable(ChargeCategory::Heating, dec!(-1)),
    ];

    match prorate_charges(&items, dec!(0.5)) {
        Err(CalculationError::InvalidChargeAmount { category, amount }) => {
            assert_eq!(category, "heating");
            assert_eq!(amount, "-1");
        }
        other => panic!("expected InvalidChargeAmount, got {:?}", other),
    }
}

#[test]
fn test_empty_list_is_rejected() {
    assert_eq!(
        prorate_charges(&[], dec!(0.5)),
        Err(CalculationError::NoChargeItems)
    );
}

#[test]
fn test_zero_amount_is_accepted() {
    let items = vec![ChargeItem::recoverable(ChargeCategory::Elevator, Decimal::ZERO)];
    let prorated = prorate_charges(&items, dec!(0.5041)).unwrap();
    assert_eq!(prorated[0].prorated_amount, Decimal::ZERO);
}

proptest! {
    /// Property: a prorated amount lies between zero and the annual amount
    #[test]
    fn prop_prorated_amount_bounded_by_annual(
        cents in 0u64..10_000_000u64,
        fraction_bp in 1u32..=10_000u32,
    ) {
        let annual = Decimal::from(cents) / Decimal::from(100);
        let fraction = Decimal::from(fraction_bp) / Decimal::from(10_000);
        let items = vec![ChargeItem::recoverable(ChargeCategory::Water, annual)];

        let prorated = prorate_charges(&items, fraction).unwrap();

        prop_assert!(prorated[0].prorated_amount >= Decimal::ZERO);
        prop_assert!(prorated[0].prorated_amount <= annual);
        prop_assert!(prorated[0].prorated_amount.scale() <= 2);
    }

    /// Property: the rounding error never exceeds half a cent
    #[test]
    fn prop_rounding_error_below_half_cent(
        cents in 0u64..10_000_000u64,
        fraction_bp in 1u32..=10_000u32,
    ) {
        let annual = Decimal::from(cents) / Decimal::from(100);
        let fraction = Decimal::from(fraction_bp) / Decimal::from(10_000);
        let items = vec![ChargeItem::recoverable(ChargeCategory::Heating, annual)];

        let prorated = prorate_charges(&items, fraction).unwrap();
        let exact = annual * fraction;

        prop_assert!((prorated[0].prorated_amount - exact).abs() <= dec!(0.005));
    }
}
