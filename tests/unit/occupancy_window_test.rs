// Occupancy window resolution
//
// - Leap-year day counts
// - Full-year and partial-year occupancy
// - Exact-day and month-based fractions
// - Rejection of leases with no day in the target year

use charge_regularization::core::CalculationError;
use charge_regularization::regularizations::models::{CalculationMethod, LeasePeriod};
use charge_regularization::regularizations::services::resolve_occupancy_window;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_leap_year_has_366_days() {
    let lease = LeasePeriod::open_ended(date(2020, 1, 1), 2024);
    let window = resolve_occupancy_window(&lease, CalculationMethod::ProrataExactDays, 4).unwrap();
    assert_eq!(window.total_days_in_year, 366);

    let lease = LeasePeriod::open_ended(date(2020, 1, 1), 2023);
    let window = resolve_occupancy_window(&lease, CalculationMethod::ProrataExactDays, 4).unwrap();
    assert_eq!(window.total_days_in_year, 365);
}

#[test]
fn test_full_year_occupancy() {
    let lease = LeasePeriod::new(date(2023, 1, 1), Some(date(2023, 12, 31)), 2023);
    let window = resolve_occupancy_window(&lease, CalculationMethod::ProrataExactDays, 4).unwrap();

    assert_eq!(window.occupancy_days, 365);
    assert_eq!(window.occupancy_fraction, Decimal::ONE);
}

#[test]
fn test_partial_year_from_july() {
    let lease = LeasePeriod::open_ended(date(2023, 7, 1), 2023);
    let window = resolve_occupancy_window(&lease, CalculationMethod::ProrataExactDays, 4).unwrap();

    assert_eq!(window.effective_start, date(2023, 7, 1));
    assert_eq!(window.effective_end, date(2023, 12, 31));
    assert_eq!(window.occupancy_days, 184);
    assert_eq!(window.occupancy_fraction, dec!(0.5041));
}

#[test]
fn test_partial_leap_year_from_march() {
    let lease = LeasePeriod::open_ended(date(2024, 3, 1), 2024);
    let window = resolve_occupancy_window(&lease, CalculationMethod::ProrataExactDays, 4).unwrap();

    assert_eq!(window.occupancy_days, 306);
    assert_eq!(window.occupancy_fraction, dec!(0.8361));
}

#[test]
fn test_month_mode_from_july() {
    let lease = LeasePeriod::open_ended(date(2023, 7, 1), 2023);
    let window = resolve_occupancy_window(&lease, CalculationMethod::ProrataMonths, 4).unwrap();

    assert_eq!(window.occupancy_days, 184);
    assert_eq!(window.occupancy_fraction, dec!(0.5));
}

#[test]
fn test_month_mode_counts_partial_boundary_months() {
    // 31 January to 1 February touches two months
    let lease = LeasePeriod::new(date(2023, 1, 31), Some(date(2023, 2, 1)), 2023);
    let window = resolve_occupancy_window(&lease, CalculationMethod::ProrataMonths, 4).unwrap();

    assert_eq!(window.occupancy_days, 2);
    assert_eq!(window.occupancy_fraction, dec!(0.1667));
}

#[test]
fn test_lease_ended_before_year_is_rejected() {
    let lease = LeasePeriod::new(date(2021, 7, 1), Some(date(2022, 6, 30)), 2023);
    let result = resolve_occupancy_window(&lease, CalculationMethod::ProrataExactDays, 4);

    assert!(matches!(result, Err(CalculationError::InvalidPeriod { .. })));
}

#[test]
fn test_lease_ending_on_new_year_day_counts_one_day() {
    let lease = LeasePeriod::new(date(2021, 7, 1), Some(date(2023, 1, 1)), 2023);
    let window = resolve_occupancy_window(&lease, CalculationMethod::ProrataExactDays, 4).unwrap();

    assert_eq!(window.occupancy_days, 1);
    assert_eq!(window.occupancy_fraction, dec!(0.0027));
}

#[test]
fn test_inverted_lease_is_rejected() {
    let lease = LeasePeriod::new(date(2023, 8, 1), Some(date(2023, 3, 1)), 2023);
    let result = resolve_occupancy_window(&lease, CalculationMethod::ProrataMonths, 4);

    assert!(matches!(result, Err(CalculationError::InvalidPeriod { .. })));
}

/// Leases starting within 2018..=2026 and lasting up to three years
fn lease_strategy() -> impl Strategy<Value = (NaiveDate, Option<NaiveDate>)> {
    (2018i32..=2026, 1u32..=12, 1u32..=28, proptest::option::of(0i64..=1100)).prop_map(
        |(year, month, day, length)| {
            let start = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            (start, length.map(|days| start + Duration::days(days)))
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: an overlapping lease always yields a fraction in (0, 1]
    #[test]
    fn prop_fraction_within_unit_interval(
        (start, end) in lease_strategy(),
        target_year in 2018i32..=2029,
        months in any::<bool>(),
    ) {
        let method = if months {
            CalculationMethod::ProrataMonths
        } else {
            CalculationMethod::ProrataExactDays
        };
        let lease = LeasePeriod::new(start, end, target_year);

        match resolve_occupancy_window(&lease, method, 4) {
            Ok(window) => {
                prop_assert!(window.occupancy_fraction > Decimal::ZERO);
                prop_assert!(window.occupancy_fraction <= Decimal::ONE);
                prop_assert!(window.occupancy_days >= 1);
                prop_assert!(window.occupancy_days <= window.total_days_in_year);
                prop_assert!(window.effective_start <= window.effective_end);
            }
            Err(err) => {
                let ended_before = end.map_or(false, |e| e < date(target_year, 1, 1));
                let starts_after = start > date(target_year, 12, 31);
                prop_assert!(ended_before || starts_after, "unexpected error: {}", err);
            }
        }
    }

    /// Property: resolving twice gives the same window
    #[test]
    fn prop_resolution_is_deterministic(
        (start, end) in lease_strategy(),
        target_year in 2018i32..=2029,
    ) {
        let lease = LeasePeriod::new(start, end, target_year);
        let first = resolve_occupancy_window(&lease, CalculationMethod::ProrataExactDays, 4);
        let second = resolve_occupancy_window(&lease, CalculationMethod::ProrataExactDays, 4);
        prop_assert_eq!(first, second);
    }
}
