use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places carried by every euro amount
pub const CURRENCY_SCALE: u32 = 2;

/// Default decimal places kept on occupancy fractions and revision rates
pub const DEFAULT_RATIO_SCALE: u32 = 4;

/// Lower bound accepted for a configured ratio scale; one day out of 366
/// must not round to zero
pub const MIN_RATIO_SCALE: u32 = 3;

/// Upper bound accepted for a configured ratio scale
pub const MAX_RATIO_SCALE: u32 = 10;

/// Rounds an amount to cents, half-up (midpoint away from zero).
///
/// `Decimal::round_dp` uses banker's rounding, which is not what a tenant
/// statement shows: 0.125 must become 0.13.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a ratio half-up to `scale` decimal places
pub fn round_ratio(value: Decimal, scale: u32) -> Decimal {
    value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a floating point amount, rejecting NaN and infinities
pub fn decimal_from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::try_from(value).ok()
}
