//! Decimal helpers shared by the valuation engine and the input layers.
//!
//! All rounding uses half-up (`MidpointAwayFromZero`): 0.125 -> 0.13 and
//! -0.125 -> -0.13. The same mode is used for units and money.

use num_traits::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::constants::{DISPLAY_DECIMAL_PRECISION, UNITS_DECIMAL_PRECISION};
use crate::errors::{Error, Result};

pub fn round_half_up(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a monetary value for display.
pub fn round_money(value: Decimal) -> Decimal {
    round_half_up(value, DISPLAY_DECIMAL_PRECISION)
}

/// Rounds a unit quantity to the precision used by the zero-holding test.
pub fn round_units(value: Decimal) -> Decimal {
    round_half_up(value, UNITS_DECIMAL_PRECISION)
}

/// Converts a wire-level float into a decimal, rejecting NaN and infinities.
pub fn decimal_from_f64(field: &str, value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(Error::invalid_input(format!(
            "{} must be a finite number, got {}",
            field, value
        )));
    }
    Decimal::from_f64(value).ok_or_else(|| {
        Error::invalid_input(format!("{} is out of range: {}", field, value))
    })
}

/// Parses a decimal stored as text.
pub fn parse_decimal(field: &str, value: &str) -> Result<Decimal> {
    Decimal::from_str(value.trim()).map_err(|e| {
        log::error!("Failed to parse {} '{}' as decimal: {}", field, value, e);
        Error::from(e)
    })
}
