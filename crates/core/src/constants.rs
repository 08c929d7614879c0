/// Decimal places kept on unit quantities before the zero-holding test
pub const UNITS_DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for displayed monetary values
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Default interval between two price refreshes (3 hours)
pub const DEFAULT_PRICE_REFRESH_INTERVAL_SECS: u64 = 3 * 60 * 60;

/// Date format used when dates are stored as text
pub const DATE_FORMAT: &str = "%Y-%m-%d";
