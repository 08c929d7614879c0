//! Column conversion helpers.
//!
//! Decimals, dates and timestamps are stored as TEXT. Reading them back is
//! strict: a value that does not parse surfaces as `StorageError::InvalidColumn`
//! instead of being replaced by a default.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::fmt::Display;
use std::str::FromStr;

use crate::errors::StorageError;
use wealthnest_core::utils::time_utils::{parse_date, parse_timestamp};

fn invalid(column: &str, value: &str, err: impl Display) -> StorageError {
    StorageError::InvalidColumn(format!("{} = '{}': {}", column, value, err))
}

pub fn decimal_column(value: &str, column: &str) -> Result<Decimal, StorageError> {
    Decimal::from_str(value).map_err(|e| invalid(column, value, e))
}

pub fn date_column(value: &str, column: &str) -> Result<NaiveDate, StorageError> {
    parse_date(value).map_err(|e| invalid(column, value, e))
}

pub fn timestamp_column(value: &str, column: &str) -> Result<DateTime<Utc>, StorageError> {
    parse_timestamp(value).map_err(|e| invalid(column, value, e))
}
