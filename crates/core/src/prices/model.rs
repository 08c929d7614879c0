use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::errors::PriceError;

/// Latest known price for a symbol.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Price {
    pub symbol: String,
    pub price: Decimal,
    pub updated_at: DateTime<Utc>,
}

/// Outcome of a successful refresh cycle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PriceRefreshResult {
    pub symbols_updated: usize,
    pub refreshed_at: DateTime<Utc>,
}

/// Immutable symbol -> price mapping taken at one point in time.
///
/// Keys are canonical uppercase symbols and every price is >= 0.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSnapshot {
    prices: HashMap<String, Price>,
    taken_at: DateTime<Utc>,
}

impl PriceSnapshot {
    pub fn empty() -> Self {
        PriceSnapshot {
            prices: HashMap::new(),
            taken_at: Utc::now(),
        }
    }

    /// Builds a snapshot from a raw mapping, validating every entry first.
    pub fn from_prices(
        raw: HashMap<String, Decimal>,
        taken_at: DateTime<Utc>,
    ) -> std::result::Result<Self, PriceError> {
        let rows = raw.into_iter().map(|(symbol, price)| Price {
            symbol,
            price,
            updated_at: taken_at,
        });
        Self::build(rows, taken_at)
    }

    /// Builds a snapshot from persisted rows, keeping each row's timestamp.
    pub fn from_rows(rows: Vec<Price>) -> std::result::Result<Self, PriceError> {
        let taken_at = rows
            .iter()
            .map(|row| row.updated_at)
            .max()
            .unwrap_or_else(Utc::now);
        Self::build(rows.into_iter(), taken_at)
    }

    fn build(
        rows: impl Iterator<Item = Price>,
        taken_at: DateTime<Utc>,
    ) -> std::result::Result<Self, PriceError> {
        let mut prices = HashMap::new();
        for row in rows {
            let symbol = canonical_symbol(&row.symbol);
            if symbol.is_empty() {
                return Err(PriceError::InvalidPrice(
                    "Symbol cannot be empty".to_string(),
                ));
            }
            if row.price < Decimal::ZERO {
                return Err(PriceError::InvalidPrice(format!(
                    "{} has a negative price: {}",
                    symbol, row.price
                )));
            }
            if prices.contains_key(&symbol) {
                return Err(PriceError::InvalidPrice(format!(
                    "Duplicate symbol {}",
                    symbol
                )));
            }
            prices.insert(symbol.clone(), Price { symbol, ..row });
        }
        Ok(PriceSnapshot { prices, taken_at })
    }

    /// Case-insensitive lookup.
    pub fn get(&self, symbol: &str) -> Option<&Price> {
        self.prices.get(&canonical_symbol(symbol))
    }

    pub fn price_of(&self, symbol: &str) -> Option<Decimal> {
        self.get(symbol).map(|p| p.price)
    }

    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn prices(&self) -> impl Iterator<Item = &Price> {
        self.prices.values()
    }
}

impl Default for PriceSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

pub(crate) fn canonical_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}
