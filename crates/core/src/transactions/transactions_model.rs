//! Ledger domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};
use crate::transactions::transactions_constants::{TRANSACTION_SIDE_BUY, TRANSACTION_SIDE_SELL};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionSide {
    Buy,
    Sell,
}

impl TransactionSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionSide::Buy => TRANSACTION_SIDE_BUY,
            TransactionSide::Sell => TRANSACTION_SIDE_SELL,
        }
    }
}

impl FromStr for TransactionSide {
    type Err = String;

    /// Case-insensitive: "buy", "Buy" and "BUY" are all accepted.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            TRANSACTION_SIDE_BUY => Ok(TransactionSide::Buy),
            TRANSACTION_SIDE_SELL => Ok(TransactionSide::Sell),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl fmt::Display for TransactionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored ledger entry. Never mutated once appended.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    /// Canonical uppercase ticker symbol.
    pub symbol: String,
    #[serde(rename = "type")]
    pub side: TransactionSide,
    pub units: Decimal,
    pub price: Decimal,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Checks the structural preconditions of the valuation fold.
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.symbol, self.units, self.price).map_err(|message| {
            Error::invalid_input(format!("Transaction {}: {}", self.id, message))
        })
    }
}

/// Input model for appending a transaction to a user's ledger.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub symbol: String,
    /// "BUY" or "SELL", any case.
    #[serde(rename = "type")]
    pub side: String,
    pub units: Decimal,
    pub price: Decimal,
    pub date: NaiveDate,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<()> {
        TransactionSide::from_str(&self.side).map_err(Error::invalid_input)?;
        validate_fields(&self.symbol, self.units, self.price).map_err(Error::invalid_input)
    }

    /// Validates and returns the canonical form: trimmed uppercase symbol and side.
    pub fn normalized(self) -> Result<Self> {
        self.validate()?;
        let side = TransactionSide::from_str(&self.side).map_err(Error::invalid_input)?;
        Ok(NewTransaction {
            symbol: self.symbol.trim().to_uppercase(),
            side: side.as_str().to_string(),
            ..self
        })
    }
}

fn validate_fields(
    symbol: &str,
    units: Decimal,
    price: Decimal,
) -> std::result::Result<(), String> {
    if symbol.trim().is_empty() {
        return Err("Symbol cannot be empty".to_string());
    }
    if units < Decimal::ZERO {
        return Err(format!("Units cannot be negative: {}", units));
    }
    if price < Decimal::ZERO {
        return Err(format!("Price cannot be negative: {}", price));
    }
    Ok(())
}
