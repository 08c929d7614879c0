use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::transactions::TransactionSide;

/// Running per-symbol aggregate under average-cost accounting.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub units_held: Decimal,
    pub cost_basis: Decimal,
}

impl Position {
    /// Applies one trade to the position.
    ///
    /// A sell against a non-positive position only reduces units; the cost
    /// basis is left as is. Positions may go negative.
    ///
    /// Fails with `InvalidInput` when a value leaves the decimal range; the
    /// position is unchanged in that case.
    pub fn apply(&mut self, side: TransactionSide, units: Decimal, price: Decimal) -> Result<()> {
        let next = match side {
            TransactionSide::Buy => Position {
                units_held: checked(self.units_held.checked_add(units))?,
                cost_basis: checked(
                    units
                        .checked_mul(price)
                        .and_then(|c| self.cost_basis.checked_add(c)),
                )?,
            },
            TransactionSide::Sell if self.units_held <= Decimal::ZERO => Position {
                units_held: checked(self.units_held.checked_sub(units))?,
                cost_basis: self.cost_basis,
            },
            TransactionSide::Sell => {
                let avg_cost = checked(self.cost_basis.checked_div(self.units_held))?;
                Position {
                    units_held: checked(self.units_held.checked_sub(units))?,
                    cost_basis: checked(
                        avg_cost
                            .checked_mul(units)
                            .and_then(|c| self.cost_basis.checked_sub(c)),
                    )?,
                }
            }
        };
        *self = next;
        Ok(())
    }
}

/// Maps an overflowed checked operation to an input error.
pub(crate) fn checked(value: Option<Decimal>) -> Result<Decimal> {
    value.ok_or_else(|| Error::invalid_input("Amount is out of the supported range"))
}

/// One held symbol in a portfolio summary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Holding {
    pub symbol: String,
    pub units: Decimal,
    pub avg_cost: Decimal,
    pub current_price: Decimal,
    pub current_value: Decimal,
    pub unrealized_pl: Decimal,
}

/// Valuation of a user's ledger against one price snapshot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PortfolioSummary {
    pub user_id: i64,
    pub holdings: Vec<Holding>,
    pub total_invested: Decimal,
    pub total_value: Decimal,
    pub total_gain: Decimal,
}

impl PortfolioSummary {
    pub fn empty(user_id: i64) -> Self {
        PortfolioSummary {
            user_id,
            holdings: Vec::new(),
            total_invested: Decimal::ZERO,
            total_value: Decimal::ZERO,
            total_gain: Decimal::ZERO,
        }
    }
}
