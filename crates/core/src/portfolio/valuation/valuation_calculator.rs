use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::HashMap;

use super::valuation_model::{checked, Holding, PortfolioSummary, Position};
use crate::errors::Result;
use crate::transactions::Transaction;
use crate::utils::decimal_utils::{round_money, round_units};

/// Replays `transactions` with average-cost accounting and values the
/// remaining positions with `price_lookup`.
///
/// Transactions are replayed by date, same-date ties by id, so the caller's
/// order does not matter. Holdings are returned in order of first appearance
/// in that replay. Symbols whose units round to zero or below are dropped.
/// A symbol without a price is valued at zero.
///
/// Fails with `InvalidInput` if any transaction has negative units or price,
/// or if the amounts involved exceed the decimal range; nothing is computed
/// in that case.
pub fn summarize<F>(
    user_id: i64,
    transactions: &[Transaction],
    price_lookup: F,
) -> Result<PortfolioSummary>
where
    F: Fn(&str) -> Option<Decimal>,
{
    for transaction in transactions {
        transaction.validate()?;
    }

    let positions = replay(transactions)?;

    let mut summary = PortfolioSummary::empty(user_id);
    for (symbol, position) in positions {
        let Some((holding, invested)) = value_position(&symbol, &position, &price_lookup)? else {
            debug!(
                "Dropping {} for user {}: {} units left",
                symbol, user_id, position.units_held
            );
            continue;
        };
        summary.total_invested = checked(summary.total_invested.checked_add(invested))?;
        summary.total_value = checked(summary.total_value.checked_add(holding.current_value))?;
        summary.holdings.push(holding);
    }

    summary.total_invested = round_money(summary.total_invested);
    summary.total_value = round_money(summary.total_value);
    summary.total_gain = round_money(checked(
        summary.total_value.checked_sub(summary.total_invested),
    )?);
    Ok(summary)
}

/// Folds the ledger into per-symbol positions, keeping first-appearance order.
pub fn replay(transactions: &[Transaction]) -> Result<Vec<(String, Position)>> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut positions: Vec<(String, Position)> = Vec::new();
    for transaction in ordered {
        let slot = *index.entry(transaction.symbol.as_str()).or_insert_with(|| {
            positions.push((transaction.symbol.clone(), Position::default()));
            positions.len() - 1
        });
        positions[slot]
            .1
            .apply(transaction.side, transaction.units, transaction.price)?;
    }
    Ok(positions)
}

/// Values one position. Returns the holding and its rounded invested amount.
fn value_position<F>(
    symbol: &str,
    position: &Position,
    price_lookup: &F,
) -> Result<Option<(Holding, Decimal)>>
where
    F: Fn(&str) -> Option<Decimal>,
{
    let units = round_units(position.units_held);
    if units <= Decimal::ZERO {
        return Ok(None);
    }

    let avg_cost = checked(position.cost_basis.checked_div(units))?;
    let current_price = price_lookup(symbol).unwrap_or_else(|| {
        warn!("No price available for {}; valuing it at 0", symbol);
        Decimal::ZERO
    });

    let current_value = round_money(checked(units.checked_mul(current_price))?);
    let invested = round_money(checked(units.checked_mul(avg_cost))?);
    let holding = Holding {
        symbol: symbol.to_string(),
        units,
        avg_cost: round_money(avg_cost),
        current_price: round_money(current_price),
        current_value,
        unrealized_pl: round_money(checked(current_value.checked_sub(invested))?),
    };
    Ok(Some((holding, invested)))
}
