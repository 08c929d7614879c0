//! Property-based tests for the average-cost valuation engine.

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use wealthnest_core::portfolio::valuation::{replay, summarize};
use wealthnest_core::transactions::{Transaction, TransactionSide};

// =============================================================================
// Generators
// =============================================================================

fn arb_money() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_units() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000).prop_map(|micro| Decimal::new(micro, 6))
}

fn arb_symbol() -> impl Strategy<Value = String> {
    prop_oneof![Just("AAPL"), Just("MSFT"), Just("TSLA")].prop_map(String::from)
}

fn arb_side() -> impl Strategy<Value = TransactionSide> {
    prop_oneof![
        3 => Just(TransactionSide::Buy),
        1 => Just(TransactionSide::Sell),
    ]
}

/// A ledger with unique ids and dates spread over a few days.
fn arb_ledger(side: BoxedStrategy<TransactionSide>) -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec((arb_symbol(), side, arb_units(), arb_money(), 1u32..4), 0..30)
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (symbol, side, units, price, day))| Transaction {
                    id: i as i64 + 1,
                    user_id: 7,
                    symbol,
                    side,
                    units,
                    price,
                    date: NaiveDate::from_ymd_opt(2024, 2, day).unwrap(),
                    created_at: Utc::now(),
                })
                .collect()
        })
}

fn lookup(symbol: &str) -> Option<Decimal> {
    match symbol {
        "AAPL" => Some(Decimal::new(19012, 2)),
        "MSFT" => Some(Decimal::new(41000, 2)),
        _ => None,
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_buys_priced_at_average_cost_have_no_gain(
        ledger in arb_ledger(Just(TransactionSide::Buy).boxed())
    ) {
        let positions = replay(&ledger).unwrap();
        let at_cost = |symbol: &str| {
            positions
                .iter()
                .find(|(s, _)| s == symbol)
                .map(|(_, p)| p.cost_basis / p.units_held)
        };

        let summary = summarize(7, &ledger, at_cost).unwrap();
        prop_assert_eq!(summary.total_invested, summary.total_value);
        prop_assert_eq!(summary.total_gain, Decimal::ZERO);
    }

    #[test]
    fn prop_input_order_does_not_change_summary(
        (ledger, shuffled) in arb_ledger(arb_side().boxed())
            .prop_flat_map(|ledger| (Just(ledger.clone()), Just(ledger).prop_shuffle()))
    ) {
        let expected = summarize(7, &ledger, lookup).unwrap();
        let actual = summarize(7, &shuffled, lookup).unwrap();
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn prop_summary_is_idempotent(ledger in arb_ledger(arb_side().boxed())) {
        let first = summarize(7, &ledger, lookup).unwrap();
        let second = summarize(7, &ledger, lookup).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_holdings_are_positive_and_totals_add_up(
        ledger in arb_ledger(arb_side().boxed())
    ) {
        let summary = summarize(7, &ledger, lookup).unwrap();
        let mut value = Decimal::ZERO;
        for holding in &summary.holdings {
            prop_assert!(holding.units > Decimal::ZERO);
            prop_assert!(holding.units.scale() <= 6);
            value += holding.current_value;
        }
        prop_assert_eq!(summary.total_value, value);
        prop_assert_eq!(summary.total_gain, summary.total_value - summary.total_invested);
    }

    #[test]
    fn prop_sells_without_buys_never_touch_cost_basis(
        ledger in arb_ledger(Just(TransactionSide::Sell).boxed())
    ) {
        for (_, position) in replay(&ledger).unwrap() {
            prop_assert!(position.units_held < Decimal::ZERO);
            prop_assert_eq!(position.cost_basis, Decimal::ZERO);
        }
        prop_assert!(summarize(7, &ledger, lookup).unwrap().holdings.is_empty());
    }
}
