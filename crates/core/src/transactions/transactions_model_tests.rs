#[cfg(test)]
mod tests {
    use crate::transactions::{NewTransaction, Transaction, TransactionSide};
    use crate::Error;
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    fn new_tx(symbol: &str, side: &str) -> NewTransaction {
        NewTransaction {
            symbol: symbol.to_string(),
            side: side.to_string(),
            units: dec!(10),
            price: dec!(100),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_side_parsing_is_case_insensitive() {
        assert_eq!(TransactionSide::from_str("buy").unwrap(), TransactionSide::Buy);
        assert_eq!(TransactionSide::from_str(" Sell ").unwrap(), TransactionSide::Sell);
        assert_eq!(TransactionSide::from_str("BUY").unwrap(), TransactionSide::Buy);
        assert!(TransactionSide::from_str("HOLD").is_err());
        assert!(TransactionSide::from_str("").is_err());
    }

    #[test]
    fn test_side_serializes_uppercase() {
        let json = serde_json::to_string(&TransactionSide::Sell).unwrap();
        assert_eq!(json, "\"SELL\"");
        let side: TransactionSide = serde_json::from_str("\"BUY\"").unwrap();
        assert_eq!(side, TransactionSide::Buy);
    }

    #[test]
    fn test_normalized_canonicalizes_symbol_and_side() {
        let normalized = new_tx("  aapl ", "buy").normalized().unwrap();
        assert_eq!(normalized.symbol, "AAPL");
        assert_eq!(normalized.side, "BUY");
        assert_eq!(normalized.units, dec!(10));
        assert_eq!(normalized.price, dec!(100));
    }

    #[test]
    fn test_unknown_side_is_invalid_input() {
        let err = new_tx("AAPL", "short").normalized().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("Unknown transaction type"));
    }

    #[test]
    fn test_negative_units_and_price_are_rejected() {
        let mut tx = new_tx("AAPL", "BUY");
        tx.units = dec!(-1);
        assert!(matches!(tx.validate(), Err(Error::Validation(_))));

        let mut tx = new_tx("AAPL", "BUY");
        tx.price = dec!(-0.01);
        assert!(matches!(tx.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_zero_units_and_price_are_accepted() {
        let mut tx = new_tx("AAPL", "SELL");
        tx.units = dec!(0);
        tx.price = dec!(0);
        assert!(tx.validate().is_ok());
    }

    #[test]
    fn test_blank_symbol_is_rejected() {
        assert!(new_tx("   ", "BUY").validate().is_err());
    }

    #[test]
    fn test_new_transaction_wire_format_uses_type_field() {
        let json = r#"{"symbol":"msft","type":"sell","units":2.5,"price":310.2,"date":"2024-03-01"}"#;
        let tx: NewTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.side, "sell");
        assert_eq!(tx.units, dec!(2.5));
        assert_eq!(tx.price, dec!(310.2));
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_stored_transaction_validate_reports_id() {
        let tx = Transaction {
            id: 42,
            user_id: 1,
            symbol: "AAPL".to_string(),
            side: TransactionSide::Buy,
            units: dec!(-3),
            price: dec!(10),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            created_at: Utc::now(),
        };
        let err = tx.validate().unwrap_err();
        assert!(err.to_string().contains("Transaction 42"));
    }
}
