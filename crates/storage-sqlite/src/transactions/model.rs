//! Database models for the transaction ledger.

use chrono::Utc;
use diesel::prelude::*;
use std::str::FromStr;

use crate::errors::StorageError;
use crate::utils::{date_column, decimal_column, timestamp_column};
use wealthnest_core::transactions::{NewTransaction, Transaction, TransactionSide};
use wealthnest_core::utils::time_utils::{format_date, format_timestamp};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: i64,
    pub user_id: i64,
    pub symbol: String,
    pub side: String,
    pub units: String,
    pub price: String,
    pub date: String,
    pub created_at: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
pub struct NewTransactionDB {
    pub user_id: i64,
    pub symbol: String,
    pub side: String,
    pub units: String,
    pub price: String,
    pub date: String,
    pub created_at: String,
}

impl NewTransactionDB {
    pub fn new(user_id: i64, new_transaction: NewTransaction) -> Result<Self, StorageError> {
        let side = TransactionSide::from_str(&new_transaction.side)
            .map_err(StorageError::InvalidColumn)?;
        Ok(NewTransactionDB {
            user_id,
            symbol: new_transaction.symbol,
            side: side.as_str().to_string(),
            units: new_transaction.units.to_string(),
            price: new_transaction.price.to_string(),
            date: format_date(new_transaction.date),
            created_at: format_timestamp(Utc::now()),
        })
    }
}

impl TryFrom<TransactionDB> for Transaction {
    type Error = StorageError;

    fn try_from(db: TransactionDB) -> Result<Self, Self::Error> {
        let side = TransactionSide::from_str(&db.side).map_err(|e| {
            StorageError::InvalidColumn(format!("transactions.side of {}: {}", db.id, e))
        })?;
        Ok(Transaction {
            id: db.id,
            user_id: db.user_id,
            side,
            units: decimal_column(&db.units, "transactions.units")?,
            price: decimal_column(&db.price, "transactions.price")?,
            date: date_column(&db.date, "transactions.date")?,
            created_at: timestamp_column(&db.created_at, "transactions.created_at")?,
            symbol: db.symbol,
        })
    }
}
