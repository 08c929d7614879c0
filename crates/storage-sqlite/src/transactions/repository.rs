use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use super::model::{NewTransactionDB, TransactionDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::transactions;
use wealthnest_core::transactions::{NewTransaction, Transaction, TransactionRepositoryTrait};
use wealthnest_core::Result;

/// Append-only ledger backed by the `transactions` table.
pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TransactionRepository { pool, writer }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn list_for_user(&self, user_id: i64) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .filter(transactions::user_id.eq(user_id))
            .order((transactions::date.asc(), transactions::id.asc()))
            .select(TransactionDB::as_select())
            .load(&mut conn)
            .into_core()?;

        rows.into_iter()
            .map(Transaction::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()
            .into_core()
    }

    async fn append(&self, user_id: i64, new_transaction: NewTransaction) -> Result<Transaction> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                let new_row = NewTransactionDB::new(user_id, new_transaction).into_core()?;
                let row = diesel::insert_into(transactions::table)
                    .values(&new_row)
                    .returning(TransactionDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Transaction::try_from(row).into_core()
            })
            .await
    }
}
