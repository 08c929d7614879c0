use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::transactions_model::{NewTransaction, Transaction};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::Result;

/// Ledger service: validates input and serializes appends per user.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    user_locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self {
            repository,
            user_locks: DashMap::new(),
        }
    }

    fn user_lock(&self, user_id: i64) -> Arc<Mutex<()>> {
        self.user_locks
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    fn get_transactions(&self, user_id: i64) -> Result<Vec<Transaction>> {
        self.repository.list_for_user(user_id)
    }

    async fn create_transaction(
        &self,
        user_id: i64,
        new_transaction: NewTransaction,
    ) -> Result<Transaction> {
        let new_transaction = new_transaction.normalized()?;

        let lock = self.user_lock(user_id);
        let _guard = lock.lock().await;
        let stored = self.repository.append(user_id, new_transaction).await?;
        debug!(
            "Appended transaction {} for user {}: {} {} {} @ {}",
            stored.id, user_id, stored.side, stored.units, stored.symbol, stored.price
        );
        Ok(stored)
    }
}
