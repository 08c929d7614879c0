use async_trait::async_trait;

use super::transactions_model::{NewTransaction, Transaction};
use crate::errors::Result;

/// Trait defining the contract for the ledger storage.
///
/// The ledger is append-only: there is no update or delete operation.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Returns the user's transactions sorted by date ascending, ties in insertion order.
    fn list_for_user(&self, user_id: i64) -> Result<Vec<Transaction>>;

    /// Stores a normalized transaction and returns it with its assigned id.
    async fn append(&self, user_id: i64, new_transaction: NewTransaction) -> Result<Transaction>;
}

/// Trait defining the contract for ledger service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    fn get_transactions(&self, user_id: i64) -> Result<Vec<Transaction>>;
    async fn create_transaction(
        &self,
        user_id: i64,
        new_transaction: NewTransaction,
    ) -> Result<Transaction>;
}
