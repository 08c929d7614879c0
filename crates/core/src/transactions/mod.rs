//! Transactions module - the append-only BUY/SELL ledger.

mod transactions_constants;
mod transactions_model;
mod transactions_service;
mod transactions_traits;

#[cfg(test)]
mod transactions_model_tests;


pub use transactions_constants::*;
pub use transactions_model::{NewTransaction, Transaction, TransactionSide};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
