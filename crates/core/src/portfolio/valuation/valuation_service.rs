use log::debug;
use std::sync::Arc;

use super::valuation_calculator::summarize;
use super::valuation_model::PortfolioSummary;
use super::valuation_traits::ValuationServiceTrait;
use crate::errors::Result;
use crate::prices::PriceStoreTrait;
use crate::transactions::TransactionRepositoryTrait;

pub struct ValuationService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    price_store: Arc<dyn PriceStoreTrait>,
}

impl ValuationService {
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        price_store: Arc<dyn PriceStoreTrait>,
    ) -> Self {
        Self {
            transaction_repository,
            price_store,
        }
    }
}

impl ValuationServiceTrait for ValuationService {
    fn get_portfolio_summary(&self, user_id: i64) -> Result<PortfolioSummary> {
        let transactions = self.transaction_repository.list_for_user(user_id)?;
        // One snapshot for the whole computation so a concurrent refresh cannot mix prices.
        let snapshot = self.price_store.snapshot();
        let summary = summarize(user_id, &transactions, |symbol| snapshot.price_of(symbol))?;
        debug!(
            "Valued {} transactions for user {}: {} holdings, total value {}",
            transactions.len(),
            user_id,
            summary.holdings.len(),
            summary.total_value
        );
        Ok(summary)
    }
}
